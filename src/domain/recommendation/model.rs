use crate::domain::tts::AudioReference;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A recommendation saved to a signed-in user's history
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRecommendation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub book_title: String,
    pub recipient_name: String,
    pub relationship: String,
    pub recipient_interests: String,
    pub tone: String,
    pub language: String,
    pub dialect: String,
    pub recommendation_text: String,
    pub audio_path: String,
    pub share_id: String,
    pub created_at: DateTime<Utc>,
}

impl UserRecommendation {
    pub fn audio(&self) -> AudioReference {
        AudioReference::from_stored(&self.audio_path)
    }
}

#[derive(Debug, Clone)]
pub struct NewRecommendation {
    pub user_id: Uuid,
    pub book_title: String,
    pub recipient_name: String,
    pub relationship: String,
    pub recipient_interests: String,
    pub tone: String,
    pub language: String,
    pub dialect: String,
    pub recommendation_text: String,
    pub audio_path: String,
    pub share_id: String,
}

/// Output of one generation run
#[derive(Debug, Clone)]
pub struct GeneratedArtifact {
    pub text: String,
    pub audio: AudioReference,
    pub content_key: String,
}
