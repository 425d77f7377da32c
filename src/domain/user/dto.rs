use super::User;
use crate::domain::recommendation::UserRecommendation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Public view of an account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationHistoryItem {
    pub id: Uuid,
    pub book_title: String,
    pub recipient_name: String,
    pub relationship: String,
    pub language: String,
    pub recommendation_text: String,
    pub audio_path: String,
    pub share_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserRecommendation> for RecommendationHistoryItem {
    fn from(rec: UserRecommendation) -> Self {
        Self {
            id: rec.id,
            book_title: rec.book_title,
            recipient_name: rec.recipient_name,
            relationship: rec.relationship,
            language: rec.language,
            recommendation_text: rec.recommendation_text,
            audio_path: rec.audio_path,
            share_id: rec.share_id,
            created_at: rec.created_at,
        }
    }
}
