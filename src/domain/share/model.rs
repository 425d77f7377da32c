use crate::domain::tts::AudioReference;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Language assumed for artifacts whose request language is unknown.
pub const DEFAULT_SHARE_LANGUAGE: &str = "English";

/// What a share link resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRecord {
    pub share_id: String,
    pub language: String,
    pub audio: AudioReference,
    pub created_at: DateTime<Utc>,
}

impl ShareRecord {
    pub fn new(
        share_id: impl Into<String>,
        language: impl Into<String>,
        audio: AudioReference,
    ) -> Self {
        Self {
            share_id: share_id.into(),
            language: language.into(),
            audio,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ShareResponse {
    pub success: bool,
    pub share_id: String,
    pub audio_url: String,
    pub language: String,
    pub message: String,
}
