use super::GeneratedArtifact;
use serde::{Deserialize, Serialize};

fn default_relationship() -> String {
    "朋友".to_string()
}

fn default_tone() -> String {
    "友好热情".to_string()
}

fn default_language() -> String {
    "中文".to_string()
}

fn default_dialect() -> String {
    "zh-CN-XiaoxiaoNeural".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRecommendationRequest {
    pub book_title: String,
    pub recipient_name: String,
    #[serde(default = "default_relationship")]
    pub relationship: String,
    #[serde(default)]
    pub recipient_interests: String,
    #[serde(default = "default_tone")]
    pub tone: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_dialect")]
    pub dialect: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub success: bool,
    pub recommendation_text: String,
    pub audio_path: String,
    pub share_id: String,
}

impl RecommendationResponse {
    /// Local audio is addressed through this API's public base URL.
    pub fn from_artifact(artifact: &GeneratedArtifact, public_base_url: &str) -> Self {
        Self {
            success: true,
            recommendation_text: artifact.text.clone(),
            audio_path: artifact.audio.public_url(public_base_url),
            share_id: artifact.content_key.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

pub const DEFAULT_HISTORY_LIMIT: i64 = 20;
pub const MAX_HISTORY_LIMIT: i64 = 100;

fn default_limit() -> i64 {
    DEFAULT_HISTORY_LIMIT
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl HistoryQuery {
    /// Negative offsets become 0; the limit is kept within 1..=100.
    pub fn normalized(&self) -> (i64, i64) {
        (self.skip.max(0), self.limit.clamp(1, MAX_HISTORY_LIMIT))
    }
}
