use serde::{Deserialize, Serialize};

pub const DEFAULT_USER_LEVEL: &str = "B2";

fn default_user_level() -> String {
    DEFAULT_USER_LEVEL.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookDiscoveryRequest {
    pub book_title: String,
    pub author: String,
    /// CEFR level of the reader
    #[serde(default = "default_user_level")]
    pub user_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookDiscoveryResponse {
    pub success: bool,
    pub book_title: String,
    pub author: String,
    pub first_paragraph: String,
    pub sample_audio_url: String,
    pub book_talk_text: String,
    pub book_talk_audio_url: String,
    pub cefr_level: String,
    pub estimated_vocabulary: u32,
    pub formal_models: Vec<String>,
    pub analysis_id: String,
}
