use serde::{Deserialize, Serialize};

pub const REGENERATION_URL: &str = "/api/generate-gallery-audio";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryBook {
    pub id: usize,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub cover_url: String,
    pub cefr_level: String,
    pub estimated_vocabulary: u32,
    pub formal_models: Vec<String>,
    pub sample_paragraph: String,
    pub sample_audio_path: String,
    pub book_talk_text: String,
    pub book_talk_audio_path: String,
    pub genre: String,
    pub publication_year: u16,
    pub page_count: u16,
    pub goodreads_rating: f32,
}

/// Gallery listing. The regeneration hint is only present while no clip is cached.
#[derive(Debug, Serialize, Deserialize)]
pub struct GalleryResponse {
    pub success: bool,
    pub books: Vec<GalleryBook>,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_cache_empty: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regeneration_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GalleryBookResponse {
    pub success: bool,
    pub book: GalleryBook,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GalleryAudioResponse {
    pub success: bool,
    pub message: String,
    pub files: Vec<String>,
}
