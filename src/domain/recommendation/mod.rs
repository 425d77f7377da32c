pub mod content_key;
pub mod dto;
pub mod error;
pub mod model;
pub mod prompt;
pub mod service;

pub use content_key::{content_key, filename_key};
pub use dto::{GenerateRecommendationRequest, HistoryQuery, RecommendationResponse};
pub use error::GenerationError;
pub use model::{GeneratedArtifact, NewRecommendation, UserRecommendation};
pub use prompt::{build_prompt, CompletionProfile, Prompt, PromptLanguage};
pub use service::RecommendationService;
