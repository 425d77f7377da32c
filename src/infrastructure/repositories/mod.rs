pub mod audio_cache_repository;
pub mod audio_storage_repository;
pub mod azure_tts_repository;
pub mod elevenlabs_tts_repository;
pub mod openai_chat_repository;
pub mod openai_tts_repository;
pub mod recommendation_repository;
pub mod share_repository;
pub mod text_generation_repository;
pub mod tts_repository;
pub mod user_repository;

pub use audio_cache_repository::{AudioCacheRepository, InMemoryAudioCache};
pub use audio_storage_repository::{
    AudioStorageRepository, CloudinaryAudioStorage, CloudinaryCredentials,
};
pub use azure_tts_repository::AzureTtsRepository;
pub use elevenlabs_tts_repository::ElevenLabsTtsRepository;
pub use openai_chat_repository::OpenAiChatRepository;
pub use openai_tts_repository::OpenAiTtsRepository;
pub use recommendation_repository::{PgRecommendationRepository, RecommendationRepository};
pub use share_repository::{InMemoryShareRepository, PgShareRepository, ShareRepository};
pub use text_generation_repository::TextGenerationRepository;
pub use tts_repository::TtsRepository;
pub use user_repository::{PgUserRepository, UserRepository};
