use crate::domain::tts::{SpeechError, SpeechRequest};
use async_trait::async_trait;

/// Repository for TTS synthesis operations.
/// Abstracts one speech provider (Azure, ElevenLabs, OpenAI) in the fallback chain.
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Short provider name used in logs and error messages
    fn name(&self) -> &'static str;

    /// Whether the provider has the credentials it needs.
    /// The router skips unconfigured providers without calling `synthesize`.
    fn is_configured(&self) -> bool;

    /// Synthesize text to speech
    ///
    /// Returns MP3 audio bytes
    ///
    /// # Errors
    /// Returns `SpeechError` if credentials are missing or the upstream call fails
    async fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, SpeechError>;
}
