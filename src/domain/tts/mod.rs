pub mod audio;
pub mod error;
pub mod language;
pub mod router;

pub use audio::AudioReference;
pub use error::{SpeechError, SynthesisError, UploadError};
pub use language::{VoiceLanguage, LOCAL_LANGUAGE_LABEL};
pub use router::{LanguageMatch, SynthesisStrategy, VoiceRouter};

/// Input handed to each speech provider in the chain
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    pub text: String,
    /// Voice selector; only the regional provider honours it (the dialect).
    pub voice: String,
    pub language: VoiceLanguage,
}
