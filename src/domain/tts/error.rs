use crate::error::AppError;

/// Failure of a single speech provider. Both variants move the router on to
/// the next provider in the chain.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SpeechError {
    #[error("{provider} credentials are not configured")]
    CredentialsMissing { provider: &'static str },
    #[error("{provider} request failed: {message}")]
    UpstreamHttp {
        provider: &'static str,
        message: String,
    },
}

/// Failure of the whole synthesis step.
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("Speech synthesis failed: {0}")]
    Failed(String),
    #[error("Audio file could not be written: {0}")]
    Storage(#[from] std::io::Error),
}

/// Object-storage upload failure. Never surfaced to clients: the artifact
/// degrades to its local path.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("object storage is not configured")]
    NotConfigured,
    #[error("upload failed: {0}")]
    Failed(String),
}

impl From<SynthesisError> for AppError {
    fn from(err: SynthesisError) -> Self {
        match err {
            SynthesisError::Failed(_) => AppError::ExternalService(err.to_string()),
            SynthesisError::Storage(_) => AppError::Internal(err.to_string()),
        }
    }
}
