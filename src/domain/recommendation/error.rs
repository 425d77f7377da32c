use crate::error::AppError;

/// Text generation failure. Transport errors, non-2xx responses and empty
/// completions all collapse into this one kind.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GenerationError {
    #[error("Text generation failed: {cause}")]
    Failed { cause: String },
}

impl GenerationError {
    pub fn failed(cause: impl std::fmt::Display) -> Self {
        GenerationError::Failed {
            cause: cause.to_string(),
        }
    }
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        AppError::ExternalService(err.to_string())
    }
}
