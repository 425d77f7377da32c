use crate::domain::recommendation::GenerationError;
use crate::domain::tts::SynthesisError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("Book title and author are required")]
    MissingBook,
    #[error("Book discovery failed: {0}")]
    Analysis(#[from] GenerationError),
    #[error("Book discovery failed: {0}")]
    Speech(#[from] SynthesisError),
}

impl From<DiscoveryError> for AppError {
    fn from(err: DiscoveryError) -> Self {
        match err {
            DiscoveryError::MissingBook => AppError::BadRequest(err.to_string()),
            DiscoveryError::Analysis(_) => AppError::ExternalService(err.to_string()),
            DiscoveryError::Speech(SynthesisError::Storage(_)) => {
                AppError::Internal(err.to_string())
            }
            DiscoveryError::Speech(_) => AppError::ExternalService(err.to_string()),
        }
    }
}
