use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    #[error("Share {0} not found")]
    NotFound(String),
    #[error(transparent)]
    Storage(#[from] AppError),
}

impl From<ShareError> for AppError {
    fn from(err: ShareError) -> Self {
        match err {
            ShareError::NotFound(_) => AppError::NotFound(err.to_string()),
            ShareError::Storage(e) => e,
        }
    }
}
