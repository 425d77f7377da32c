use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Delivery(String),
    #[error(transparent)]
    Dependency(#[from] AppError),
}

impl From<AuthServiceError> for AppError {
    fn from(err: AuthServiceError) -> Self {
        match err {
            AuthServiceError::Validation(msg) => AppError::BadRequest(msg),
            AuthServiceError::Unauthorized(msg) => AppError::Unauthorized(msg),
            AuthServiceError::NotFound(msg) => AppError::NotFound(msg),
            AuthServiceError::Delivery(msg) => AppError::ExternalService(msg),
            AuthServiceError::Dependency(e) => e,
        }
    }
}
