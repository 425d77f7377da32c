use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::infrastructure::config::Config;
use crate::{
    domain::auth::JwtManager, error::AppError, infrastructure::repositories::UserRepository,
};
use uuid::Uuid;

pub type AuthState = (Arc<dyn UserRepository>, Arc<Config>);

/// User context injected into request extensions after authentication
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub username: String,
}

/// Set on routes where signing in is optional
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<AuthUser>);

fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let auth_header = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization format".to_string()))
}

async fn authenticate(
    headers: &HeaderMap,
    user_repo: &dyn UserRepository,
    config: &Config,
) -> Result<AuthUser, AppError> {
    let token = bearer_token(headers)?;

    let jwt_manager = JwtManager::new(config.jwt_secret.clone(), config.jwt_expiration_minutes);
    let user_id = jwt_manager.extract_user_id(token)?;

    // Verify user still exists
    let user = user_repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not found".to_string()))?;

    Ok(AuthUser {
        user_id: user.id,
        username: user.username,
    })
}

/// Bad or stale credentials, as opposed to a failure looking them up
fn is_credential_rejection(err: &AppError) -> bool {
    matches!(err, AppError::Unauthorized(_))
}

/// Rejects requests without a valid bearer token
pub async fn auth_middleware(
    State((user_repo, config)): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_user = authenticate(request.headers(), user_repo.as_ref(), &config).await?;
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

/// Attaches the user when a valid bearer token is present; anonymous otherwise
pub async fn optional_auth_middleware(
    State((user_repo, config)): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let auth_user = if request.headers().contains_key("authorization") {
        match authenticate(request.headers(), user_repo.as_ref(), &config).await {
            Ok(user) => Some(user),
            Err(e) if is_credential_rejection(&e) => {
                tracing::debug!(error = %e, "Ignoring invalid credentials on optional-auth route");
                None
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Could not authenticate request, continuing anonymously"
                );
                None
            }
        }
    } else {
        None
    };

    request.extensions_mut().insert(MaybeAuthUser(auth_user));
    next.run(request).await
}
