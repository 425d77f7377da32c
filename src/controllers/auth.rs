use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use std::sync::Arc;

use crate::domain::auth::{
    AuthService, CheckEmailQuery, CheckEmailResponse, LoginRequest, MessageResponse,
    RegisterRequest, RegisterResponse, ResendVerificationQuery, TokenResponse, VerifyEmailQuery,
};
use crate::error::AppResult;

pub struct AuthController {
    auth_service: Arc<AuthService>,
}

impl AuthController {
    pub fn new(auth_service: Arc<AuthService>) -> Self {
        Self { auth_service }
    }

    /// POST /api/register
    pub async fn register(
        State(controller): State<Arc<AuthController>>,
        Json(request): Json<RegisterRequest>,
    ) -> AppResult<Json<RegisterResponse>> {
        let response = controller.auth_service.register(request).await?;
        Ok(Json(response))
    }

    /// POST /api/login
    pub async fn login(
        State(controller): State<Arc<AuthController>>,
        Json(request): Json<LoginRequest>,
    ) -> AppResult<Json<TokenResponse>> {
        let response = controller.auth_service.login(request).await?;
        Ok(Json(response))
    }

    /// GET /api/verify-email?token= - Redirect page back to the frontend
    pub async fn verify_email(
        State(controller): State<Arc<AuthController>>,
        Query(query): Query<VerifyEmailQuery>,
    ) -> AppResult<Html<String>> {
        let page = controller.auth_service.verify_email(&query.token).await?;
        Ok(Html(page))
    }

    /// POST /api/resend-verification?username=
    pub async fn resend_verification(
        State(controller): State<Arc<AuthController>>,
        Query(query): Query<ResendVerificationQuery>,
    ) -> AppResult<Json<MessageResponse>> {
        let response = controller
            .auth_service
            .resend_verification(&query.username)
            .await?;
        Ok(Json(response))
    }

    /// GET /api/check-email?email=
    pub async fn check_email(
        State(controller): State<Arc<AuthController>>,
        Query(query): Query<CheckEmailQuery>,
    ) -> AppResult<Json<CheckEmailResponse>> {
        let response = controller.auth_service.check_email(&query.email).await?;
        Ok(Json(response))
    }
}
