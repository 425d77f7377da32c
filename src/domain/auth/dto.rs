use crate::domain::user::UserResponse;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Bearer token plus the account it belongs to
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserResponse,
}

impl TokenResponse {
    pub fn bearer(access_token: String, user: UserResponse) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            user,
        }
    }
}

/// Registration result: either "check your inbox" or, when email could not be
/// sent, an auto-verified account with a token.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegisterResponse {
    VerificationSent {
        success: bool,
        message: String,
        email_sent: bool,
        user_id: Uuid,
    },
    AutoVerified {
        success: bool,
        message: String,
        #[serde(flatten)]
        token: TokenResponse,
    },
}

#[derive(Debug, Deserialize)]
pub struct VerifyEmailQuery {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct ResendVerificationQuery {
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct CheckEmailQuery {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckEmailResponse {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}
