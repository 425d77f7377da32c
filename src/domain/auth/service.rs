use super::{
    dto::*,
    error::AuthServiceError,
    pages::render_verified_page,
    password::{hash_password, verify_password},
    JwtManager,
};
use crate::{
    domain::user::{NewUser, User, UserResponse},
    infrastructure::{
        config::Config,
        email::{EmailError, EmailMessage, EmailSender},
        repositories::UserRepository,
    },
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;
use uuid::Uuid;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 20;
const PASSWORD_MIN: usize = 6;

/// 64 hex characters from two random UUIDs
fn generate_verification_token() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
    email_sender: Arc<dyn EmailSender>,
    jwt_manager: JwtManager,
    public_base_url: String,
    frontend_url: String,
}

impl AuthService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        email_sender: Arc<dyn EmailSender>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            user_repo,
            email_sender,
            jwt_manager: JwtManager::new(config.jwt_secret.clone(), config.jwt_expiration_minutes),
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
            frontend_url: config.frontend_url.clone(),
        }
    }

    fn issue_token(&self, user: &User) -> Result<TokenResponse, AuthServiceError> {
        let access_token = self.jwt_manager.generate_token(user.id, &user.username)?;
        Ok(TokenResponse::bearer(access_token, UserResponse::from(user)))
    }

    async fn send_verification(&self, user: &User, token: &str) -> Result<(), EmailError> {
        let url = format!(
            "{}/api/verify-email?token={}",
            self.public_base_url,
            urlencoding::encode(token)
        );
        self.email_sender
            .send(&EmailMessage::verification(&user.email, &user.username, &url))
            .await
    }

    /// Create an account and start email verification.
    ///
    /// If the verification email cannot be sent the account is verified on the
    /// spot and a token is returned instead.
    pub async fn register(
        &self,
        request: RegisterRequest,
    ) -> Result<RegisterResponse, AuthServiceError> {
        let username_len = request.username.chars().count();
        if !(USERNAME_MIN..=USERNAME_MAX).contains(&username_len) {
            return Err(AuthServiceError::Validation(
                "Username must be between 3-20 characters".to_string(),
            ));
        }
        if request.password.chars().count() < PASSWORD_MIN {
            return Err(AuthServiceError::Validation(
                "Password must be at least 6 characters".to_string(),
            ));
        }
        if !EMAIL_PATTERN.is_match(&request.email) {
            return Err(AuthServiceError::Validation(
                "Invalid email address".to_string(),
            ));
        }
        if self
            .user_repo
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(AuthServiceError::Validation(
                "Username already exists".to_string(),
            ));
        }
        if let Some(existing) = self.user_repo.find_by_email(&request.email).await? {
            let message = if existing.email_verified {
                "This email address is already registered and verified. Please use a different email or try logging in."
            } else {
                "This email address is already registered but not verified. Please check your email for the verification link or contact support."
            };
            return Err(AuthServiceError::Validation(message.to_string()));
        }

        let token = generate_verification_token();
        let user = self
            .user_repo
            .create(NewUser {
                username: request.username,
                email: request.email,
                password_hash: hash_password(&request.password)?,
                email_verification_token: token.clone(),
            })
            .await?;
        tracing::info!(user_id = %user.id, username = %user.username, "User registered");

        match self.send_verification(&user, &token).await {
            Ok(()) => Ok(RegisterResponse::VerificationSent {
                success: true,
                message: "Registration successful! Please check your email and click the verification link to complete registration.".to_string(),
                email_sent: true,
                user_id: user.id,
            }),
            Err(e) => {
                tracing::warn!(
                    user_id = %user.id,
                    error = %e,
                    "Verification email not sent, auto-verifying"
                );
                let user = self.user_repo.mark_email_verified(user.id).await?;
                Ok(RegisterResponse::AutoVerified {
                    success: true,
                    message: "Registration successful! (Email service unavailable, account auto-verified)".to_string(),
                    token: self.issue_token(&user)?,
                })
            }
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<TokenResponse, AuthServiceError> {
        let user = self
            .user_repo
            .find_by_username(&request.username)
            .await?
            .filter(|user| verify_password(&request.password, &user.password_hash))
            .ok_or_else(|| {
                AuthServiceError::Unauthorized("Incorrect username or password".to_string())
            })?;

        if !user.email_verified {
            return Err(AuthServiceError::Unauthorized(
                "Please verify your email address first. Check your inbox for the verification link.".to_string(),
            ));
        }

        tracing::info!(user_id = %user.id, "User logged in");
        self.issue_token(&user)
    }

    /// Verify an email token and return the redirect page for the frontend.
    pub async fn verify_email(&self, token: &str) -> Result<String, AuthServiceError> {
        let user = self
            .user_repo
            .find_by_verification_token(token)
            .await?
            .ok_or_else(|| {
                AuthServiceError::Validation(
                    "Invalid or expired verification link".to_string(),
                )
            })?;

        let already_verified = user.email_verified;
        let user = if already_verified {
            user
        } else {
            let user = self.user_repo.mark_email_verified(user.id).await?;
            tracing::info!(user_id = %user.id, "Email verified");

            let welcome = EmailMessage::welcome(&user.email, &user.username, &self.frontend_url);
            if let Err(e) = self.email_sender.send(&welcome).await {
                tracing::warn!(user_id = %user.id, error = %e, "Welcome email not sent");
            }
            user
        };

        let token = self.issue_token(&user)?;
        Ok(render_verified_page(
            &self.frontend_url,
            &token.access_token,
            &token.user,
            already_verified,
        ))
    }

    pub async fn resend_verification(
        &self,
        username: &str,
    ) -> Result<MessageResponse, AuthServiceError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AuthServiceError::NotFound("User not found".to_string()))?;

        if user.email_verified {
            return Err(AuthServiceError::Validation(
                "Email is already verified".to_string(),
            ));
        }

        let token = generate_verification_token();
        self.user_repo.set_verification_token(user.id, &token).await?;

        self.send_verification(&user, &token).await.map_err(|e| {
            tracing::error!(user_id = %user.id, error = %e, "Verification email resend failed");
            AuthServiceError::Delivery("Failed to send verification email".to_string())
        })?;

        Ok(MessageResponse {
            success: true,
            message: "Verification email sent".to_string(),
        })
    }

    pub async fn check_email(&self, email: &str) -> Result<CheckEmailResponse, AuthServiceError> {
        let response = match self.user_repo.find_by_email(email).await? {
            Some(user) => CheckEmailResponse {
                available: false,
                verified: Some(user.email_verified),
                message: if user.email_verified {
                    "This email address is already registered and verified".to_string()
                } else {
                    "This email address is already registered but not verified".to_string()
                },
            },
            None => CheckEmailResponse {
                available: true,
                verified: None,
                message: "Email address is available".to_string(),
            },
        };

        Ok(response)
    }
}
