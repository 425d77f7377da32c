pub mod sendgrid;

pub use sendgrid::SendGridEmailSender;

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("email delivery is not configured")]
    NotConfigured,
    #[error("email delivery failed: {0}")]
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub text: String,
}

impl EmailMessage {
    pub fn verification(to: &str, username: &str, verification_url: &str) -> Self {
        Self {
            to: to.to_string(),
            subject: "SHH-ELF Email Verification".to_string(),
            text: format!(
                "Hello {username}!\n\n\
                 Welcome to SHH-ELF! Please visit the following link to verify your email address:\n\n\
                 {verification_url}\n\n\
                 If you did not create an account, you can ignore this email.\n"
            ),
        }
    }

    pub fn welcome(to: &str, username: &str, frontend_url: &str) -> Self {
        Self {
            to: to.to_string(),
            subject: "Welcome to SHH-ELF!".to_string(),
            text: format!(
                "Hello {username}!\n\n\
                 Your email is verified. Start sharing personalized book recommendations at:\n\n\
                 {frontend_url}\n"
            ),
        }
    }
}

/// Outbound email. `NotConfigured` is an expected outcome, not a fault.
#[async_trait]
pub trait EmailSender: Send + Sync {
    fn is_configured(&self) -> bool;

    async fn send(&self, message: &EmailMessage) -> Result<(), EmailError>;
}
