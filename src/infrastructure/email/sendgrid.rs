use super::{EmailError, EmailMessage, EmailSender};
use async_trait::async_trait;
use serde_json::json;

const SENDGRID_SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";

pub struct SendGridEmailSender {
    api_key: Option<String>,
    from: String,
    http_client: reqwest::Client,
}

impl SendGridEmailSender {
    pub fn new(api_key: Option<String>, from: String) -> Self {
        Self {
            api_key,
            from,
            http_client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl EmailSender for SendGridEmailSender {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn send(&self, message: &EmailMessage) -> Result<(), EmailError> {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::info!(to = %message.to, "SendGrid not configured, email skipped");
            return Err(EmailError::NotConfigured);
        };

        let body = json!({
            "personalizations": [{ "to": [{ "email": message.to }] }],
            "from": { "email": self.from },
            "subject": message.subject,
            "content": [{ "type": "text/plain", "value": message.text }],
        });

        let response = self
            .http_client
            .post(SENDGRID_SEND_URL)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| EmailError::Failed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                status = status.as_u16(),
                error = %error_text,
                "SendGrid rejected email"
            );
            return Err(EmailError::Failed(format!(
                "HTTP {}: {}",
                status.as_u16(),
                error_text
            )));
        }

        tracing::info!(to = %message.to, subject = %message.subject, "Email sent");
        Ok(())
    }
}
