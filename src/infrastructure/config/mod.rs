use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_expiration_minutes: i64,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Public surface
    pub public_base_url: String,
    pub frontend_url: String,
    pub audio_dir: String,
    pub share_store: ShareStoreKind,
    // Text generation + fallback speech
    pub openai_api_key: Option<String>,
    pub openai_chat_model: String,
    // Multilingual speech
    pub elevenlabs_api_key: Option<String>,
    // Regional speech
    pub azure_speech_key: Option<String>,
    pub azure_speech_region: Option<String>,
    // Object storage
    pub cloudinary_cloud_name: Option<String>,
    pub cloudinary_api_key: Option<String>,
    pub cloudinary_api_secret: Option<String>,
    // Email
    pub sendgrid_api_key: Option<String>,
    pub email_from: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Where share metadata lives.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ShareStoreKind {
    Postgres,
    Memory,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            database_url: env::var("DATABASE_URL")?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            jwt_secret: env::var("JWT_SECRET")?,
            jwt_expiration_minutes: env::var("JWT_EXPIRATION_MINUTES")
                .unwrap_or_else(|_| "30".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .as_str()
            {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            public_base_url: env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "https://hz2784.github.io/shh-elf/".to_string()),
            audio_dir: env::var("AUDIO_DIR").unwrap_or_else(|_| "audio".to_string()),
            share_store: match env::var("SHARE_STORE")
                .unwrap_or_else(|_| "postgres".to_string())
                .to_lowercase()
                .as_str()
            {
                "memory" => ShareStoreKind::Memory,
                _ => ShareStoreKind::Postgres,
            },
            openai_api_key: optional_var("OPENAI_API_KEY"),
            openai_chat_model: env::var("OPENAI_CHAT_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            elevenlabs_api_key: optional_var("ELEVENLABS_API_KEY"),
            azure_speech_key: optional_var("AZURE_SPEECH_KEY"),
            azure_speech_region: optional_var("AZURE_SPEECH_REGION"),
            cloudinary_cloud_name: optional_var("CLOUDINARY_CLOUD_NAME"),
            cloudinary_api_key: optional_var("CLOUDINARY_API_KEY"),
            cloudinary_api_secret: optional_var("CLOUDINARY_API_SECRET"),
            sendgrid_api_key: optional_var("SENDGRID_API_KEY"),
            email_from: env::var("EMAIL_FROM")
                .unwrap_or_else(|_| "no-reply@shh-elf.app".to_string()),
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    /// Presence of every external collaborator credential, keyed by service name.
    pub fn service_status(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("openai", self.openai_api_key.is_some()),
            ("elevenlabs", self.elevenlabs_api_key.is_some()),
            (
                "azure_speech",
                self.azure_speech_key.is_some() && self.azure_speech_region.is_some(),
            ),
            (
                "cloudinary",
                self.cloudinary_cloud_name.is_some()
                    && self.cloudinary_api_key.is_some()
                    && self.cloudinary_api_secret.is_some(),
            ),
            ("email", self.sendgrid_api_key.is_some()),
        ]
    }
}

/// Empty strings count as unset.
fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
