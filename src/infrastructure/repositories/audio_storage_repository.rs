use crate::domain::tts::UploadError;
use async_trait::async_trait;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::path::Path;

pub const AUDIO_FOLDER: &str = "shh-elf-audio";

/// Durable object storage for synthesized audio.
#[async_trait]
pub trait AudioStorageRepository: Send + Sync {
    fn is_configured(&self) -> bool;

    /// Upload the file at `path` under `public_id` and return its public URL
    async fn upload(&self, path: &Path, public_id: &str) -> Result<String, UploadError>;
}

#[derive(Debug, Clone)]
pub struct CloudinaryCredentials {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

/// Cloudinary signed upload (audio is stored as the `video` resource type).
pub struct CloudinaryAudioStorage {
    credentials: Option<CloudinaryCredentials>,
    http_client: reqwest::Client,
}

impl CloudinaryAudioStorage {
    pub fn new(credentials: Option<CloudinaryCredentials>) -> Self {
        Self {
            credentials,
            http_client: reqwest::Client::new(),
        }
    }

    fn upload_url(cloud_name: &str) -> String {
        format!("https://api.cloudinary.com/v1_1/{}/video/upload", cloud_name)
    }
}

/// Signature over the alphabetically sorted upload parameters.
fn sign(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut sorted: Vec<&(&str, &str)> = params.iter().collect();
    sorted.sort_by_key(|(name, _)| *name);

    let to_sign = sorted
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[async_trait]
impl AudioStorageRepository for CloudinaryAudioStorage {
    fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    async fn upload(&self, path: &Path, public_id: &str) -> Result<String, UploadError> {
        let credentials = self.credentials.as_ref().ok_or(UploadError::NotConfigured)?;

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| UploadError::Failed(format!("read {}: {}", path.display(), e)))?;

        let timestamp = chrono::Utc::now().timestamp().to_string();
        let params = [
            ("folder", AUDIO_FOLDER),
            ("overwrite", "true"),
            ("public_id", public_id),
            ("timestamp", timestamp.as_str()),
        ];
        let signature = sign(&params, &credentials.api_secret);

        let file_name = format!("{}.mp3", public_id);
        let file_part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("audio/mpeg")
            .map_err(|e| UploadError::Failed(e.to_string()))?;

        let mut form = reqwest::multipart::Form::new();
        for (name, value) in params {
            form = form.text(name.to_string(), value.to_string());
        }
        let form = form
            .text("api_key", credentials.api_key.clone())
            .text("signature", signature)
            .text("signature_algorithm", "sha256")
            .part("file", file_part);

        let response = self
            .http_client
            .post(Self::upload_url(&credentials.cloud_name))
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Failed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(UploadError::Failed(format!(
                "HTTP {}: {}",
                status.as_u16(),
                error_text
            )));
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| UploadError::Failed(format!("invalid upload response: {}", e)))?;
        Ok(body.secure_url)
    }
}
