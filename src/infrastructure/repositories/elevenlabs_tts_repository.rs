use super::tts_repository::TtsRepository;
use crate::domain::tts::{SpeechError, SpeechRequest};
use async_trait::async_trait;
use serde::Serialize;

const PROVIDER: &str = "elevenlabs";
const API_BASE_URL: &str = "https://api.elevenlabs.io/v1/text-to-speech";
const VOICE_ID: &str = "9BWtsMINqrJLrRacOk9x";
const MODEL_ID: &str = "eleven_multilingual_v2";

#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
    style: f32,
    use_speaker_boost: bool,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
            style: 0.0,
            use_speaker_boost: true,
        }
    }
}

#[derive(Debug, Serialize)]
struct ElevenLabsRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

/// ElevenLabs multilingual voice for every language other than the local one
pub struct ElevenLabsTtsRepository {
    api_key: Option<String>,
    http_client: reqwest::Client,
}

impl ElevenLabsTtsRepository {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            http_client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl TtsRepository for ElevenLabsTtsRepository {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, SpeechError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(SpeechError::CredentialsMissing { provider: PROVIDER });
        };

        tracing::info!(
            voice_id = VOICE_ID,
            model = MODEL_ID,
            text_length = request.text.len(),
            "Calling ElevenLabs API"
        );

        let upstream = |message: String| SpeechError::UpstreamHttp {
            provider: PROVIDER,
            message,
        };

        let body = ElevenLabsRequest {
            text: &request.text,
            model_id: MODEL_ID,
            voice_settings: VoiceSettings::default(),
        };

        let response = self
            .http_client
            .post(format!("{}/{}", API_BASE_URL, VOICE_ID))
            .header("Accept", "audio/mpeg")
            .header("xi-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(upstream(format!("HTTP {}: {}", status.as_u16(), error_text)));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| upstream(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
