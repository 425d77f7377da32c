use super::tts_repository::TtsRepository;
use crate::domain::tts::{SpeechError, SpeechRequest};
use async_openai::{
    config::OpenAIConfig,
    types::{CreateSpeechRequest, SpeechModel, SpeechResponseFormat, Voice},
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;

const PROVIDER: &str = "openai";

/// OpenAI TTS implementation, the last resort of the chain for every language
pub struct OpenAiTtsRepository {
    client: Arc<Client<OpenAIConfig>>,
    configured: bool,
    model: String,
    voice: String,
}

impl OpenAiTtsRepository {
    pub fn new(client: Arc<Client<OpenAIConfig>>, configured: bool) -> Self {
        Self {
            client,
            configured,
            model: "tts-1".to_string(),
            voice: "alloy".to_string(),
        }
    }

    fn speech_model(&self) -> SpeechModel {
        match self.model.as_str() {
            "tts-1" => SpeechModel::Tts1,
            "tts-1-hd" => SpeechModel::Tts1Hd,
            other => SpeechModel::Other(other.to_string()),
        }
    }

    fn speech_voice(&self) -> Voice {
        match self.voice.to_lowercase().as_str() {
            "echo" => Voice::Echo,
            "fable" => Voice::Fable,
            "onyx" => Voice::Onyx,
            "nova" => Voice::Nova,
            "shimmer" => Voice::Shimmer,
            _ => Voice::Alloy,
        }
    }
}

#[async_trait]
impl TtsRepository for OpenAiTtsRepository {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, SpeechError> {
        if !self.configured {
            return Err(SpeechError::CredentialsMissing { provider: PROVIDER });
        }

        tracing::info!(
            model = %self.model,
            voice = %self.voice,
            text_length = request.text.len(),
            "Calling OpenAI TTS API"
        );

        let speech = CreateSpeechRequest {
            model: self.speech_model(),
            input: request.text.clone(),
            voice: self.speech_voice(),
            response_format: Some(SpeechResponseFormat::Mp3),
            speed: Some(1.0),
        };

        let response = self.client.audio().speech(speech).await.map_err(|e| {
            tracing::error!(error = %e, model = %self.model, "OpenAI TTS API call failed");
            SpeechError::UpstreamHttp {
                provider: PROVIDER,
                message: e.to_string(),
            }
        })?;

        Ok(response.bytes.to_vec())
    }
}
