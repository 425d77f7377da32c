use super::tts_repository::TtsRepository;
use crate::domain::tts::{SpeechError, SpeechRequest};
use async_trait::async_trait;

const PROVIDER: &str = "azure";
const OUTPUT_FORMAT: &str = "audio-24khz-160kbitrate-mono-mp3";
const DEFAULT_XML_LANG: &str = "zh-CN";

/// Azure Speech implementation: regional dialect voices for the local language
pub struct AzureTtsRepository {
    key: Option<String>,
    region: Option<String>,
    http_client: reqwest::Client,
}

impl AzureTtsRepository {
    pub fn new(key: Option<String>, region: Option<String>) -> Self {
        Self {
            key,
            region,
            http_client: reqwest::Client::new(),
        }
    }

    fn endpoint(region: &str) -> String {
        format!(
            "https://{}.tts.speech.microsoft.com/cognitiveservices/v1",
            region
        )
    }
}

/// `zh-HK-HiuMaanNeural` speaks `zh-HK`; anything without a locale prefix gets `zh-CN`.
fn xml_lang_for_voice(voice: &str) -> String {
    let mut parts = voice.splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(lang), Some(region), Some(_)) if !lang.is_empty() && !region.is_empty() => {
            format!("{}-{}", lang, region)
        }
        _ => DEFAULT_XML_LANG.to_string(),
    }
}

/// Minimal SSML wrapper. The text goes in verbatim.
pub fn build_ssml(text: &str, voice: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <speak version=\"1.0\" xmlns=\"http://www.w3.org/2001/10/synthesis\" xml:lang=\"{}\">\n\
         \x20   <voice name=\"{}\">\n\
         \x20       {}\n\
         \x20   </voice>\n\
         </speak>",
        xml_lang_for_voice(voice),
        voice,
        text
    )
}

#[async_trait]
impl TtsRepository for AzureTtsRepository {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    fn is_configured(&self) -> bool {
        self.key.is_some() && self.region.is_some()
    }

    async fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, SpeechError> {
        let (Some(key), Some(region)) = (self.key.as_deref(), self.region.as_deref()) else {
            return Err(SpeechError::CredentialsMissing { provider: PROVIDER });
        };

        let ssml = build_ssml(&request.text, &request.voice);
        tracing::info!(
            voice = %request.voice,
            region = region,
            text_length = request.text.len(),
            "Calling Azure Speech API"
        );

        let upstream = |message: String| SpeechError::UpstreamHttp {
            provider: PROVIDER,
            message,
        };

        let response = self
            .http_client
            .post(Self::endpoint(region))
            .header("Ocp-Apim-Subscription-Key", key)
            .header("Content-Type", "application/ssml+xml")
            .header("X-Microsoft-OutputFormat", OUTPUT_FORMAT)
            .body(ssml.into_bytes())
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
