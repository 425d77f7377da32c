use super::{AudioReference, SpeechError, SpeechRequest, SynthesisError, VoiceLanguage};
use crate::infrastructure::repositories::{AudioStorageRepository, TtsRepository};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Activation predicate for one entry of the provider chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageMatch {
    Local,
    NonLocal,
    Any,
}

impl LanguageMatch {
    pub fn accepts(&self, language: VoiceLanguage) -> bool {
        match self {
            LanguageMatch::Any => true,
            LanguageMatch::Local => language == VoiceLanguage::Local,
            LanguageMatch::NonLocal => language == VoiceLanguage::NonLocal,
        }
    }
}

/// One provider in the chain plus the languages it is tried for.
#[derive(Clone)]
pub struct SynthesisStrategy {
    pub provider: Arc<dyn TtsRepository>,
    pub languages: LanguageMatch,
}

impl SynthesisStrategy {
    pub fn new(provider: Arc<dyn TtsRepository>, languages: LanguageMatch) -> Self {
        Self {
            provider,
            languages,
        }
    }
}

/// Routes synthesis through an ordered provider chain and stores the result.
pub struct VoiceRouter {
    strategies: Vec<SynthesisStrategy>,
    storage: Arc<dyn AudioStorageRepository>,
    audio_dir: PathBuf,
}

impl VoiceRouter {
    pub fn new(
        strategies: Vec<SynthesisStrategy>,
        storage: Arc<dyn AudioStorageRepository>,
        audio_dir: PathBuf,
    ) -> Self {
        Self {
            strategies,
            storage,
            audio_dir,
        }
    }

    /// Regional provider for the local language, multilingual provider for the
    /// rest, and a general-purpose provider as the last resort for both.
    pub fn with_default_chain(
        regional: Arc<dyn TtsRepository>,
        multilingual: Arc<dyn TtsRepository>,
        fallback: Arc<dyn TtsRepository>,
        storage: Arc<dyn AudioStorageRepository>,
        audio_dir: PathBuf,
    ) -> Self {
        Self::new(
            vec![
                SynthesisStrategy::new(regional, LanguageMatch::Local),
                SynthesisStrategy::new(multilingual, LanguageMatch::NonLocal),
                SynthesisStrategy::new(fallback, LanguageMatch::Any),
            ],
            storage,
            audio_dir,
        )
    }

    pub fn audio_dir(&self) -> &Path {
        &self.audio_dir
    }

    /// Synthesize `text` and persist it as `{audio_dir}/{filename_key}.mp3`,
    /// uploading it to object storage when possible.
    pub async fn synthesize(
        &self,
        text: &str,
        filename_key: &str,
        language: &str,
        dialect: &str,
    ) -> Result<AudioReference, SynthesisError> {
        let request = SpeechRequest {
            text: text.to_string(),
            voice: dialect.to_string(),
            language: VoiceLanguage::from_label(language),
        };

        let audio = self.synthesize_with_fallback(&request).await?;
        self.store(filename_key, &audio).await
    }

    /// Walk the chain in order and return the first provider's audio.
    pub async fn synthesize_with_fallback(
        &self,
        request: &SpeechRequest,
    ) -> Result<Vec<u8>, SynthesisError> {
        let mut last_error: Option<SpeechError> = None;

        for strategy in self
            .strategies
            .iter()
            .filter(|s| s.languages.accepts(request.language))
        {
            let provider = strategy.provider.name();

            if !strategy.provider.is_configured() {
                let err = SpeechError::CredentialsMissing { provider };
                tracing::warn!(provider, language = %request.language, "{}, skipping", err);
                last_error = Some(err);
                continue;
            }

            let start_time = std::time::Instant::now();
            match strategy.provider.synthesize(request).await {
                Ok(audio) => {
                    tracing::info!(
                        provider,
                        language = %request.language,
                        latency_ms = start_time.elapsed().as_millis(),
                        audio_size_bytes = audio.len(),
                        "Speech synthesized"
                    );
                    return Ok(audio);
                }
                Err(err) => {
                    tracing::warn!(
                        provider,
                        language = %request.language,
                        latency_ms = start_time.elapsed().as_millis(),
                        error = %err,
                        "Speech provider failed, trying next"
                    );
                    last_error = Some(err);
                }
            }
        }

        let cause = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| format!("no provider handles {} speech", request.language));
        tracing::error!(
            language = %request.language,
            cause = %cause,
            "All speech providers failed"
        );
        Err(SynthesisError::Failed(cause))
    }

    /// Write the audio locally, then try to move it to object storage.
    pub async fn store(
        &self,
        filename_key: &str,
        audio: &[u8],
    ) -> Result<AudioReference, SynthesisError> {
        tokio::fs::create_dir_all(&self.audio_dir).await?;
        let path = self.audio_dir.join(format!("{}.mp3", filename_key));
        tokio::fs::write(&path, audio).await?;

        if !self.storage.is_configured() {
            tracing::info!(
                public_id = filename_key,
                path = %path.display(),
                "Object storage not configured, serving audio locally"
            );
            return Ok(AudioReference::Local(path));
        }

        match self.storage.upload(&path, filename_key).await {
            Ok(url) => {
                if let Err(e) = tokio::fs::remove_file(&path).await {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Could not remove uploaded local file"
                    );
                }
                tracing::info!(public_id = filename_key, url = %url, "Audio uploaded");
                Ok(AudioReference::Remote(url))
            }
            Err(e) => {
                tracing::warn!(
                    public_id = filename_key,
                    path = %path.display(),
                    error = %e,
                    "Upload unavailable, serving audio locally"
                );
                Ok(AudioReference::Local(path))
            }
        }
    }
}
