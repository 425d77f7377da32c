use super::analysis::{analysis_id, build_analysis_prompt, parse_analysis};
use super::dto::{BookDiscoveryRequest, BookDiscoveryResponse};
use super::error::DiscoveryError;
use crate::domain::tts::VoiceRouter;
use crate::infrastructure::repositories::TextGenerationRepository;
use moka::future::Cache;
use std::sync::Arc;

const DISCOVERY_LANGUAGE: &str = "English";
const DISCOVERY_VOICE: &str = "en-US-JennyNeural";
const MAX_CACHED_ANALYSES: u64 = 1_000;

/// Analyzes any book for English learners and reads the result aloud.
///
/// Results are cached per (title, author, level) for the life of the process.
pub struct DiscoveryService {
    text_generator: Arc<dyn TextGenerationRepository>,
    voice_router: Arc<VoiceRouter>,
    analyses: Cache<String, BookDiscoveryResponse>,
    public_base_url: String,
}

impl DiscoveryService {
    pub fn new(
        text_generator: Arc<dyn TextGenerationRepository>,
        voice_router: Arc<VoiceRouter>,
        public_base_url: String,
    ) -> Self {
        Self {
            text_generator,
            voice_router,
            analyses: Cache::builder().max_capacity(MAX_CACHED_ANALYSES).build(),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn discover(
        &self,
        request: &BookDiscoveryRequest,
    ) -> Result<BookDiscoveryResponse, DiscoveryError> {
        if request.book_title.trim().is_empty() || request.author.trim().is_empty() {
            return Err(DiscoveryError::MissingBook);
        }

        let id = analysis_id(request);
        if let Some(cached) = self.analyses.get(&id).await {
            tracing::info!(analysis_id = %id, "Returning cached book analysis");
            return Ok(cached);
        }

        let start_time = std::time::Instant::now();
        tracing::info!(
            analysis_id = %id,
            book_title = %request.book_title,
            author = %request.author,
            user_level = %request.user_level,
            "Analyzing book"
        );

        let completion = self
            .text_generator
            .generate(&build_analysis_prompt(request))
            .await?;
        let analysis = parse_analysis(&completion, request);

        let sample_audio = self
            .voice_router
            .synthesize(
                &analysis.first_paragraph,
                &format!("discovery_sample_{}", id),
                DISCOVERY_LANGUAGE,
                DISCOVERY_VOICE,
            )
            .await?;
        let talk_audio = self
            .voice_router
            .synthesize(
                &analysis.book_talk,
                &format!("discovery_talk_{}", id),
                DISCOVERY_LANGUAGE,
                DISCOVERY_VOICE,
            )
            .await?;

        let response = BookDiscoveryResponse {
            success: true,
            book_title: request.book_title.clone(),
            author: request.author.clone(),
            first_paragraph: analysis.first_paragraph,
            sample_audio_url: sample_audio.public_url(&self.public_base_url),
            book_talk_text: analysis.book_talk,
            book_talk_audio_url: talk_audio.public_url(&self.public_base_url),
            cefr_level: analysis.cefr_level,
            estimated_vocabulary: analysis.estimated_vocabulary,
            formal_models: analysis.formal_models,
            analysis_id: id.clone(),
        };

        self.analyses.insert(id.clone(), response.clone()).await;
        tracing::info!(
            analysis_id = %id,
            latency_ms = start_time.elapsed().as_millis(),
            "Book analysis finished"
        );

        Ok(response)
    }
}
