use super::{
    build_prompt, content_key, filename_key, GenerateRecommendationRequest, GeneratedArtifact,
    NewRecommendation,
};
use crate::domain::share::{ShareRecord, ShareService};
use crate::domain::tts::VoiceRouter;
use crate::error::AppResult;
use crate::infrastructure::repositories::{RecommendationRepository, TextGenerationRepository};
use std::sync::Arc;
use uuid::Uuid;

/// Prompt → text → content key → speech → share record → optional history.
pub struct RecommendationService {
    text_generator: Arc<dyn TextGenerationRepository>,
    voice_router: Arc<VoiceRouter>,
    share_service: Arc<ShareService>,
    recommendation_repo: Arc<dyn RecommendationRepository>,
    public_base_url: String,
}

impl RecommendationService {
    pub fn new(
        text_generator: Arc<dyn TextGenerationRepository>,
        voice_router: Arc<VoiceRouter>,
        share_service: Arc<ShareService>,
        recommendation_repo: Arc<dyn RecommendationRepository>,
        public_base_url: String,
    ) -> Self {
        Self {
            text_generator,
            voice_router,
            share_service,
            recommendation_repo,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL local audio files are served under
    pub fn public_base_url(&self) -> &str {
        &self.public_base_url
    }

    /// Generate the text and audio for a request.
    ///
    /// When `user_id` is set the result is also saved to that user's history.
    /// Synthesis and persistence are not transactional: a failed save after
    /// synthesis leaves an orphaned audio artifact behind.
    pub async fn generate(
        &self,
        request: &GenerateRecommendationRequest,
        user_id: Option<Uuid>,
    ) -> AppResult<GeneratedArtifact> {
        let start_time = std::time::Instant::now();
        tracing::info!(
            book_title = %request.book_title,
            language = %request.language,
            dialect = %request.dialect,
            signed_in = user_id.is_some(),
            "Generating recommendation"
        );

        let prompt = build_prompt(request);
        let text = self.text_generator.generate(&prompt).await?;

        let key = content_key(&request.book_title, &request.recipient_name, &text);
        let audio = self
            .voice_router
            .synthesize(&text, &filename_key(&key), &request.language, &request.dialect)
            .await?;

        self.share_service
            .record(&ShareRecord::new(key.clone(), request.language.clone(), audio.clone()))
            .await?;

        if let Some(user_id) = user_id {
            self.recommendation_repo
                .create(NewRecommendation {
                    user_id,
                    book_title: request.book_title.clone(),
                    recipient_name: request.recipient_name.clone(),
                    relationship: request.relationship.clone(),
                    recipient_interests: request.recipient_interests.clone(),
                    tone: request.tone.clone(),
                    language: request.language.clone(),
                    dialect: request.dialect.clone(),
                    recommendation_text: text.clone(),
                    audio_path: audio.as_stored(),
                    share_id: key.clone(),
                })
                .await?;
        }

        tracing::info!(
            share_id = %key,
            remote_audio = audio.is_remote(),
            latency_ms = start_time.elapsed().as_millis(),
            "Recommendation generated"
        );

        Ok(GeneratedArtifact {
            text,
            audio,
            content_key: key,
        })
    }
}
