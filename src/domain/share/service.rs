use super::{ShareError, ShareRecord, ShareResponse, DEFAULT_SHARE_LANGUAGE};
use crate::domain::recommendation::content_key::{is_content_key, key_from_file_name};
use crate::domain::tts::AudioReference;
use crate::infrastructure::repositories::{RecommendationRepository, ShareRepository};
use std::path::Path;
use std::sync::Arc;

/// Files this small are failed writes, not playable audio.
const MIN_AUDIO_FILE_BYTES: u64 = 100;

pub struct ShareService {
    share_repo: Arc<dyn ShareRepository>,
    recommendation_repo: Arc<dyn RecommendationRepository>,
    public_base_url: String,
    frontend_url: String,
}

impl ShareService {
    pub fn new(
        share_repo: Arc<dyn ShareRepository>,
        recommendation_repo: Arc<dyn RecommendationRepository>,
        public_base_url: String,
        frontend_url: String,
    ) -> Self {
        Self {
            share_repo,
            recommendation_repo,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
            frontend_url,
        }
    }

    /// Record (or overwrite) the share metadata for a freshly generated artifact
    pub async fn record(&self, record: &ShareRecord) -> Result<(), ShareError> {
        self.share_repo.save(record).await?;
        tracing::debug!(share_id = %record.share_id, language = %record.language, "Share recorded");
        Ok(())
    }

    /// Look up a share id in the share store, then in saved recommendation history.
    pub async fn resolve(&self, share_id: &str) -> Result<ShareRecord, ShareError> {
        if !is_content_key(share_id) {
            return Err(ShareError::NotFound(share_id.to_string()));
        }

        if let Some(record) = self.share_repo.find(share_id).await? {
            return Ok(record);
        }

        if let Some(saved) = self.recommendation_repo.find_by_share_id(share_id).await? {
            tracing::info!(share_id, "Share resolved from recommendation history");
            return Ok(ShareRecord {
                share_id: saved.share_id.clone(),
                language: saved.language.clone(),
                audio: saved.audio(),
                created_at: saved.created_at,
            });
        }

        tracing::info!(share_id, "Share not found");
        Err(ShareError::NotFound(share_id.to_string()))
    }

    pub async fn render_page(&self, share_id: &str) -> Result<String, ShareError> {
        let record = self.resolve(share_id).await?;
        Ok(super::pages::render_share_page(
            &record,
            &self.public_base_url,
            &self.frontend_url,
        ))
    }

    pub async fn describe(&self, share_id: &str) -> Result<ShareResponse, ShareError> {
        let record = self.resolve(share_id).await?;
        Ok(ShareResponse {
            success: true,
            share_id: record.share_id,
            audio_url: record.audio.public_url(&self.public_base_url),
            language: record.language,
            message: "Recommendation found".to_string(),
        })
    }

    /// Seed the share store from `rec_<key>.mp3` files left in `audio_dir`.
    ///
    /// Existing records are never overwritten. Returns how many were added.
    pub async fn warm_up_from_audio_dir(&self, audio_dir: &Path) -> usize {
        let mut entries = match tokio::fs::read_dir(audio_dir).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::info!(
                    audio_dir = %audio_dir.display(),
                    error = %e,
                    "No audio directory to scan"
                );
                return 0;
            }
        };

        let mut seeded = 0;
        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!(error = %e, "Audio directory scan interrupted");
                    break;
                }
            };

            let file_name = entry.file_name();
            let Some(key) = file_name.to_str().and_then(key_from_file_name) else {
                continue;
            };

            match entry.metadata().await {
                Ok(metadata) if metadata.is_file() && metadata.len() > MIN_AUDIO_FILE_BYTES => {}
                _ => continue,
            }

            let record = ShareRecord::new(
                key,
                DEFAULT_SHARE_LANGUAGE,
                AudioReference::Local(entry.path()),
            );
            match self.share_repo.save_if_absent(&record).await {
                Ok(true) => seeded += 1,
                Ok(false) => {}
                Err(e) => tracing::warn!(share_id = key, error = %e, "Could not seed share record"),
            }
        }

        tracing::info!(audio_dir = %audio_dir.display(), seeded, "Share store warm-up finished");
        seeded
    }
}
