use crate::domain::tts::AudioReference;
use async_trait::async_trait;
use moka::future::Cache;

/// Where pre-generated clips currently live, keyed by clip id.
#[async_trait]
pub trait AudioCacheRepository: Send + Sync {
    async fn get(&self, key: &str) -> Option<AudioReference>;

    async fn insert(&self, key: &str, audio: AudioReference);

    /// Insert only when the key is unknown. Returns whether an entry was added.
    async fn insert_if_absent(&self, key: &str, audio: AudioReference) -> bool;

    async fn len(&self) -> u64;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Process-local clip cache, rebuilt from the audio directory on startup.
pub struct InMemoryAudioCache {
    cache: Cache<String, AudioReference>,
}

impl InMemoryAudioCache {
    pub fn new() -> Self {
        Self {
            cache: Cache::builder().build(),
        }
    }
}

impl Default for InMemoryAudioCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioCacheRepository for InMemoryAudioCache {
    async fn get(&self, key: &str) -> Option<AudioReference> {
        self.cache.get(key).await
    }

    async fn insert(&self, key: &str, audio: AudioReference) {
        self.cache.insert(key.to_string(), audio).await;
    }

    async fn insert_if_absent(&self, key: &str, audio: AudioReference) -> bool {
        self.cache
            .entry(key.to_string())
            .or_insert(audio)
            .await
            .is_fresh()
    }

    async fn len(&self) -> u64 {
        // entry_count lags behind writes until pending maintenance runs
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }
}
