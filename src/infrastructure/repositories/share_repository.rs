use crate::domain::share::ShareRecord;
use crate::domain::tts::AudioReference;
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use moka::future::Cache;
use std::sync::Arc;

/// Share id to language/audio lookup
#[async_trait]
pub trait ShareRepository: Send + Sync {
    async fn find(&self, share_id: &str) -> AppResult<Option<ShareRecord>>;

    /// Insert or overwrite
    async fn save(&self, record: &ShareRecord) -> AppResult<()>;

    /// Insert only when the id is unknown. Returns whether a record was added.
    async fn save_if_absent(&self, record: &ShareRecord) -> AppResult<bool>;
}

/// Postgres-backed share store; survives restarts.
pub struct PgShareRepository {
    pool: Arc<DbPool>,
}

impl PgShareRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ShareRow {
    share_id: String,
    language: String,
    audio_path: String,
    created_at: DateTime<Utc>,
}

impl From<ShareRow> for ShareRecord {
    fn from(row: ShareRow) -> Self {
        ShareRecord {
            share_id: row.share_id,
            language: row.language,
            audio: AudioReference::from_stored(&row.audio_path),
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl ShareRepository for PgShareRepository {
    async fn find(&self, share_id: &str) -> AppResult<Option<ShareRecord>> {
        let pool = self.pool.as_ref();
        let row = sqlx::query_as::<_, ShareRow>(
            "SELECT share_id, language, audio_path, created_at FROM share_records WHERE share_id = $1",
        )
        .bind(share_id)
        .fetch_optional(pool)
        .await?;

        Ok(row.map(ShareRecord::from))
    }

    async fn save(&self, record: &ShareRecord) -> AppResult<()> {
        let pool = self.pool.as_ref();
        sqlx::query(
            r#"
            INSERT INTO share_records (share_id, language, audio_path, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (share_id)
            DO UPDATE SET language = EXCLUDED.language, audio_path = EXCLUDED.audio_path
            "#,
        )
        .bind(&record.share_id)
        .bind(&record.language)
        .bind(record.audio.as_stored())
        .bind(record.created_at)
        .execute(pool)
        .await?;

        Ok(())
    }

    async fn save_if_absent(&self, record: &ShareRecord) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let result = sqlx::query(
            r#"
            INSERT INTO share_records (share_id, language, audio_path, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (share_id) DO NOTHING
            "#,
        )
        .bind(&record.share_id)
        .bind(&record.language)
        .bind(record.audio.as_stored())
        .bind(record.created_at)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Process-local share store. Lost on restart.
pub struct InMemoryShareRepository {
    cache: Cache<String, ShareRecord>,
}

impl InMemoryShareRepository {
    pub fn new() -> Self {
        Self {
            cache: Cache::builder().build(),
        }
    }
}

impl Default for InMemoryShareRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ShareRepository for InMemoryShareRepository {
    async fn find(&self, share_id: &str) -> AppResult<Option<ShareRecord>> {
        Ok(self.cache.get(share_id).await)
    }

    async fn save(&self, record: &ShareRecord) -> AppResult<()> {
        self.cache
            .insert(record.share_id.clone(), record.clone())
            .await;
        Ok(())
    }

    async fn save_if_absent(&self, record: &ShareRecord) -> AppResult<bool> {
        let entry = self
            .cache
            .entry(record.share_id.clone())
            .or_insert(record.clone())
            .await;
        Ok(entry.is_fresh())
    }
}
