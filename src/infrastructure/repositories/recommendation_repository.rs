use crate::domain::recommendation::{NewRecommendation, UserRecommendation};
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

#[async_trait]
pub trait RecommendationRepository: Send + Sync {
    async fn create(&self, recommendation: NewRecommendation) -> AppResult<UserRecommendation>;

    /// Newest first
    async fn list_by_user(
        &self,
        user_id: Uuid,
        skip: i64,
        limit: i64,
    ) -> AppResult<Vec<UserRecommendation>>;

    /// Most recent recommendation with this share id, across all users
    async fn find_by_share_id(&self, share_id: &str) -> AppResult<Option<UserRecommendation>>;
}

pub struct PgRecommendationRepository {
    pool: Arc<DbPool>,
}

impl PgRecommendationRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecommendationRepository for PgRecommendationRepository {
    async fn create(&self, rec: NewRecommendation) -> AppResult<UserRecommendation> {
        let pool = self.pool.as_ref();
        let saved = sqlx::query_as::<_, UserRecommendation>(
            r#"
            INSERT INTO user_recommendations (
                id, user_id, book_title, recipient_name, relationship, recipient_interests,
                tone, language, dialect, recommendation_text, audio_path, share_id, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(rec.user_id)
        .bind(&rec.book_title)
        .bind(&rec.recipient_name)
        .bind(&rec.relationship)
        .bind(&rec.recipient_interests)
        .bind(&rec.tone)
        .bind(&rec.language)
        .bind(&rec.dialect)
        .bind(&rec.recommendation_text)
        .bind(&rec.audio_path)
        .bind(&rec.share_id)
        .bind(chrono::Utc::now())
        .fetch_one(pool)
        .await?;

        Ok(saved)
    }

    async fn list_by_user(
        &self,
        user_id: Uuid,
        skip: i64,
        limit: i64,
    ) -> AppResult<Vec<UserRecommendation>> {
        let pool = self.pool.as_ref();
        let recommendations = sqlx::query_as::<_, UserRecommendation>(
            r#"
            SELECT * FROM user_recommendations
            WHERE user_id = $1
            ORDER BY created_at DESC
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(user_id)
        .bind(skip)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(recommendations)
    }

    async fn find_by_share_id(&self, share_id: &str) -> AppResult<Option<UserRecommendation>> {
        let pool = self.pool.as_ref();
        let recommendation = sqlx::query_as::<_, UserRecommendation>(
            r#"
            SELECT * FROM user_recommendations
            WHERE share_id = $1
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(share_id)
        .fetch_optional(pool)
        .await?;

        Ok(recommendation)
    }
}
