use crate::domain::user::{NewUser, User};
use crate::error::{AppError, AppResult};
use crate::infrastructure::db::DbPool;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, user_id: Uuid) -> AppResult<Option<User>>;
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
    async fn find_by_verification_token(&self, token: &str) -> AppResult<Option<User>>;
    async fn create(&self, new_user: NewUser) -> AppResult<User>;
    /// Marks the email verified. The token is kept so a repeated click still resolves.
    async fn mark_email_verified(&self, user_id: Uuid) -> AppResult<User>;
    async fn set_verification_token(&self, user_id: Uuid, token: &str) -> AppResult<()>;
}

pub struct PgUserRepository {
    pool: Arc<DbPool>,
}

impl PgUserRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, user_id: Uuid) -> AppResult<Option<User>> {
        let pool = self.pool.as_ref();
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let pool = self.pool.as_ref();
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let pool = self.pool.as_ref();
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    async fn find_by_verification_token(&self, token: &str) -> AppResult<Option<User>> {
        let pool = self.pool.as_ref();
        let user = sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE email_verification_token = $1",
        )
        .bind(token)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let pool = self.pool.as_ref();
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, email, password_hash, email_verified, email_verification_token, created_at)
            VALUES ($1, $2, $3, $4, FALSE, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new_user.username)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(&new_user.email_verification_token)
        .bind(chrono::Utc::now())
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    async fn mark_email_verified(&self, user_id: Uuid) -> AppResult<User> {
        let pool = self.pool.as_ref();
        let user = sqlx::query_as::<_, User>(
            "UPDATE users SET email_verified = TRUE WHERE id = $1 RETURNING *",
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(user)
    }

    async fn set_verification_token(&self, user_id: Uuid, token: &str) -> AppResult<()> {
        let pool = self.pool.as_ref();
        sqlx::query("UPDATE users SET email_verification_token = $1 WHERE id = $2")
            .bind(token)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(())
    }
}
