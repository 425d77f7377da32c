use super::dto::{RecommendationHistoryItem, UserResponse};
use crate::{
    domain::recommendation::HistoryQuery,
    error::{AppError, AppResult},
    infrastructure::repositories::{RecommendationRepository, UserRepository},
};
use std::sync::Arc;
use uuid::Uuid;

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    recommendation_repo: Arc<dyn RecommendationRepository>,
}

impl UserService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        recommendation_repo: Arc<dyn RecommendationRepository>,
    ) -> Self {
        Self {
            user_repo,
            recommendation_repo,
        }
    }

    /// Get the signed-in user's profile
    pub async fn get_user_profile(&self, user_id: Uuid) -> AppResult<UserResponse> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(UserResponse::from(&user))
    }

    /// Saved recommendations, newest first
    pub async fn list_recommendations(
        &self,
        user_id: Uuid,
        query: &HistoryQuery,
    ) -> AppResult<Vec<RecommendationHistoryItem>> {
        let (skip, limit) = query.normalized();
        let recommendations = self
            .recommendation_repo
            .list_by_user(user_id, skip, limit)
            .await?;

        tracing::debug!(
            user_id = %user_id,
            skip,
            limit,
            count = recommendations.len(),
            "Recommendation history loaded"
        );

        Ok(recommendations
            .into_iter()
            .map(RecommendationHistoryItem::from)
            .collect())
    }
}
