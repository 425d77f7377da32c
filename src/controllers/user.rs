use axum::{
    extract::{Query, State},
    Extension, Json,
};
use std::sync::Arc;

use crate::domain::recommendation::HistoryQuery;
use crate::domain::user::{RecommendationHistoryItem, UserResponse, UserService};
use crate::{error::AppResult, infrastructure::auth::AuthUser};

pub struct UserController {
    user_service: Arc<UserService>,
}

impl UserController {
    pub fn new(user_service: Arc<UserService>) -> Self {
        Self { user_service }
    }

    /// GET /api/me - Get current user profile
    pub async fn get_me(
        State(controller): State<Arc<UserController>>,
        Extension(auth_user): Extension<AuthUser>,
    ) -> AppResult<Json<UserResponse>> {
        let response = controller
            .user_service
            .get_user_profile(auth_user.user_id)
            .await?;
        Ok(Json(response))
    }

    /// GET /api/my-recommendations?skip=&limit= - Saved recommendations, newest first
    pub async fn my_recommendations(
        State(controller): State<Arc<UserController>>,
        Extension(auth_user): Extension<AuthUser>,
        Query(query): Query<HistoryQuery>,
    ) -> AppResult<Json<Vec<RecommendationHistoryItem>>> {
        let response = controller
            .user_service
            .list_recommendations(auth_user.user_id, &query)
            .await?;
        Ok(Json(response))
    }
}
