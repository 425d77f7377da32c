use axum::{extract::State, Extension, Json};
use std::sync::Arc;

use crate::domain::recommendation::{
    GenerateRecommendationRequest, RecommendationResponse, RecommendationService,
};
use crate::{error::AppResult, infrastructure::auth::MaybeAuthUser};

pub struct RecommendationController {
    recommendation_service: Arc<RecommendationService>,
}

impl RecommendationController {
    pub fn new(recommendation_service: Arc<RecommendationService>) -> Self {
        Self {
            recommendation_service,
        }
    }

    /// POST /api/generate-recommendation - Signed-in users also get it saved to history
    pub async fn generate(
        State(controller): State<Arc<RecommendationController>>,
        Extension(MaybeAuthUser(auth_user)): Extension<MaybeAuthUser>,
        Json(request): Json<GenerateRecommendationRequest>,
    ) -> AppResult<Json<RecommendationResponse>> {
        let artifact = controller
            .recommendation_service
            .generate(&request, auth_user.map(|user| user.user_id))
            .await?;
        Ok(Json(RecommendationResponse::from_artifact(
            &artifact,
            controller.recommendation_service.public_base_url(),
        )))
    }
}
