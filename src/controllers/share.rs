use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use std::sync::Arc;

use crate::domain::share::{ShareResponse, ShareService};
use crate::error::AppResult;

pub struct ShareController {
    share_service: Arc<ShareService>,
}

impl ShareController {
    pub fn new(share_service: Arc<ShareService>) -> Self {
        Self { share_service }
    }

    /// GET /share/:share_id - Player page in the recommendation's language
    pub async fn page(
        State(controller): State<Arc<ShareController>>,
        Path(share_id): Path<String>,
    ) -> AppResult<Html<String>> {
        let page = controller.share_service.render_page(&share_id).await?;
        Ok(Html(page))
    }

    /// GET /api/share/:share_id
    pub async fn describe(
        State(controller): State<Arc<ShareController>>,
        Path(share_id): Path<String>,
    ) -> AppResult<Json<ShareResponse>> {
        let response = controller.share_service.describe(&share_id).await?;
        Ok(Json(response))
    }
}
