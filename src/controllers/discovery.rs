use axum::{extract::State, Json};
use std::sync::Arc;

use crate::domain::discovery::{BookDiscoveryRequest, BookDiscoveryResponse, DiscoveryService};
use crate::error::AppResult;

pub struct DiscoveryController {
    discovery_service: Arc<DiscoveryService>,
}

impl DiscoveryController {
    pub fn new(discovery_service: Arc<DiscoveryService>) -> Self {
        Self { discovery_service }
    }

    /// POST /api/discover-book
    pub async fn discover(
        State(controller): State<Arc<DiscoveryController>>,
        Json(request): Json<BookDiscoveryRequest>,
    ) -> AppResult<Json<BookDiscoveryResponse>> {
        let response = controller.discovery_service.discover(&request).await?;
        Ok(Json(response))
    }
}
