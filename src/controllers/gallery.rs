use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::domain::gallery::{
    GalleryAudioResponse, GalleryBookResponse, GalleryResponse, GalleryService,
};
use crate::error::AppResult;

pub struct GalleryController {
    gallery_service: Arc<GalleryService>,
}

impl GalleryController {
    pub fn new(gallery_service: Arc<GalleryService>) -> Self {
        Self { gallery_service }
    }

    /// GET /api/book-gallery
    pub async fn list(State(controller): State<Arc<GalleryController>>) -> Json<GalleryResponse> {
        Json(controller.gallery_service.list().await)
    }

    /// GET /api/book-gallery/:book_id - Books are numbered from 1
    pub async fn detail(
        State(controller): State<Arc<GalleryController>>,
        Path(book_id): Path<i64>,
    ) -> AppResult<Json<GalleryBookResponse>> {
        let response = controller.gallery_service.detail(book_id).await?;
        Ok(Json(response))
    }

    /// GET|POST /api/generate-gallery-audio - Re-synthesize every gallery clip
    pub async fn generate_audio(
        State(controller): State<Arc<GalleryController>>,
    ) -> AppResult<Json<GalleryAudioResponse>> {
        let response = controller.gallery_service.generate_audio().await?;
        Ok(Json(response))
    }
}
