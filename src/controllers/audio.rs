use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::{AppError, AppResult};

pub struct AudioController {
    audio_dir: PathBuf,
}

impl AudioController {
    pub fn new(audio_dir: PathBuf) -> Self {
        Self { audio_dir }
    }

    /// GET /audio/:filename - Locally stored audio
    pub async fn serve(
        State(controller): State<Arc<AudioController>>,
        Path(filename): Path<String>,
    ) -> AppResult<impl IntoResponse> {
        if !is_servable_name(&filename) {
            return Err(AppError::NotFound("Audio file not found".to_string()));
        }

        let bytes = tokio::fs::read(controller.audio_dir.join(&filename))
            .await
            .map_err(|_| AppError::NotFound("Audio file not found".to_string()))?;

        Ok((
            [
                (header::CONTENT_TYPE, "audio/mpeg".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("inline; filename=\"{}\"", filename),
                ),
            ],
            bytes,
        ))
    }
}

/// A bare `.mp3` file name with no path components
fn is_servable_name(filename: &str) -> bool {
    filename.ends_with(".mp3")
        && filename.len() > ".mp3".len()
        && !filename.contains(|c: char| c == '/' || c == '\\')
        && !filename.starts_with('.')
        && !filename.contains("..")
}
