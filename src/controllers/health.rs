use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Map, Value};
use std::sync::Arc;

use crate::infrastructure::config::Config;
use crate::infrastructure::db::ConnectionCheck;

pub struct HealthController {
    db: Arc<dyn ConnectionCheck>,
    config: Arc<Config>,
}

impl HealthController {
    pub fn new(db: Arc<dyn ConnectionCheck>, config: Arc<Config>) -> Self {
        Self { db, config }
    }

    /// GET / - Service banner
    pub async fn root() -> impl IntoResponse {
        Json(json!({
            "message": "Shh-elf API Server",
            "version": env!("CARGO_PKG_VERSION"),
            "status": "online"
        }))
    }

    /// GET /health/ready - Database readiness
    pub async fn ready(State(controller): State<Arc<HealthController>>) -> impl IntoResponse {
        if controller.db.is_connected().await {
            (
                StatusCode::OK,
                Json(json!({
                    "status": "ready",
                    "database": "connected"
                })),
            )
        } else {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "not_ready",
                    "database": "disconnected"
                })),
            )
        }
    }

    /// GET /api/health - Which external services have credentials
    pub async fn api_health(State(controller): State<Arc<HealthController>>) -> impl IntoResponse {
        let services: Map<String, Value> = controller
            .config
            .service_status()
            .into_iter()
            .map(|(name, configured)| {
                let status = if configured { "configured" } else { "missing" };
                (name.to_string(), Value::from(status))
            })
            .collect();

        Json(json!({
            "status": "healthy",
            "message": "Shh-elf API is operational!",
            "services": services
        }))
    }
}

/// GET /health - Liveness
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
