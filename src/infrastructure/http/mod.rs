use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::infrastructure::config::Config;
use crate::{
    controllers::{
        audio::AudioController, auth::AuthController, discovery::DiscoveryController,
        gallery::GalleryController, health, health::HealthController,
        recommendation::RecommendationController, share::ShareController, user::UserController,
    },
    infrastructure::auth::{auth_middleware, optional_auth_middleware, request_id_middleware},
};

use crate::infrastructure::repositories::UserRepository;

pub struct Controllers {
    pub health: Arc<HealthController>,
    pub auth: Arc<AuthController>,
    pub user: Arc<UserController>,
    pub recommendation: Arc<RecommendationController>,
    pub share: Arc<ShareController>,
    pub gallery: Arc<GalleryController>,
    pub discovery: Arc<DiscoveryController>,
    pub audio: Arc<AudioController>,
}

/// Build the application router with all routes configured
pub fn create_router(
    controllers: Controllers,
    user_repo: Arc<dyn UserRepository>,
    config: Arc<Config>,
) -> Router {
    // Health and banner routes (public)
    let health_routes = Router::new()
        .route("/", get(HealthController::root))
        .route("/health", get(health::health))
        .route("/health/ready", get(HealthController::ready))
        .route("/api/health", get(HealthController::api_health))
        .with_state(controllers.health);

    // Generation (signing in is optional)
    let recommendation_routes = Router::new()
        .route(
            "/api/generate-recommendation",
            post(RecommendationController::generate),
        )
        .with_state(controllers.recommendation)
        .layer(middleware::from_fn_with_state(
            (user_repo.clone(), config.clone()),
            optional_auth_middleware,
        ));

    // Share routes (public)
    let share_routes = Router::new()
        .route("/share/:share_id", get(ShareController::page))
        .route("/api/share/:share_id", get(ShareController::describe))
        .with_state(controllers.share);

    // Sample book gallery (public)
    let gallery_routes = Router::new()
        .route("/api/book-gallery", get(GalleryController::list))
        .route("/api/book-gallery/:book_id", get(GalleryController::detail))
        .route(
            "/api/generate-gallery-audio",
            get(GalleryController::generate_audio).post(GalleryController::generate_audio),
        )
        .with_state(controllers.gallery);

    // Book discovery (public)
    let discovery_routes = Router::new()
        .route("/api/discover-book", post(DiscoveryController::discover))
        .with_state(controllers.discovery);

    // Account routes (public)
    let auth_routes = Router::new()
        .route("/api/register", post(AuthController::register))
        .route("/api/login", post(AuthController::login))
        .route("/api/verify-email", get(AuthController::verify_email))
        .route(
            "/api/resend-verification",
            post(AuthController::resend_verification),
        )
        .route("/api/check-email", get(AuthController::check_email))
        .with_state(controllers.auth);

    // User routes (require authentication)
    let user_routes = Router::new()
        .route("/api/me", get(UserController::get_me))
        .route(
            "/api/my-recommendations",
            get(UserController::my_recommendations),
        )
        .with_state(controllers.user)
        .layer(middleware::from_fn_with_state(
            (user_repo.clone(), config.clone()),
            auth_middleware,
        ));

    // Local audio files
    let audio_routes = Router::new()
        .route("/audio/:filename", get(AudioController::serve))
        .with_state(controllers.audio);

    Router::new()
        .merge(health_routes)
        .merge(recommendation_routes)
        .merge(share_routes)
        .merge(gallery_routes)
        .merge(discovery_routes)
        .merge(auth_routes)
        .merge(user_routes)
        .merge(audio_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server
pub async fn start_http_server(
    app: Router,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
