use async_openai::{config::OpenAIConfig, Client};
use shhelf_backend::controllers::{
    audio::AudioController, auth::AuthController, discovery::DiscoveryController,
    gallery::GalleryController, health::HealthController,
    recommendation::RecommendationController, share::ShareController, user::UserController,
};
use shhelf_backend::domain::{
    auth::AuthService, discovery::DiscoveryService, gallery::GalleryService,
    recommendation::RecommendationService, share::ShareService, tts::VoiceRouter,
    user::UserService,
};
use shhelf_backend::infrastructure::config::{Config, LogFormat, ShareStoreKind};
use shhelf_backend::infrastructure::db::{check_connection, create_pool, run_migrations};
use shhelf_backend::infrastructure::email::SendGridEmailSender;
use shhelf_backend::infrastructure::http::{create_router, start_http_server, Controllers};
use shhelf_backend::infrastructure::repositories::{
    AzureTtsRepository, CloudinaryAudioStorage, CloudinaryCredentials, ElevenLabsTtsRepository,
    InMemoryAudioCache, InMemoryShareRepository, OpenAiChatRepository, OpenAiTtsRepository,
    PgRecommendationRepository, PgShareRepository, PgUserRepository, RecommendationRepository,
    ShareRepository, UserRepository,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Shh-elf Backend on {}:{}",
        config.host,
        config.port
    );

    for (service, configured) in config.service_status() {
        if configured {
            tracing::info!(service, "External service configured");
        } else {
            tracing::warn!(service, "External service not configured");
        }
    }

    // Create database connection pool
    let pool = create_pool(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    // Verify database connection
    check_connection(&pool).await?;
    tracing::info!("Database connection verified");

    run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    let audio_dir = PathBuf::from(&config.audio_dir);
    tokio::fs::create_dir_all(&audio_dir).await?;

    let pool = Arc::new(pool);
    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (inject db pool)
    tracing::info!("Instantiating repositories...");
    let user_repo: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(pool.clone()));
    let recommendation_repo: Arc<dyn RecommendationRepository> =
        Arc::new(PgRecommendationRepository::new(pool.clone()));
    let share_repo: Arc<dyn ShareRepository> = match config.share_store {
        ShareStoreKind::Postgres => Arc::new(PgShareRepository::new(pool.clone())),
        ShareStoreKind::Memory => {
            tracing::warn!("Share records are kept in memory and will not survive a restart");
            Arc::new(InMemoryShareRepository::new())
        }
    };

    // 2. Instantiate external clients
    tracing::info!("Instantiating external clients...");
    let openai_client = Arc::new(Client::with_config(
        OpenAIConfig::new().with_api_key(config.openai_api_key.clone().unwrap_or_default()),
    ));
    let openai_configured = config.openai_api_key.is_some();

    let text_generator = Arc::new(OpenAiChatRepository::new(
        openai_client.clone(),
        openai_configured,
        config.openai_chat_model.clone(),
    ));
    let regional_tts = Arc::new(AzureTtsRepository::new(
        config.azure_speech_key.clone(),
        config.azure_speech_region.clone(),
    ));
    let multilingual_tts = Arc::new(ElevenLabsTtsRepository::new(
        config.elevenlabs_api_key.clone(),
    ));
    let fallback_tts = Arc::new(OpenAiTtsRepository::new(
        openai_client.clone(),
        openai_configured,
    ));
    let audio_storage = Arc::new(CloudinaryAudioStorage::new(cloudinary_credentials(&config)));
    let email_sender = Arc::new(SendGridEmailSender::new(
        config.sendgrid_api_key.clone(),
        config.email_from.clone(),
    ));

    // 3. Instantiate services (inject repositories and clients)
    tracing::info!("Instantiating services...");
    let voice_router = Arc::new(VoiceRouter::with_default_chain(
        regional_tts,
        multilingual_tts,
        fallback_tts,
        audio_storage,
        audio_dir.clone(),
    ));
    let share_service = Arc::new(ShareService::new(
        share_repo,
        recommendation_repo.clone(),
        config.public_base_url.clone(),
        config.frontend_url.clone(),
    ));
    let recommendation_service = Arc::new(RecommendationService::new(
        text_generator.clone(),
        voice_router.clone(),
        share_service.clone(),
        recommendation_repo.clone(),
        config.public_base_url.clone(),
    ));
    let gallery_service = Arc::new(GalleryService::new(
        voice_router.clone(),
        Arc::new(InMemoryAudioCache::new()),
        config.public_base_url.clone(),
    ));
    let discovery_service = Arc::new(DiscoveryService::new(
        text_generator,
        voice_router,
        config.public_base_url.clone(),
    ));
    let auth_service = Arc::new(AuthService::new(
        user_repo.clone(),
        email_sender,
        config.clone(),
    ));
    let user_service = Arc::new(UserService::new(
        user_repo.clone(),
        recommendation_repo.clone(),
    ));

    // 4. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let controllers = Controllers {
        health: Arc::new(HealthController::new(pool.clone(), config.clone())),
        auth: Arc::new(AuthController::new(auth_service)),
        user: Arc::new(UserController::new(user_service)),
        recommendation: Arc::new(RecommendationController::new(recommendation_service)),
        share: Arc::new(ShareController::new(share_service.clone())),
        gallery: Arc::new(GalleryController::new(gallery_service.clone())),
        discovery: Arc::new(DiscoveryController::new(discovery_service)),
        audio: Arc::new(AudioController::new(audio_dir.clone())),
    };

    // Re-register shares for audio generated before the last restart
    tokio::spawn(async move {
        let restored = share_service.warm_up_from_audio_dir(&audio_dir).await;
        tracing::info!(restored, "Share warm-up finished");
    });
    tokio::spawn(async move {
        let cached = gallery_service.warm_up_from_audio_dir().await;
        tracing::info!(cached, "Gallery warm-up finished");
    });

    let app = create_router(controllers, user_repo, config.clone());

    start_http_server(app, &config).await?;

    Ok(())
}

fn cloudinary_credentials(config: &Config) -> Option<CloudinaryCredentials> {
    match (
        &config.cloudinary_cloud_name,
        &config.cloudinary_api_key,
        &config.cloudinary_api_secret,
    ) {
        (Some(cloud_name), Some(api_key), Some(api_secret)) => Some(CloudinaryCredentials {
            cloud_name: cloud_name.clone(),
            api_key: api_key.clone(),
            api_secret: api_secret.clone(),
        }),
        _ => None,
    }
}

fn init_logging(config: &Config) {
    let default_filter = if config.is_development() {
        "shhelf_backend=debug,tower_http=debug"
    } else {
        "shhelf_backend=info,tower_http=info"
    };

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| default_filter.into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| default_filter.into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
