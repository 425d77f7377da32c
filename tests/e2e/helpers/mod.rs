use anyhow::Result;
use axum::Router;
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
use shhelf_backend::infrastructure::config::{Config, Environment, LogFormat, ShareStoreKind};
use shhelf_backend::infrastructure::http::{create_router, Controllers};
use shhelf_backend::infrastructure::repositories::{InMemoryAudioCache, InMemoryShareRepository};
use std::sync::Arc;
use tempfile::TempDir;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;
use uuid::Uuid;

pub mod fakes;

use api_client::TestClient;
use fakes::{
    FakeAudioStorage, FakeConnection, FakeTextGenerator, FakeTtsProvider,
    InMemoryRecommendationRepository, InMemoryUserRepository, RecordingEmailSender,
};
use fixtures::TestFixtures;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-key-for-testing-only";
pub const TEST_FRONTEND_URL: &str = "https://frontend.test/shh-elf/";

/// Handles on every faked collaborator, for steering and inspecting a test
pub struct Fakes {
    pub text_generator: Arc<FakeTextGenerator>,
    pub regional_tts: Arc<FakeTtsProvider>,
    pub multilingual_tts: Arc<FakeTtsProvider>,
    pub fallback_tts: Arc<FakeTtsProvider>,
    pub storage: Arc<FakeAudioStorage>,
    pub email: Arc<RecordingEmailSender>,
    pub database: Arc<FakeConnection>,
    pub recommendations: Arc<InMemoryRecommendationRepository>,
    pub gallery_audio: Arc<InMemoryAudioCache>,
}

pub struct TestContext {
    pub client: TestClient,
    #[allow(dead_code)]
    pub config: Config,
    pub fakes: Fakes,
    pub fixtures: TestFixtures,
    pub audio_dir: TempDir,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let audio_dir = tempfile::tempdir().expect("Failed to create audio dir");

            // Create test configuration
            let config = Config {
                database_url: "postgresql://unused".to_string(),
                host: "127.0.0.1".to_string(),
                port: 0, // Will be assigned by the OS
                jwt_secret: TEST_JWT_SECRET.to_string(),
                jwt_expiration_minutes: 30,
                environment: Environment::Development,
                log_format: LogFormat::Pretty,
                public_base_url: "http://api.test".to_string(),
                frontend_url: TEST_FRONTEND_URL.to_string(),
                audio_dir: audio_dir.path().to_string_lossy().into_owned(),
                share_store: ShareStoreKind::Memory,
                openai_api_key: Some("sk-test".to_string()),
                openai_chat_model: "gpt-4o-mini".to_string(),
                elevenlabs_api_key: Some("el-test".to_string()),
                azure_speech_key: Some("azure-test".to_string()),
                azure_speech_region: Some("eastasia".to_string()),
                cloudinary_cloud_name: None,
                cloudinary_api_key: None,
                cloudinary_api_secret: None,
                sendgrid_api_key: Some("sg-test".to_string()),
                email_from: "no-reply@shh-elf.test".to_string(),
            };

            let fakes = Fakes {
                text_generator: Arc::new(FakeTextGenerator::new("Hello Sam")),
                regional_tts: Arc::new(FakeTtsProvider::new("azure")),
                multilingual_tts: Arc::new(FakeTtsProvider::new("elevenlabs")),
                fallback_tts: Arc::new(FakeTtsProvider::new("openai")),
                storage: Arc::new(FakeAudioStorage::default()),
                email: Arc::new(RecordingEmailSender::new(true)),
                database: Arc::new(FakeConnection::new()),
                recommendations: Arc::new(InMemoryRecommendationRepository::default()),
                gallery_audio: Arc::new(InMemoryAudioCache::new()),
            };

            let (app, fixtures) = create_app_with_fakes(config.clone(), &fakes)
                .expect("Failed to create app");

            // Start server
            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind listener");
            let addr = listener.local_addr().expect("Failed to get local addr");
            let base_url = format!("http://{}", addr);

            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            // Wait for server to be ready
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

            Self {
                client: TestClient::new(&base_url),
                config,
                fakes,
                fixtures,
                audio_dir,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // The audio TempDir is removed on drop
        }
    }
}

fn create_app_with_fakes(config: Config, fakes: &Fakes) -> Result<(Router, TestFixtures)> {
    let config = Arc::new(config);
    let audio_dir = std::path::PathBuf::from(&config.audio_dir);

    let user_repo = Arc::new(InMemoryUserRepository::default());
    let share_repo = Arc::new(InMemoryShareRepository::new());

    let voice_router = Arc::new(VoiceRouter::with_default_chain(
        fakes.regional_tts.clone(),
        fakes.multilingual_tts.clone(),
        fakes.fallback_tts.clone(),
        fakes.storage.clone(),
        audio_dir.clone(),
    ));
    let share_service = Arc::new(ShareService::new(
        share_repo.clone(),
        fakes.recommendations.clone(),
        config.public_base_url.clone(),
        config.frontend_url.clone(),
    ));
    let recommendation_service = Arc::new(RecommendationService::new(
        fakes.text_generator.clone(),
        voice_router.clone(),
        share_service.clone(),
        fakes.recommendations.clone(),
        config.public_base_url.clone(),
    ));
    let gallery_service = Arc::new(GalleryService::new(
        voice_router.clone(),
        fakes.gallery_audio.clone(),
        config.public_base_url.clone(),
    ));
    let discovery_service = Arc::new(DiscoveryService::new(
        fakes.text_generator.clone(),
        voice_router,
        config.public_base_url.clone(),
    ));
    let auth_service = Arc::new(AuthService::new(
        user_repo.clone(),
        fakes.email.clone(),
        config.clone(),
    ));
    let user_service = Arc::new(UserService::new(
        user_repo.clone(),
        fakes.recommendations.clone(),
    ));

    let controllers = Controllers {
        health: Arc::new(HealthController::new(fakes.database.clone(), config.clone())),
        auth: Arc::new(AuthController::new(auth_service)),
        user: Arc::new(UserController::new(user_service)),
        recommendation: Arc::new(RecommendationController::new(recommendation_service)),
        share: Arc::new(ShareController::new(share_service)),
        gallery: Arc::new(GalleryController::new(gallery_service)),
        discovery: Arc::new(DiscoveryController::new(discovery_service)),
        audio: Arc::new(AudioController::new(audio_dir)),
    };

    let fixtures = TestFixtures::new(
        user_repo.clone(),
        fakes.recommendations.clone(),
        share_repo,
    );

    Ok((create_router(controllers, user_repo, config), fixtures))
}

// Helper to generate valid JWT tokens for testing
pub fn generate_test_jwt(user_id: &Uuid, username: &str) -> String {
    generate_test_jwt_with_expiry(user_id, username, 30)
}

// Negative minutes give an already expired token
pub fn generate_test_jwt_with_expiry(user_id: &Uuid, username: &str, minutes: i64) -> String {
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
    use serde::Serialize;

    #[derive(Serialize)]
    struct Claims {
        sub: String,
        username: String,
        exp: i64,
        iat: i64,
    }

    let now = chrono::Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        username: username.to_string(),
        exp: (now + chrono::Duration::minutes(minutes)).timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap()
}
