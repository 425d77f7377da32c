use async_trait::async_trait;
use chrono::Utc;
use parking_lot::{Mutex, RwLock};
use shhelf_backend::domain::recommendation::{
    GenerationError, NewRecommendation, Prompt, UserRecommendation,
};
use shhelf_backend::domain::tts::{SpeechError, SpeechRequest, UploadError};
use shhelf_backend::domain::user::{NewUser, User};
use shhelf_backend::error::{AppError, AppResult};
use shhelf_backend::infrastructure::db::ConnectionCheck;
use shhelf_backend::infrastructure::email::{EmailError, EmailMessage, EmailSender};
use shhelf_backend::infrastructure::repositories::{
    AudioStorageRepository, RecommendationRepository, TextGenerationRepository, TtsRepository,
    UserRepository,
};
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use uuid::Uuid;

pub const FAKE_MP3: &[u8] = b"ID3\x03\x00\x00\x00fake-mp3-frames";

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, user_id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.read().iter().find(|u| u.id == user_id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.users.read().iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_verification_token(&self, token: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .iter()
            .find(|u| u.email_verification_token.as_deref() == Some(token))
            .cloned())
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let user = User {
            id: Uuid::new_v4(),
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            email_verified: false,
            email_verification_token: Some(new_user.email_verification_token),
            created_at: Utc::now(),
        };
        self.users.write().push(user.clone());
        Ok(user)
    }

    async fn mark_email_verified(&self, user_id: Uuid) -> AppResult<User> {
        let mut users = self.users.write();
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        user.email_verified = true;
        Ok(user.clone())
    }

    async fn set_verification_token(&self, user_id: Uuid, token: &str) -> AppResult<()> {
        if let Some(user) = self.users.write().iter_mut().find(|u| u.id == user_id) {
            user.email_verification_token = Some(token.to_string());
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryRecommendationRepository {
    saved: RwLock<Vec<UserRecommendation>>,
}

impl InMemoryRecommendationRepository {
    pub fn count(&self) -> usize {
        self.saved.read().len()
    }
}

#[async_trait]
impl RecommendationRepository for InMemoryRecommendationRepository {
    async fn create(&self, rec: NewRecommendation) -> AppResult<UserRecommendation> {
        let saved = UserRecommendation {
            id: Uuid::new_v4(),
            user_id: rec.user_id,
            book_title: rec.book_title,
            recipient_name: rec.recipient_name,
            relationship: rec.relationship,
            recipient_interests: rec.recipient_interests,
            tone: rec.tone,
            language: rec.language,
            dialect: rec.dialect,
            recommendation_text: rec.recommendation_text,
            audio_path: rec.audio_path,
            share_id: rec.share_id,
            created_at: Utc::now(),
        };
        self.saved.write().push(saved.clone());
        Ok(saved)
    }

    async fn list_by_user(
        &self,
        user_id: Uuid,
        skip: i64,
        limit: i64,
    ) -> AppResult<Vec<UserRecommendation>> {
        // Insertion order is creation order
        Ok(self
            .saved
            .read()
            .iter()
            .rev()
            .filter(|r| r.user_id == user_id)
            .skip(skip.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn find_by_share_id(&self, share_id: &str) -> AppResult<Option<UserRecommendation>> {
        Ok(self
            .saved
            .read()
            .iter()
            .rev()
            .find(|r| r.share_id == share_id)
            .cloned())
    }
}

/// Echoes a fixed completion; can be switched to fail.
pub struct FakeTextGenerator {
    completion: RwLock<String>,
    fail: AtomicBool,
    prompts: Mutex<Vec<Prompt>>,
}

impl FakeTextGenerator {
    pub fn new(completion: &str) -> Self {
        Self {
            completion: RwLock::new(completion.to_string()),
            fail: AtomicBool::new(false),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn set_completion(&self, completion: &str) {
        *self.completion.write() = completion.to_string();
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn last_prompt(&self) -> Option<Prompt> {
        self.prompts.lock().last().cloned()
    }
}

#[async_trait]
impl TextGenerationRepository for FakeTextGenerator {
    fn is_configured(&self) -> bool {
        true
    }

    async fn generate(&self, prompt: &Prompt) -> Result<String, GenerationError> {
        self.prompts.lock().push(prompt.clone());
        if self.fail.load(Ordering::SeqCst) {
            return Err(GenerationError::failed("quota exceeded"));
        }
        Ok(self.completion.read().clone())
    }
}

pub struct FakeTtsProvider {
    name: &'static str,
    configured: AtomicBool,
    fail: AtomicBool,
    calls: AtomicUsize,
}

impl FakeTtsProvider {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            configured: AtomicBool::new(true),
            fail: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn set_configured(&self, configured: bool) {
        self.configured.store(configured, Ordering::SeqCst);
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TtsRepository for FakeTtsProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_configured(&self) -> bool {
        self.configured.load(Ordering::SeqCst)
    }

    async fn synthesize(&self, _request: &SpeechRequest) -> Result<Vec<u8>, SpeechError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(SpeechError::UpstreamHttp {
                provider: self.name,
                message: "503 Service Unavailable".to_string(),
            });
        }
        Ok(FAKE_MP3.to_vec())
    }
}

/// Object storage that is off until switched on; can be made to reject uploads.
#[derive(Default)]
pub struct FakeAudioStorage {
    enabled: AtomicBool,
    rejecting: AtomicBool,
}

impl FakeAudioStorage {
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn set_rejecting(&self, rejecting: bool) {
        self.rejecting.store(rejecting, Ordering::SeqCst);
    }
}

#[async_trait]
impl AudioStorageRepository for FakeAudioStorage {
    fn is_configured(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    async fn upload(&self, path: &Path, public_id: &str) -> Result<String, UploadError> {
        if !self.is_configured() {
            return Err(UploadError::NotConfigured);
        }
        if !path.exists() {
            return Err(UploadError::Failed(format!("{} missing", path.display())));
        }
        if self.rejecting.load(Ordering::SeqCst) {
            return Err(UploadError::Failed("401 Invalid Signature".to_string()));
        }
        Ok(format!(
            "https://cdn.test/video/upload/shh-elf-audio/{}.mp3",
            public_id
        ))
    }
}

/// Keeps every delivered message; rejects everything when delivery is off.
pub struct RecordingEmailSender {
    delivering: AtomicBool,
    outbox: Mutex<Vec<EmailMessage>>,
}

impl RecordingEmailSender {
    pub fn new(delivering: bool) -> Self {
        Self {
            delivering: AtomicBool::new(delivering),
            outbox: Mutex::new(Vec::new()),
        }
    }

    pub fn set_delivering(&self, delivering: bool) {
        self.delivering.store(delivering, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<EmailMessage> {
        self.outbox.lock().clone()
    }

    /// Token from the newest verification link sent to `to`
    pub fn verification_token_for(&self, to: &str) -> Option<String> {
        self.outbox
            .lock()
            .iter()
            .rev()
            .filter(|m| m.to == to)
            .find_map(|m| {
                m.text
                    .split_whitespace()
                    .find_map(|word| word.split("token=").nth(1))
                    .map(str::to_string)
            })
    }
}

#[async_trait]
impl EmailSender for RecordingEmailSender {
    fn is_configured(&self) -> bool {
        self.delivering.load(Ordering::SeqCst)
    }

    async fn send(&self, message: &EmailMessage) -> Result<(), EmailError> {
        if !self.is_configured() {
            return Err(EmailError::NotConfigured);
        }
        self.outbox.lock().push(message.clone());
        Ok(())
    }
}

pub struct FakeConnection {
    connected: AtomicBool,
}

impl FakeConnection {
    pub fn new() -> Self {
        Self {
            connected: AtomicBool::new(true),
        }
    }

    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
    }
}

#[async_trait]
impl ConnectionCheck for FakeConnection {
    async fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }
}
