use crate::domain::recommendation::{GenerationError, Prompt};
use async_trait::async_trait;

/// Generates recommendation text from a prompt.
#[async_trait]
pub trait TextGenerationRepository: Send + Sync {
    fn is_configured(&self) -> bool;

    /// Returns the trimmed completion. No retries and no partial results.
    async fn generate(&self, prompt: &Prompt) -> Result<String, GenerationError>;
}
