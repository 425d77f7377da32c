use super::text_generation_repository::TextGenerationRepository;
use crate::domain::recommendation::{GenerationError, Prompt};
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;

/// OpenAI chat completion implementation of the text generator
pub struct OpenAiChatRepository {
    client: Arc<Client<OpenAIConfig>>,
    configured: bool,
    model: String,
}

impl OpenAiChatRepository {
    pub fn new(client: Arc<Client<OpenAIConfig>>, configured: bool, model: String) -> Self {
        Self {
            client,
            configured,
            model,
        }
    }
}

#[async_trait]
impl TextGenerationRepository for OpenAiChatRepository {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn generate(&self, prompt: &Prompt) -> Result<String, GenerationError> {
        if !self.configured {
            return Err(GenerationError::failed("OPENAI_API_KEY is not configured"));
        }

        let messages = vec![
            ChatCompletionRequestMessage::System(
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(prompt.role.as_str())
                    .build()
                    .map_err(GenerationError::failed)?,
            ),
            ChatCompletionRequestMessage::User(
                ChatCompletionRequestUserMessageArgs::default()
                    .content(prompt.instruction.as_str())
                    .build()
                    .map_err(GenerationError::failed)?,
            ),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .max_tokens(prompt.profile.max_tokens())
            .temperature(prompt.profile.temperature())
            .build()
            .map_err(GenerationError::failed)?;

        let start_time = std::time::Instant::now();
        let response = self.client.chat().create(request).await.map_err(|e| {
            tracing::error!(error = %e, model = %self.model, "OpenAI chat completion failed");
            GenerationError::failed(e)
        })?;

        let text = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| GenerationError::failed("completion contained no text"))?;

        tracing::info!(
            provider = "openai",
            model = %self.model,
            latency_ms = start_time.elapsed().as_millis(),
            characters_count = text.chars().count(),
            "Text generated"
        );

        Ok(text)
    }
}
