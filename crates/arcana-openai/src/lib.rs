//! OpenAI-backed interpretation provider for Arcana.
//!
//! Implements the engine's [`InterpretationProvider`] port with chat
//! completions. This crate is the only one that talks to the network; every
//! transport or API failure is mapped into [`ProviderError`] and handled by
//! the engine's gateway, never surfaced to the user as an error.

use async_openai::{
    Client,
    config::OpenAIConfig,
    error::OpenAIError,
    types::chat::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
};
use async_trait::async_trait;

use arcana_engine::prompt::{SYSTEM_INSTRUCTION, build_user_prompt};
use arcana_engine::{InterpretationProvider, InterpretationRequest, ProviderError};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Sampling temperature for interpretations. Warm enough to vary the prose,
/// cool enough to stay on the cards.
const TEMPERATURE: f32 = 0.7;

/// An [`InterpretationProvider`] backed by an OpenAI-compatible endpoint.
pub struct OpenAiProvider {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiProvider {
    /// Build a provider for `api_key`, generating with `model`.
    pub fn new(api_key: &str, model: impl Into<String>) -> Self {
        let client = Client::with_config(OpenAIConfig::new().with_api_key(api_key));
        Self {
            client,
            model: model.into(),
        }
    }

    /// Build a provider over an existing client.
    pub fn with_client(client: Client<OpenAIConfig>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// The model this provider generates with.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl InterpretationProvider for OpenAiProvider {
    async fn generate(&self, request: &InterpretationRequest) -> Result<String, ProviderError> {
        let messages = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(SYSTEM_INSTRUCTION)
                .build()
                .map_err(|e| ProviderError::Provider(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(build_user_prompt(request))
                .build()
                .map_err(|e| ProviderError::Provider(e.to_string()))?
                .into(),
        ];

        let completion = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .temperature(TEMPERATURE)
            .build()
            .map_err(|e| ProviderError::Provider(e.to_string()))?;

        tracing::debug!(model = %self.model, spread = %request.spread, "requesting interpretation");

        let response = self
            .client
            .chat()
            .create(completion)
            .await
            .map_err(|e: OpenAIError| ProviderError::Transport(e.to_string()))?;

        // A response with no usable text is not an error here: the gateway
        // maps it to its empty-response fallback.
        Ok(response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_keeps_its_configured_model() {
        let provider = OpenAiProvider::new("sk-test", DEFAULT_MODEL);
        assert_eq!(provider.model(), "gpt-4o-mini");

        let custom = OpenAiProvider::new("sk-test", "gpt-4o");
        assert_eq!(custom.model(), "gpt-4o");
    }
}
