//! Text chat completion with caller-provided context

use serde::{Deserialize, Serialize};

use crate::genai::{GenAiClient, GenerateRequest, Part};
use crate::{Error, Result};

/// Input for a text chat turn.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatInput {
    /// Per-request API key, shadowing the configured credential.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Context steering the conversation.
    pub context: String,
    /// The user message.
    pub message: String,
}

/// The assistant's reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatOutput {
    pub response: String,
}

/// Respond to a user message using the provided context.
///
/// # Errors
///
/// Returns an error if the upstream call fails or yields no text.
pub async fn chat_completion(client: &GenAiClient, input: ChatInput) -> Result<ChatOutput> {
    let scoped = super::scoped_client(client, input.api_key.as_deref());

    let prompt = format!(
        "You are a helpful AI assistant. Use the context provided to respond to the user's \
         message.\n\nContext: {}\n\nUser Message: {}\n\nResponse: ",
        input.context, input.message
    );

    let request = GenerateRequest::user(vec![Part::text(prompt)]);
    let model = scoped.config().text_model.clone();
    let response = scoped.generate(&model, &request).await?;

    let text = response
        .first_text()
        .ok_or_else(|| Error::Chat("model returned no text".to_string()))?;

    Ok(ChatOutput {
        response: text.to_string(),
    })
}
