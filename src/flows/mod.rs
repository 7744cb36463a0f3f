//! Request wrappers around the generative AI service
//!
//! Each flow is a single point-to-point async call: typed input in, typed
//! output out, no retries and no shared state. A caller-supplied API key
//! shadows the configured credential for that call only.

pub mod chat;
pub mod summarize;
pub mod voice;

pub use chat::{chat_completion, ChatInput, ChatOutput};
pub use summarize::{summarize_context, SummarizeInput, SummarizeOutput};
pub use voice::{voice_chat_completion, VoiceInput, VoiceOutput};

use crate::genai::GenAiClient;

/// Resolve the client for one request, honoring a per-request credential.
fn scoped_client(client: &GenAiClient, api_key: Option<&str>) -> GenAiClient {
    match api_key {
        Some(key) if !key.is_empty() => client.with_api_key(key.to_string()),
        _ => client.clone(),
    }
}
