//! Context summarization (text or image)

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::genai::{GenAiClient, GenerateRequest, Part};
use crate::media::DataUri;
use crate::{Error, Result};

const SUMMARIZE_PROMPT: &str =
    "Summarize the following context in a concise and informative way:";

/// Input for context summarization.
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeInput {
    /// Per-request API key, shadowing the configured credential.
    #[serde(default)]
    pub api_key: Option<String>,
    /// The context to summarize: plain text, or an image as a `data:` URI.
    pub context: String,
}

/// The produced summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeOutput {
    pub summary: String,
}

/// Summarize caller-provided context.
///
/// A context starting with `data:` is treated as an inline image and sent to
/// the model as binary data; anything else is summarized as text.
///
/// # Errors
///
/// Returns an error if the data URI is malformed, the upstream call fails,
/// or the model yields no text.
pub async fn summarize_context(
    client: &GenAiClient,
    input: SummarizeInput,
) -> Result<SummarizeOutput> {
    let scoped = super::scoped_client(client, input.api_key.as_deref());

    let parts = if DataUri::is_data_uri(&input.context) {
        let image = DataUri::parse(&input.context)?;
        tracing::debug!(mime_type = %image.mime_type, bytes = image.data.len(), "summarizing image context");
        let encoded = base64::engine::general_purpose::STANDARD.encode(&image.data);
        vec![
            Part::text(format!("{SUMMARIZE_PROMPT}\n\nContext (Image):")),
            Part::inline_data(image.mime_type, encoded),
        ]
    } else {
        vec![Part::text(format!(
            "{SUMMARIZE_PROMPT}\n\nContext (Text):\n{}",
            input.context
        ))]
    };

    let request = GenerateRequest::user(parts);
    let model = scoped.config().text_model.clone();
    let response = scoped.generate(&model, &request).await?;

    let summary = response
        .first_text()
        .ok_or_else(|| Error::Summarize("model returned no text".to_string()))?;

    Ok(SummarizeOutput {
        summary: summary.to_string(),
    })
}
