//! Generative AI client (Gemini wire format)
//!
//! A thin, explicit client for the `generateContent` endpoint. There is no
//! process-wide default client: callers construct one from configuration and
//! pass it down, and a per-request credential derives a scoped client via
//! [`GenAiClient::with_api_key`]. The base URL is injectable so tests can
//! point the client at a local fake upstream.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Production Gemini API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model for text chat and summarization.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";

/// Default model for speech synthesis.
pub const DEFAULT_TTS_MODEL: &str = "gemini-2.5-flash-preview-tts";

/// Default prebuilt voice for speech synthesis.
pub const DEFAULT_TTS_VOICE: &str = "Algenib";

/// Credential and model selection for the generative AI service.
#[derive(Debug, Clone)]
pub struct GenAiConfig {
    /// API key sent with every request.
    pub api_key: String,
    /// Model used for chat and summarization.
    pub text_model: String,
    /// Model used for speech synthesis.
    pub tts_model: String,
    /// Prebuilt voice name for speech synthesis.
    pub tts_voice: String,
}

impl GenAiConfig {
    /// Config with default model selection.
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            tts_model: DEFAULT_TTS_MODEL.to_string(),
            tts_voice: DEFAULT_TTS_VOICE.to_string(),
        }
    }
}

/// Client for the generative AI service.
#[derive(Debug, Clone)]
pub struct GenAiClient {
    client: reqwest::Client,
    config: GenAiConfig,
    base_url: String,
}

impl GenAiClient {
    /// Create a client against the production endpoint.
    #[must_use]
    pub fn new(config: GenAiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the API base URL (used by tests to inject a fake upstream).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Derive a client that uses a caller-supplied API key for one request,
    /// keeping the configured models and endpoint.
    #[must_use]
    pub fn with_api_key(&self, api_key: String) -> Self {
        let mut derived = self.clone();
        derived.config.api_key = api_key;
        derived
    }

    /// Configured credential and models.
    #[must_use]
    pub fn config(&self) -> &GenAiConfig {
        &self.config
    }

    /// Issue a `generateContent` call against the given model.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if no API key is configured,
    /// [`Error::Upstream`] on a non-success status, or [`Error::Http`] on
    /// transport failure.
    pub async fn generate(
        &self,
        model: &str,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse> {
        if self.config.api_key.is_empty() {
            return Err(Error::Config("API key required".to_string()));
        }

        let url = format!("{}/v1beta/models/{model}:generateContent", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let result: GenerateResponse = response.json().await?;
        tracing::debug!(model, candidates = result.candidates.len(), "generate call completed");
        Ok(result)
    }
}

/// `generateContent` request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateRequest {
    /// A single-turn user request with the given parts.
    #[must_use]
    pub fn user(parts: Vec<Part>) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts,
            }],
            generation_config: None,
        }
    }

    /// Request spoken audio output with the given prebuilt voice.
    #[must_use]
    pub fn with_audio_output(mut self, voice_name: &str) -> Self {
        self.generation_config = Some(GenerationConfig {
            response_modalities: vec!["AUDIO".to_string()],
            speech_config: Some(SpeechConfig {
                voice_config: VoiceConfig {
                    prebuilt_voice_config: PrebuiltVoiceConfig {
                        voice_name: voice_name.to_string(),
                    },
                },
            }),
        });
        self
    }
}

/// A conversation turn.
#[derive(Debug, Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

/// A content part: text or inline binary data.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: Blob,
    },
}

impl Part {
    /// Text part.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Inline data part from an already-base64-encoded payload.
    #[must_use]
    pub fn inline_data(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self::InlineData {
            inline_data: Blob {
                mime_type: mime_type.into(),
                data: data.into(),
            },
        }
    }
}

/// Inline binary payload, base64-encoded on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    pub mime_type: String,
    pub data: String,
}

/// Generation parameters.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_modalities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech_config: Option<SpeechConfig>,
}

/// Speech synthesis parameters.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechConfig {
    pub voice_config: VoiceConfig,
}

/// Voice selection.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceConfig {
    pub prebuilt_voice_config: PrebuiltVoiceConfig,
}

/// Prebuilt voice selection.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrebuiltVoiceConfig {
    pub voice_name: String,
}

/// `generateContent` response body.
#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// A response candidate.
#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: ResponseContent,
}

/// Candidate content.
#[derive(Debug, Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

/// A response part; exactly one field is populated per part.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub inline_data: Option<Blob>,
}

impl GenerateResponse {
    /// First text part across all candidates, if any.
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .iter()
            .flat_map(|c| c.content.parts.iter())
            .find_map(|p| p.text.as_deref())
    }

    /// First inline data part across all candidates, if any.
    #[must_use]
    pub fn first_inline_data(&self) -> Option<&Blob> {
        self.candidates
            .iter()
            .flat_map(|c| c.content.parts.iter())
            .find_map(|p| p.inline_data.as_ref())
    }
}
