//! Configuration for the Aria gateway
//!
//! Configuration is an explicit value built once in `main` and passed down;
//! nothing in the library reads the environment or holds global state.

use std::env;

use crate::genai::{GenAiConfig, DEFAULT_TEXT_MODEL, DEFAULT_TTS_MODEL, DEFAULT_TTS_VOICE};

/// Default HTTP API port.
pub const DEFAULT_PORT: u16 = 9797;

/// Aria gateway configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Generative AI credential and model selection.
    pub genai: GenAiConfig,

    /// HTTP API port.
    pub port: u16,
}

impl Config {
    /// Build configuration from the environment.
    ///
    /// `GEMINI_API_KEY` supplies the credential (may be empty; requests then
    /// require a per-request key). `ARIA_TEXT_MODEL`, `ARIA_TTS_MODEL`,
    /// `ARIA_TTS_VOICE`, and `ARIA_PORT` override the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let genai = GenAiConfig {
            api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            text_model: env::var("ARIA_TEXT_MODEL")
                .unwrap_or_else(|_| DEFAULT_TEXT_MODEL.to_string()),
            tts_model: env::var("ARIA_TTS_MODEL")
                .unwrap_or_else(|_| DEFAULT_TTS_MODEL.to_string()),
            tts_voice: env::var("ARIA_TTS_VOICE")
                .unwrap_or_else(|_| DEFAULT_TTS_VOICE.to_string()),
        };

        let port = env::var("ARIA_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self { genai, port }
    }
}
