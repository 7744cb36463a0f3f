//! Aria Gateway - Context-aware chat and voice gateway for generative AI
//!
//! This library fronts a generative AI service with three flows:
//! - Text chat completion steered by caller-provided context
//! - Context summarization (plain text or inline images)
//! - Voice chat completion, returning synthesized speech as a playable
//!   `data:audio/wav;base64,` URI
//!
//! The speech model emits raw 16-bit LE PCM; the [`audio`] module frames it
//! into a WAV container. All upstream access goes through an explicit
//! [`genai::GenAiClient`] - there is no ambient global client.

pub mod api;
pub mod audio;
pub mod config;
pub mod error;
pub mod flows;
pub mod genai;
pub mod media;

pub use audio::{encode_wav, wav_data_uri, PcmFormat};
pub use config::Config;
pub use error::{Error, Result};
pub use genai::{GenAiClient, GenAiConfig};
pub use media::DataUri;
