//! Voice chat completion: spoken reply as a playable WAV data URI

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::audio::{wav_data_uri, PcmFormat};
use crate::genai::{GenAiClient, GenerateRequest, Part};
use crate::{Error, Result};

/// Input for a voice chat turn.
#[derive(Debug, Clone, Deserialize)]
pub struct VoiceInput {
    /// Per-request API key, shadowing the configured credential.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Context steering the conversation.
    pub context: String,
    /// The user's spoken query.
    pub query: String,
}

/// The spoken reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceOutput {
    /// `data:audio/wav;base64,` URI, playable by a standard audio element.
    pub media: String,
}

/// Answer a query with synthesized speech.
///
/// The speech model returns raw signed 16-bit LE PCM as base64 inline data;
/// this flow frames it into a WAV container and wraps it as a data URI. A
/// response without an audio part is the upstream-empty failure: the encoder
/// is never invoked.
///
/// # Errors
///
/// Returns [`Error::EmptyResponse`] if the model produced no audio, or an
/// error if the upstream call or base64 decoding fails.
pub async fn voice_chat_completion(
    client: &GenAiClient,
    input: VoiceInput,
) -> Result<VoiceOutput> {
    let scoped = super::scoped_client(client, input.api_key.as_deref());

    let prompt = format!("{}\nUser: {}", input.context, input.query);
    let request = GenerateRequest::user(vec![Part::text(prompt)])
        .with_audio_output(&scoped.config().tts_voice);

    let model = scoped.config().tts_model.clone();
    let response = scoped.generate(&model, &request).await?;

    let blob = response
        .first_inline_data()
        .ok_or(Error::EmptyResponse("no audio returned"))?;

    let pcm = base64::engine::general_purpose::STANDARD.decode(&blob.data)?;

    let format = PcmFormat::mono(sample_rate_from_mime(&blob.mime_type).unwrap_or(24_000));
    tracing::debug!(
        bytes = pcm.len(),
        sample_rate = format.sample_rate,
        "framing synthesized speech"
    );

    Ok(VoiceOutput {
        media: wav_data_uri(&format, &pcm),
    })
}

/// Extract the sample rate from a PCM MIME type such as
/// `audio/L16;codec=pcm;rate=24000`.
fn sample_rate_from_mime(mime_type: &str) -> Option<u32> {
    mime_type
        .split(';')
        .filter_map(|param| param.trim().strip_prefix("rate="))
        .find_map(|rate| rate.parse().ok())
}
