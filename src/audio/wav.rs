//! PCM to WAV framing
//!
//! Writes canonical 44-byte-header WAV files (RIFF header, `fmt ` chunk,
//! `data` chunk) around raw little-endian PCM. No resampling, no remixing,
//! no compression: the payload bytes are carried verbatim.

use base64::Engine;

/// Size of the RIFF/WAVE/fmt/data header preceding the payload.
pub const WAV_HEADER_LEN: usize = 44;

/// Format parameters for a PCM payload.
///
/// Fixed per encode call; the defaults match what the speech model emits
/// (mono, 24 kHz, 16-bit signed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmFormat {
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bytes per sample per channel.
    pub sample_width: u16,
}

impl Default for PcmFormat {
    fn default() -> Self {
        Self {
            channels: 1,
            sample_rate: 24_000,
            sample_width: 2,
        }
    }
}

impl PcmFormat {
    /// Mono 16-bit format at the given sample rate.
    #[must_use]
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            ..Self::default()
        }
    }

    /// Bytes per sample frame across all channels.
    #[must_use]
    pub fn block_align(&self) -> u16 {
        self.channels * self.sample_width
    }

    /// Bytes per second of audio.
    #[must_use]
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * u32::from(self.block_align())
    }

    /// Bits per sample per channel.
    #[must_use]
    pub fn bits_per_sample(&self) -> u16 {
        self.sample_width * 8
    }
}

/// Frame raw PCM bytes into a complete WAV file.
///
/// The output is always exactly `44 + pcm.len()` bytes; every multi-byte
/// header field is little-endian. The payload is copied verbatim, neither
/// padded nor truncated, so a buffer whose length is not a multiple of the
/// frame size round-trips unchanged. Frame alignment is the producer's
/// concern.
#[must_use]
pub fn encode_wav(format: &PcmFormat, pcm: &[u8]) -> Vec<u8> {
    let data_size = pcm.len() as u32;
    let file_size = 36 + data_size; // total file size minus the 8-byte RIFF header

    let mut out = Vec::with_capacity(WAV_HEADER_LEN + pcm.len());

    // RIFF header
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&file_size.to_le_bytes());
    out.extend_from_slice(b"WAVE");

    // fmt chunk
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes()); // chunk size (16 for PCM)
    out.extend_from_slice(&1u16.to_le_bytes()); // audio format (1 = PCM)
    out.extend_from_slice(&format.channels.to_le_bytes());
    out.extend_from_slice(&format.sample_rate.to_le_bytes());
    out.extend_from_slice(&format.byte_rate().to_le_bytes());
    out.extend_from_slice(&format.block_align().to_le_bytes());
    out.extend_from_slice(&format.bits_per_sample().to_le_bytes());

    // data chunk
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_size.to_le_bytes());
    out.extend_from_slice(pcm);

    out
}

/// Frame PCM into WAV and base64-encode the result.
#[must_use]
pub fn encode_wav_base64(format: &PcmFormat, pcm: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(encode_wav(format, pcm))
}

/// Frame PCM into WAV and wrap it as a `data:audio/wav;base64,` URI,
/// directly playable by a standard audio element.
#[must_use]
pub fn wav_data_uri(format: &PcmFormat, pcm: &[u8]) -> String {
    format!("data:audio/wav;base64,{}", encode_wav_base64(format, pcm))
}
