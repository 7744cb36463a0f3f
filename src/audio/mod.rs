//! Audio container handling
//!
//! The gateway never touches audio hardware; it only frames raw PCM returned
//! by the speech model into a playable WAV artifact.

mod wav;

pub use wav::{encode_wav, encode_wav_base64, wav_data_uri, PcmFormat, WAV_HEADER_LEN};
