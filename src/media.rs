//! Data URI parsing and emission
//!
//! The gateway receives image context as `data:` URIs from callers and hands
//! synthesized audio back the same way.

use std::fmt;

use base64::Engine;

use crate::{Error, Result};

/// A parsed `data:<mime>;base64,<payload>` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    /// MIME type, e.g. `image/png` or `audio/wav`.
    pub mime_type: String,
    /// Decoded payload bytes.
    pub data: Vec<u8>,
}

impl DataUri {
    /// Build a data URI from raw bytes.
    #[must_use]
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data,
        }
    }

    /// Parse a base64 data URI.
    ///
    /// Only the `data:<mime>;base64,<payload>` form is accepted; URL-encoded
    /// data URIs are not used by any caller.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataUri`] if the scheme, separator, or encoding
    /// marker is missing, or [`Error::Base64`] if the payload does not decode.
    pub fn parse(input: &str) -> Result<Self> {
        let rest = input
            .strip_prefix("data:")
            .ok_or_else(|| Error::DataUri("missing data: scheme".to_string()))?;

        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| Error::DataUri("missing ',' separator".to_string()))?;

        let mime_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| Error::DataUri("missing ;base64 marker".to_string()))?;

        if mime_type.is_empty() {
            return Err(Error::DataUri("empty MIME type".to_string()));
        }

        let data = base64::engine::general_purpose::STANDARD.decode(payload)?;

        Ok(Self {
            mime_type: mime_type.to_string(),
            data,
        })
    }

    /// Whether a string looks like a data URI at all.
    #[must_use]
    pub fn is_data_uri(input: &str) -> bool {
        input.starts_with("data:")
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b64 = base64::engine::general_purpose::STANDARD.encode(&self.data);
        write!(f, "data:{};base64,{}", self.mime_type, b64)
    }
}
