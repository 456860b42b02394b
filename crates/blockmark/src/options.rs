//! Configuration options for loading documents.

use std::borrow::Cow;

use crate::error::{ConversionError, Result};

/// Options controlling how raw input is turned into a document before conversion.
///
/// The conversion rules themselves are fixed; options only affect decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ConversionOptions {
    /// Encoding label (e.g. `utf-8`, `windows-1252`, `shift_jis`) used to decode input bytes.
    ///
    /// When unset, input is decoded as UTF-8 and falls back to Windows-1252
    /// if the bytes are not valid UTF-8.
    pub encoding: Option<String>,
}

impl ConversionOptions {
    /// Create options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input encoding label.
    #[must_use]
    pub fn with_encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = Some(label.into());
        self
    }

    /// Decode raw input bytes according to these options.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::UnknownEncoding`] if `encoding` names no known encoding.
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Result<Cow<'a, str>> {
        if let Some(label) = self.encoding.as_deref() {
            let encoding = encoding_rs::Encoding::for_label(label.trim().as_bytes())
                .ok_or_else(|| ConversionError::UnknownEncoding(label.to_string()))?;
            let (decoded, _, _) = encoding.decode(bytes);
            return Ok(decoded);
        }

        // BOM is stripped by encoding_rs
        let (decoded, _, malformed) = encoding_rs::UTF_8.decode(bytes);
        if !malformed {
            return Ok(decoded);
        }

        tracing::debug!("input is not valid UTF-8, decoding as windows-1252");
        let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
        Ok(decoded)
    }
}
