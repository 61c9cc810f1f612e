//! Hex transcoding of diagram sources for URL embedding.
//!
//! PlantUML servers accept a diagram source inside the request path when it
//! is written as the [`MARKER`] followed by the lowercase hex form of its
//! UTF-8 bytes. Hex digits never need escaping, so the encoded payload can be
//! appended to a base URL as is.
//!
//! # Example
//!
//! ```
//! use umlhex::encode::{decode_hex, encode_hex};
//!
//! let encoded = encode_hex("A -> B");
//! assert_eq!(encoded, "~h41202d3e2042");
//! assert_eq!(decode_hex(&encoded).unwrap(), "A -> B");
//! ```

use thiserror::Error;

/// Prefix telling the server that the rest of the payload is hex encoded.
pub const MARKER: &str = "~h";

/// Errors produced when turning an encoded payload back into text.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("encoded payload does not start with `~h`")]
    MissingMarker,

    #[error("invalid hex digits: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("decoded bytes are not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Encode a diagram source as [`MARKER`] plus lowercase hex of its UTF-8 bytes.
///
/// Any length is accepted. The empty string encodes to the marker alone.
pub fn encode_hex(text: &str) -> String {
    let mut encoded = String::with_capacity(MARKER.len() + text.len() * 2);
    encoded.push_str(MARKER);
    encoded.push_str(&hex::encode(text.as_bytes()));
    encoded
}

/// Inverse of [`encode_hex`].
///
/// # Errors
///
/// Returns [`DecodeError`] when the marker is missing, the remainder is not
/// an even-length run of hex digits, or the bytes are not UTF-8.
pub fn decode_hex(encoded: &str) -> Result<String, DecodeError> {
    let digits = encoded
        .strip_prefix(MARKER)
        .ok_or(DecodeError::MissingMarker)?;
    let bytes = hex::decode(digits)?;
    Ok(String::from_utf8(bytes)?)
}
