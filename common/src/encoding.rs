//! Data-URI encoding for photos sent inside JSON bodies.
//!
//! The client reads the selected file into memory and ships it as
//! `data:<mime>;base64,<payload>`. Nothing is resized or re-encoded; the
//! bytes that come out of [`DataUri::parse`] are exactly the bytes that went
//! into [`encode_data_uri`].

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use thiserror::Error;

/// MIME type used when the platform reports none for a file.
pub const DEFAULT_MIME: &str = "application/octet-stream";

const SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64";

#[derive(Debug, Error, PartialEq)]
pub enum DataUriError {
    #[error("not a data URI")]
    MissingScheme,
    #[error("data URI has no payload separator")]
    MissingPayload,
    #[error("data URI payload is not base64 encoded")]
    NotBase64,
    #[error("invalid base64 payload: {0}")]
    Decode(String),
}

/// A decoded data URI.
#[derive(Debug, Clone, PartialEq)]
pub struct DataUri {
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Encodes raw file bytes as a base64 data URI.
pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.trim().is_empty() { DEFAULT_MIME } else { mime };
    format!("{}{}{},{}", SCHEME, mime, BASE64_MARKER, BASE64.encode(bytes))
}

impl DataUri {
    /// Decodes `data:<mime>;base64,<payload>`.
    pub fn parse(text: &str) -> Result<Self, DataUriError> {
        let rest = text.strip_prefix(SCHEME).ok_or(DataUriError::MissingScheme)?;
        let (header, payload) = rest.split_once(',').ok_or(DataUriError::MissingPayload)?;
        let mime = header
            .strip_suffix(BASE64_MARKER)
            .ok_or(DataUriError::NotBase64)?;
        let bytes = BASE64
            .decode(payload)
            .map_err(|e| DataUriError::Decode(e.to_string()))?;

        Ok(Self {
            mime: if mime.is_empty() { DEFAULT_MIME.to_string() } else { mime.to_string() },
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1x1 transparent PNG.
    const PIXEL_PNG: [u8; 67] = [
        0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f,
        0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, 0x0a, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9c, 0x63, 0x00,
        0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0d, 0x0a, 0x2d, 0xb4, 0x00, 0x00, 0x00, 0x00, 0x49,
        0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
    ];

    #[test]
    fn round_trip_preserves_bytes() {
        let uri = encode_data_uri("image/png", &PIXEL_PNG);
        assert!(uri.starts_with("data:image/png;base64,iVBORw0KGgo"));

        let decoded = DataUri::parse(&uri).unwrap();
        assert_eq!(decoded.mime, "image/png");
        assert_eq!(decoded.bytes, PIXEL_PNG.to_vec());
    }

    #[test]
    fn empty_input_round_trips() {
        let uri = encode_data_uri("image/jpeg", &[]);
        assert_eq!(uri, "data:image/jpeg;base64,");
        assert!(DataUri::parse(&uri).unwrap().bytes.is_empty());
    }

    #[test]
    fn blank_mime_falls_back_to_octet_stream() {
        let uri = encode_data_uri("", b"abc");
        assert_eq!(uri, "data:application/octet-stream;base64,YWJj");
    }

    #[test]
    fn rejects_malformed_uris() {
        assert_eq!(DataUri::parse("image/png;base64,AAAA"), Err(DataUriError::MissingScheme));
        assert_eq!(DataUri::parse("data:image/png;base64"), Err(DataUriError::MissingPayload));
        assert_eq!(DataUri::parse("data:text/plain,hello"), Err(DataUriError::NotBase64));
        assert!(matches!(
            DataUri::parse("data:image/png;base64,@@@"),
            Err(DataUriError::Decode(_))
        ));
    }
}
