//! Error types for depth metadata extraction and depth map normalization.

use std::fmt;

use thiserror::Error;

/// Which of the two assembled XMP text blocks an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataBlock {
    /// The standard XMP packet (`http://ns.adobe.com/xap/1.0/`).
    Primary,
    /// The extended XMP packet reassembled from continuation segments.
    Extension,
}

impl fmt::Display for MetadataBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataBlock::Primary => f.write_str("primary"),
            MetadataBlock::Extension => f.write_str("extension"),
        }
    }
}

/// Fatal errors raised by the extraction entry point.
///
/// Missing fields, namespaces or elements are never reported here; they
/// resolve to zero/empty values on the record instead.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input does not start with the JPEG start-of-image marker.
    #[error("File is not a JPEG image (missing start-of-image marker)")]
    Format,

    /// A non-empty metadata block is not well-formed XML.
    #[error("Cannot parse {block} XMP metadata: {message}")]
    MetadataParse {
        block: MetadataBlock,
        message: String,
    },
}

/// Errors raised while obtaining or re-encoding the depth pixel buffer.
///
/// When normalization fails with any of these, the record's depth data
/// reference is left untouched.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The depth data reference is not of the `<mime>;base64,<data>` form.
    #[error("Invalid embedded data reference")]
    InvalidDataRef,

    /// The base64 payload could not be decoded.
    #[error("Invalid base64 payload: {0}")]
    Base64(String),

    /// The decoded bytes are not a supported image.
    #[error("Cannot decode depth image: {0}")]
    Image(String),

    /// The pixel buffer does not match its declared dimensions.
    #[error("Invalid pixel buffer: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// The normalized buffer could not be re-encoded.
    #[error("Cannot encode normalized depth image: {0}")]
    Encode(String),
}
