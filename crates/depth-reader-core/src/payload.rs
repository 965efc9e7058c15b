//! Embeddable data references for the image, depth and confidence layers.
//!
//! XDM and Lens Blur producers store each bitmap as a base64 string next to
//! a separate mime-type field. Once both are known they are combined into a
//! single `<mime>;base64,<data>` reference; consumers that need a resolvable
//! URI prepend their own scheme (see [`DataRef::to_data_uri`]).

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::record::{DepthPhotoRecord, Layer};

const BASE64_SEPARATOR: &str = ";base64,";

/// A mime-tagged, base64-encoded inline resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataRef(String);

impl DataRef {
    /// Combine a mime type and a base64 payload.
    pub fn new(mime: &str, base64: &str) -> Self {
        Self(format!("{mime}{BASE64_SEPARATOR}{base64}"))
    }

    /// Base64-encode `bytes` and tag them with `mime`.
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        Self::new(mime, &STANDARD.encode(bytes))
    }

    /// Wrap an existing reference string, checking its shape.
    ///
    /// A leading `data:` scheme is accepted and stripped.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.strip_prefix("data:").unwrap_or(value);
        let (mime, payload) = value.split_once(BASE64_SEPARATOR)?;
        if mime.is_empty() || payload.is_empty() {
            return None;
        }
        Some(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The mime type part.
    pub fn mime(&self) -> &str {
        self.0
            .split_once(BASE64_SEPARATOR)
            .map(|(mime, _)| mime)
            .unwrap_or_default()
    }

    /// The base64 payload part.
    pub fn payload(&self) -> &str {
        self.0
            .split_once(BASE64_SEPARATOR)
            .map(|(_, payload)| payload)
            .unwrap_or_default()
    }

    /// The reference as a `data:` URI.
    pub fn to_data_uri(&self) -> String {
        format!("data:{}", self.0)
    }

    /// Decode the base64 payload into raw bytes.
    ///
    /// Whitespace inside the payload is ignored; XMP serializers commonly
    /// wrap long element text.
    pub fn decode_bytes(&self) -> Result<Vec<u8>, DecodeError> {
        let payload = self.payload();
        if payload.is_empty() {
            return Err(DecodeError::InvalidDataRef);
        }
        let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        STANDARD
            .decode(compact.as_bytes())
            .map_err(|e| DecodeError::Base64(e.to_string()))
    }
}

impl std::fmt::Display for DataRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Mime type and base64 payload as read from the metadata, before resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPayload {
    pub mime: String,
    pub data: String,
}

impl RawPayload {
    pub fn new(mime: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime: mime.into(),
            data: data.into(),
        }
    }
}

/// Combine a raw payload into a data reference.
///
/// Returns `None` unless both the mime type and the data are non-empty.
pub fn resolve_payload(raw: &RawPayload) -> Option<DataRef> {
    if raw.mime.is_empty() || raw.data.is_empty() {
        return None;
    }
    Some(DataRef::new(&raw.mime, &raw.data))
}

/// The four payload-bearing layers of a record, as read by the extractors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawLayers {
    pub image: RawPayload,
    pub depth: RawPayload,
    pub raw_depth: RawPayload,
    pub confidence: RawPayload,
}

impl RawLayers {
    /// Resolve every layer and store mime types and data references on
    /// `record`. Layers lacking either part get `data: None`.
    pub fn resolve_into(self, record: &mut DepthPhotoRecord) {
        record.image = resolve_layer(self.image);
        record.depth.raw = resolve_layer(self.raw_depth);
        record.confidence = resolve_layer(self.confidence);

        let depth = resolve_layer(self.depth);
        record.depth.mime = depth.mime;
        record.depth.data = depth.data;
    }
}

fn resolve_layer(raw: RawPayload) -> Layer {
    let data = resolve_payload(&raw);
    Layer {
        mime: raw.mime,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_payload_combines_mime_and_data() {
        let raw = RawPayload::new("image/jpeg", "Zm9v");
        let data = resolve_payload(&raw).unwrap();
        assert_eq!(data.as_str(), "image/jpeg;base64,Zm9v");
    }

    #[test]
    fn test_resolve_payload_requires_both_parts() {
        assert!(resolve_payload(&RawPayload::new("", "Zm9v")).is_none());
        assert!(resolve_payload(&RawPayload::new("image/png", "")).is_none());
        assert!(resolve_payload(&RawPayload::default()).is_none());
    }

    #[test]
    fn test_resolve_into_record() {
        let layers = RawLayers {
            image: RawPayload::new("image/jpeg", "Zm9v"),
            depth: RawPayload::new("image/png", ""),
            raw_depth: RawPayload::new("image/png", "YmFy"),
            confidence: RawPayload::default(),
        };
        let mut record = DepthPhotoRecord::new();
        layers.resolve_into(&mut record);

        assert_eq!(record.image.data.unwrap().as_str(), "image/jpeg;base64,Zm9v");
        assert_eq!(record.depth.mime, "image/png");
        assert!(record.depth.data.is_none());
        assert_eq!(record.depth.raw.data.unwrap().as_str(), "image/png;base64,YmFy");
        assert!(record.confidence.data.is_none());
    }

    #[test]
    fn test_data_ref_parts() {
        let data = DataRef::new("image/png", "iVBORw0KGgo=");
        assert_eq!(data.mime(), "image/png");
        assert_eq!(data.payload(), "iVBORw0KGgo=");
        assert_eq!(data.to_data_uri(), "data:image/png;base64,iVBORw0KGgo=");
    }

    #[test]
    fn test_data_ref_parse() {
        let data = DataRef::parse("data:image/jpeg;base64,Zm9v").unwrap();
        assert_eq!(data.as_str(), "image/jpeg;base64,Zm9v");

        assert!(DataRef::parse("image/jpeg,Zm9v").is_none());
        assert!(DataRef::parse(";base64,Zm9v").is_none());
        assert!(DataRef::parse("image/jpeg;base64,").is_none());
    }

    #[test]
    fn test_decode_bytes() {
        let data = DataRef::new("text/plain", "Zm9v");
        assert_eq!(data.decode_bytes().unwrap(), b"foo");

        let wrapped = DataRef::new("text/plain", "Zm9v\n YmFy");
        assert_eq!(wrapped.decode_bytes().unwrap(), b"foobar");
    }

    #[test]
    fn test_decode_bytes_invalid_base64() {
        let data = DataRef::new("image/png", "not*base64");
        assert!(matches!(data.decode_bytes(), Err(DecodeError::Base64(_))));
    }

    #[test]
    fn test_from_bytes() {
        let data = DataRef::from_bytes("image/png", b"foo");
        assert_eq!(data.as_str(), "image/png;base64,Zm9v");
    }
}
