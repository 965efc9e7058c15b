//! Reassembly of the standard and extended XMP packets from APP1 segments.
//!
//! Segment layout after the `FF E1` marker:
//!
//! ```text
//! standard:  len(2) "http://ns.adobe.com/xap/1.0/" NUL xml...
//! extension: len(2) "http://ns.adobe.com/xmp/extension/" NUL guid(32) total(4) offset(4) xml...
//! ```
//!
//! The length field counts itself but not the marker. Extension fragments
//! are concatenated in the order they appear in the file.

use super::markers::{MarkerScanner, APP1};
use crate::error::ParseError;

/// Namespace header of a standard XMP segment.
pub const XMP_PRIMARY_HEADER: &[u8] = b"http://ns.adobe.com/xap/1.0/";

/// Namespace header of an extended XMP segment.
pub const XMP_EXTENSION_HEADER: &[u8] = b"http://ns.adobe.com/xmp/extension/";

/// Length field + NUL terminator.
const PRIMARY_FRAMING: usize = 2 + 1;

/// Length field + NUL terminator + 32-byte GUID + 4-byte full length + 4-byte offset.
const EXTENSION_FRAMING: usize = 2 + 1 + 32 + 4 + 4;

/// Which XMP packet a segment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Primary,
    Extension,
}

impl SegmentKind {
    fn header(self) -> &'static [u8] {
        match self {
            SegmentKind::Primary => XMP_PRIMARY_HEADER,
            SegmentKind::Extension => XMP_EXTENSION_HEADER,
        }
    }

    /// Bytes between the end of the marker and the start of the payload.
    pub fn overhead(self) -> usize {
        match self {
            SegmentKind::Primary => XMP_PRIMARY_HEADER.len() + PRIMARY_FRAMING,
            SegmentKind::Extension => XMP_EXTENSION_HEADER.len() + EXTENSION_FRAMING,
        }
    }
}

/// Classify the segment whose marker sits at `marker`.
///
/// Returns `None` for segments that are not XMP (EXIF, vendor data, ...).
pub fn classify_segment(bytes: &[u8], marker: usize) -> Option<SegmentKind> {
    let header_start = marker + APP1.len() + 2;
    [SegmentKind::Primary, SegmentKind::Extension]
        .into_iter()
        .find(|kind| {
            let header = kind.header();
            bytes
                .get(header_start..header_start + header.len())
                .is_some_and(|candidate| candidate == header)
        })
}

/// The two XMP text blocks of a file. Either may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmpPackets {
    pub primary: String,
    pub extension: String,
}

/// Collect and concatenate the XMP segment payloads of a JPEG file.
///
/// # Errors
///
/// Returns `ParseError::Format` if `bytes` is not a JPEG file.
pub fn extract_xmp_packets(bytes: &[u8]) -> Result<XmpPackets, ParseError> {
    let mut scanner = MarkerScanner::new(bytes)?;
    let mut primary = Vec::new();
    let mut extension = Vec::new();

    while let Some(marker) = scanner.next() {
        let Some(kind) = classify_segment(bytes, marker) else {
            log::trace!("Skipping non-XMP APP1 segment at offset {}", marker);
            continue;
        };

        let length_at = marker + APP1.len();
        let length = u16::from_be_bytes([bytes[length_at], bytes[length_at + 1]]) as usize;
        let start = length_at + kind.overhead();
        let size = length.saturating_sub(kind.overhead());

        let end = start + size;
        let payload = if end > bytes.len() {
            log::warn!(
                "XMP segment at offset {} declares {} bytes but only {} remain",
                marker,
                size,
                bytes.len().saturating_sub(start)
            );
            bytes.get(start..).unwrap_or_default()
        } else {
            &bytes[start..end]
        };

        log::debug!(
            "Found {:?} XMP segment at offset {} ({} payload bytes)",
            kind,
            marker,
            payload.len()
        );

        match kind {
            SegmentKind::Primary => primary.extend_from_slice(payload),
            SegmentKind::Extension => extension.extend_from_slice(payload),
        }
        scanner.resume_at(end);
    }

    Ok(XmpPackets {
        primary: String::from_utf8_lossy(&primary).into_owned(),
        extension: String::from_utf8_lossy(&extension).into_owned(),
    })
}
