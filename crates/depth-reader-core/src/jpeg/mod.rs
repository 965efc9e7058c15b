//! JPEG container handling: APP1 marker scanning and XMP segment reassembly.
//!
//! Only the APP1 segments carrying XMP are of interest. The standard packet
//! fits in a single segment; the extended packet holding the embedded
//! bitmaps is split across as many segments as needed.

mod markers;
mod segments;

pub use markers::{is_jpeg, MarkerScanner, APP1, SOI};
pub use segments::{
    classify_segment, extract_xmp_packets, SegmentKind, XmpPackets, XMP_EXTENSION_HEADER,
    XMP_PRIMARY_HEADER,
};
