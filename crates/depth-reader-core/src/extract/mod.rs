//! Depth photo extraction: JPEG bytes in, [`DepthPhotoRecord`] out.
//!
//! # Pipeline
//!
//! 1. Scan the file for APP1 segments and reassemble the standard and
//!    extended XMP packets.
//! 2. Parse each non-empty packet and locate its `rdf:Description`.
//! 3. Collect the vendor namespace declarations of both packets.
//! 4. Pick the schema: XDM when the `Image` namespace lives under
//!    `xdm.org`, Lens Blur otherwise.
//! 5. Read every field, then resolve the payloads into data references.
//!
//! Only a missing start-of-image marker and malformed XML are errors.
//! Anything else that cannot be found is left at its zero/empty default.
//!
//! # Examples
//!
//! ```ignore
//! use depth_reader_core::parse_depth_photo;
//!
//! let bytes = std::fs::read("depth.jpg").unwrap();
//! let record = parse_depth_photo(&bytes)?;
//! if record.depth.data.is_none() {
//!     println!("not a depth photo");
//! }
//! ```

mod lens_blur;
mod xdm;

use crate::error::{MetadataBlock, ParseError};
use crate::jpeg::{extract_xmp_packets, XmpPackets};
use crate::payload::RawLayers;
use crate::record::DepthPhotoRecord;
use crate::xmp::{description_element, parse_block, NamespaceTable, XmpElement, XDM_DOMAIN};

/// The two description elements of a file plus the namespaces they declare.
pub(crate) struct MetadataBlocks<E> {
    pub primary: Option<E>,
    pub extension: Option<E>,
    pub namespaces: NamespaceTable,
}

impl<E: XmpElement> MetadataBlocks<E> {
    fn new(primary: Option<E>, extension: Option<E>) -> Self {
        let mut namespaces = NamespaceTable::new();
        for description in [primary, extension].into_iter().flatten() {
            namespaces.collect(description);
        }
        Self {
            primary,
            extension,
            namespaces,
        }
    }

    fn is_xdm(&self) -> bool {
        self.namespaces.lookup("Image").contains(XDM_DOMAIN)
    }
}

/// Extract the depth metadata of a JPEG file.
///
/// # Errors
///
/// - `ParseError::Format` - `bytes` does not start with `FF D8`
/// - `ParseError::MetadataParse` - an XMP packet is not well-formed XML
pub fn parse_depth_photo(bytes: &[u8]) -> Result<DepthPhotoRecord, ParseError> {
    let packets = extract_xmp_packets(bytes)?;
    parse_xmp_packets(&packets)
}

/// Extract the depth metadata from already reassembled XMP packets.
pub fn parse_xmp_packets(packets: &XmpPackets) -> Result<DepthPhotoRecord, ParseError> {
    parse_xmp_text(&packets.primary, &packets.extension)
}

pub(crate) fn parse_xmp_text(primary: &str, extension: &str) -> Result<DepthPhotoRecord, ParseError> {
    let primary_doc = parse_block(primary, MetadataBlock::Primary)?;
    let extension_doc = parse_block(extension, MetadataBlock::Extension)?;

    let blocks = MetadataBlocks::new(
        primary_doc.as_ref().and_then(description_element),
        extension_doc.as_ref().and_then(description_element),
    );
    log::debug!("Resolved {} vendor namespaces", blocks.namespaces.len());

    let mut record = DepthPhotoRecord::new();
    let mut layers = RawLayers::default();
    if blocks.is_xdm() {
        log::debug!("Extracting XDM depth metadata");
        xdm::extract(&blocks, &mut record, &mut layers);
    } else {
        log::debug!("Extracting Lens Blur depth metadata");
        lens_blur::extract(&blocks, &mut record, &mut layers);
    }
    layers.resolve_into(&mut record);

    Ok(record)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::test_support::{
        extension_segments, jpeg_from_segments, primary_segment, XDM_EXTENSION_XML,
        XDM_PRIMARY_XML,
    };
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_arbitrary_jpeg_body_never_panics(body in prop::collection::vec(any::<u8>(), 0..2048)) {
            let mut bytes = vec![0xFF, 0xD8];
            bytes.extend_from_slice(&body);
            let _ = parse_depth_photo(&bytes);
        }

        #[test]
        fn prop_truncated_sample_never_panics(cut in 0usize..4096) {
            let bytes = xdm_sample_with_chunk(512);
            let cut = cut.min(bytes.len());
            let _ = parse_depth_photo(&bytes[..cut]);
        }

        #[test]
        fn prop_extension_chunking_is_transparent(chunk in 1usize..3000) {
            let reference = parse_depth_photo(&xdm_sample_with_chunk(4096)).unwrap();
            let chunked = parse_depth_photo(&xdm_sample_with_chunk(chunk)).unwrap();
            prop_assert_eq!(chunked, reference);
        }
    }

    fn xdm_sample_with_chunk(chunk: usize) -> Vec<u8> {
        let mut segments = vec![primary_segment(XDM_PRIMARY_XML)];
        segments.extend(extension_segments(XDM_EXTENSION_XML, chunk));
        jpeg_from_segments(&segments)
    }
}
