//! Depth Reader Core - depth photo metadata library
//!
//! Reads the depth metadata embedded in JPEG photos by XDM 1.0 and Lens
//! Blur producers: device and camera description, depth map geometry and
//! the embedded image, depth and confidence bitmaps. Also normalizes XDM
//! depth maps into a displayable grayscale range.
//!
//! ```ignore
//! use depth_reader_core::{parse_depth_photo, ImageCodec, NormalizeOptions};
//!
//! let mut record = parse_depth_photo(&bytes)?;
//! if record.has_depth() {
//!     record.normalize_depth_map(&ImageCodec, &NormalizeOptions::default())?;
//! }
//! ```

pub mod error;
pub mod extract;
pub mod jpeg;
pub mod normalize;
pub mod payload;
pub mod record;
pub mod schema;
pub mod xmp;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{DecodeError, MetadataBlock, ParseError};
pub use extract::{parse_depth_photo, parse_xmp_packets};
pub use jpeg::{extract_xmp_packets, XmpPackets};
pub use normalize::{
    normalize_depth_pixels, DepthCodec, DepthHistogram, DepthPixels, ImageCodec,
    NormalizeOptions,
};
pub use payload::DataRef;
pub use record::{
    Camera, CameraPose, Depth, DepthFormat, DepthPhotoRecord, Device, DevicePose, Focus,
    FormatVariant, Layer, Perspective, VariantData, Vendor,
};
pub use schema::{record_schema, FieldKind, FieldSchema, FieldValue};

impl DepthPhotoRecord {
    /// Extract a record from JPEG file bytes. See [`parse_depth_photo`].
    pub fn parse(bytes: &[u8]) -> Result<Self, ParseError> {
        parse_depth_photo(bytes)
    }
}
