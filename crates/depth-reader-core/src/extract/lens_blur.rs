//! Field extraction for Lens Blur files.
//!
//! Lens Blur keeps every scalar on the standard packet's description and
//! only the two base64 payloads on the extended one. There is no raw depth
//! layer and no confidence map.

use super::MetadataBlocks;
use crate::payload::{RawLayers, RawPayload};
use crate::record::{DepthFormat, DepthPhotoRecord, Focus, VariantData};
use crate::xmp::{read_f64, read_str, XmpElement};

pub(super) fn extract<E: XmpElement>(
    blocks: &MetadataBlocks<E>,
    record: &mut DepthPhotoRecord,
    layers: &mut RawLayers,
) {
    let depth_ns = blocks.namespaces.lookup("DepthMap");
    let focus_ns = blocks.namespaces.lookup("Focus");
    let image_ns = blocks.namespaces.lookup("Image");
    let xap = blocks.primary;
    let ext = blocks.extension;

    record.variant = VariantData::LensBlur {
        focus: Focus {
            focal_point_x: read_f64(xap, focus_ns, "FocalPointX"),
            focal_point_y: read_f64(xap, focus_ns, "FocalPointY"),
            focal_distance: read_f64(xap, focus_ns, "FocalDistance"),
            blur_at_infinity: read_f64(xap, focus_ns, "BlurAtInfinity"),
        },
    };

    record.depth.format = DepthFormat::parse(&read_str(xap, depth_ns, "Format"));
    record.depth.near = read_f64(xap, depth_ns, "Near");
    record.depth.far = read_f64(xap, depth_ns, "Far");

    layers.image = RawPayload::new(
        read_str(xap, image_ns, "Mime"),
        read_str(ext, image_ns, "Data"),
    );
    layers.depth = RawPayload::new(
        read_str(xap, depth_ns, "Mime"),
        read_str(ext, depth_ns, "Data"),
    );
}
