//! Field extraction for XDM 1.0 files.
//!
//! The standard packet holds the device revision; everything else lives in
//! the extended packet under `Device:Cameras`. Camera elements are found by
//! descendant search, so the `rdf:Seq`/`rdf:li` wrapping is transparent.
//! The first `Camera:DepthMap` is the enhanced depth layer, the second the
//! raw one; the confidence map is `NoiseModel:Reliability` under the first.

use super::MetadataBlocks;
use crate::payload::{RawLayers, RawPayload};
use crate::record::{
    CameraPose, DepthFormat, DepthPhotoRecord, DevicePose, Perspective, VariantData, Vendor,
};
use crate::xmp::{
    attr_value, child_value, element_value, find_child, last_description, parse_number,
    read_bool, read_f64, read_str, XmpElement,
};

/// Namespace roles an XDM file declares.
struct XdmNamespaces<'a> {
    vendor: &'a str,
    device_pose: &'a str,
    camera_pose: &'a str,
    device: &'a str,
    camera: &'a str,
    image: &'a str,
    depth: &'a str,
    noise: &'a str,
    perspective: &'a str,
}

impl<'a> XdmNamespaces<'a> {
    fn resolve<E: XmpElement>(blocks: &'a MetadataBlocks<E>) -> Self {
        let ns = &blocks.namespaces;
        Self {
            vendor: ns.lookup("VendorInfo"),
            device_pose: ns.lookup("DevicePose"),
            camera_pose: ns.lookup("CameraPose"),
            device: ns.lookup("Device"),
            camera: ns.lookup("Camera"),
            image: ns.lookup("Image"),
            depth: ns.lookup("DepthMap"),
            noise: ns.lookup("NoiseModel"),
            perspective: ns.lookup("PerspectiveModel"),
        }
    }
}

pub(super) fn extract<E: XmpElement>(
    blocks: &MetadataBlocks<E>,
    record: &mut DepthPhotoRecord,
    layers: &mut RawLayers,
) {
    let ns = XdmNamespaces::resolve(blocks);
    let xap = blocks.primary;
    let ext = blocks.extension;

    let revision_elt = find_child(xap, ns.device, "Revision", 0);
    let device_vendor_elt = find_child(ext, ns.device, "VendorInfo", 0)
        .or_else(|| find_child(xap, ns.device, "VendorInfo", 0));
    let camera_vendor_elt = find_child(ext, ns.camera, "VendorInfo", 0);
    let device_pose_elt =
        find_child(ext, ns.device, "Pose", 0).or_else(|| find_child(xap, ns.device, "Pose", 0));
    let camera_pose_elt = find_child(ext, ns.camera, "Pose", 0);
    let imaging_elt = find_child(ext, ns.camera, "ImagingModel", 0).map(last_description);
    let image_elt = find_child(ext, ns.camera, "Image", 0);
    let depth_elt = find_child(ext, ns.camera, "DepthMap", 0).map(last_description);
    let raw_depth_elt = find_child(ext, ns.camera, "DepthMap", 1);
    let confidence_elt = find_child(depth_elt, ns.noise, "Reliability", 0);

    record.revision = read_revision(ext, revision_elt, ns.device);

    record.device.vendor = read_vendor(device_vendor_elt, ns.vendor);
    record.camera.vendor = read_vendor(camera_vendor_elt, ns.vendor);

    record.device.pose = DevicePose {
        latitude: read_f64(device_pose_elt, ns.device_pose, "Latitude"),
        longitude: read_f64(device_pose_elt, ns.device_pose, "Longitude"),
        altitude: read_f64(device_pose_elt, ns.device_pose, "Altitude"),
    };

    record.camera.pose = CameraPose {
        position_x: read_f64(camera_pose_elt, ns.camera_pose, "PositionX"),
        position_y: read_f64(camera_pose_elt, ns.camera_pose, "PositionY"),
        position_z: read_f64(camera_pose_elt, ns.camera_pose, "PositionZ"),
        rotation_axis_x: read_f64(camera_pose_elt, ns.camera_pose, "RotationAxisX"),
        rotation_axis_y: read_f64(camera_pose_elt, ns.camera_pose, "RotationAxisY"),
        rotation_axis_z: read_f64(camera_pose_elt, ns.camera_pose, "RotationAxisZ"),
        rotation_angle: read_f64(camera_pose_elt, ns.camera_pose, "RotationAngle"),
    };

    record.variant = VariantData::Xdm {
        perspective: Perspective {
            focal_length_x: read_f64(imaging_elt, ns.perspective, "FocalLengthX"),
            focal_length_y: read_f64(imaging_elt, ns.perspective, "FocalLengthY"),
            principal_point_x: read_f64(imaging_elt, ns.perspective, "PrincipalPointX"),
            principal_point_y: read_f64(imaging_elt, ns.perspective, "PrincipalPointY"),
        },
    };

    record.depth.metric = read_bool(depth_elt, ns.depth, "Metric");
    record.depth.format = DepthFormat::parse(&read_str(depth_elt, ns.depth, "Format"));
    record.depth.near = read_f64(depth_elt, ns.depth, "Near");
    record.depth.far = read_f64(depth_elt, ns.depth, "Far");

    layers.image = read_payload(image_elt, ns.image);
    layers.depth = read_payload(depth_elt, ns.depth);
    layers.raw_depth = read_payload(raw_depth_elt, ns.depth);
    // Reliability reuses the Image schema
    layers.confidence = read_payload(confidence_elt, ns.image);
}

/// Revision, from the first non-zero of: the `Device:Revision` attribute on
/// the extension description, a `Device:Revision` child of the standard
/// packet's revision element, the revision element's own text.
fn read_revision<E: XmpElement>(ext: Option<E>, revision_elt: Option<E>, device_ns: &str) -> u32 {
    [
        attr_value(ext, device_ns, "Revision"),
        child_value(revision_elt, device_ns, "Revision"),
        element_value(revision_elt),
    ]
    .iter()
    .map(|value| parse_number(value))
    .find(|n| *n != 0.0)
    .map(|n| n.max(0.0) as u32)
    .unwrap_or(0)
}

fn read_vendor<E: XmpElement>(element: Option<E>, vendor_ns: &str) -> Vendor {
    Vendor {
        manufacturer: read_str(element, vendor_ns, "Manufacturer"),
        model: read_str(element, vendor_ns, "Model"),
    }
}

fn read_payload<E: XmpElement>(element: Option<E>, ns: &str) -> RawPayload {
    RawPayload::new(read_str(element, ns, "Mime"), read_str(element, ns, "Data"))
}
