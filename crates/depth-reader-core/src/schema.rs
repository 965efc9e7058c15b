//! Static display schema for [`DepthPhotoRecord`].
//!
//! Presentation layers list record fields by walking [`record_schema`]
//! rather than the record's runtime shape, so the set and order of
//! displayed fields is fixed here.

use serde::Serialize;

use crate::payload::DataRef;
use crate::record::{DepthPhotoRecord, FormatVariant};

/// How a field's value should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    Text,
    Number,
    Flag,
    /// An embeddable `<mime>;base64,<data>` reference, or nothing.
    Data,
}

/// One displayable record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSchema {
    /// Dotted path matching the record's serialized form.
    pub path: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// The variant this field belongs to; `None` for shared fields.
    pub variant: Option<FormatVariant>,
}

impl FieldSchema {
    const fn shared(path: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            path,
            label,
            kind,
            variant: None,
        }
    }

    const fn only(
        variant: FormatVariant,
        path: &'static str,
        label: &'static str,
        kind: FieldKind,
    ) -> Self {
        Self {
            path,
            label,
            kind,
            variant: Some(variant),
        }
    }

    /// Whether the field exists on records of `variant`.
    pub fn applies_to(&self, variant: FormatVariant) -> bool {
        self.variant.map_or(true, |v| v == variant)
    }
}

use FieldKind::{Data, Flag, Number, Text};
use FormatVariant::{LensBlur, Xdm};

static RECORD_SCHEMA: [FieldSchema; 37] = [
    FieldSchema::shared("formatVariant", "Format", Text),
    FieldSchema::shared("revision", "Revision", Number),
    FieldSchema::shared("device.vendor.manufacturer", "Device manufacturer", Text),
    FieldSchema::shared("device.vendor.model", "Device model", Text),
    FieldSchema::shared("device.pose.latitude", "Latitude", Number),
    FieldSchema::shared("device.pose.longitude", "Longitude", Number),
    FieldSchema::shared("device.pose.altitude", "Altitude", Number),
    FieldSchema::shared("camera.vendor.manufacturer", "Camera manufacturer", Text),
    FieldSchema::shared("camera.vendor.model", "Camera model", Text),
    FieldSchema::shared("camera.pose.positionX", "Position X", Number),
    FieldSchema::shared("camera.pose.positionY", "Position Y", Number),
    FieldSchema::shared("camera.pose.positionZ", "Position Z", Number),
    FieldSchema::shared("camera.pose.rotationAxisX", "Rotation axis X", Number),
    FieldSchema::shared("camera.pose.rotationAxisY", "Rotation axis Y", Number),
    FieldSchema::shared("camera.pose.rotationAxisZ", "Rotation axis Z", Number),
    FieldSchema::shared("camera.pose.rotationAngle", "Rotation angle", Number),
    FieldSchema::only(Xdm, "perspective.focalLengthX", "Focal length X", Number),
    FieldSchema::only(Xdm, "perspective.focalLengthY", "Focal length Y", Number),
    FieldSchema::only(Xdm, "perspective.principalPointX", "Principal point X", Number),
    FieldSchema::only(Xdm, "perspective.principalPointY", "Principal point Y", Number),
    FieldSchema::only(LensBlur, "focus.focalPointX", "Focal point X", Number),
    FieldSchema::only(LensBlur, "focus.focalPointY", "Focal point Y", Number),
    FieldSchema::only(LensBlur, "focus.focalDistance", "Focal distance", Number),
    FieldSchema::only(LensBlur, "focus.blurAtInfinity", "Blur at infinity", Number),
    FieldSchema::shared("image.mime", "Image type", Text),
    FieldSchema::shared("image.data", "Image", Data),
    FieldSchema::shared("depth.metric", "Metric depth", Flag),
    FieldSchema::shared("depth.format", "Depth format", Text),
    FieldSchema::shared("depth.near", "Near", Number),
    FieldSchema::shared("depth.far", "Far", Number),
    FieldSchema::shared("depth.mime", "Depth type", Text),
    FieldSchema::shared("depth.data", "Depth map", Data),
    FieldSchema::only(Xdm, "depth.raw.mime", "Raw depth type", Text),
    FieldSchema::only(Xdm, "depth.raw.data", "Raw depth map", Data),
    FieldSchema::shared("depth.normalized", "Normalized", Flag),
    FieldSchema::only(Xdm, "confidence.mime", "Confidence type", Text),
    FieldSchema::only(Xdm, "confidence.data", "Confidence map", Data),
];

/// Every displayable field, in display order.
pub fn record_schema() -> &'static [FieldSchema] {
    &RECORD_SCHEMA
}

/// A field value as shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Flag(bool),
    Data(Option<DataRef>),
}

impl DepthPhotoRecord {
    /// `(path, value)` pairs for every schema field that applies to this
    /// record's variant, in schema order.
    pub fn field_values(&self) -> Vec<(&'static str, FieldValue)> {
        let variant = self.format_variant();
        record_schema()
            .iter()
            .filter(|field| field.applies_to(variant))
            .filter_map(|field| self.field_value(field.path).map(|value| (field.path, value)))
            .collect()
    }

    /// Value of the field at `path`, or `None` for an unknown path or a
    /// field of the other variant.
    pub fn field_value(&self, path: &str) -> Option<FieldValue> {
        use FieldValue as V;

        let text = |s: &str| Some(V::Text(s.to_string()));
        let number = |n: f64| Some(V::Number(n));
        let data = |d: &Option<DataRef>| Some(V::Data(d.clone()));

        let device = &self.device;
        let camera = &self.camera;
        let depth = &self.depth;

        match path {
            "formatVariant" => text(self.format_variant().as_str()),
            "revision" => number(f64::from(self.revision)),
            "device.vendor.manufacturer" => text(&device.vendor.manufacturer),
            "device.vendor.model" => text(&device.vendor.model),
            "device.pose.latitude" => number(device.pose.latitude),
            "device.pose.longitude" => number(device.pose.longitude),
            "device.pose.altitude" => number(device.pose.altitude),
            "camera.vendor.manufacturer" => text(&camera.vendor.manufacturer),
            "camera.vendor.model" => text(&camera.vendor.model),
            "camera.pose.positionX" => number(camera.pose.position_x),
            "camera.pose.positionY" => number(camera.pose.position_y),
            "camera.pose.positionZ" => number(camera.pose.position_z),
            "camera.pose.rotationAxisX" => number(camera.pose.rotation_axis_x),
            "camera.pose.rotationAxisY" => number(camera.pose.rotation_axis_y),
            "camera.pose.rotationAxisZ" => number(camera.pose.rotation_axis_z),
            "camera.pose.rotationAngle" => number(camera.pose.rotation_angle),
            "perspective.focalLengthX" => number(self.perspective()?.focal_length_x),
            "perspective.focalLengthY" => number(self.perspective()?.focal_length_y),
            "perspective.principalPointX" => number(self.perspective()?.principal_point_x),
            "perspective.principalPointY" => number(self.perspective()?.principal_point_y),
            "focus.focalPointX" => number(self.focus()?.focal_point_x),
            "focus.focalPointY" => number(self.focus()?.focal_point_y),
            "focus.focalDistance" => number(self.focus()?.focal_distance),
            "focus.blurAtInfinity" => number(self.focus()?.blur_at_infinity),
            "image.mime" => text(&self.image.mime),
            "image.data" => data(&self.image.data),
            "depth.metric" => Some(V::Flag(depth.metric)),
            "depth.format" => text(depth.format.as_str()),
            "depth.near" => number(depth.near),
            "depth.far" => number(depth.far),
            "depth.mime" => text(&depth.mime),
            "depth.data" => data(&depth.data),
            "depth.raw.mime" => text(&depth.raw.mime),
            "depth.raw.data" => data(&depth.raw.data),
            "depth.normalized" => Some(V::Flag(depth.is_normalized())),
            "confidence.mime" => text(&self.confidence.mime),
            "confidence.data" => data(&self.confidence.data),
            _ => None,
        }
    }
}
