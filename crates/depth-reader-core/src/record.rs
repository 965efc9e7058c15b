//! The depth photo record produced by extraction.
//!
//! Every numeric field defaults to zero and every string to empty: extraction
//! is best effort, and a field that cannot be resolved simply keeps its
//! default. The one signal consumers must check is [`Depth::data`]: it is
//! `None` when the file carries no usable depth metadata.

use serde::{Deserialize, Serialize};

use crate::payload::DataRef;

/// Which metadata schema a file was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FormatVariant {
    /// Extensible Device Metadata 1.0.
    Xdm,
    /// The older Lens Blur schema.
    #[default]
    LensBlur,
}

impl FormatVariant {
    /// Name as used in the serialized record.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatVariant::Xdm => "Xdm",
            FormatVariant::LensBlur => "LensBlur",
        }
    }
}

/// Camera intrinsics of the XDM perspective imaging model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Perspective {
    pub focal_length_x: f64,
    pub focal_length_y: f64,
    pub principal_point_x: f64,
    pub principal_point_y: f64,
}

/// Lens Blur focus settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Focus {
    pub focal_point_x: f64,
    pub focal_point_y: f64,
    pub focal_distance: f64,
    pub blur_at_infinity: f64,
}

/// Variant-specific data. Only the group matching the schema exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "formatVariant")]
pub enum VariantData {
    Xdm { perspective: Perspective },
    LensBlur { focus: Focus },
}

impl Default for VariantData {
    fn default() -> Self {
        VariantData::LensBlur {
            focus: Focus::default(),
        }
    }
}

impl VariantData {
    pub fn format_variant(&self) -> FormatVariant {
        match self {
            VariantData::Xdm { .. } => FormatVariant::Xdm,
            VariantData::LensBlur { .. } => FormatVariant::LensBlur,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub manufacturer: String,
    pub model: String,
}

/// Geographic pose of the capturing device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevicePose {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

/// Position and axis-angle rotation of a camera relative to the device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraPose {
    pub position_x: f64,
    pub position_y: f64,
    pub position_z: f64,
    pub rotation_axis_x: f64,
    pub rotation_axis_y: f64,
    pub rotation_axis_z: f64,
    pub rotation_angle: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub vendor: Vendor,
    pub pose: DevicePose,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub vendor: Vendor,
    pub pose: CameraPose,
}

/// An embedded bitmap: its mime type and, once resolved, its data reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    pub mime: String,
    pub data: Option<DataRef>,
}

/// How depth samples map to distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DepthFormat {
    RangeInverse,
    RangeLinear,
    #[default]
    Unknown,
}

impl DepthFormat {
    /// Parse a format name, case-insensitively. Anything else is `Unknown`.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("RangeInverse") {
            DepthFormat::RangeInverse
        } else if value.eq_ignore_ascii_case("RangeLinear") {
            DepthFormat::RangeLinear
        } else {
            DepthFormat::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DepthFormat::RangeInverse => "RangeInverse",
            DepthFormat::RangeLinear => "RangeLinear",
            DepthFormat::Unknown => "Unknown",
        }
    }
}

/// The depth map layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Depth {
    /// Depth unit is meters when true.
    pub metric: bool,
    pub format: DepthFormat,
    pub near: f64,
    pub far: f64,
    pub mime: String,
    pub data: Option<DataRef>,
    /// Unenhanced depth layer (XDM only).
    pub raw: Layer,
    pub(crate) normalized: bool,
}

impl Depth {
    /// Whether `data` has been replaced by its normalized rendition.
    pub fn is_normalized(&self) -> bool {
        self.normalized
    }
}

/// Everything extracted from one depth photo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DepthPhotoRecord {
    #[serde(flatten)]
    pub variant: VariantData,
    pub revision: u32,
    pub device: Device,
    pub camera: Camera,
    pub image: Layer,
    pub depth: Depth,
    pub confidence: Layer,
}

impl DepthPhotoRecord {
    /// Create a record with every field at its zero/empty default.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format_variant(&self) -> FormatVariant {
        self.variant.format_variant()
    }

    pub fn is_xdm(&self) -> bool {
        self.format_variant() == FormatVariant::Xdm
    }

    /// Perspective model, present for XDM files only.
    pub fn perspective(&self) -> Option<&Perspective> {
        match &self.variant {
            VariantData::Xdm { perspective } => Some(perspective),
            VariantData::LensBlur { .. } => None,
        }
    }

    /// Focus settings, present for Lens Blur files only.
    pub fn focus(&self) -> Option<&Focus> {
        match &self.variant {
            VariantData::LensBlur { focus } => Some(focus),
            VariantData::Xdm { .. } => None,
        }
    }

    /// True when the file carried a usable depth map.
    pub fn has_depth(&self) -> bool {
        self.depth.data.is_some()
    }
}
