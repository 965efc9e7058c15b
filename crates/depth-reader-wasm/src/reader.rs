//! Depth photo reader bindings.
//!
//! Wraps an extracted [`DepthPhotoRecord`] so JavaScript can query it,
//! fetch it as a plain object tree and normalize its depth map in place.
//!
//! # Example
//!
//! ```typescript
//! import { parse_depth_photo } from '@depth-reader/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const reader = parse_depth_photo(bytes);
//! if (!reader.has_depth) {
//!   console.log('not a depth photo');
//! }
//! img.src = reader.normalize_depth_map({ bias: 16 });
//! ```

use depth_reader_core::{
    extract_xmp_packets as core_extract_xmp_packets, DataRef, DepthPhotoRecord, ImageCodec,
    NormalizeOptions,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

pub(crate) fn js_error(message: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&message.to_string())
}

/// Read `NormalizeOptions` from a JS object; `undefined`/`null` mean defaults.
pub(crate) fn options_from_js(options: JsValue) -> Result<NormalizeOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(NormalizeOptions::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| js_error(format!("Invalid normalize options: {}", e)))
}

/// Convert to a JS value, with maps as plain objects.
///
/// The record flattens its variant payload, which serde presents as a map.
pub(crate) fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value.serialize(&serializer).map_err(js_error)
}

fn data_uri(data: &Option<DataRef>) -> Option<String> {
    data.as_ref().map(DataRef::to_data_uri)
}

/// An extracted depth photo.
#[wasm_bindgen]
pub struct JsDepthReader {
    record: DepthPhotoRecord,
}

impl JsDepthReader {
    pub(crate) fn from_record(record: DepthPhotoRecord) -> Self {
        Self { record }
    }

    pub(crate) fn inner(&self) -> &DepthPhotoRecord {
        &self.record
    }
}

#[wasm_bindgen]
impl JsDepthReader {
    /// `"Xdm"` or `"LensBlur"`.
    #[wasm_bindgen(getter)]
    pub fn format_variant(&self) -> String {
        self.record.format_variant().as_str().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn is_xdm(&self) -> bool {
        self.record.is_xdm()
    }

    /// False when the file carried no usable depth map.
    #[wasm_bindgen(getter)]
    pub fn has_depth(&self) -> bool {
        self.record.has_depth()
    }

    #[wasm_bindgen(getter)]
    pub fn is_normalized(&self) -> bool {
        self.record.depth.is_normalized()
    }

    /// Primary image as a `data:` URI.
    #[wasm_bindgen(getter)]
    pub fn image_uri(&self) -> Option<String> {
        data_uri(&self.record.image.data)
    }

    /// Depth map as a `data:` URI.
    #[wasm_bindgen(getter)]
    pub fn depth_uri(&self) -> Option<String> {
        data_uri(&self.record.depth.data)
    }

    /// Unenhanced depth map as a `data:` URI (XDM only).
    #[wasm_bindgen(getter)]
    pub fn raw_depth_uri(&self) -> Option<String> {
        data_uri(&self.record.depth.raw.data)
    }

    /// Confidence map as a `data:` URI (XDM only).
    #[wasm_bindgen(getter)]
    pub fn confidence_uri(&self) -> Option<String> {
        data_uri(&self.record.confidence.data)
    }

    /// The whole record as a plain object.
    pub fn record(&self) -> Result<JsValue, JsValue> {
        to_js(&self.record)
    }

    /// `[path, value]` pairs in display schema order.
    pub fn field_values(&self) -> Result<JsValue, JsValue> {
        to_js(&self.record.field_values())
    }

    /// Normalize the depth map and return it as a `data:` URI.
    ///
    /// Only XDM depth maps are normalized, and only on the first call;
    /// otherwise the current depth URI is returned unchanged.
    ///
    /// # Arguments
    /// * `options` - `{ bias?: number, outlierThresholdPercent?: number }`
    ///
    /// # Errors
    /// Returns error if the options are malformed or the depth map cannot
    /// be decoded or re-encoded.
    pub fn normalize_depth_map(&mut self, options: JsValue) -> Result<Option<String>, JsValue> {
        let options = options_from_js(options)?;
        let data = self
            .record
            .normalize_depth_map(&ImageCodec, &options)
            .map_err(js_error)?;
        Ok(data.map(DataRef::to_data_uri))
    }
}

/// Extract the depth metadata of a JPEG file.
///
/// # Errors
/// Returns error if the bytes are not a JPEG or the XMP metadata is not
/// well-formed XML.
#[wasm_bindgen]
pub fn parse_depth_photo(bytes: &[u8]) -> Result<JsDepthReader, JsValue> {
    DepthPhotoRecord::parse(bytes)
        .map(JsDepthReader::from_record)
        .map_err(js_error)
}

/// The reassembled standard and extended XMP packets of a JPEG file.
#[wasm_bindgen]
pub struct JsXmpPackets {
    primary: String,
    extension: String,
}

#[wasm_bindgen]
impl JsXmpPackets {
    #[wasm_bindgen(getter)]
    pub fn primary(&self) -> String {
        self.primary.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn extension(&self) -> String {
        self.extension.clone()
    }
}

/// Reassemble the XMP packets of a JPEG file, for inspection.
#[wasm_bindgen]
pub fn extract_xmp_packets(bytes: &[u8]) -> Result<JsXmpPackets, JsValue> {
    let packets = core_extract_xmp_packets(bytes).map_err(js_error)?;
    Ok(JsXmpPackets {
        primary: packets.primary,
        extension: packets.extension,
    })
}
