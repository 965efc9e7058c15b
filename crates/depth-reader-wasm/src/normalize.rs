//! Normalization bindings for hosts that decode depth maps themselves.
//!
//! A browser can draw the depth image to a canvas, run the pixel data
//! through [`normalize_depth_pixels`] and put it back, skipping the
//! built-in PNG round trip.

use depth_reader_core::normalize_depth_pixels as core_normalize;
use wasm_bindgen::prelude::*;

use crate::reader::options_from_js;

/// Normalize RGBA depth pixels in place.
///
/// # Arguments
/// * `pixels` - RGBA data, e.g. `ImageData.data`
/// * `options` - `{ bias?: number, outlierThresholdPercent?: number }`
///
/// # Returns
/// `[min, max]`, the raw sample range of the input.
///
/// # Example (TypeScript)
/// ```typescript
/// const image = ctx.getImageData(0, 0, w, h);
/// normalize_depth_pixels(image.data, { bias: 0 });
/// ctx.putImageData(image, 0, 0);
/// ```
#[wasm_bindgen]
pub fn normalize_depth_pixels(pixels: &mut [u8], options: JsValue) -> Result<Vec<u8>, JsValue> {
    let options = options_from_js(options)?;
    let histogram = core_normalize(pixels, &options);
    Ok(vec![histogram.min(), histogram.max()])
}
