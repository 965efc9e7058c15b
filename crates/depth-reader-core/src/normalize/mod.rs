//! Depth map normalization for display.
//!
//! Raw depth layers often use a narrow band of the 8-bit range, plus a few
//! sentinel pixels at the extremes. Normalization trims those sparse
//! extremes and stretches the remaining window over `1..=255`.

mod codec;
mod histogram;

pub use codec::{DepthCodec, DepthPixels, ImageCodec};
pub use histogram::DepthHistogram;

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::payload::DataRef;
use crate::record::DepthPhotoRecord;

/// Minimum share of all pixels, in percent, a bucket needs to count as a
/// real depth bound.
pub const OUTLIER_THRESHOLD_PERCENT: f64 = 0.1;

/// Normalization parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NormalizeOptions {
    /// Brightness shift added to every normalized sample.
    pub bias: i32,
    pub outlier_threshold_percent: f64,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            bias: 0,
            outlier_threshold_percent: OUTLIER_THRESHOLD_PERCENT,
        }
    }
}

impl NormalizeOptions {
    pub fn with_bias(bias: i32) -> Self {
        Self {
            bias,
            ..Self::default()
        }
    }
}

/// Normalize an RGBA depth buffer in place.
///
/// Every pixel's red sample is clamped to the trimmed bounds, shifted to
/// start at zero, scaled by `255 / (max - min + 1)`, offset by the bias and
/// clamped to `1..=255`. The result is written to R, G and B; alpha is
/// left alone. Returns the histogram of the input.
pub fn normalize_depth_pixels(pixels: &mut [u8], options: &NormalizeOptions) -> DepthHistogram {
    let histogram = DepthHistogram::from_rgba(pixels);
    if histogram.is_empty() {
        return histogram;
    }

    let (min, max) = histogram.trimmed_bounds(options.outlier_threshold_percent);
    let spread = 255.0 / f64::from(i32::from(max) - i32::from(min) + 1);

    // Neighbouring pixels usually share a sample; reuse the last result.
    let mut last: Option<(u8, u8)> = None;
    for pixel in pixels.chunks_exact_mut(4) {
        let sample = pixel[0];
        let value = match last {
            Some((raw, value)) if raw == sample => value,
            _ => {
                let value = remap(sample, min, max, spread, options.bias);
                last = Some((sample, value));
                value
            }
        };
        pixel[..3].fill(value);
    }

    histogram
}

fn remap(sample: u8, min: u8, max: u8, spread: f64, bias: i32) -> u8 {
    let offset = sample.min(max).saturating_sub(min);
    let value = (f64::from(offset) * spread + f64::from(bias)).round();
    value.clamp(1.0, 255.0) as u8
}

impl DepthPhotoRecord {
    /// Replace the depth layer with its normalized rendition.
    ///
    /// Only XDM records with depth data are normalized, and only once.
    /// Any other call returns the current depth data untouched, without
    /// touching `codec`. On error the record is unchanged.
    pub fn normalize_depth_map<C>(
        &mut self,
        codec: &C,
        options: &NormalizeOptions,
    ) -> Result<Option<&DataRef>, DecodeError>
    where
        C: DepthCodec + ?Sized,
    {
        if !self.is_xdm() || self.depth.normalized {
            return Ok(self.depth.data.as_ref());
        }
        let Some(data) = self.depth.data.as_ref() else {
            return Ok(None);
        };

        let mut decoded = codec.decode(data)?;
        let histogram = normalize_depth_pixels(&mut decoded.pixels, options);
        log::debug!(
            "Normalized {}x{} depth map, raw range {}..={}",
            decoded.width,
            decoded.height,
            histogram.min(),
            histogram.max()
        );
        let encoded = codec.encode(&decoded)?;

        self.depth.data = Some(encoded);
        self.depth.normalized = true;
        Ok(self.depth.data.as_ref())
    }
}
