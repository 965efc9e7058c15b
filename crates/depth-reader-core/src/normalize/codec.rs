//! Conversion between embedded depth payloads and RGBA pixel buffers.

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageReader};

use crate::error::DecodeError;
use crate::payload::DataRef;

/// A decoded depth layer: row-major RGBA, 4 bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthPixels {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl DepthPixels {
    /// Wrap a pixel buffer, checking it matches the dimensions.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, DecodeError> {
        let expected = (width as usize) * (height as usize) * 4;
        if pixels.len() != expected {
            return Err(DecodeError::InvalidPixelData {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }
}

/// Turns data references into pixels and back.
///
/// Normalization is generic over this so hosts with their own image
/// pipeline (a browser canvas, a GPU texture cache) can plug it in.
pub trait DepthCodec {
    fn decode(&self, data: &DataRef) -> Result<DepthPixels, DecodeError>;

    fn encode(&self, pixels: &DepthPixels) -> Result<DataRef, DecodeError>;
}

/// Codec backed by the `image` crate.
///
/// Decodes JPEG or PNG payloads (the format is sniffed from the bytes, not
/// taken from the mime type) and always encodes PNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCodec;

impl DepthCodec for ImageCodec {
    fn decode(&self, data: &DataRef) -> Result<DepthPixels, DecodeError> {
        let bytes = data.decode_bytes()?;
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| DecodeError::Image(e.to_string()))?;
        let img = reader
            .decode()
            .map_err(|e| DecodeError::Image(e.to_string()))?;

        let rgba = img.into_rgba8();
        let (width, height) = rgba.dimensions();
        DepthPixels::new(width, height, rgba.into_raw())
    }

    fn encode(&self, pixels: &DepthPixels) -> Result<DataRef, DecodeError> {
        let mut buffer = Cursor::new(Vec::new());
        PngEncoder::new(&mut buffer)
            .write_image(
                &pixels.pixels,
                pixels.width,
                pixels.height,
                ExtendedColorType::Rgba8,
            )
            .map_err(|e| DecodeError::Encode(e.to_string()))?;

        Ok(DataRef::from_bytes("image/png", &buffer.into_inner()))
    }
}
