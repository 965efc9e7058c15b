//! Linear scan for APP1 markers in a JPEG byte stream.

use crate::error::ParseError;

/// JPEG start-of-image marker.
pub const SOI: [u8; 2] = [0xFF, 0xD8];

/// APP1 marker, used for EXIF and XMP segments.
pub const APP1: [u8; 2] = [0xFF, 0xE1];

/// Check if a byte slice starts with the JPEG start-of-image marker.
#[inline]
pub fn is_jpeg(bytes: &[u8]) -> bool {
    bytes.len() >= 2 && bytes[..2] == SOI
}

/// Iterator over the offsets of every APP1 marker in a JPEG file.
///
/// The scan is a single forward pass. A consumer that has read a segment's
/// payload can move the cursor past it with [`MarkerScanner::resume_at`] so
/// the payload bytes are not rescanned; the cursor never moves backwards.
#[derive(Debug)]
pub struct MarkerScanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> MarkerScanner<'a> {
    /// Start scanning `bytes`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Format` if `bytes` does not begin with the
    /// start-of-image marker; nothing is scanned in that case.
    pub fn new(bytes: &'a [u8]) -> Result<Self, ParseError> {
        if !is_jpeg(bytes) {
            return Err(ParseError::Format);
        }
        Ok(Self { bytes, pos: SOI.len() })
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Continue scanning from `offset`, if it lies ahead of the cursor.
    pub fn resume_at(&mut self, offset: usize) {
        self.pos = self.pos.max(offset);
    }
}

impl Iterator for MarkerScanner<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let end = self.bytes.len().saturating_sub(1);
        while self.pos < end {
            let i = self.pos;
            if self.bytes[i] == APP1[0] && self.bytes[i + 1] == APP1[1] {
                self.pos = i + APP1.len();
                return Some(i);
            }
            self.pos += 1;
        }
        self.pos = self.bytes.len();
        None
    }
}
