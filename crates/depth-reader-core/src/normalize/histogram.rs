//! Depth sample histogram with outlier trimming.

/// Occupancy histogram of the red channel of an RGBA depth buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthHistogram {
    buckets: [u32; 256],
    total: u32,
    min: u8,
    max: u8,
}

impl Default for DepthHistogram {
    fn default() -> Self {
        Self {
            buckets: [0; 256],
            total: 0,
            min: u8::MAX,
            max: 0,
        }
    }
}

impl DepthHistogram {
    /// Bin the red sample of every complete 4-byte pixel.
    ///
    /// Depth maps are grayscale, so R/G/B carry the same value and only
    /// R is looked at. Trailing bytes that do not form a pixel are ignored.
    pub fn from_rgba(pixels: &[u8]) -> Self {
        let mut hist = Self::default();
        for chunk in pixels.chunks_exact(4) {
            let sample = chunk[0];
            hist.buckets[sample as usize] += 1;
            hist.total += 1;
            hist.min = hist.min.min(sample);
            hist.max = hist.max.max(sample);
        }
        hist
    }

    /// Number of pixels with raw sample `value`.
    pub fn count(&self, value: u8) -> u32 {
        self.buckets[value as usize]
    }

    pub fn buckets(&self) -> &[u32; 256] {
        &self.buckets
    }

    /// Number of binned pixels.
    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Smallest raw sample. `255` for an empty histogram.
    pub fn min(&self) -> u8 {
        self.min
    }

    /// Largest raw sample. `0` for an empty histogram.
    pub fn max(&self) -> u8 {
        self.max
    }

    /// Raw bounds with thinly populated extremes discarded.
    ///
    /// Walks inward from each end while a bucket holds less than
    /// `threshold_percent` of all pixels. The trimmed window is only used
    /// when it still spans at least two values; otherwise the raw bounds
    /// are returned.
    pub fn trimmed_bounds(&self, threshold_percent: f64) -> (u8, u8) {
        let (min, max) = (self.min, self.max);
        let total = f64::from(self.total);
        let sparse = |value: u8| f64::from(self.count(value)) / total * 100.0 < threshold_percent;

        let mut lower = min;
        while lower < max && sparse(lower) {
            lower += 1;
        }
        let mut upper = max;
        while upper > min && sparse(upper) {
            upper -= 1;
        }

        if upper > lower {
            (lower, upper)
        } else {
            (min, max)
        }
    }
}
