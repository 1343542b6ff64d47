/// Used in place of any minimum confidence outside of `(0.0, 1.0]`
pub const DEFAULT_MINIMUM_CONFIDENCE: f32 = 0.7;

/// Minimum confidence of a closest language, always within `(0.0, 1.0]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct MinimumConfidence(f32);

impl Default for MinimumConfidence {
    #[inline]
    fn default() -> Self {
        Self(DEFAULT_MINIMUM_CONFIDENCE)
    }
}

impl MinimumConfidence {
    /// Invalid values (including NaN) are replaced with [`DEFAULT_MINIMUM_CONFIDENCE`]
    #[inline]
    pub fn new(value: f32) -> Self {
        if value > 0.0 && value <= 1.0 {
            Self(value)
        } else {
            Self::default()
        }
    }

    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }

    /// At least 1, so a zero confidence never passes
    #[inline]
    pub(crate) fn as_percent(self) -> u8 {
        ((self.0 * 100.0).round() as u8).max(1)
    }
}

impl From<f32> for MinimumConfidence {
    #[inline]
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}
