//! Physical/pixel unit conversion.
//!
//! All geometry is stored in inches unless an [`Area`](crate::Area) is
//! flagged as pixels. The host decides how many pixels make an inch.

use serde::{Deserialize, Serialize};

/// Pixels per inch used when the host does not supply its own.
pub const DEFAULT_PIXELS_PER_INCH: f32 = 96.0;

/// Scalar conversion between inches and pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Units {
    /// Number of pixels in one inch.
    pub pixels_per_inch: f32,
}

impl Default for Units {
    fn default() -> Self {
        Self {
            pixels_per_inch: DEFAULT_PIXELS_PER_INCH,
        }
    }
}

impl Units {
    /// Create a converter for the given resolution.
    #[must_use]
    pub const fn new(pixels_per_inch: f32) -> Self {
        Self { pixels_per_inch }
    }

    /// Convert a length in inches to pixels.
    #[must_use]
    pub fn inches_to_pixels(self, inches: f32) -> f32 {
        inches * self.pixels_per_inch
    }

    /// Convert a length in pixels to inches.
    #[must_use]
    pub fn pixels_to_inches(self, pixels: f32) -> f32 {
        pixels / self.pixels_per_inch
    }

    /// Convert a possibly-unknown length in inches to pixels.
    ///
    /// Unknown stays unknown.
    #[must_use]
    pub fn to_pixels(self, inches: Option<f32>) -> Option<f32> {
        inches.map(|v| self.inches_to_pixels(v))
    }

    /// Convert a possibly-unknown length in pixels to inches.
    #[must_use]
    pub fn to_inches(self, pixels: Option<f32>) -> Option<f32> {
        pixels.map(|v| self.pixels_to_inches(v))
    }
}
