//! Image source descriptors shared by the layout core and its hosts.
//!
//! The layout core never touches image bytes. It only needs the intrinsic
//! pixel size to scale an image, and a key the drawing surface can use to
//! fetch the bytes later.

use serde::{Deserialize, Serialize};

/// A source image: its lookup key and intrinsic dimensions in pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSource {
    /// URL or path the drawing surface resolves to image bytes.
    url: String,
    /// Intrinsic width of the image in pixels.
    width: u32,
    /// Intrinsic height of the image in pixels.
    height: u32,
}

impl ImageSource {
    /// Create a new `ImageSource`.
    ///
    /// # Arguments
    ///
    /// * `url` - Lookup key for the image bytes
    /// * `width` - Intrinsic width of the image in pixels
    /// * `height` - Intrinsic height of the image in pixels
    #[must_use]
    pub fn new(url: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            url: url.into(),
            width,
            height,
        }
    }

    /// Lookup key for the image bytes.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Intrinsic width of the image in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Intrinsic height of the image in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Intrinsic dimensions as `(width, height)` in `f32`, for layout.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn dimensions_f32(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }

    /// Whether the image is taller than it is wide.
    #[must_use]
    pub const fn is_portrait(&self) -> bool {
        self.height > self.width
    }
}
