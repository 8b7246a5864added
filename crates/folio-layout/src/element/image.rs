//! Image scaling.
//!
//! An image with a [`Scale::Fit`](super::Scale::Fit) or
//! [`Scale::Fill`](super::Scale::Fill) policy replaces the generic scale
//! stage: its size comes from the source's intrinsic pixel size and the
//! container, not from left/right offsets.

use folio_common::image::ImageSource;

use super::{Element, ElementKind};
use crate::area::Area;
use crate::units::Units;

/// The source's intrinsic size in inches.
#[must_use]
pub fn natural_size(source: &ImageSource, units: Units) -> (f32, f32) {
    let (w, h) = source.dimensions_f32();
    (units.pixels_to_inches(w), units.pixels_to_inches(h))
}

/// The container size, when both it and the image have a size to scale by.
fn scalable_bounds(container: &Area, w: f32, h: f32) -> Option<(f32, f32)> {
    if w <= 0.0 || h <= 0.0 {
        return None;
    }
    Some((container.width?, container.height?))
}

impl Element {
    /// Whether this is an image taller than it is wide.
    #[must_use]
    pub fn is_portrait(&self) -> bool {
        match &self.kind {
            ElementKind::Image(source) => source.is_portrait(),
            _ => false,
        }
    }

    /// Calculate dimensions that fit within the container.
    ///
    /// An image smaller than the container keeps its natural size; a larger
    /// one shrinks along the axis that needs it most and is pinned to that
    /// axis' near edge.
    pub fn fit(&mut self, container: &Area, (w, h): (f32, f32)) {
        let Some((cw, ch)) = scalable_bounds(container, w, h) else {
            self.area.width = Some(w);
            self.area.height = Some(h);
            return;
        };

        if w < cw && h < ch {
            // fits at full size
            self.area.width = Some(w);
            self.area.height = Some(h);
            return;
        }

        let width_ratio = cw / w;
        let height_ratio = ch / h;

        if width_ratio < height_ratio {
            // width needs to shrink more
            self.area.width = Some(cw);
            self.area.height = Some(h * width_ratio);
            self.area.left = Some(0.0);
        } else {
            self.area.height = Some(ch);
            self.area.width = Some(w * height_ratio);
            self.area.top = Some(0.0);
        }
    }

    /// Calculate dimensions and offsets that cover the container.
    ///
    /// The image grows by the larger of the two axis ratios when it is
    /// smaller than the container along either axis, then is centered.
    pub fn fill(&mut self, container: &Area, (w, h): (f32, f32)) {
        let Some((cw, ch)) = scalable_bounds(container, w, h) else {
            self.area.width = Some(w);
            self.area.height = Some(h);
            return;
        };

        let mut ratio = 1.0;
        if w < cw || h < ch {
            // grow by the ratio needing to expand most
            ratio = (cw / w).max(ch / h);
        }

        let height = h * ratio;
        self.area.width = Some(w * ratio);
        self.area.height = Some(height);
        self.horizontal_center(Some(cw));
        self.area.top = Some((ch - height) / 2.0);
    }
}
