//! Element geometry records.
//!
//! An [`Area`] holds whatever is known about an element's box: any of its
//! left, top, width and height may be unknown until the layout pipeline
//! derives it from the container, the element's right/bottom offsets, or
//! its alignment.
//!
//! ```text
//!   container.page_left
//!   │
//!   │<-- left -->┌──────── width ────────┐<-- right -->│
//!   │            │                       │             │
//!   │            └───────────────────────┘             │
//!   │<──────────────── container.width ───────────────>│
//! ```
//!
//! Given any two of `left`, `width`, `right` (and a known container width)
//! the third can be derived. The same holds vertically for `top`, `height`,
//! `bottom`.

use std::borrow::Cow;
use std::cell::Cell;

use serde::{Deserialize, Serialize};

use crate::units::Units;

/// Alignment intent along one axis.
///
/// Horizontal and vertical alignment share one enumeration: `Left` doubles
/// as top and `Right` as bottom. See [`Align::TOP`] and [`Align::BOTTOM`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Take the container's alignment.
    #[default]
    Inherit,
    /// Anchor to the near edge (left or top).
    #[serde(alias = "top")]
    Left,
    /// Anchor to the far edge (right or bottom).
    #[serde(alias = "bottom")]
    Right,
    /// Center within the container.
    Center,
}

impl Align {
    /// Vertical alias for [`Align::Left`].
    pub const TOP: Self = Self::Left;
    /// Vertical alias for [`Align::Right`].
    pub const BOTTOM: Self = Self::Right;
}

/// Per-axis alignment intent of an area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Alignment {
    /// Alignment along the x axis.
    #[serde(default)]
    pub horizontal: Align,
    /// Alignment along the y axis.
    #[serde(default)]
    pub vertical: Align,
}

impl Alignment {
    /// Alignment with both axes set.
    #[must_use]
    pub const fn new(horizontal: Align, vertical: Align) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// A fully resolved rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    /// Horizontal position of the top-left corner.
    pub x: f32,
    /// Vertical position of the top-left corner.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

/// Geometry of a single element.
///
/// `left` and `top` are distances from the container's edges. The page
/// position is cached separately: the first read of [`Area::page_left`]
/// copies `left` into the cache if nothing was set explicitly, and later
/// writes to `left` do not refresh it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Area {
    /// Left edge distance from the containing area.
    pub left: Option<f32>,
    /// Top edge distance from the containing area.
    pub top: Option<f32>,
    /// Box width.
    pub width: Option<f32>,
    /// Box height.
    pub height: Option<f32>,
    /// Left edge distance from the page.
    page_left: Cell<Option<f32>>,
    /// Top edge distance from the page.
    page_top: Cell<Option<f32>>,
    /// Whether measurements are in pixels (as opposed to inches).
    pub is_pixels: bool,
    /// Content alignment.
    pub align: Alignment,
}

impl Area {
    /// An empty area: everything unknown, alignment inherited.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An area with all four measurements known, in inches.
    #[must_use]
    pub fn with_bounds(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left: Some(left),
            top: Some(top),
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    /// Whether width, height, left and top are all unknown.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width.is_none() && self.height.is_none() && self.left.is_none() && self.top.is_none()
    }

    /// Overall distance from page left.
    ///
    /// Derived from `left` and cached on first read if never set.
    #[must_use]
    pub fn page_left(&self) -> Option<f32> {
        if self.page_left.get().is_none() {
            self.page_left.set(self.left);
        }
        self.page_left.get()
    }

    /// Overall distance from page top.
    ///
    /// Derived from `top` and cached on first read if never set.
    #[must_use]
    pub fn page_top(&self) -> Option<f32> {
        if self.page_top.get().is_none() {
            self.page_top.set(self.top);
        }
        self.page_top.get()
    }

    /// Overwrite the cached page left.
    pub fn set_page_left(&mut self, value: Option<f32>) {
        self.page_left.set(value);
    }

    /// Overwrite the cached page top.
    pub fn set_page_top(&mut self, value: Option<f32>) {
        self.page_top.set(value);
    }

    /// The page left a read would return, without touching the cache.
    #[must_use]
    pub fn peek_page_left(&self) -> Option<f32> {
        self.page_left.get().or(self.left)
    }

    /// The page top a read would return, without touching the cache.
    #[must_use]
    pub fn peek_page_top(&self) -> Option<f32> {
        self.page_top.get().or(self.top)
    }

    /// This area in pixels.
    ///
    /// Borrows `self` if it is already in pixels.
    #[must_use]
    pub fn pixels(&self, units: Units) -> Cow<'_, Self> {
        if self.is_pixels {
            Cow::Borrowed(self)
        } else {
            Cow::Owned(self.converted(|v| units.inches_to_pixels(v), true))
        }
    }

    /// This area in inches.
    ///
    /// Borrows `self` if it is already in inches.
    #[must_use]
    pub fn inches(&self, units: Units) -> Cow<'_, Self> {
        if self.is_pixels {
            Cow::Owned(self.converted(|v| units.pixels_to_inches(v), false))
        } else {
            Cow::Borrowed(self)
        }
    }

    fn converted(&self, convert: impl Fn(f32) -> f32, is_pixels: bool) -> Self {
        let map = |v: Option<f32>| v.map(&convert);
        Self {
            left: map(self.left),
            top: map(self.top),
            width: map(self.width),
            height: map(self.height),
            page_left: Cell::new(map(self.page_left.get())),
            page_top: Cell::new(map(self.page_top.get())),
            is_pixels,
            align: self.align,
        }
    }

    /// A full value copy of this area.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Copy every value of this area into `target`.
    pub fn copy_into(&self, target: &mut Self) {
        target.clone_from(self);
    }

    /// Add page offsets from the container.
    ///
    /// If this area has no page position yet it takes the container's;
    /// otherwise the container's is added to it. Unknown container
    /// offsets leave this area alone. The container is not modified.
    pub fn add(&mut self, container: &Self) {
        if let Some(l) = container.peek_page_left() {
            let d = self.page_left();
            self.set_page_left(Some(d.map_or(l, |d| d + l)));
        }
        if let Some(t) = container.peek_page_top() {
            let d = self.page_top();
            self.set_page_top(Some(d.map_or(t, |d| d + t)));
        }
    }

    /// Inherit alignment from the container where ours is unset.
    pub fn inherit(&mut self, container: &Self) {
        if self.align.horizontal == Align::Inherit && container.align.horizontal != Align::Inherit {
            self.align.horizontal = container.align.horizontal;
        }
        if self.align.vertical == Align::Inherit && container.align.vertical != Align::Inherit {
            self.align.vertical = container.align.vertical;
        }
    }

    /// Compute missing values from distances to the container's far edges.
    ///
    /// Only ever fills a value that is currently unknown, so repeating the
    /// call with the same inputs changes nothing.
    pub fn calculate(&mut self, container: &Self, bottom: Option<f32>, right: Option<f32>) {
        if let (Some(right), Some(container_width)) = (right, container.width) {
            // convert distance from right into distance from left
            let right_length = container_width - right;
            match (self.left, self.width) {
                (None, Some(width)) => self.left = Some(right_length - width),
                (Some(left), None) => self.width = Some(right_length - left),
                _ => {}
            }
        }

        if let (Some(bottom), Some(container_height)) = (bottom, container.height) {
            let bottom_length = container_height - bottom;
            match (self.top, self.height) {
                (None, Some(height)) => self.top = Some(bottom_length - height),
                (Some(top), None) => self.height = Some(bottom_length - top),
                _ => {}
            }
        }
    }

    /// Remove all measurements and alignment.
    pub fn reset(&mut self) {
        self.left = None;
        self.top = None;
        self.width = None;
        self.height = None;
        self.page_left.set(None);
        self.page_top.set(None);
        self.align = Alignment::default();
    }

    /// Whether `other` starts inside this area.
    ///
    /// Only the near edges of `other` are compared against the far edges
    /// of `self`; any unknown operand means no overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        match (
            other.left,
            other.top,
            self.left,
            self.width,
            self.top,
            self.height,
        ) {
            (Some(ol), Some(ot), Some(l), Some(w), Some(t), Some(h)) => ol < l + w && ot < t + h,
            _ => false,
        }
    }

    /// The page-absolute rectangle, if position and size are all known.
    #[must_use]
    pub fn resolved_rect(&self) -> Option<Rect> {
        Some(Rect {
            x: self.page_left()?,
            y: self.page_top()?,
            width: self.width?,
            height: self.height?,
        })
    }
}
