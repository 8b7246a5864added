//! Positionable print elements.
//!
//! Every element owns an [`Area`] plus the constraint hints the layout
//! pipeline reads (`right`, `bottom`, minimum sizes, scaling policy) and
//! the values style rules fill in (font, size, margin, color).
//!
//! # Module Structure
//!
//! - [`pipeline`] - Scale, align, offset and size-completion stages
//! - [`image`] - Fit and fill scaling for images
//! - [`group`] - Groups and columns that lay out child elements
//! - [`render`] - Turning a laid-out element into drawing commands

pub mod group;
pub mod image;
pub mod pipeline;
pub mod render;

use folio_common::image::ImageSource;
use serde::{Deserialize, Serialize};
use strum_macros::IntoStaticStr;

use crate::area::{Align, Alignment, Area};
use crate::color::Color;
use crate::units::Units;

pub use group::{Column, Group};

/// Scaling policy for resizable content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    /// Shrink to fit inside the container, keeping the aspect ratio.
    Fit,
    /// Grow to cover the container, keeping the aspect ratio.
    Fill,
    /// Size from explicit values and offsets only.
    #[default]
    None,
}

/// A shape's outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    /// Outline color.
    pub border_color: Color,
    /// Outline width in inches. Zero draws no outline.
    pub border_width: f32,
}

impl Default for Shape {
    fn default() -> Self {
        Self {
            border_color: Color::BLACK,
            border_width: 0.0,
        }
    }
}

/// What an element draws.
#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ElementKind {
    /// A block of text.
    Text(String),
    /// A raster image.
    Image(ImageSource),
    /// A filled and/or outlined rectangle.
    Shape(Shape),
    /// Child elements laid out inside this element's area.
    Group(Group),
    /// A numbered group of child elements.
    Column(Column),
}

/// A positionable print element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Element geometry.
    pub area: Area,
    /// Variant data.
    pub kind: ElementKind,
    /// Name of the style rule applied to this element.
    pub style: Option<String>,
    /// Right-side distance from the containing area.
    pub right: Option<f32>,
    /// Bottom distance from the containing area.
    pub bottom: Option<f32>,
    /// Smallest width the element may be scaled to.
    pub min_width: Option<f32>,
    /// Smallest height the element may be scaled to.
    pub min_height: Option<f32>,
    /// Scaling policy for resizable content.
    pub scale_to: Scale,
    /// Font name or path.
    pub font: Option<String>,
    /// Font size in points.
    pub font_size: Option<f32>,
    /// Margin in inches.
    pub margin: Option<f32>,
    /// Paint order among siblings; lower paints first.
    pub z_index: i32,
    /// RGBA color.
    color: Option<Color>,
}

impl Element {
    /// Create an element of the given kind, styled by the rule named
    /// after the kind (`text`, `image`, `shape`, `group`, `column`).
    #[must_use]
    pub fn new(kind: ElementKind) -> Self {
        let style: &'static str = (&kind).into();
        Self {
            area: Area::new(),
            kind,
            style: Some(style.to_string()),
            right: None,
            bottom: None,
            min_width: None,
            min_height: None,
            scale_to: Scale::None,
            font: None,
            font_size: None,
            margin: None,
            z_index: 0,
            color: None,
        }
    }

    /// A text element.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(ElementKind::Text(text.into()))
    }

    /// An image element.
    #[must_use]
    pub fn image(source: ImageSource) -> Self {
        Self::new(ElementKind::Image(source))
    }

    /// A shape element with no outline.
    #[must_use]
    pub fn shape() -> Self {
        Self::new(ElementKind::Shape(Shape::default()))
    }

    /// A group of child elements.
    #[must_use]
    pub fn group(children: Vec<Self>) -> Self {
        Self::new(ElementKind::Group(Group::new(children)))
    }

    /// A numbered column of child elements.
    #[must_use]
    pub fn column(number: u32, children: Vec<Self>) -> Self {
        Self::new(ElementKind::Column(Column::new(number, children)))
    }

    /// Use a different style rule.
    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Set the left offset.
    #[must_use]
    pub fn with_left(mut self, left: f32) -> Self {
        self.area.left = Some(left);
        self
    }

    /// Set the top offset.
    #[must_use]
    pub fn with_top(mut self, top: f32) -> Self {
        self.area.top = Some(top);
        self
    }

    /// Set the width.
    #[must_use]
    pub fn with_width(mut self, width: f32) -> Self {
        self.area.width = Some(width);
        self
    }

    /// Set the height.
    #[must_use]
    pub fn with_height(mut self, height: f32) -> Self {
        self.area.height = Some(height);
        self
    }

    /// Set the right offset.
    #[must_use]
    pub fn with_right(mut self, right: f32) -> Self {
        self.right = Some(right);
        self
    }

    /// Set the bottom offset.
    #[must_use]
    pub fn with_bottom(mut self, bottom: f32) -> Self {
        self.bottom = Some(bottom);
        self
    }

    /// Set the alignment.
    #[must_use]
    pub fn with_align(mut self, align: Alignment) -> Self {
        self.area.align = align;
        self
    }

    /// Set the scaling policy.
    #[must_use]
    pub fn with_scale(mut self, scale_to: Scale) -> Self {
        self.scale_to = scale_to;
        self
    }

    /// Short name of the element's kind.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        (&self.kind).into()
    }

    /// Box width.
    #[must_use]
    pub const fn width(&self) -> Option<f32> {
        self.area.width
    }

    /// Set the box width.
    pub const fn set_width(&mut self, width: f32) {
        self.area.width = Some(width);
    }

    /// Box height.
    #[must_use]
    pub const fn height(&self) -> Option<f32> {
        self.area.height
    }

    /// Set the box height.
    pub const fn set_height(&mut self, height: f32) {
        self.area.height = Some(height);
    }

    /// Left edge distance from the containing area.
    #[must_use]
    pub const fn left(&self) -> Option<f32> {
        self.area.left
    }

    /// Set the left offset.
    pub const fn set_left(&mut self, left: f32) {
        self.area.left = Some(left);
    }

    /// Top edge distance from the containing area.
    #[must_use]
    pub const fn top(&self) -> Option<f32> {
        self.area.top
    }

    /// Set the top offset.
    pub const fn set_top(&mut self, top: f32) {
        self.area.top = Some(top);
    }

    /// Left edge distance from the page.
    #[must_use]
    pub fn page_left(&self) -> Option<f32> {
        self.area.page_left()
    }

    /// Set the left edge distance from the page.
    pub fn set_page_left(&mut self, value: f32) {
        self.area.set_page_left(Some(value));
    }

    /// Top edge distance from the page.
    #[must_use]
    pub fn page_top(&self) -> Option<f32> {
        self.area.page_top()
    }

    /// Set the top edge distance from the page.
    pub fn set_page_top(&mut self, value: f32) {
        self.area.set_page_top(Some(value));
    }

    /// Content alignment.
    #[must_use]
    pub const fn align(&self) -> Alignment {
        self.area.align
    }

    /// RGB channels; black when no color was set.
    #[must_use]
    pub fn color(&self) -> [u8; 3] {
        self.color.map_or(Color::BLACK.rgb, |c| c.rgb)
    }

    /// The full color, if one was set.
    #[must_use]
    pub const fn rgba(&self) -> Option<Color> {
        self.color
    }

    /// Set the color, including its alpha channel if it has one.
    pub const fn set_color(&mut self, color: Color) {
        self.color = Some(color);
    }

    /// Opacity between 0 and 1; fully opaque unless the color carries alpha.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.color.and_then(|c| c.alpha).unwrap_or(1.0)
    }

    /// Set the opacity.
    ///
    /// An element without a color becomes black at this opacity.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.color.get_or_insert(Color::BLACK).alpha = Some(opacity);
    }

    /// Top offset in pixels.
    #[must_use]
    pub fn top_pixels(&self, units: Units) -> Option<f32> {
        units.to_pixels(self.area.top)
    }

    /// Set the top offset from pixels.
    pub fn set_top_pixels(&mut self, units: Units, pixels: f32) {
        self.area.top = Some(units.pixels_to_inches(pixels));
    }

    /// Left offset in pixels.
    #[must_use]
    pub fn left_pixels(&self, units: Units) -> Option<f32> {
        units.to_pixels(self.area.left)
    }

    /// Set the left offset from pixels.
    pub fn set_left_pixels(&mut self, units: Units, pixels: f32) {
        self.area.left = Some(units.pixels_to_inches(pixels));
    }

    /// Width in pixels.
    #[must_use]
    pub fn width_pixels(&self, units: Units) -> Option<f32> {
        units.to_pixels(self.area.width)
    }

    /// Set the width from pixels.
    pub fn set_width_pixels(&mut self, units: Units, pixels: f32) {
        self.area.width = Some(units.pixels_to_inches(pixels));
    }

    /// Height in pixels.
    #[must_use]
    pub fn height_pixels(&self, units: Units) -> Option<f32> {
        units.to_pixels(self.area.height)
    }

    /// Set the height from pixels.
    pub fn set_height_pixels(&mut self, units: Units, pixels: f32) {
        self.area.height = Some(units.pixels_to_inches(pixels));
    }

    /// Center horizontally within `width`.
    ///
    /// Without a width of our own, defer to center alignment instead.
    pub fn horizontal_center(&mut self, width: Option<f32>) {
        match (width, self.area.width) {
            (_, None) => self.area.align.horizontal = Align::Center,
            (Some(outer), Some(own)) => self.area.left = Some((outer - own) / 2.0),
            (None, Some(_)) => {}
        }
    }

    /// The group behind a group or column element.
    pub(crate) fn group_mut(&mut self) -> Option<&mut Group> {
        match &mut self.kind {
            ElementKind::Group(group) => Some(group),
            ElementKind::Column(column) => Some(&mut column.group),
            _ => None,
        }
    }

    /// Child elements of a group or column.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match &self.kind {
            ElementKind::Group(group) => &group.children,
            ElementKind::Column(column) => &column.group.children,
            _ => &[],
        }
    }
}
