//! Geometry resolution and layout for Folio print elements.
//!
//! # Scope
//!
//! This crate implements:
//! - **Geometry records** ([`Area`])
//!   - Possibly-unknown left, top, width and height
//!   - Lazily cached page position
//!   - Inch/pixel conversion
//!   - Constraint completion from right/bottom offsets
//!
//! - **Layout pipeline** ([`Element::explicit_layout`])
//!   - Scale from opposing offsets, or fit/fill for images
//!   - Alignment fallbacks that never override explicit values
//!   - Page offset accumulation through nested groups
//!
//! - **Style application** ([`StyleContext`], [`StyleSheet`])
//!   - Named rules with inheritance, fonts and colors
//!
//! - **Rendering** ([`Element::render`])
//!   - Drawing commands for text, images and shapes in page pixels
//!
//! # Not Implemented
//!
//! - Text measurement and font metrics
//! - Content-based sizing ([`Element::implicit_layout`] is a no-op)
//! - Color management
//! - Page stream output (left to a [`Surface`])

/// Element geometry records.
pub mod area;
/// RGB colors with optional opacity.
pub mod color;
/// Positionable elements and the layout pipeline.
pub mod element;
/// Style sheet and drawing errors.
pub mod error;
/// Drawing commands and surfaces.
pub mod paint;
/// Style contexts and JSON style sheets.
pub mod style;
/// Inch/pixel conversion.
pub mod units;

pub use area::{Align, Alignment, Area, Rect};
pub use color::Color;
pub use element::{Column, Element, ElementKind, Group, Scale, Shape};
pub use error::{DrawError, StyleError};
pub use paint::{DisplayCommand, DisplayList, Surface};
pub use style::{LayoutContext, NoStyles, StyleContext, StyleRule, StyleSettings, StyleSheet};
pub use units::{DEFAULT_PIXELS_PER_INCH, Units};
