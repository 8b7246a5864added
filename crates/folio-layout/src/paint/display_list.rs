//! Display List - a sequence of drawing commands
//!
//! All coordinates are page-absolute and in pixels.

use serde::Serialize;
use strum_macros::IntoStaticStr;

use crate::color::Color;
use crate::error::DrawError;

/// A single drawing command.
///
/// Commands are produced in painting order (back to front).
#[derive(Debug, Clone, PartialEq, Serialize, IntoStaticStr)]
#[serde(tag = "command", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DisplayCommand {
    /// Fill a rectangle with a solid color.
    FillRect {
        /// X coordinate of the rectangle's top-left corner.
        x: f32,
        /// Y coordinate of the rectangle's top-left corner.
        y: f32,
        /// Width of the rectangle in pixels.
        width: f32,
        /// Height of the rectangle in pixels.
        height: f32,
        /// Fill color.
        color: Color,
        /// Opacity multiplier (0.0 = fully transparent, 1.0 = fully opaque).
        opacity: f32,
    },

    /// Outline a rectangle.
    StrokeRect {
        /// X coordinate of the rectangle's top-left corner.
        x: f32,
        /// Y coordinate of the rectangle's top-left corner.
        y: f32,
        /// Width of the rectangle in pixels.
        width: f32,
        /// Height of the rectangle in pixels.
        height: f32,
        /// Stroke width in pixels.
        line_width: f32,
        /// Stroke color.
        color: Color,
    },

    /// Draw an image at a position.
    ///
    /// The `src` string is the lookup key the surface uses to fetch the
    /// image bytes.
    DrawImage {
        /// X coordinate of the image's top-left corner.
        x: f32,
        /// Y coordinate of the image's top-left corner.
        y: f32,
        /// Rendered width of the image in pixels.
        width: f32,
        /// Rendered height of the image in pixels.
        height: f32,
        /// Image lookup key.
        src: String,
        /// Opacity multiplier for the image.
        opacity: f32,
    },

    /// Draw text at a position.
    DrawText {
        /// X coordinate of the text block's top-left corner.
        x: f32,
        /// Y coordinate of the text block's top-left corner.
        y: f32,
        /// Width available to the text, if resolved.
        width: Option<f32>,
        /// The text content to draw.
        text: String,
        /// Font name or path, if the style sheet supplied one.
        font: Option<String>,
        /// Font size in points, if the style sheet supplied one.
        font_size: Option<f32>,
        /// Text color.
        color: Color,
        /// Opacity multiplier for the text.
        opacity: f32,
    },
}

impl DisplayCommand {
    /// Short name of the command, for logs and errors.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// A drawing collaborator.
///
/// Receives commands in painting order. A surface may do slow work (such
/// as fetching image bytes) before returning.
pub trait Surface {
    /// Execute or record one drawing command.
    ///
    /// # Errors
    ///
    /// Returns a [`DrawError`] if the surface cannot draw the command.
    fn draw(&mut self, command: DisplayCommand) -> Result<(), DrawError>;
}

/// A list of drawing commands in painting order.
///
/// Commands are stored in back-to-front order, so a backend can simply
/// iterate and execute each command.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DisplayCommand>,
}

impl DisplayList {
    /// Create an empty display list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Add a command to the display list.
    pub fn push(&mut self, command: DisplayCommand) {
        self.commands.push(command);
    }

    /// Get the commands in painting order.
    #[must_use]
    pub fn commands(&self) -> &[DisplayCommand] {
        &self.commands
    }

    /// Get the number of commands.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the display list is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Surface for DisplayList {
    fn draw(&mut self, command: DisplayCommand) -> Result<(), DrawError> {
        self.push(command);
        Ok(())
    }
}
