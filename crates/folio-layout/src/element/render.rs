//! Rendering laid-out elements.
//!
//! Rendering never moves anything: it re-applies style rules (which only
//! fill values that are still unset) and emits drawing commands at the
//! resolved page position, converted to pixels.

use folio_common::warning::warn_once;

use super::{Element, ElementKind};
use crate::color::Color;
use crate::error::DrawError;
use crate::paint::{DisplayCommand, Surface};
use crate::style::LayoutContext;

impl Element {
    /// Draw this element (and any children) onto `surface`.
    ///
    /// `on_done` runs once every command for this element has been
    /// accepted by the surface. Elements whose geometry is still
    /// unresolved are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns the first [`DrawError`] raised by the surface; `on_done` is
    /// not called in that case.
    pub fn render<F>(
        &mut self,
        ctx: &LayoutContext<'_>,
        surface: &mut dyn Surface,
        on_done: F,
    ) -> Result<(), DrawError>
    where
        F: FnOnce(),
    {
        self.explicit_layout(ctx, None);

        for command in self.draw_commands(ctx) {
            surface.draw(command)?;
        }

        if let Some(group) = self.group_mut() {
            for i in group.paint_order() {
                group.children[i].render::<fn()>(ctx, surface, || {})?;
            }
        }

        on_done();
        Ok(())
    }

    /// The commands that draw this element, without its children.
    ///
    /// Empty when the element cannot be placed.
    #[must_use]
    pub fn draw_commands(&self, ctx: &LayoutContext<'_>) -> Vec<DisplayCommand> {
        let pixels = self.area.pixels(ctx.units);
        let opacity = self.opacity();
        let color = self.rgba().unwrap_or(Color::BLACK);

        match &self.kind {
            ElementKind::Text(text) => {
                let (Some(x), Some(y)) = (pixels.page_left(), pixels.page_top()) else {
                    self.warn_unresolved();
                    return Vec::new();
                };
                vec![DisplayCommand::DrawText {
                    x,
                    y,
                    width: pixels.width,
                    text: text.clone(),
                    font: self.font.clone(),
                    font_size: self.font_size,
                    color,
                    opacity,
                }]
            }
            ElementKind::Image(source) => {
                let Some(rect) = pixels.resolved_rect() else {
                    self.warn_unresolved();
                    return Vec::new();
                };
                vec![DisplayCommand::DrawImage {
                    x: rect.x,
                    y: rect.y,
                    width: rect.width,
                    height: rect.height,
                    src: source.url().to_string(),
                    opacity,
                }]
            }
            ElementKind::Shape(shape) => {
                let Some(rect) = pixels.resolved_rect() else {
                    self.warn_unresolved();
                    return Vec::new();
                };
                let mut commands = Vec::new();
                if self.rgba().is_some() {
                    commands.push(DisplayCommand::FillRect {
                        x: rect.x,
                        y: rect.y,
                        width: rect.width,
                        height: rect.height,
                        color,
                        opacity,
                    });
                }
                if shape.border_width > 0.0 {
                    commands.push(DisplayCommand::StrokeRect {
                        x: rect.x,
                        y: rect.y,
                        width: rect.width,
                        height: rect.height,
                        line_width: ctx.units.inches_to_pixels(shape.border_width),
                        color: shape.border_color,
                    });
                }
                commands
            }
            ElementKind::Group(_) | ElementKind::Column(_) => Vec::new(),
        }
    }

    fn warn_unresolved(&self) {
        warn_once(
            "Render",
            &format!(
                "skipping {} (style {:?}) with unresolved geometry",
                self.kind_name(),
                self.style.as_deref().unwrap_or("none")
            ),
        );
    }
}
