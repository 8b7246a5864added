//! The element layout pipeline.
//!
//! Given a container, an element's geometry is resolved in four stages,
//! each run once per layout pass:
//!
//! 1. [`Element::scale`] - size from opposing offsets (or image scaling)
//! 2. [`Element::align_within`] - fill positions from alignment intent
//! 3. [`Element::offset_within`] - accumulate the page position
//! 4. [`Element::update_size_within`] - complete values from right/bottom
//!
//! Stage 4 also runs twice inside stage 2. It only fills unknown values, so
//! the repeat settles anything the alignment step unlocked.
//!
//! No stage fails. An element may finish with some values still unknown;
//! renderers skip what they cannot place.

#[cfg(feature = "layout-trace")]
use std::cell::Cell;

use super::image::natural_size;
use super::{Element, ElementKind, Scale};
use crate::area::{Align, Area};
use crate::style::LayoutContext;
use crate::units::Units;

#[cfg(feature = "layout-trace")]
thread_local! {
    static LAYOUT_DEPTH: Cell<usize> = const { Cell::new(0) };
}

impl Element {
    /// Apply style rules and, given a container, resolve this element's
    /// geometry within it.
    ///
    /// Without a container only the style rules are applied (and a column
    /// adds its page number). With one, the scale, align and offset stages
    /// run in that order, after which any children are laid out inside this
    /// element's area.
    pub fn explicit_layout(&mut self, ctx: &LayoutContext<'_>, container: Option<&Area>) {
        ctx.styles.apply_to(self);
        if let ElementKind::Column(column) = &mut self.kind {
            column.add_page_number();
        }

        let Some(container) = container else {
            return;
        };

        #[cfg(feature = "layout-trace")]
        let depth = LAYOUT_DEPTH.with(|d| {
            let current = d.get();
            d.set(current + 1);
            current
        });
        #[cfg(feature = "layout-trace")]
        eprintln!(
            "[LAYOUT] {:indent$}{} style={:?} start {:?}",
            "",
            self.kind_name(),
            self.style,
            self.area,
            indent = depth * 2
        );

        self.scale(container, ctx.units);
        self.align_within(container);
        self.offset_within(container);

        #[cfg(feature = "layout-trace")]
        eprintln!(
            "[LAYOUT] {:indent$}{} resolved {:?} page=({:?}, {:?})",
            "",
            self.kind_name(),
            self.area,
            self.area.peek_page_left(),
            self.area.peek_page_top(),
            indent = depth * 2
        );

        self.layout_children(ctx);

        #[cfg(feature = "layout-trace")]
        LAYOUT_DEPTH.with(|d| d.set(depth));
    }

    /// Size the element from its content alone.
    ///
    /// Reserved: no element sizes itself from content yet, so this leaves
    /// the element unchanged.
    pub fn implicit_layout(&mut self, _container: Option<&Area>) {}

    /// Set width and height for elements anchored at opposite edges.
    ///
    /// Previously set width and height are replaced. Images scaled to fit
    /// or fill size themselves from their source instead.
    pub fn scale(&mut self, container: &Area, units: Units) {
        let natural = match &self.kind {
            ElementKind::Image(source) => Some(natural_size(source, units)),
            _ => None,
        };

        match (natural, self.scale_to) {
            (Some(size), Scale::Fit) => self.fit(container, size),
            (Some(size), Scale::Fill) => self.fill(container, size),
            _ => self.scale_to_offsets(container),
        }

        self.apply_minimum_size();
    }

    /// Span the container between `left` and `right`, and between `top`
    /// and `bottom`.
    pub fn scale_to_offsets(&mut self, container: &Area) {
        if let (Some(left), Some(right), Some(container_width)) =
            (self.area.left, self.right, container.width)
        {
            self.area.width = Some(container_width - (left + right));
        }

        if let (Some(top), Some(bottom), Some(container_height)) =
            (self.area.top, self.bottom, container.height)
        {
            self.area.height = Some(container_height - (top + bottom));
        }
    }

    fn apply_minimum_size(&mut self) {
        if let (Some(width), Some(min)) = (self.area.width, self.min_width) {
            self.area.width = Some(width.max(min));
        }
        if let (Some(height), Some(min)) = (self.area.height, self.min_height) {
            self.area.height = Some(height.max(min));
        }
    }

    /// Apply alignment rules.
    ///
    /// Alignment never overrides an explicit value: it only positions the
    /// element along an axis where the position is still unknown.
    pub fn align_within(&mut self, container: &Area) {
        self.area.inherit(container);
        // populate calculable values so anything left unknown is genuinely unknown
        self.update_size_within(container);

        match self.area.align.horizontal {
            Align::Left => {
                if self.area.left.is_none() {
                    self.area.left = Some(0.0);
                }
            }
            Align::Right => {
                if self.area.left.is_none() || self.area.width.is_none() {
                    self.right = Some(0.0);
                }
            }
            Align::Center => {
                if let (Some(container_width), None, Some(width)) =
                    (container.width, self.area.left, self.area.width)
                {
                    self.area.left = Some((container_width - width) / 2.0);
                }
            }
            Align::Inherit => {}
        }

        match self.area.align.vertical {
            Align::Left => {
                if self.area.top.is_none() {
                    self.area.top = Some(0.0);
                }
            }
            Align::Right => {
                if self.area.top.is_none() || self.area.height.is_none() {
                    self.bottom = Some(0.0);
                }
            }
            Align::Center => {
                if let (Some(container_height), None, Some(height)) =
                    (container.height, self.area.top, self.area.height)
                {
                    self.area.top = Some((container_height - height) / 2.0);
                }
            }
            Align::Inherit => {}
        }

        self.update_size_within(container);

        if let (Some(bottom), Some(height), None, Some(container_height)) =
            (self.bottom, self.area.height, self.area.top, container.height)
        {
            // bottom and height are given but not top -- position relative to bottom
            self.area.top = Some(container_height - (height + bottom));
        }

        if let (Some(right), Some(width), None, Some(container_width)) =
            (self.right, self.area.width, self.area.left, container.width)
        {
            // right and width are given but not left -- position relative to right
            self.area.left = Some(container_width - (width + right));
        }
    }

    /// Accumulate the page position from the container's.
    pub fn offset_within(&mut self, container: &Area) {
        self.area.add(container);
    }

    /// Fill in left/top or width/height from the right and bottom offsets.
    pub fn update_size_within(&mut self, container: &Area) {
        self.area.calculate(container, self.bottom, self.right);
    }

    fn layout_children(&mut self, ctx: &LayoutContext<'_>) {
        let Self { area, kind, .. } = self;
        match kind {
            ElementKind::Group(group) => group.layout_children(ctx, area),
            ElementKind::Column(column) => column.group.layout_children(ctx, area),
            ElementKind::Text(_) | ElementKind::Image(_) | ElementKind::Shape(_) => {}
        }
    }
}
