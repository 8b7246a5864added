//! Groups and columns.
//!
//! A group resolves its own area first, then hands that area to each child
//! as the child's container. Children are laid out depth-first in insertion
//! order and painted by ascending `z_index`.

use super::Element;
use crate::area::Area;
use crate::style::LayoutContext;

/// Style rule used for the page number a column adds to itself.
pub const PAGE_NUMBER_STYLE: &str = "pageNumber";

/// An ordered set of child elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    /// Child elements in insertion order.
    pub children: Vec<Element>,
}

impl Group {
    /// A group holding `children`.
    #[must_use]
    pub const fn new(children: Vec<Element>) -> Self {
        Self { children }
    }

    /// Append a child element.
    pub fn add(&mut self, element: Element) {
        self.children.push(element);
    }

    /// Append a text child styled by `style`.
    pub fn add_text(&mut self, text: impl Into<String>, style: &str) {
        self.add(Element::text(text).with_style(style));
    }

    /// Run the layout pipeline for every child inside `container`.
    pub(crate) fn layout_children(&mut self, ctx: &LayoutContext<'_>, container: &Area) {
        for child in &mut self.children {
            child.explicit_layout(ctx, Some(container));
        }
    }

    /// Child indices in painting order: ascending `z_index`, ties in
    /// insertion order.
    #[must_use]
    pub fn paint_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.children.len()).collect();
        order.sort_by_key(|&i| self.children[i].z_index);
        order
    }
}

/// A group that carries a page number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Column {
    /// Page number; zero means unnumbered.
    pub number: u32,
    /// The column's children.
    pub group: Group,
    /// Whether the page number child has been added.
    numbered: bool,
}

impl Column {
    /// A column numbered `number` holding `children`.
    #[must_use]
    pub const fn new(number: u32, children: Vec<Element>) -> Self {
        Self {
            number,
            group: Group::new(children),
            numbered: false,
        }
    }

    /// Add the page number as a text child, once.
    pub(crate) fn add_page_number(&mut self) {
        if self.number > 0 && !self.numbered {
            self.group.add_text(self.number.to_string(), PAGE_NUMBER_STYLE);
            self.numbered = true;
        }
    }
}
