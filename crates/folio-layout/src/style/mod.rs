//! Style application.
//!
//! Style rules are applied to an element before its geometry is resolved.
//! The rules come from a [`StyleContext`] passed explicitly through the
//! pipeline inside a [`LayoutContext`]; nothing is looked up globally.

mod sheet;

pub use sheet::{StyleRule, StyleSettings, StyleSheet};

use crate::element::Element;
use crate::units::Units;

/// Merges named style rules into an element.
///
/// Implementations must be additive: they fill values the element does
/// not have yet and never overwrite explicit ones.
pub trait StyleContext {
    /// Apply the element's style rule to it.
    fn apply_to(&self, element: &mut Element);
}

/// A style context with no rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStyles;

impl StyleContext for NoStyles {
    fn apply_to(&self, _element: &mut Element) {}
}

/// Everything the layout pipeline reads besides the element and its
/// container.
#[derive(Clone, Copy)]
pub struct LayoutContext<'a> {
    /// Style rules to apply before geometry is resolved.
    pub styles: &'a dyn StyleContext,
    /// Inch/pixel conversion.
    pub units: Units,
}

impl<'a> LayoutContext<'a> {
    /// A context applying `styles` and converting with `units`.
    #[must_use]
    pub const fn new(styles: &'a dyn StyleContext, units: Units) -> Self {
        Self { styles, units }
    }
}

impl LayoutContext<'static> {
    /// A context with no style rules at the default resolution.
    #[must_use]
    pub fn unstyled() -> Self {
        Self::new(&NoStyles, Units::default())
    }
}
