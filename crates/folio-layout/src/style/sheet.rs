//! JSON style sheets.
//!
//! A style sheet names fonts and colors in its settings and defines rules
//! keyed by style name. A rule may `inherit` another; its own fields win.
//!
//! ```json
//! {
//!   "settings": {
//!     "fonts": { "serif": "fonts/Merriweather.ttf" },
//!     "colors": { "muted": [90, 90, 90, 0.8] }
//!   },
//!   "rules": {
//!     "text": { "font": "serif", "fontSize": 10 },
//!     "caption": { "inherit": "text", "color": "muted", "align": "center" }
//!   }
//! }
//! ```

use std::collections::{HashMap, HashSet};

use folio_common::warning::warn_once;
use serde::Deserialize;

use super::StyleContext;
use crate::area::Align;
use crate::color::Color;
use crate::element::Element;
use crate::error::StyleError;

/// Named fonts and colors rules refer to.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StyleSettings {
    /// Font key to font name or path.
    #[serde(default)]
    pub fonts: HashMap<String, String>,
    /// Color name to `[r, g, b]` or `[r, g, b, a]` channels.
    #[serde(default)]
    pub colors: HashMap<String, Vec<f32>>,
}

/// One named style rule.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRule {
    /// Font key from the settings.
    pub font: Option<String>,
    /// Font size in points.
    pub font_size: Option<f32>,
    /// Color name from the settings, or hex notation.
    pub color: Option<String>,
    /// Margin in inches.
    pub margin: Option<f32>,
    /// Fixed width in inches.
    pub width: Option<f32>,
    /// Fixed height in inches.
    pub height: Option<f32>,
    /// Name of the rule this one extends.
    pub inherit: Option<String>,
    /// Horizontal alignment.
    pub align: Option<Align>,
    /// Vertical alignment.
    pub vertical_align: Option<Align>,
}

impl StyleRule {
    /// Take every field this rule leaves unset from `parent`.
    fn extend(&mut self, parent: &Self) {
        fn fill<T: Clone>(own: &mut Option<T>, parent: &Option<T>) {
            if own.is_none() {
                own.clone_from(parent);
            }
        }
        fill(&mut self.font, &parent.font);
        fill(&mut self.font_size, &parent.font_size);
        fill(&mut self.color, &parent.color);
        fill(&mut self.margin, &parent.margin);
        fill(&mut self.width, &parent.width);
        fill(&mut self.height, &parent.height);
        fill(&mut self.align, &parent.align);
        fill(&mut self.vertical_align, &parent.vertical_align);
    }
}

#[derive(Deserialize)]
struct RawStyleSheet {
    #[serde(default)]
    settings: StyleSettings,
    #[serde(default)]
    rules: HashMap<String, StyleRule>,
}

/// A validated set of style rules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    settings: StyleSettings,
    rules: HashMap<String, StyleRule>,
}

impl StyleSheet {
    /// Build a style sheet, checking that every `inherit` chain ends.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::UnknownParent`] if a rule inherits from a
    /// missing rule and [`StyleError::InheritCycle`] if a chain loops.
    pub fn new(
        settings: StyleSettings,
        rules: HashMap<String, StyleRule>,
    ) -> Result<Self, StyleError> {
        let sheet = Self { settings, rules };
        sheet.validate()?;
        Ok(sheet)
    }

    /// Parse and validate a JSON style sheet.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Json`] for malformed input, otherwise as
    /// [`StyleSheet::new`].
    pub fn from_json(json: &str) -> Result<Self, StyleError> {
        let raw: RawStyleSheet = serde_json::from_str(json)?;
        Self::new(raw.settings, raw.rules)
    }

    fn validate(&self) -> Result<(), StyleError> {
        let mut names: Vec<&String> = self.rules.keys().collect();
        names.sort();

        for name in names {
            let mut visited = HashSet::new();
            let mut current = name.as_str();
            while let Some(parent) = self.rules[current].inherit.as_deref() {
                if !visited.insert(current) || parent == name {
                    return Err(StyleError::InheritCycle(name.clone()));
                }
                if !self.rules.contains_key(parent) {
                    return Err(StyleError::UnknownParent {
                        rule: current.to_string(),
                        parent: parent.to_string(),
                    });
                }
                current = parent;
            }
        }
        Ok(())
    }

    /// Font and color names.
    #[must_use]
    pub const fn settings(&self) -> &StyleSettings {
        &self.settings
    }

    /// The rule named `name`, as written.
    #[must_use]
    pub fn rule(&self, name: &str) -> Option<&StyleRule> {
        self.rules.get(name)
    }

    /// The rule named `name` with its inherited fields filled in.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<StyleRule> {
        let mut resolved = self.rules.get(name)?.clone();
        let mut parent = resolved.inherit.clone();
        // validated chains are acyclic; the bound only guards hand-built sheets
        for _ in 0..self.rules.len() {
            let Some(rule) = parent.as_deref().and_then(|p| self.rules.get(p)) else {
                break;
            };
            resolved.extend(rule);
            parent.clone_from(&rule.inherit);
        }
        Some(resolved)
    }

    /// Resolve a color name from the settings, falling back to hex notation.
    #[must_use]
    pub fn color(&self, name: &str) -> Option<Color> {
        match self.settings.colors.get(name) {
            Some(channels) => Color::from_channels(channels),
            None => Color::from_hex(name),
        }
    }

    /// Resolve a font key to the font name or path from the settings.
    #[must_use]
    pub fn font(&self, key: &str) -> Option<&str> {
        self.settings.fonts.get(key).map(String::as_str)
    }
}

impl StyleContext for StyleSheet {
    fn apply_to(&self, element: &mut Element) {
        let Some(rule) = element.style.as_deref().and_then(|name| self.resolve(name)) else {
            return;
        };

        if element.font.is_none() {
            if let Some(key) = &rule.font {
                element.font = Some(self.font(key).map_or_else(
                    || {
                        warn_once("Style", &format!("unknown font '{key}'"));
                        key.clone()
                    },
                    str::to_string,
                ));
            }
        }
        if element.font_size.is_none() {
            element.font_size = rule.font_size;
        }
        if element.margin.is_none() {
            element.margin = rule.margin;
        }
        if element.rgba().is_none() {
            if let Some(name) = &rule.color {
                match self.color(name) {
                    Some(color) => element.set_color(color),
                    None => warn_once("Style", &format!("unknown color '{name}'")),
                }
            }
        }
        if element.area.width.is_none() {
            element.area.width = rule.width;
        }
        if element.area.height.is_none() {
            element.area.height = rule.height;
        }
        if element.area.align.horizontal == Align::Inherit {
            if let Some(align) = rule.align {
                element.area.align.horizontal = align;
            }
        }
        if element.area.align.vertical == Align::Inherit {
            if let Some(align) = rule.vertical_align {
                element.area.align.vertical = align;
            }
        }
    }
}
