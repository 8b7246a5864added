//! JSON page descriptions.
//!
//! ```json
//! {
//!   "width": 8.5,
//!   "height": 11,
//!   "align": { "horizontal": "center" },
//!   "elements": [
//!     { "type": "text", "text": "Spring Trip", "style": "title", "top": 0.5 },
//!     { "type": "image", "src": "cover.jpg", "pixelWidth": 1600, "pixelHeight": 1200,
//!       "scale": "fit", "top": 1 },
//!     { "type": "column", "number": 2, "left": 0.5, "right": 0.5, "top": 6, "bottom": 0.5,
//!       "children": [ { "type": "text", "text": "Day one", "align": { "horizontal": "left" } } ] }
//!   ]
//! }
//! ```

use anyhow::{Context, Result, anyhow};
use folio_common::image::ImageSource;
use folio_layout::{Alignment, Area, Color, Element, ElementKind, Scale};
use serde::Deserialize;

/// A page: its size in inches and the elements placed on it.
#[derive(Debug, Deserialize)]
pub struct PageSpec {
    /// Page width in inches.
    pub width: f32,
    /// Page height in inches.
    pub height: f32,
    /// Page origin on the sheet.
    #[serde(default)]
    pub left: f32,
    /// Page origin on the sheet.
    #[serde(default)]
    pub top: f32,
    /// Alignment inherited by elements that set none.
    #[serde(default)]
    pub align: Alignment,
    /// Top-level elements.
    #[serde(default)]
    pub elements: Vec<ElementSpec>,
}

/// One element of a page description.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementSpec {
    #[serde(flatten)]
    kind: KindSpec,
    style: Option<String>,
    left: Option<f32>,
    top: Option<f32>,
    width: Option<f32>,
    height: Option<f32>,
    right: Option<f32>,
    bottom: Option<f32>,
    min_width: Option<f32>,
    min_height: Option<f32>,
    #[serde(default)]
    align: Alignment,
    #[serde(default)]
    scale: Scale,
    color: Option<Vec<f32>>,
    opacity: Option<f32>,
    #[serde(default)]
    z_index: i32,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum KindSpec {
    Text {
        text: String,
    },
    #[serde(rename_all = "camelCase")]
    Image {
        src: String,
        pixel_width: u32,
        pixel_height: u32,
    },
    #[serde(rename_all = "camelCase")]
    Shape {
        #[serde(default)]
        border_width: f32,
        border_color: Option<String>,
    },
    Group {
        #[serde(default)]
        children: Vec<ElementSpec>,
    },
    Column {
        number: u32,
        #[serde(default)]
        children: Vec<ElementSpec>,
    },
}

impl PageSpec {
    /// Parse a page description.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid page description")
    }

    /// The page as a root group: its area is the page, its children the
    /// page's elements.
    pub fn into_root(self) -> Result<Element> {
        let children = self
            .elements
            .into_iter()
            .map(ElementSpec::into_element)
            .collect::<Result<Vec<_>>>()?;

        let mut root = Element::group(children).with_style("page");
        root.area = Area::with_bounds(self.left, self.top, self.width, self.height);
        root.area.align = self.align;
        Ok(root)
    }
}

impl ElementSpec {
    fn into_element(self) -> Result<Element> {
        let mut element = match self.kind {
            KindSpec::Text { text } => Element::text(text),
            KindSpec::Image {
                src,
                pixel_width,
                pixel_height,
            } => Element::image(ImageSource::new(src, pixel_width, pixel_height)),
            KindSpec::Shape {
                border_width,
                border_color,
            } => {
                let mut element = Element::shape();
                if let ElementKind::Shape(shape) = &mut element.kind {
                    shape.border_width = border_width;
                    if let Some(hex) = border_color {
                        shape.border_color = Color::from_hex(&hex)
                            .ok_or_else(|| anyhow!("invalid border color '{hex}'"))?;
                    }
                }
                element
            }
            KindSpec::Group { children } => Element::group(Self::into_elements(children)?),
            KindSpec::Column { number, children } => {
                Element::column(number, Self::into_elements(children)?)
            }
        };

        if let Some(style) = self.style {
            element.style = Some(style);
        }
        element.area.left = self.left;
        element.area.top = self.top;
        element.area.width = self.width;
        element.area.height = self.height;
        element.area.align = self.align;
        element.right = self.right;
        element.bottom = self.bottom;
        element.min_width = self.min_width;
        element.min_height = self.min_height;
        element.scale_to = self.scale;
        element.z_index = self.z_index;
        if let Some(channels) = self.color {
            let color = Color::from_channels(&channels)
                .ok_or_else(|| anyhow!("color needs 3 or 4 channels, got {}", channels.len()))?;
            element.set_color(color);
        }
        if let Some(opacity) = self.opacity {
            element.set_opacity(opacity);
        }
        Ok(element)
    }

    fn into_elements(specs: Vec<Self>) -> Result<Vec<Element>> {
        specs.into_iter().map(Self::into_element).collect()
    }
}
