//! Element colors.
//!
//! A color is an RGB triple with an optional fourth channel used as the
//! element's opacity.

use serde::Serialize;

/// An sRGB color with optional alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    /// Red, green and blue channels (0-255).
    pub rgb: [u8; 3],
    /// Opacity between 0 and 1, if the color carries one.
    pub alpha: Option<f32>,
}

impl Color {
    /// Opaque black, used when an element has no color of its own.
    pub const BLACK: Self = Self {
        rgb: [0, 0, 0],
        alpha: None,
    };

    /// A color without an alpha channel.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            rgb: [r, g, b],
            alpha: None,
        }
    }

    /// A color with an alpha channel.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            rgb: [r, g, b],
            alpha: Some(a),
        }
    }

    /// Build a color from a style sheet channel list: `[r, g, b]` or
    /// `[r, g, b, a]`. RGB channels are clamped to 0-255 and alpha to 0-1;
    /// a NaN alpha is dropped.
    ///
    /// Returns `None` for any other length.
    #[must_use]
    pub fn from_channels(channels: &[f32]) -> Option<Self> {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let channel = |v: f32| v.clamp(0.0, 255.0).round() as u8;
        match *channels {
            [r, g, b] => Some(Self::rgb(channel(r), channel(g), channel(b))),
            [r, g, b, a] if a.is_nan() => Some(Self::rgb(channel(r), channel(g), channel(b))),
            [r, g, b, a] => Some(Self::rgba(
                channel(r),
                channel(g),
                channel(b),
                a.clamp(0.0, 1.0),
            )),
            _ => None,
        }
    }

    /// Parse hex notation: `#rgb`, `#rrggbb`, or `#rrggbbaa`.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let pair = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        let single = |i: usize| u8::from_str_radix(&hex.get(i..=i)?.repeat(2), 16).ok();
        match hex.len() {
            3 => Some(Self::rgb(single(0)?, single(1)?, single(2)?)),
            6 => Some(Self::rgb(pair(0)?, pair(2)?, pair(4)?)),
            8 => Some(Self::rgba(
                pair(0)?,
                pair(2)?,
                pair(4)?,
                f32::from(pair(6)?) / 255.0,
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_channels() {
        assert_eq!(Color::from_channels(&[255.0, 0.0, 0.0]), Some(Color::rgb(255, 0, 0)));
        assert_eq!(
            Color::from_channels(&[0.0, 0.0, 300.0, 0.5]),
            Some(Color::rgba(0, 0, 255, 0.5))
        );
        assert_eq!(Color::from_channels(&[1.0, 2.0]), None);
    }

    #[test]
    fn test_alpha_is_clamped() {
        assert_eq!(
            Color::from_channels(&[0.0, 0.0, 0.0, 5.0]),
            Some(Color::rgba(0, 0, 0, 1.0))
        );
        assert_eq!(
            Color::from_channels(&[0.0, 0.0, 0.0, -1.0]),
            Some(Color::rgba(0, 0, 0, 0.0))
        );
        assert_eq!(
            Color::from_channels(&[0.0, 0.0, 0.0, f32::NAN]),
            Some(Color::BLACK)
        );
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#000"), Some(Color::BLACK));
        assert_eq!(Color::from_hex("336699"), Some(Color::rgb(0x33, 0x66, 0x99)));
        assert_eq!(Color::from_hex("#ff000000"), Some(Color::rgba(255, 0, 0, 0.0)));
        assert_eq!(Color::from_hex("#12"), None);
    }
}
