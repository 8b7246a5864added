//! Painting
//!
//! Rendering a laid-out element tree produces drawing commands, handed one
//! at a time to a [`Surface`]. The surface owns everything past geometry:
//! fetching image bytes, embedding fonts, writing the page stream.
//!
//! ```text
//! Style → Layout → Render → Surface
//!                     ↓
//!               DisplayList
//! ```
//!
//! [`DisplayList`] is the built-in surface: it records the commands in
//! painting order so a host can replay them onto any backend.

mod display_list;

pub use display_list::{DisplayCommand, DisplayList, Surface};
