//! Common utilities for the Folio print layout engine.
//!
//! This crate provides shared infrastructure used by the layout core and its hosts:
//! - **Warning System** - colored terminal output for unresolved or unsupported input
//! - **Image Sources** - intrinsic pixel size and lookup key of a source image

pub mod image;
pub mod warning;
