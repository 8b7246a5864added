//! Errors raised at the edges of the layout core.
//!
//! Geometry resolution itself never fails. Loading a style sheet and
//! handing commands to a drawing surface can.

use thiserror::Error;

/// A style sheet that could not be loaded.
#[derive(Debug, Error)]
pub enum StyleError {
    /// The style sheet is not valid JSON or does not match the schema.
    #[error("invalid style sheet: {0}")]
    Json(#[from] serde_json::Error),
    /// A rule inherits from a rule that does not exist.
    #[error("style rule '{rule}' inherits from unknown rule '{parent}'")]
    UnknownParent {
        /// The rule declaring the `inherit`.
        rule: String,
        /// The missing parent rule name.
        parent: String,
    },
    /// Following `inherit` links from a rule leads back to it.
    #[error("style rule '{0}' inherits from itself")]
    InheritCycle(String),
}

/// A drawing surface rejected a command.
#[derive(Debug, Error)]
#[error("{surface} could not draw {command}: {reason}")]
pub struct DrawError {
    /// Name of the surface.
    pub surface: String,
    /// Name of the rejected command.
    pub command: &'static str,
    /// Why it was rejected.
    pub reason: String,
}
