//! Error types for tree processors
//!
//! The node family has no failure modes of its own. Processors that can
//! fail report it through their output type, and dispatch hands those
//! errors back untouched.

use thiserror::Error;

/// Errors raised while lowering a tree into `syn` expressions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LowerError {
    /// NaN and the infinities have no Rust literal form
    #[error("Cannot lower non-finite double `{value}` to a literal")]
    NonFiniteDouble {
        /// The offending value
        value: f64,
    },

    /// Variable name that is not a Rust identifier
    #[error("Cannot lower variable `{name}`: {reason}")]
    InvalidIdent {
        /// The variable name as written
        name: String,
        /// Why `syn` rejected it
        reason: String,
    },

    /// Tree nested deeper than the context allows
    #[error("Tree nesting exceeds maximum depth of {max_depth}")]
    DepthExceeded {
        /// The configured limit
        max_depth: usize,
    },
}

/// Result type alias for lowering
pub type Result<T> = std::result::Result<T, LowerError>;
