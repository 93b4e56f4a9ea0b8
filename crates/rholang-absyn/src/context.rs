//! Lowering context configuration

use crate::error::{LowerError, Result};

/// Configuration and position for lowering.
///
/// The context is the argument handed through every dispatch call of a
/// [`Lower`](crate::Lower) run. It is `Copy`: each child gets its own
/// context one level deeper than its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LowerContext {
    /// Maximum nesting depth (stack overflow protection)
    pub max_depth: usize,

    /// Whether to record each production visited (for debugging)
    pub trace: bool,

    depth: usize,
}

impl Default for LowerContext {
    fn default() -> Self {
        Self {
            max_depth: 256,
            trace: false,
            depth: 0,
        }
    }
}

impl LowerContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom depth limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }

    /// Enable or disable tracing.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Nesting depth of the node currently being lowered.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Context for the children of the current node.
    pub fn descend(self) -> Result<Self> {
        if self.depth >= self.max_depth {
            return Err(LowerError::DepthExceeded {
                max_depth: self.max_depth,
            });
        }
        Ok(Self {
            depth: self.depth + 1,
            ..self
        })
    }
}
