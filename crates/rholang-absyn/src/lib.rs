//! # rholang-absyn
//!
//! Abstract syntax for the Rholang value grammar.
//!
//! Every grammar production is one immutable Rust type, and the productions
//! of a grammar category are gathered into a sum type for that category.
//! Nodes compare and hash structurally, so equal subtrees can be used as map
//! keys no matter where they were built.
//!
//! ## Architecture
//!
//! - **Node family** ([`node`]): `Value`, `Quantity` and `Collect` with their
//!   productions, e.g. [`CString`] for string literals
//! - **Dispatch** ([`visit`]): [`Node::accept`] hands a node to the one
//!   [`Visitor`] operation for its production
//! - **Traversals**: rebuilding ([`fold`]), accumulating ([`reduce`]),
//!   printing ([`print`]), counting ([`census`]) and lowering to `syn`
//!   expressions ([`lower`])
//! - **Caches** ([`intern`]): concurrent tables keyed by subtrees
//!
//! The parser that builds these trees and the analyses that consume them
//! live elsewhere.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod census;
pub mod context;
pub mod error;
pub mod fold;
pub mod intern;
pub mod lower;
pub mod node;
pub mod print;
pub mod reduce;
pub mod visit;

// Re-export main types
pub use census::{census, Census};
pub use context::LowerContext;
pub use error::{LowerError, Result};
pub use fold::Fold;
pub use intern::{Interner, Memo};
pub use lower::{lower, to_tokens, Lower};
pub use node::{
    CArray, CString, Collect, Double, EChar, ETuple, EVar, Node, QBool, QDouble, QInt, Quantity,
    VCollect, VQuant, Value,
};
pub use print::{show, Printer, Show};
pub use reduce::{Reduce, StringLiterals};
pub use visit::Visitor;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
