//! The node family: one type per grammar production
//!
//! Productions of the same grammar category are gathered into a sum type:
//!
//! - [`Value`]: `VQuant`, `EChar`, `ETuple`, `VCollect`, `EVar`
//! - [`Quantity`]: `QBool`, `QInt`, `QDouble`
//! - [`Collect`]: `CString`, `CArray`
//!
//! Every node is immutable once built. Fields are private and there are no
//! setters; "editing" a tree means building a new one (see [`crate::fold`]).
//! Equality and hashing are structural, so two nodes built separately from
//! equal payloads are interchangeable.

mod collect;
mod impls;
mod quantity;
mod value;

pub use collect::{CArray, CString, Collect};
pub use quantity::{Double, QBool, QDouble, QInt, Quantity};
pub use value::{EChar, ETuple, EVar, VCollect, VQuant, Value};

use std::fmt;
use std::hash::Hash;

use crate::visit::Visitor;

/// Common contract of every abstract syntax node.
///
/// A node is a plain value: cloneable, comparable and hashable by content,
/// and shareable across threads. Its single behavior is [`accept`], the
/// dispatch entry point.
///
/// [`accept`]: Node::accept
pub trait Node: Clone + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Hand this node to the visitor operation for its production.
    ///
    /// Exactly one operation runs, receiving `self` and `arg`. Its result is
    /// returned as is, including any error it reports.
    fn accept<A, V>(&self, visitor: &mut V, arg: A) -> V::Output
    where
        V: Visitor<A> + ?Sized;

    /// Name of the grammar production this node was built from.
    fn production(&self) -> &'static str {
        self.accept(&mut ProductionName, ())
    }
}

/// Resolves production names through dispatch.
struct ProductionName;

impl Visitor<()> for ProductionName {
    type Output = &'static str;

    fn visit_vquant(&mut self, _node: &VQuant, _arg: ()) -> &'static str {
        "VQuant"
    }

    fn visit_echar(&mut self, _node: &EChar, _arg: ()) -> &'static str {
        "EChar"
    }

    fn visit_etuple(&mut self, _node: &ETuple, _arg: ()) -> &'static str {
        "ETuple"
    }

    fn visit_vcollect(&mut self, _node: &VCollect, _arg: ()) -> &'static str {
        "VCollect"
    }

    fn visit_evar(&mut self, _node: &EVar, _arg: ()) -> &'static str {
        "EVar"
    }

    fn visit_qbool(&mut self, _node: &QBool, _arg: ()) -> &'static str {
        "QBool"
    }

    fn visit_qint(&mut self, _node: &QInt, _arg: ()) -> &'static str {
        "QInt"
    }

    fn visit_qdouble(&mut self, _node: &QDouble, _arg: ()) -> &'static str {
        "QDouble"
    }

    fn visit_cstring(&mut self, _node: &CString, _arg: ()) -> &'static str {
        "CString"
    }

    fn visit_carray(&mut self, _node: &CArray, _arg: ()) -> &'static str {
        "CArray"
    }
}
