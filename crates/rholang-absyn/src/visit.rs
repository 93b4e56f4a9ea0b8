//! Double dispatch over the node family
//!
//! A [`Visitor`] is a processor with one operation per grammar production.
//! Nodes choose the operation: calling [`Node::accept`] on any node, or on
//! any category enum wrapping it, runs exactly the operation for that
//! node's production.
//!
//! ```text
//! value.accept(&mut visitor, arg)
//!   └─ Value::VCollect ─ VCollect::accept ─ visitor.visit_vcollect(node, arg)
//! ```
//!
//! Every operation is required. Adding a production to the grammar adds a
//! method here, and every existing processor stops compiling until it
//! handles the new production.
//!
//! The argument type `A` is chosen by the processor. It carries whatever
//! per-call context the processor needs (a formatter, a depth counter, or
//! `()`), and the same processor may accept several argument types.
//!
//! [`Node::accept`]: crate::Node::accept

use crate::node::{CArray, CString, EChar, ETuple, EVar, QBool, QDouble, QInt, VCollect, VQuant};

/// A processor over the node family.
///
/// Failures are expressed through [`Output`](Visitor::Output), usually a
/// `Result`. Dispatch returns whatever the operation returns.
pub trait Visitor<A> {
    /// Result type shared by every operation
    type Output;

    /// Visit a quantity value
    fn visit_vquant(&mut self, node: &VQuant, arg: A) -> Self::Output;

    /// Visit a character literal
    fn visit_echar(&mut self, node: &EChar, arg: A) -> Self::Output;

    /// Visit a tuple
    fn visit_etuple(&mut self, node: &ETuple, arg: A) -> Self::Output;

    /// Visit a collection value
    fn visit_vcollect(&mut self, node: &VCollect, arg: A) -> Self::Output;

    /// Visit a variable reference
    fn visit_evar(&mut self, node: &EVar, arg: A) -> Self::Output;

    /// Visit a boolean literal
    fn visit_qbool(&mut self, node: &QBool, arg: A) -> Self::Output;

    /// Visit an integer literal
    fn visit_qint(&mut self, node: &QInt, arg: A) -> Self::Output;

    /// Visit a floating point literal
    fn visit_qdouble(&mut self, node: &QDouble, arg: A) -> Self::Output;

    /// Visit a string literal
    fn visit_cstring(&mut self, node: &CString, arg: A) -> Self::Output;

    /// Visit an array literal
    fn visit_carray(&mut self, node: &CArray, arg: A) -> Self::Output;
}
