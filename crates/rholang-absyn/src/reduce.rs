//! Accumulating traversal
//!
//! [`Reduce`] folds a whole tree into one result. A terminal production
//! reduces to [`leaf`](Reduce::leaf), and a composite production combines
//! the reductions of its children, starting from `leaf`. Implementors only
//! override the productions that contribute something.

use crate::node::{
    CArray, CString, EChar, ETuple, EVar, Node, QBool, QDouble, QInt, VCollect, VQuant, Value,
};
use crate::visit::Visitor;

/// A reduction over the node family.
pub trait Reduce {
    /// The accumulated result
    type Output;

    /// Result for a node that contributes nothing
    fn leaf(&mut self) -> Self::Output;

    /// Merge two results, `left` first in source order
    fn combine(&mut self, left: Self::Output, right: Self::Output) -> Self::Output;

    /// Reduce any node, dispatching on its production.
    fn reduce<N: Node>(&mut self, node: &N) -> Self::Output {
        node.accept(&mut Reducer(self), ())
    }

    /// Reduce a sequence of sibling values left to right.
    fn reduce_all(&mut self, nodes: &[Value]) -> Self::Output {
        let mut acc = self.leaf();
        for node in nodes {
            let next = self.reduce(node);
            acc = self.combine(acc, next);
        }
        acc
    }

    /// Reduce a quantity value
    fn reduce_vquant(&mut self, node: &VQuant) -> Self::Output {
        let inner = self.reduce(node.quantity());
        let leaf = self.leaf();
        self.combine(leaf, inner)
    }

    /// Reduce a character literal
    fn reduce_echar(&mut self, _node: &EChar) -> Self::Output {
        self.leaf()
    }

    /// Reduce a tuple
    fn reduce_etuple(&mut self, node: &ETuple) -> Self::Output {
        self.reduce_all(node.elems())
    }

    /// Reduce a collection value
    fn reduce_vcollect(&mut self, node: &VCollect) -> Self::Output {
        let inner = self.reduce(node.collect());
        let leaf = self.leaf();
        self.combine(leaf, inner)
    }

    /// Reduce a variable reference
    fn reduce_evar(&mut self, _node: &EVar) -> Self::Output {
        self.leaf()
    }

    /// Reduce a boolean literal
    fn reduce_qbool(&mut self, _node: &QBool) -> Self::Output {
        self.leaf()
    }

    /// Reduce an integer literal
    fn reduce_qint(&mut self, _node: &QInt) -> Self::Output {
        self.leaf()
    }

    /// Reduce a floating point literal
    fn reduce_qdouble(&mut self, _node: &QDouble) -> Self::Output {
        self.leaf()
    }

    /// Reduce a string literal
    fn reduce_cstring(&mut self, _node: &CString) -> Self::Output {
        self.leaf()
    }

    /// Reduce an array literal
    fn reduce_carray(&mut self, node: &CArray) -> Self::Output {
        self.reduce_all(node.elems())
    }
}

/// Routes dispatch into the `reduce_*` methods of a [`Reduce`].
struct Reducer<'r, R: ?Sized>(&'r mut R);

impl<R: Reduce + ?Sized> Visitor<()> for Reducer<'_, R> {
    type Output = R::Output;

    fn visit_vquant(&mut self, node: &VQuant, _arg: ()) -> R::Output {
        self.0.reduce_vquant(node)
    }

    fn visit_echar(&mut self, node: &EChar, _arg: ()) -> R::Output {
        self.0.reduce_echar(node)
    }

    fn visit_etuple(&mut self, node: &ETuple, _arg: ()) -> R::Output {
        self.0.reduce_etuple(node)
    }

    fn visit_vcollect(&mut self, node: &VCollect, _arg: ()) -> R::Output {
        self.0.reduce_vcollect(node)
    }

    fn visit_evar(&mut self, node: &EVar, _arg: ()) -> R::Output {
        self.0.reduce_evar(node)
    }

    fn visit_qbool(&mut self, node: &QBool, _arg: ()) -> R::Output {
        self.0.reduce_qbool(node)
    }

    fn visit_qint(&mut self, node: &QInt, _arg: ()) -> R::Output {
        self.0.reduce_qint(node)
    }

    fn visit_qdouble(&mut self, node: &QDouble, _arg: ()) -> R::Output {
        self.0.reduce_qdouble(node)
    }

    fn visit_cstring(&mut self, node: &CString, _arg: ()) -> R::Output {
        self.0.reduce_cstring(node)
    }

    fn visit_carray(&mut self, node: &CArray, _arg: ()) -> R::Output {
        self.0.reduce_carray(node)
    }
}

/// Collects the text of every string literal, in source order.
///
/// ```
/// use rholang_absyn::{Reduce, StringLiterals, Value};
///
/// let tree = Value::array(vec![Value::string("a"), Value::int(1), Value::string("b")]);
/// assert_eq!(StringLiterals.reduce(&tree), vec!["a", "b"]);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct StringLiterals;

impl Reduce for StringLiterals {
    type Output = Vec<String>;

    fn leaf(&mut self) -> Vec<String> {
        Vec::new()
    }

    fn combine(&mut self, mut left: Vec<String>, right: Vec<String>) -> Vec<String> {
        left.extend(right);
        left
    }

    fn reduce_cstring(&mut self, node: &CString) -> Vec<String> {
        vec![node.as_str().to_string()]
    }
}
