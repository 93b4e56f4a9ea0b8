//! Tree-to-tree rewriting
//!
//! [`Fold`] consumes a tree and builds a new one. Every method defaults to
//! rebuilding its input unchanged through the matching free function, so a
//! rewrite only overrides the productions it cares about:
//!
//! ```
//! use rholang_absyn::{CString, Fold, Value};
//!
//! struct Shout;
//!
//! impl Fold for Shout {
//!     fn fold_cstring(&mut self, node: CString) -> CString {
//!         CString::new(node.as_str().to_uppercase())
//!     }
//! }
//!
//! let tree = Value::tuple(vec![Value::string("hi"), Value::int(1)]);
//! let loud = Shout.fold_value(tree);
//! assert_eq!(loud, Value::tuple(vec![Value::string("HI"), Value::int(1)]));
//! ```

use crate::node::{
    CArray, CString, Collect, EChar, ETuple, EVar, QBool, QDouble, QInt, Quantity, VCollect,
    VQuant, Value,
};

/// A rewriting traversal. See the module docs.
pub trait Fold {
    /// Rewrite a value
    fn fold_value(&mut self, node: Value) -> Value {
        fold_value(self, node)
    }

    /// Rewrite a quantity
    fn fold_quantity(&mut self, node: Quantity) -> Quantity {
        fold_quantity(self, node)
    }

    /// Rewrite a collection
    fn fold_collect(&mut self, node: Collect) -> Collect {
        fold_collect(self, node)
    }

    /// Rewrite a quantity value
    fn fold_vquant(&mut self, node: VQuant) -> VQuant {
        fold_vquant(self, node)
    }

    /// Rewrite a character literal
    fn fold_echar(&mut self, node: EChar) -> EChar {
        node
    }

    /// Rewrite a tuple
    fn fold_etuple(&mut self, node: ETuple) -> ETuple {
        fold_etuple(self, node)
    }

    /// Rewrite a collection value
    fn fold_vcollect(&mut self, node: VCollect) -> VCollect {
        fold_vcollect(self, node)
    }

    /// Rewrite a variable reference
    fn fold_evar(&mut self, node: EVar) -> EVar {
        node
    }

    /// Rewrite a boolean literal
    fn fold_qbool(&mut self, node: QBool) -> QBool {
        node
    }

    /// Rewrite an integer literal
    fn fold_qint(&mut self, node: QInt) -> QInt {
        node
    }

    /// Rewrite a floating point literal
    fn fold_qdouble(&mut self, node: QDouble) -> QDouble {
        node
    }

    /// Rewrite a string literal
    fn fold_cstring(&mut self, node: CString) -> CString {
        node
    }

    /// Rewrite an array literal
    fn fold_carray(&mut self, node: CArray) -> CArray {
        fold_carray(self, node)
    }
}

/// Rebuild a value, folding the production it wraps.
pub fn fold_value<F: Fold + ?Sized>(f: &mut F, node: Value) -> Value {
    match node {
        Value::VQuant(node) => Value::VQuant(f.fold_vquant(node)),
        Value::EChar(node) => Value::EChar(f.fold_echar(node)),
        Value::ETuple(node) => Value::ETuple(f.fold_etuple(node)),
        Value::VCollect(node) => Value::VCollect(f.fold_vcollect(node)),
        Value::EVar(node) => Value::EVar(f.fold_evar(node)),
    }
}

/// Rebuild a quantity, folding the production it wraps.
pub fn fold_quantity<F: Fold + ?Sized>(f: &mut F, node: Quantity) -> Quantity {
    match node {
        Quantity::QBool(node) => Quantity::QBool(f.fold_qbool(node)),
        Quantity::QInt(node) => Quantity::QInt(f.fold_qint(node)),
        Quantity::QDouble(node) => Quantity::QDouble(f.fold_qdouble(node)),
    }
}

/// Rebuild a collection, folding the production it wraps.
pub fn fold_collect<F: Fold + ?Sized>(f: &mut F, node: Collect) -> Collect {
    match node {
        Collect::CString(node) => Collect::CString(f.fold_cstring(node)),
        Collect::CArray(node) => Collect::CArray(f.fold_carray(node)),
    }
}

/// Rebuild a quantity value around its folded quantity.
pub fn fold_vquant<F: Fold + ?Sized>(f: &mut F, node: VQuant) -> VQuant {
    VQuant::new(f.fold_quantity(node.into_quantity()))
}

/// Rebuild a tuple from its folded elements.
pub fn fold_etuple<F: Fold + ?Sized>(f: &mut F, node: ETuple) -> ETuple {
    ETuple::new(
        node.into_elems()
            .into_iter()
            .map(|elem| f.fold_value(elem))
            .collect(),
    )
}

/// Rebuild a collection value around its folded collection.
pub fn fold_vcollect<F: Fold + ?Sized>(f: &mut F, node: VCollect) -> VCollect {
    VCollect::new(f.fold_collect(node.into_collect()))
}

/// Rebuild an array from its folded elements.
pub fn fold_carray<F: Fold + ?Sized>(f: &mut F, node: CArray) -> CArray {
    CArray::new(
        node.into_elems()
            .into_iter()
            .map(|elem| f.fold_value(elem))
            .collect(),
    )
}
