//! Value productions

use serde::{Deserialize, Serialize};

use super::{Collect, Node, Quantity};
use crate::visit::Visitor;

/// The `Value` grammar category, root of every tree in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    /// A quantity: boolean, integer or double
    VQuant(VQuant),

    /// Character literal: `'c'`
    EChar(EChar),

    /// Tuple: `(v1, v2)`
    ETuple(ETuple),

    /// A collection: string or array
    VCollect(VCollect),

    /// Variable reference: `x`
    EVar(EVar),
}

impl Node for Value {
    fn accept<A, V>(&self, visitor: &mut V, arg: A) -> V::Output
    where
        V: Visitor<A> + ?Sized,
    {
        match self {
            Value::VQuant(node) => node.accept(visitor, arg),
            Value::EChar(node) => node.accept(visitor, arg),
            Value::ETuple(node) => node.accept(visitor, arg),
            Value::VCollect(node) => node.accept(visitor, arg),
            Value::EVar(node) => node.accept(visitor, arg),
        }
    }
}

/// A quantity used as a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VQuant {
    quantity: Quantity,
}

impl VQuant {
    /// Create a quantity value node
    pub fn new(quantity: Quantity) -> Self {
        Self { quantity }
    }

    /// The wrapped quantity
    pub fn quantity(&self) -> &Quantity {
        &self.quantity
    }

    /// Take the wrapped quantity
    pub fn into_quantity(self) -> Quantity {
        self.quantity
    }
}

impl Node for VQuant {
    fn accept<A, V>(&self, visitor: &mut V, arg: A) -> V::Output
    where
        V: Visitor<A> + ?Sized,
    {
        visitor.visit_vquant(self, arg)
    }
}

/// A character literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EChar {
    value: char,
}

impl EChar {
    /// Create a character literal node
    pub fn new(value: char) -> Self {
        Self { value }
    }

    /// The literal's character
    pub fn value(&self) -> char {
        self.value
    }
}

impl Node for EChar {
    fn accept<A, V>(&self, visitor: &mut V, arg: A) -> V::Output
    where
        V: Visitor<A> + ?Sized,
    {
        visitor.visit_echar(self, arg)
    }
}

/// A tuple owning its elements in source order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ETuple {
    elems: Vec<Value>,
}

impl ETuple {
    /// Create a tuple node
    pub fn new(elems: Vec<Value>) -> Self {
        Self { elems }
    }

    /// The elements
    pub fn elems(&self) -> &[Value] {
        &self.elems
    }

    /// Take the elements
    pub fn into_elems(self) -> Vec<Value> {
        self.elems
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    /// Whether the tuple is empty
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }
}

impl Node for ETuple {
    fn accept<A, V>(&self, visitor: &mut V, arg: A) -> V::Output
    where
        V: Visitor<A> + ?Sized,
    {
        visitor.visit_etuple(self, arg)
    }
}

/// A collection used as a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VCollect {
    collect: Collect,
}

impl VCollect {
    /// Create a collection value node
    pub fn new(collect: Collect) -> Self {
        Self { collect }
    }

    /// The wrapped collection
    pub fn collect(&self) -> &Collect {
        &self.collect
    }

    /// Take the wrapped collection
    pub fn into_collect(self) -> Collect {
        self.collect
    }
}

impl Node for VCollect {
    fn accept<A, V>(&self, visitor: &mut V, arg: A) -> V::Output
    where
        V: Visitor<A> + ?Sized,
    {
        visitor.visit_vcollect(self, arg)
    }
}

/// A variable reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EVar {
    name: String,
}

impl EVar {
    /// Create a variable reference node
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The variable's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Take the variable's name
    pub fn into_name(self) -> String {
        self.name
    }
}

impl Node for EVar {
    fn accept<A, V>(&self, visitor: &mut V, arg: A) -> V::Output
    where
        V: Visitor<A> + ?Sized,
    {
        visitor.visit_evar(self, arg)
    }
}
