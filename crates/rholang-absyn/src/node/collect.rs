//! Collection productions: string literals and arrays

use serde::{Deserialize, Serialize};

use super::{Node, Value};
use crate::visit::Visitor;

/// The `Collect` grammar category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Collect {
    /// String literal: `"text"`
    CString(CString),

    /// Array literal: `[v1, v2]`
    CArray(CArray),
}

impl Node for Collect {
    fn accept<A, V>(&self, visitor: &mut V, arg: A) -> V::Output
    where
        V: Visitor<A> + ?Sized,
    {
        match self {
            Collect::CString(node) => node.accept(visitor, arg),
            Collect::CArray(node) => node.accept(visitor, arg),
        }
    }
}

/// A string literal.
///
/// Holds the literal's text after the lexer has stripped the quotes and
/// decoded escapes. Any text is accepted, including the empty string.
///
/// ```
/// use rholang_absyn::{CString, Node};
///
/// let a = CString::new("abc");
/// let b = CString::new("abc");
/// assert_eq!(a, b);
/// assert_eq!(a.production(), "CString");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CString {
    string: String,
}

impl CString {
    /// Create a string literal node
    pub fn new(string: impl Into<String>) -> Self {
        Self {
            string: string.into(),
        }
    }

    /// The literal's text
    pub fn string(&self) -> &String {
        &self.string
    }

    /// The literal's text as a `&str`
    pub fn as_str(&self) -> &str {
        &self.string
    }

    /// Take the literal's text
    pub fn into_string(self) -> String {
        self.string
    }
}

impl Node for CString {
    fn accept<A, V>(&self, visitor: &mut V, arg: A) -> V::Output
    where
        V: Visitor<A> + ?Sized,
    {
        visitor.visit_cstring(self, arg)
    }
}

/// An array literal owning its elements in source order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CArray {
    elems: Vec<Value>,
}

impl CArray {
    /// Create an array node
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

    /// Whether the array is empty
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }
}

impl Node for CArray {
    fn accept<A, V>(&self, visitor: &mut V, arg: A) -> V::Output
    where
        V: Visitor<A> + ?Sized,
    {
        visitor.visit_carray(self, arg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cstring_accessors() {
        let node = CString::new("hello");
        assert_eq!(node.as_str(), "hello");
        assert_eq!(node.string(), "hello");
        assert_eq!(node.string().len(), 5);
        assert_eq!(node.into_string(), "hello".to_string());
    }

    #[test]
    fn test_empty_cstring_is_distinct() {
        assert_eq!(CString::new(""), CString::new(""));
        assert_ne!(CString::new(""), CString::new(" "));
        assert_ne!(CString::new(""), CString::new("a"));
    }

    #[test]
    fn test_carray_accessors() {
        let node = CArray::new(vec![Value::int(1), Value::string("a")]);
        assert_eq!(node.len(), 2);
        assert!(!node.is_empty());
        assert_eq!(node.elems()[1], Value::string("a"));
        assert!(CArray::new(vec![]).is_empty());
    }

    #[test]
    fn test_collect_variants_are_distinct() {
        let string = Collect::CString(CString::new(""));
        let array = Collect::CArray(CArray::new(vec![]));
        assert_ne!(string, array);
    }
}
