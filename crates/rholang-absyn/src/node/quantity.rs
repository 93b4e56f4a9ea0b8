//! Quantity productions: booleans, integers and doubles

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::de::{self, Visitor as SerdeVisitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Node;
use crate::visit::Visitor;

/// The `Quantity` grammar category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantity {
    /// Boolean literal: `true`, `false`
    QBool(QBool),

    /// Integer literal: `42`
    QInt(QInt),

    /// Floating point literal: `1.5`
    QDouble(QDouble),
}

impl Node for Quantity {
    fn accept<A, V>(&self, visitor: &mut V, arg: A) -> V::Output
    where
        V: Visitor<A> + ?Sized,
    {
        match self {
            Quantity::QBool(node) => node.accept(visitor, arg),
            Quantity::QInt(node) => node.accept(visitor, arg),
            Quantity::QDouble(node) => node.accept(visitor, arg),
        }
    }
}

/// A boolean literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QBool {
    value: bool,
}

impl QBool {
    /// Create a boolean literal node
    pub fn new(value: bool) -> Self {
        Self { value }
    }

    /// The literal's value
    pub fn value(&self) -> bool {
        self.value
    }
}

impl Node for QBool {
    fn accept<A, V>(&self, visitor: &mut V, arg: A) -> V::Output
    where
        V: Visitor<A> + ?Sized,
    {
        visitor.visit_qbool(self, arg)
    }
}

/// An integer literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QInt {
    value: i64,
}

impl QInt {
    /// Create an integer literal node
    pub fn new(value: i64) -> Self {
        Self { value }
    }

    /// The literal's value
    pub fn value(&self) -> i64 {
        self.value
    }
}

impl Node for QInt {
    fn accept<A, V>(&self, visitor: &mut V, arg: A) -> V::Output
    where
        V: Visitor<A> + ?Sized,
    {
        visitor.visit_qint(self, arg)
    }
}

/// A floating point literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QDouble {
    value: Double,
}

impl QDouble {
    /// Create a floating point literal node
    pub fn new(value: impl Into<Double>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The literal's value
    pub fn value(&self) -> f64 {
        self.value.get()
    }
}

impl Node for QDouble {
    fn accept<A, V>(&self, visitor: &mut V, arg: A) -> V::Output
    where
        V: Visitor<A> + ?Sized,
    {
        visitor.visit_qdouble(self, arg)
    }
}

/// An `f64` that compares by value identity.
///
/// Two doubles are equal when their bit patterns are equal, with every NaN
/// treated as the same value. So `NaN == NaN` and `0.0 != -0.0`, which is
/// what lets trees holding doubles satisfy `Eq` and `Hash`.
///
/// Finite values serialize as numbers. NaN and the infinities serialize as
/// the strings `"NaN"`, `"inf"` and `"-inf"`, since formats like JSON have
/// no number for them.
#[derive(Clone, Copy)]
pub struct Double(f64);

impl Double {
    /// Wrap a float
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// The wrapped float
    pub fn get(self) -> f64 {
        self.0
    }

    fn bits(self) -> u64 {
        if self.0.is_nan() {
            f64::NAN.to_bits()
        } else {
            self.0.to_bits()
        }
    }
}

impl From<f64> for Double {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl PartialEq for Double {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for Double {}

impl Hash for Double {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

impl Serialize for Double {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.0;
        if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if value.is_infinite() {
            serializer.serialize_str(if value > 0.0 { "inf" } else { "-inf" })
        } else {
            serializer.serialize_f64(value)
        }
    }
}

struct DoubleVisitor;

impl<'de> SerdeVisitor<'de> for DoubleVisitor {
    type Value = Double;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or one of \"NaN\", \"inf\", \"-inf\"")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Double, E> {
        Ok(Double(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Double, E> {
        Ok(Double(value as f64))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Double, E> {
        Ok(Double(value as f64))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Double, E> {
        match value {
            "NaN" => Ok(Double(f64::NAN)),
            "inf" => Ok(Double(f64::INFINITY)),
            "-inf" => Ok(Double(f64::NEG_INFINITY)),
            other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for Double {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DoubleVisitor)
    }
}

impl fmt::Debug for Double {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_double_nan_equals_nan() {
        let a = Double::new(f64::NAN);
        let b = Double::new(-f64::NAN);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_double_signed_zero_distinct() {
        assert_ne!(Double::new(0.0), Double::new(-0.0));
    }

    #[test]
    fn test_double_equal_values() {
        assert_eq!(Double::new(1.5), Double::from(1.5));
        assert_eq!(hash_of(&Double::new(1.5)), hash_of(&Double::new(1.5)));
        assert_ne!(Double::new(1.5), Double::new(2.5));
    }

    #[test]
    fn test_double_serializes_non_finite_as_strings() {
        assert_eq!(
            serde_json::to_value(Double::new(f64::NAN)).unwrap(),
            serde_json::json!("NaN")
        );
        assert_eq!(
            serde_json::to_value(Double::new(f64::INFINITY)).unwrap(),
            serde_json::json!("inf")
        );
        assert_eq!(
            serde_json::to_value(Double::new(f64::NEG_INFINITY)).unwrap(),
            serde_json::json!("-inf")
        );
        assert_eq!(
            serde_json::to_value(Double::new(1.5)).unwrap(),
            serde_json::json!(1.5)
        );
    }

    #[test]
    fn test_double_deserializes_integers_and_rejects_other_strings() {
        let two: Double = serde_json::from_str("2").unwrap();
        assert_eq!(two, Double::new(2.0));
        assert!(serde_json::from_str::<Double>("\"one\"").is_err());
        assert!(serde_json::from_str::<Double>("null").is_err());
    }

    #[test]
    fn test_quantity_accessors() {
        assert!(QBool::new(true).value());
        assert_eq!(QInt::new(-7).value(), -7);
        assert_eq!(QDouble::new(2.5).value(), 2.5);
    }

    #[test]
    fn test_quantity_variants_are_distinct() {
        let one = Quantity::QInt(QInt::new(1));
        let one_point_oh = Quantity::QDouble(QDouble::new(1.0));
        let truth = Quantity::QBool(QBool::new(true));
        assert_ne!(one, one_point_oh);
        assert_ne!(one, truth);
    }
}
