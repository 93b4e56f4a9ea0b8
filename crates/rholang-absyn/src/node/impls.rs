//! Node conveniences: constructors and From conversions

use super::*;

// ═══════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════

impl Value {
    /// Create a string literal value
    pub fn string(s: impl Into<String>) -> Self {
        Value::from(CString::new(s))
    }

    /// Create an integer value
    pub fn int(value: i64) -> Self {
        Value::from(QInt::new(value))
    }

    /// Create a floating point value
    pub fn double(value: f64) -> Self {
        Value::from(QDouble::new(value))
    }

    /// Create a boolean value
    pub fn bool(value: bool) -> Self {
        Value::from(QBool::new(value))
    }

    /// Create a character value
    pub fn char(value: char) -> Self {
        Value::EChar(EChar::new(value))
    }

    /// Create a variable reference
    pub fn var(name: impl Into<String>) -> Self {
        Value::EVar(EVar::new(name))
    }

    /// Create a tuple value
    pub fn tuple(elems: Vec<Value>) -> Self {
        Value::ETuple(ETuple::new(elems))
    }

    /// Create an array value
    pub fn array(elems: Vec<Value>) -> Self {
        Value::from(CArray::new(elems))
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Conversions
// ═══════════════════════════════════════════════════════════════════

impl From<QBool> for Quantity {
    fn from(node: QBool) -> Self {
        Quantity::QBool(node)
    }
}

impl From<QInt> for Quantity {
    fn from(node: QInt) -> Self {
        Quantity::QInt(node)
    }
}

impl From<QDouble> for Quantity {
    fn from(node: QDouble) -> Self {
        Quantity::QDouble(node)
    }
}

impl From<CString> for Collect {
    fn from(node: CString) -> Self {
        Collect::CString(node)
    }
}

impl From<CArray> for Collect {
    fn from(node: CArray) -> Self {
        Collect::CArray(node)
    }
}

impl From<Quantity> for Value {
    fn from(quantity: Quantity) -> Self {
        Value::VQuant(VQuant::new(quantity))
    }
}

impl From<Collect> for Value {
    fn from(collect: Collect) -> Self {
        Value::VCollect(VCollect::new(collect))
    }
}

impl From<QBool> for Value {
    fn from(node: QBool) -> Self {
        Value::from(Quantity::from(node))
    }
}

impl From<QInt> for Value {
    fn from(node: QInt) -> Self {
        Value::from(Quantity::from(node))
    }
}

impl From<QDouble> for Value {
    fn from(node: QDouble) -> Self {
        Value::from(Quantity::from(node))
    }
}

impl From<CString> for Value {
    fn from(node: CString) -> Self {
        Value::from(Collect::from(node))
    }
}

impl From<CArray> for Value {
    fn from(node: CArray) -> Self {
        Value::from(Collect::from(node))
    }
}

impl From<EChar> for Value {
    fn from(node: EChar) -> Self {
        Value::EChar(node)
    }
}

impl From<ETuple> for Value {
    fn from(node: ETuple) -> Self {
        Value::ETuple(node)
    }
}

impl From<EVar> for Value {
    fn from(node: EVar) -> Self {
        Value::EVar(node)
    }
}
