//! Printing trees as text
//!
//! Two renderings are provided, both as visitors that take the output
//! formatter as their dispatch argument:
//!
//! - [`Printer`]: concrete Rholang syntax, used by every node's `Display`
//! - [`Show`]: the abstract S-expression form, e.g. `(CString "abc")`

use std::fmt::{self, Write as _};

use crate::node::{
    CArray, CString, Collect, EChar, ETuple, EVar, Node, QBool, QDouble, QInt, Quantity,
    VCollect, VQuant, Value,
};
use crate::visit::Visitor;

// ═══════════════════════════════════════════════════════════════════════
// Concrete Syntax
// ═══════════════════════════════════════════════════════════════════════

/// Renders nodes in concrete Rholang syntax.
///
/// ```
/// use rholang_absyn::Value;
///
/// let tree = Value::tuple(vec![Value::string("say \"hi\""), Value::int(-3)]);
/// assert_eq!(tree.to_string(), r#"("say \"hi\"", -3)"#);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Printer;

impl Printer {
    fn write_seq(
        &mut self,
        f: &mut fmt::Formatter<'_>,
        open: char,
        elems: &[Value],
        close: char,
    ) -> fmt::Result {
        f.write_char(open)?;
        for (i, elem) in elems.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            elem.accept(self, &mut *f)?;
        }
        f.write_char(close)
    }
}

impl<'a, 'f> Visitor<&'a mut fmt::Formatter<'f>> for Printer {
    type Output = fmt::Result;

    fn visit_vquant(&mut self, node: &VQuant, f: &'a mut fmt::Formatter<'f>) -> fmt::Result {
        node.quantity().accept(self, f)
    }

    fn visit_echar(&mut self, node: &EChar, f: &'a mut fmt::Formatter<'f>) -> fmt::Result {
        f.write_char('\'')?;
        write_escaped_char(f, node.value(), '\'')?;
        f.write_char('\'')
    }

    fn visit_etuple(&mut self, node: &ETuple, f: &'a mut fmt::Formatter<'f>) -> fmt::Result {
        self.write_seq(f, '(', node.elems(), ')')
    }

    fn visit_vcollect(&mut self, node: &VCollect, f: &'a mut fmt::Formatter<'f>) -> fmt::Result {
        node.collect().accept(self, f)
    }

    fn visit_evar(&mut self, node: &EVar, f: &'a mut fmt::Formatter<'f>) -> fmt::Result {
        f.write_str(node.name())
    }

    fn visit_qbool(&mut self, node: &QBool, f: &'a mut fmt::Formatter<'f>) -> fmt::Result {
        write!(f, "{}", node.value())
    }

    fn visit_qint(&mut self, node: &QInt, f: &'a mut fmt::Formatter<'f>) -> fmt::Result {
        write!(f, "{}", node.value())
    }

    fn visit_qdouble(&mut self, node: &QDouble, f: &'a mut fmt::Formatter<'f>) -> fmt::Result {
        // Debug keeps the fractional part: `1.0`, not `1`
        write!(f, "{:?}", node.value())
    }

    fn visit_cstring(&mut self, node: &CString, f: &'a mut fmt::Formatter<'f>) -> fmt::Result {
        f.write_char('"')?;
        for c in node.as_str().chars() {
            write_escaped_char(f, c, '"')?;
        }
        f.write_char('"')
    }

    fn visit_carray(&mut self, node: &CArray, f: &'a mut fmt::Formatter<'f>) -> fmt::Result {
        self.write_seq(f, '[', node.elems(), ']')
    }
}

fn write_escaped_char(f: &mut fmt::Formatter<'_>, c: char, quote: char) -> fmt::Result {
    match c {
        '\\' => f.write_str("\\\\"),
        '\n' => f.write_str("\\n"),
        '\r' => f.write_str("\\r"),
        '\t' => f.write_str("\\t"),
        c if c == quote => {
            f.write_char('\\')?;
            f.write_char(c)
        }
        c => f.write_char(c),
    }
}

macro_rules! display_via_printer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    self.accept(&mut Printer, f)
                }
            }
        )*
    };
}

display_via_printer!(
    Value, VQuant, EChar, ETuple, VCollect, EVar, Quantity, QBool, QInt, QDouble, Collect,
    CString, CArray,
);

// ═══════════════════════════════════════════════════════════════════════
// Abstract Syntax
// ═══════════════════════════════════════════════════════════════════════

/// Renders nodes as S-expressions naming each production.
///
/// ```
/// use rholang_absyn::{show, Value};
///
/// assert_eq!(show(&Value::int(5)), "(VQuant (QInt 5))");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Show;

impl Show {
    fn write_list(&mut self, f: &mut fmt::Formatter<'_>, elems: &[Value]) -> fmt::Result {
        f.write_char('[')?;
        for (i, elem) in elems.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            elem.accept(self, &mut *f)?;
        }
        f.write_char(']')
    }
}

impl<'a, 'f> Visitor<&'a mut fmt::Formatter<'f>> for Show {
    type Output = fmt::Result;

    fn visit_vquant(&mut self, node: &VQuant, f: &'a mut fmt::Formatter<'f>) -> fmt::Result {
        f.write_str("(VQuant ")?;
        node.quantity().accept(self, &mut *f)?;
        f.write_char(')')
    }

    fn visit_echar(&mut self, node: &EChar, f: &'a mut fmt::Formatter<'f>) -> fmt::Result {
        write!(f, "(EChar {:?})", node.value())
    }

    fn visit_etuple(&mut self, node: &ETuple, f: &'a mut fmt::Formatter<'f>) -> fmt::Result {
        f.write_str("(ETuple ")?;
        self.write_list(f, node.elems())?;
        f.write_char(')')
    }

    fn visit_vcollect(&mut self, node: &VCollect, f: &'a mut fmt::Formatter<'f>) -> fmt::Result {
        f.write_str("(VCollect ")?;
        node.collect().accept(self, &mut *f)?;
        f.write_char(')')
    }

    fn visit_evar(&mut self, node: &EVar, f: &'a mut fmt::Formatter<'f>) -> fmt::Result {
        write!(f, "(EVar {:?})", node.name())
    }

    fn visit_qbool(&mut self, node: &QBool, f: &'a mut fmt::Formatter<'f>) -> fmt::Result {
        write!(f, "(QBool {})", node.value())
    }

    fn visit_qint(&mut self, node: &QInt, f: &'a mut fmt::Formatter<'f>) -> fmt::Result {
        write!(f, "(QInt {})", node.value())
    }

    fn visit_qdouble(&mut self, node: &QDouble, f: &'a mut fmt::Formatter<'f>) -> fmt::Result {
        write!(f, "(QDouble {:?})", node.value())
    }

    fn visit_cstring(&mut self, node: &CString, f: &'a mut fmt::Formatter<'f>) -> fmt::Result {
        write!(f, "(CString {:?})", node.as_str())
    }

    fn visit_carray(&mut self, node: &CArray, f: &'a mut fmt::Formatter<'f>) -> fmt::Result {
        f.write_str("(CArray ")?;
        self.write_list(f, node.elems())?;
        f.write_char(')')
    }
}

/// Adapts [`Show`] to `Display`.
struct Shown<'n, N>(&'n N);

impl<N: Node> fmt::Display for Shown<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.accept(&mut Show, f)
    }
}

/// Render a node in S-expression form.
pub fn show<N: Node>(node: &N) -> String {
    Shown(node).to_string()
}
