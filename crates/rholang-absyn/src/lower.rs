//! Lowering to Rust's `syn` AST
//!
//! Turns a value tree into the `syn::Expr` a Rust programmer would write for
//! it, so the tree can be handed to tools that consume Rust syntax:
//!
//! | Production | Rust expression            |
//! |------------|----------------------------|
//! | `CString`  | string literal             |
//! | `EChar`    | char literal               |
//! | `QBool`    | `true` / `false`           |
//! | `QInt`     | `i64` literal, `-n` if negative |
//! | `QDouble`  | `f64` literal, `-x` if negative |
//! | `ETuple`   | tuple expression           |
//! | `CArray`   | array expression           |
//! | `EVar`     | path expression            |

use proc_macro2::{Span, TokenStream};
use quote::ToTokens;
use syn::punctuated::Punctuated;

use crate::context::LowerContext;
use crate::error::{LowerError, Result};
use crate::node::{
    CArray, CString, EChar, ETuple, EVar, Node, QBool, QDouble, QInt, VCollect, VQuant, Value,
};
use crate::visit::Visitor;

/// Lowers nodes to `syn` expressions.
///
/// The visitor argument is a [`LowerContext`], which bounds the nesting
/// depth and switches tracing on.
#[derive(Debug, Default, Clone)]
pub struct Lower {
    trace: Vec<&'static str>,
}

impl Lower {
    /// Create a lowering visitor
    pub fn new() -> Self {
        Self::default()
    }

    /// Productions visited so far, when the context has tracing on.
    ///
    /// The trace accumulates across runs until taken or cleared.
    pub fn trace(&self) -> &[&'static str] {
        &self.trace
    }

    /// Take the trace, leaving it empty for the next run.
    pub fn take_trace(&mut self) -> Vec<&'static str> {
        std::mem::take(&mut self.trace)
    }

    /// Discard the trace.
    pub fn clear_trace(&mut self) {
        self.trace.clear();
    }

    fn enter(&mut self, production: &'static str, ctx: &LowerContext) {
        if ctx.trace {
            self.trace.push(production);
        }
    }

    fn lower_seq(
        &mut self,
        elems: &[Value],
        ctx: LowerContext,
    ) -> Result<Punctuated<syn::Expr, syn::Token![,]>> {
        let mut lowered = Punctuated::new();
        if elems.is_empty() {
            return Ok(lowered);
        }
        let inner = ctx.descend()?;
        for elem in elems {
            lowered.push(elem.accept(self, inner)?);
        }
        Ok(lowered)
    }
}

impl Visitor<LowerContext> for Lower {
    type Output = Result<syn::Expr>;

    fn visit_vquant(&mut self, node: &VQuant, ctx: LowerContext) -> Result<syn::Expr> {
        self.enter("VQuant", &ctx);
        node.quantity().accept(self, ctx.descend()?)
    }

    fn visit_echar(&mut self, node: &EChar, ctx: LowerContext) -> Result<syn::Expr> {
        self.enter("EChar", &ctx);
        Ok(literal(syn::Lit::Char(syn::LitChar::new(
            node.value(),
            Span::call_site(),
        ))))
    }

    fn visit_etuple(&mut self, node: &ETuple, ctx: LowerContext) -> Result<syn::Expr> {
        self.enter("ETuple", &ctx);
        let mut elems = self.lower_seq(node.elems(), ctx)?;
        // `(x)` is a parenthesized expression, `(x,)` is a tuple
        if elems.len() == 1 {
            elems.push_punct(Default::default());
        }
        Ok(syn::Expr::Tuple(syn::ExprTuple {
            attrs: Vec::new(),
            paren_token: Default::default(),
            elems,
        }))
    }

    fn visit_vcollect(&mut self, node: &VCollect, ctx: LowerContext) -> Result<syn::Expr> {
        self.enter("VCollect", &ctx);
        node.collect().accept(self, ctx.descend()?)
    }

    fn visit_evar(&mut self, node: &EVar, ctx: LowerContext) -> Result<syn::Expr> {
        self.enter("EVar", &ctx);
        let ident: syn::Ident =
            syn::parse_str(node.name()).map_err(|e| LowerError::InvalidIdent {
                name: node.name().to_string(),
                reason: e.to_string(),
            })?;
        Ok(syn::Expr::Path(syn::ExprPath {
            attrs: Vec::new(),
            qself: None,
            path: ident.into(),
        }))
    }

    fn visit_qbool(&mut self, node: &QBool, ctx: LowerContext) -> Result<syn::Expr> {
        self.enter("QBool", &ctx);
        Ok(literal(syn::Lit::Bool(syn::LitBool::new(
            node.value(),
            Span::call_site(),
        ))))
    }

    fn visit_qint(&mut self, node: &QInt, ctx: LowerContext) -> Result<syn::Expr> {
        self.enter("QInt", &ctx);
        let value = node.value();
        let magnitude = syn::LitInt::new(
            &format!("{}i64", value.unsigned_abs()),
            Span::call_site(),
        );
        let expr = literal(syn::Lit::Int(magnitude));
        Ok(if value < 0 { negate(expr) } else { expr })
    }

    fn visit_qdouble(&mut self, node: &QDouble, ctx: LowerContext) -> Result<syn::Expr> {
        self.enter("QDouble", &ctx);
        let value = node.value();
        if !value.is_finite() {
            return Err(LowerError::NonFiniteDouble { value });
        }
        let magnitude = syn::LitFloat::new(&format!("{:?}f64", value.abs()), Span::call_site());
        let expr = literal(syn::Lit::Float(magnitude));
        Ok(if value.is_sign_negative() {
            negate(expr)
        } else {
            expr
        })
    }

    fn visit_cstring(&mut self, node: &CString, ctx: LowerContext) -> Result<syn::Expr> {
        self.enter("CString", &ctx);
        Ok(literal(syn::Lit::Str(syn::LitStr::new(
            node.as_str(),
            Span::call_site(),
        ))))
    }

    fn visit_carray(&mut self, node: &CArray, ctx: LowerContext) -> Result<syn::Expr> {
        self.enter("CArray", &ctx);
        let elems = self.lower_seq(node.elems(), ctx)?;
        Ok(syn::Expr::Array(syn::ExprArray {
            attrs: Vec::new(),
            bracket_token: Default::default(),
            elems,
        }))
    }
}

fn literal(lit: syn::Lit) -> syn::Expr {
    syn::Expr::Lit(syn::ExprLit {
        attrs: Vec::new(),
        lit,
    })
}

fn negate(expr: syn::Expr) -> syn::Expr {
    syn::Expr::Unary(syn::ExprUnary {
        attrs: Vec::new(),
        op: syn::UnOp::Neg(Default::default()),
        expr: Box::new(expr),
    })
}

/// Lower a node with the default context.
pub fn lower<N: Node>(node: &N) -> Result<syn::Expr> {
    node.accept(&mut Lower::new(), LowerContext::default())
}

/// Lower a node and render it as Rust tokens.
pub fn to_tokens<N: Node>(node: &N) -> Result<TokenStream> {
    Ok(lower(node)?.into_token_stream())
}
