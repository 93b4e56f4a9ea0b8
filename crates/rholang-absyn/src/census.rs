//! Production census: how often each production occurs in a tree

use indexmap::IndexMap;

use crate::node::{
    CArray, CString, EChar, ETuple, EVar, Node, QBool, QDouble, QInt, VCollect, VQuant,
};
use crate::visit::Visitor;

/// Counts the productions of every node it visits.
///
/// Counts are kept in first-seen order, so a census of the same tree always
/// lists productions the same way.
#[derive(Debug, Default, Clone)]
pub struct Census {
    counts: IndexMap<&'static str, usize>,
}

impl Census {
    /// Create an empty census
    pub fn new() -> Self {
        Self::default()
    }

    /// Visit a tree, adding its nodes to the counts.
    pub fn record<N: Node>(&mut self, node: &N) {
        node.accept(self, ());
    }

    /// Occurrences of one production
    pub fn count(&self, production: &str) -> usize {
        self.counts.get(production).copied().unwrap_or(0)
    }

    /// Total number of nodes recorded
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// All counts, in first-seen order
    pub fn counts(&self) -> &IndexMap<&'static str, usize> {
        &self.counts
    }

    /// Consume the census, returning its counts
    pub fn into_counts(self) -> IndexMap<&'static str, usize> {
        self.counts
    }

    fn bump(&mut self, production: &'static str) {
        *self.counts.entry(production).or_insert(0) += 1;
    }
}

impl Visitor<()> for Census {
    type Output = ();

    fn visit_vquant(&mut self, node: &VQuant, _arg: ()) {
        self.bump("VQuant");
        node.quantity().accept(self, ());
    }

    fn visit_echar(&mut self, _node: &EChar, _arg: ()) {
        self.bump("EChar");
    }

    fn visit_etuple(&mut self, node: &ETuple, _arg: ()) {
        self.bump("ETuple");
        for elem in node.elems() {
            elem.accept(self, ());
        }
    }

    fn visit_vcollect(&mut self, node: &VCollect, _arg: ()) {
        self.bump("VCollect");
        node.collect().accept(self, ());
    }

    fn visit_evar(&mut self, _node: &EVar, _arg: ()) {
        self.bump("EVar");
    }

    fn visit_qbool(&mut self, _node: &QBool, _arg: ()) {
        self.bump("QBool");
    }

    fn visit_qint(&mut self, _node: &QInt, _arg: ()) {
        self.bump("QInt");
    }

    fn visit_qdouble(&mut self, _node: &QDouble, _arg: ()) {
        self.bump("QDouble");
    }

    fn visit_cstring(&mut self, _node: &CString, _arg: ()) {
        self.bump("CString");
    }

    fn visit_carray(&mut self, node: &CArray, _arg: ()) {
        self.bump("CArray");
        for elem in node.elems() {
            elem.accept(self, ());
        }
    }
}

/// Count the productions in a single tree.
pub fn census<N: Node>(node: &N) -> IndexMap<&'static str, usize> {
    let mut census = Census::new();
    census.record(node);
    census.into_counts()
}
