//! Concurrent caches keyed by subtrees
//!
//! Nodes hash and compare structurally, so a tree built twice hits the
//! same cache entry. Both tables are sharded maps and can be shared by
//! reference across threads.

use std::sync::Arc;

use dashmap::DashMap;

use crate::node::Node;

/// Hash-consing table: equal trees intern to one shared allocation.
///
/// ```
/// use std::sync::Arc;
/// use rholang_absyn::{Interner, Value};
///
/// let interner = Interner::new();
/// let a = interner.intern(Value::string("abc"));
/// let b = interner.intern(Value::string("abc"));
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
#[derive(Debug)]
pub struct Interner<T: Node> {
    table: DashMap<Arc<T>, ()>,
}

impl<T: Node> Default for Interner<T> {
    fn default() -> Self {
        Self {
            table: DashMap::new(),
        }
    }
}

impl<T: Node> Interner<T> {
    /// Create an empty interner
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the shared copy of `node`, storing it if it is new.
    pub fn intern(&self, node: T) -> Arc<T> {
        if let Some(hit) = self.table.get(&node) {
            return Arc::clone(hit.key());
        }
        // Another thread may have stored an equal tree since the lookup;
        // the entry keeps whichever key got there first.
        let entry = self.table.entry(Arc::new(node)).or_insert(());
        Arc::clone(entry.key())
    }

    /// Whether an equal tree has been interned
    pub fn contains(&self, node: &T) -> bool {
        self.table.contains_key(node)
    }

    /// Number of distinct trees stored
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether nothing has been interned
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Drop every stored tree
    pub fn clear(&self) {
        self.table.clear();
    }
}

/// Memo table from trees to processor results.
///
/// The computation runs outside the table's locks, so two threads racing on
/// the same tree may both compute it; the first result stored wins and both
/// callers receive it.
#[derive(Debug)]
pub struct Memo<T: Node, R> {
    table: DashMap<T, R>,
}

impl<T: Node, R> Default for Memo<T, R> {
    fn default() -> Self {
        Self {
            table: DashMap::new(),
        }
    }
}

impl<T: Node, R: Clone> Memo<T, R> {
    /// Create an empty memo table
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached result for `node`, if any
    pub fn get(&self, node: &T) -> Option<R> {
        self.table.get(node).map(|hit| hit.value().clone())
    }

    /// Cached result for `node`, computing and storing it on a miss.
    pub fn get_or_insert_with<F>(&self, node: &T, compute: F) -> R
    where
        F: FnOnce() -> R,
    {
        if let Some(hit) = self.get(node) {
            return hit;
        }
        let value = compute();
        self.table
            .entry(node.clone())
            .or_insert(value)
            .value()
            .clone()
    }

    /// Number of cached results
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Drop every cached result
    pub fn clear(&self) {
        self.table.clear();
    }
}
