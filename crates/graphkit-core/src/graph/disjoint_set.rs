//! Union-find with path compression and union by rank

use crate::error::{GraphError, Result};
use std::collections::HashMap;
use std::hash::Hash;

/// Disjoint-set forest over hashable elements.
///
/// Every element must be registered with [`DisjointSet::make_set`] before it
/// is used; unknown elements are reported instead of silently created.
#[derive(Debug, Clone)]
pub struct DisjointSet<T> {
    parent: HashMap<T, T>,
    rank: HashMap<T, u32>,
    sets: usize,
}

impl<T: Clone + Eq + Hash> Default for DisjointSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Eq + Hash> DisjointSet<T> {
    pub fn new() -> Self {
        DisjointSet {
            parent: HashMap::new(),
            rank: HashMap::new(),
            sets: 0,
        }
    }

    /// Registers `x` as a singleton root with rank 0.
    ///
    /// No-op for an element that is already registered, so existing members
    /// never lose their set.
    pub fn make_set(&mut self, x: T) {
        if self.parent.contains_key(&x) {
            return;
        }
        self.sets += 1;
        self.parent.insert(x.clone(), x.clone());
        self.rank.insert(x, 0);
    }

    /// Root of the set containing `x`, or `None` if `x` was never registered.
    ///
    /// Every node on the walk is repointed directly at the root.
    pub fn find(&mut self, x: &T) -> Option<T> {
        let mut root = self.parent.get(x)?.clone();
        loop {
            let next = &self.parent[&root];
            if *next == root {
                break;
            }
            root = next.clone();
        }

        let mut current = x.clone();
        while current != root {
            let next = self.parent.insert(current, root.clone())?;
            current = next;
        }

        Some(root)
    }

    /// Merge the sets containing `x` and `y`.
    ///
    /// Returns `Ok(false)` when they already share a root. On equal ranks the
    /// root of `y` goes under the root of `x`, whose rank grows by one.
    pub fn union(&mut self, x: &T, y: &T) -> Result<bool> {
        let x_root = self.find_registered(x)?;
        let y_root = self.find_registered(y)?;
        if x_root == y_root {
            return Ok(false);
        }

        let x_rank = self.rank[&x_root];
        let y_rank = self.rank[&y_root];
        match x_rank.cmp(&y_rank) {
            std::cmp::Ordering::Less => {
                self.parent.insert(x_root, y_root);
            }
            std::cmp::Ordering::Greater => {
                self.parent.insert(y_root, x_root);
            }
            std::cmp::Ordering::Equal => {
                self.parent.insert(y_root, x_root.clone());
                self.rank.insert(x_root, x_rank + 1);
            }
        }
        self.sets -= 1;
        Ok(true)
    }

    /// Whether `x` and `y` are registered and share a root
    pub fn connected(&mut self, x: &T, y: &T) -> bool {
        match (self.find(x), self.find(y)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    pub fn contains(&self, x: &T) -> bool {
        self.parent.contains_key(x)
    }

    /// Rank of `x`'s entry (meaningful for roots only)
    pub fn rank(&self, x: &T) -> Option<u32> {
        self.rank.get(x).copied()
    }

    /// Number of registered elements
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of distinct sets
    pub fn set_count(&self) -> usize {
        self.sets
    }

    fn find_registered(&mut self, x: &T) -> Result<T> {
        match self.find(x) {
            Some(root) => Ok(root),
            None => Err(GraphError::invalid_input(
                "disjoint-set element",
                "element was never registered with make_set",
            )),
        }
    }
}
