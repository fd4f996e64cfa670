//! Open set of nodes awaiting expansion, ordered by `(f, g, registration)`.

use std::collections::BTreeSet;

use crate::node::{Cost, NodeRef};

/// Frontier ordering key: lowest `f` first, then lowest `g`, then the node
/// registered first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierKey {
    f: Cost,
    g: Cost,
    node: NodeRef,
}

/// Ordered open set holding at most one entry per node.
///
/// `placed[i]` mirrors the key currently stored for the node with
/// registration index `i`, which gives identity lookups without scanning the
/// ordered set.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    ordered: BTreeSet<FrontierKey>,
    placed: Vec<Option<FrontierKey>>,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `node` with the given scores.
    ///
    /// Returns `false` and leaves the frontier untouched if `node` already
    /// has an entry, whatever its scores. Callers updating a node's scores
    /// must [`evict`](Self::evict) it first.
    pub fn insert(&mut self, node: NodeRef, f: Cost, g: Cost) -> bool {
        let i = node.index();
        if i >= self.placed.len() {
            self.placed.resize(i + 1, None);
        }
        if self.placed[i].is_some() {
            return false;
        }
        let key = FrontierKey { f, g, node };
        self.ordered.insert(key);
        self.placed[i] = Some(key);
        true
    }

    /// Remove the entry for `node`. Returns whether one was present.
    pub fn evict(&mut self, node: NodeRef) -> bool {
        let Some(slot) = self.placed.get_mut(node.index()) else {
            return false;
        };
        match slot.take() {
            Some(key) => self.ordered.remove(&key),
            None => false,
        }
    }

    /// Remove and return the minimum entry.
    pub fn pop_min(&mut self) -> Option<NodeRef> {
        let key = self.ordered.pop_first()?;
        self.placed[key.node.index()] = None;
        Some(key.node)
    }

    /// Whether `node` currently has an entry.
    pub fn contains(&self, node: NodeRef) -> bool {
        matches!(self.placed.get(node.index()), Some(Some(_)))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn clear(&mut self) {
        self.ordered.clear();
        self.placed.clear();
    }
}
