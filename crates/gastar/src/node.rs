//! Per-session node registry: identity to handle mapping and search state.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

/// Path cost and heuristic unit.
pub type Cost = u32;

/// Handle to a node registered in a [`NodeStore`].
///
/// Handles are handed out in registration order, so comparing two handles
/// tells which identity the store saw first. The frontier relies on this as
/// its final tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeRef(pub(crate) usize);

impl NodeRef {
    /// Registration index of this node within its session.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Search state attached to one node identity.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeState<N> {
    pub(crate) assigned: bool,
    pub(crate) g_score: Cost,
    pub(crate) f_score: Cost,
    pub(crate) parent: Option<NodeRef>,
    pub(crate) identity: N,
}

impl<N> NodeState<N> {
    fn new(identity: N) -> Self {
        Self {
            assigned: false,
            g_score: 0,
            f_score: 0,
            parent: None,
            identity,
        }
    }

    /// The caller-defined identity of this node.
    #[inline]
    pub fn identity(&self) -> &N {
        &self.identity
    }

    /// Whether some path has reached this node.
    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.assigned
    }

    /// Best known cost from the start node. Meaningless unless
    /// [`is_assigned`](Self::is_assigned) is true.
    #[inline]
    pub fn g_score(&self) -> Cost {
        self.g_score
    }

    /// `g_score` plus the heuristic estimate to the end node.
    #[inline]
    pub fn f_score(&self) -> Cost {
        self.f_score
    }

    /// The node this one was reached from, `None` for the start node and
    /// for nodes not reached yet.
    #[inline]
    pub fn parent(&self) -> Option<NodeRef> {
        self.parent
    }
}

/// Lazily populated mapping from node identity to [`NodeState`].
///
/// Entries are never removed; the whole store is cleared when a new search
/// session starts.
#[derive(Debug, Clone)]
pub struct NodeStore<N> {
    nodes: Vec<NodeState<N>>,
    index: HashMap<N, NodeRef>,
}

impl<N> Default for NodeStore<N> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<N: Eq + Hash + Clone> NodeStore<N> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the handle for `identity`, registering a fresh unassigned
    /// state if the identity has not been seen in this session.
    pub fn get_or_create(&mut self, identity: N) -> NodeRef {
        match self.index.entry(identity) {
            Entry::Occupied(e) => *e.get(),
            Entry::Vacant(e) => {
                let node = NodeRef(self.nodes.len());
                self.nodes.push(NodeState::new(e.key().clone()));
                e.insert(node);
                node
            }
        }
    }

    /// Look up an identity without registering it.
    pub fn get(&self, identity: &N) -> Option<NodeRef> {
        self.index.get(identity).copied()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
    }
}

impl<N> NodeStore<N> {
    /// State for a handle issued by this store.
    ///
    /// # Panics
    ///
    /// Panics if `node` was issued before the last [`clear`](Self::clear).
    #[inline]
    pub fn state(&self, node: NodeRef) -> &NodeState<N> {
        &self.nodes[node.0]
    }

    /// Number of registered identities.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether nothing has been registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all registered states in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeRef, &NodeState<N>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, state)| (NodeRef(i), state))
    }

    /// Mark `node` as the start of the session.
    pub(crate) fn seed(&mut self, node: NodeRef, f_score: Cost) {
        let state = &mut self.nodes[node.0];
        state.assigned = true;
        state.g_score = 0;
        state.f_score = f_score;
        state.parent = None;
    }

    /// Record a cheaper path to `node` through `parent`.
    pub(crate) fn relax(&mut self, node: NodeRef, g_score: Cost, f_score: Cost, parent: NodeRef) {
        let state = &mut self.nodes[node.0];
        state.assigned = true;
        state.g_score = g_score;
        state.f_score = f_score;
        state.parent = Some(parent);
    }
}
