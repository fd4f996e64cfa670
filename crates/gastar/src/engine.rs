//! The search engine value, its session lifecycle and read-only queries.

use std::hash::Hash;

use log::debug;

use crate::config::{Callbacks, SearchConfig};
use crate::error::Result;
use crate::frontier::Frontier;
use crate::node::{Cost, NodeRef, NodeState, NodeStore};

/// Lifecycle of a [`Gastar`] engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// No session has been set up.
    Uninitialized,
    /// Set up, nothing expanded yet.
    Ready,
    /// At least one node expanded and the frontier is not empty.
    Running,
    /// Frontier exhausted without reaching the end node.
    Exhausted,
    /// Frontier exhausted and the end node was reached.
    Solved,
}

impl SearchStatus {
    /// Whether the search has finished, successfully or not.
    pub fn is_done(self) -> bool {
        matches!(self, Self::Exhausted | Self::Solved)
    }
}

/// Live configuration of one search.
pub(crate) struct Session<'a, N> {
    pub(crate) start: NodeRef,
    pub(crate) end: NodeRef,
    pub(crate) start_id: N,
    pub(crate) end_id: N,
    pub(crate) current: Option<NodeRef>,
    pub(crate) expansions: u64,
    pub(crate) callbacks: Callbacks<'a, N>,
}

/// Incremental A* search engine over caller-defined node identities.
///
/// The engine knows nothing about the graph: it is configured with a
/// [`SearchConfig`] carrying the endpoints and the distance, heuristic,
/// neighbor and usability functions, and then driven with
/// [`step`](Self::step). All state is owned by the value and discarded by the
/// next [`setup`](Self::setup).
pub struct Gastar<'a, N> {
    pub(crate) store: NodeStore<N>,
    pub(crate) frontier: Frontier,
    pub(crate) session: Option<Session<'a, N>>,
}

impl<N> Default for Gastar<'_, N> {
    fn default() -> Self {
        Self {
            store: NodeStore::default(),
            frontier: Frontier::default(),
            session: None,
        }
    }
}

impl<'a, N: Eq + Hash + Clone + 'a> Gastar<'a, N> {
    /// Create an engine with no session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new session, discarding any previous one.
    ///
    /// Registers the end node, then the start node, scores the start node
    /// with the heuristic and seeds the frontier with it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingArgument`](crate::Error::MissingArgument) if the
    /// start, end, distance, heuristic or neighbor slot is empty. The engine
    /// is left untouched in that case.
    pub fn setup(&mut self, config: SearchConfig<'a, N>) -> Result<()> {
        let (start_id, end_id, mut callbacks) = config.validate()?;

        self.store.clear();
        self.frontier.clear();
        self.session = None;

        let end = self.store.get_or_create(end_id.clone());
        let start = self.store.get_or_create(start_id.clone());
        let f = (callbacks.heuristic)(&start_id, None, &start_id, &end_id);
        self.store.seed(start, f);
        self.frontier.insert(start, f, 0);

        debug!("search setup: start estimate {f}");

        self.session = Some(Session {
            start,
            end,
            start_id,
            end_id,
            current: None,
            expansions: 0,
            callbacks,
        });
        Ok(())
    }

    /// Look up the search state of an identity seen in this session.
    pub fn node(&self, identity: &N) -> Option<&NodeState<N>> {
        self.store.get(identity).map(|r| self.store.state(r))
    }

    /// Best known cost from the start to `identity`, if it has been reached.
    pub fn g_score(&self, identity: &N) -> Option<Cost> {
        self.node(identity)
            .filter(|s| s.is_assigned())
            .map(NodeState::g_score)
    }

    /// Priority of `identity`, if it has been reached.
    pub fn f_score(&self, identity: &N) -> Option<Cost> {
        self.node(identity)
            .filter(|s| s.is_assigned())
            .map(NodeState::f_score)
    }
}

impl<N> Gastar<'_, N> {
    /// Current lifecycle state.
    pub fn status(&self) -> SearchStatus {
        match &self.session {
            None => SearchStatus::Uninitialized,
            Some(_) if self.is_solved() => SearchStatus::Solved,
            Some(_) if self.frontier.is_empty() => SearchStatus::Exhausted,
            Some(s) if s.current.is_none() => SearchStatus::Ready,
            Some(_) => SearchStatus::Running,
        }
    }

    /// Identity of the most recently expanded node.
    pub fn current_node(&self) -> Option<&N> {
        let current = self.session.as_ref()?.current?;
        Some(self.store.state(current).identity())
    }

    /// True once a session exists and its frontier is empty.
    pub fn is_done(&self) -> bool {
        self.session.is_some() && self.frontier.is_empty()
    }

    /// True once the search is done and the end node has a parent.
    pub fn is_solved(&self) -> bool {
        match &self.session {
            Some(s) => self.frontier.is_empty() && self.store.state(s.end).parent().is_some(),
            None => false,
        }
    }

    /// Start identity of the live session.
    pub fn start(&self) -> Option<&N> {
        self.session.as_ref().map(|s| &s.start_id)
    }

    /// End identity of the live session.
    pub fn end(&self) -> Option<&N> {
        self.session.as_ref().map(|s| &s.end_id)
    }

    /// Number of nodes expanded in this session.
    pub fn expansions(&self) -> u64 {
        self.session.as_ref().map_or(0, |s| s.expansions)
    }

    /// Number of entries waiting in the frontier.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Read access to the node store of this session.
    pub fn nodes(&self) -> &NodeStore<N> {
        &self.store
    }
}
