//! Stepwise expansion and neighbor relaxation.

use std::hash::Hash;

use log::{debug, trace};

use crate::engine::Gastar;

impl<'a, N: Eq + Hash + Clone + 'a> Gastar<'a, N> {
    /// Expand nodes from the frontier.
    ///
    /// With `continuous == false` a single node is expanded; with
    /// `continuous == true` expansion repeats until the frontier is empty.
    /// Returns whether the frontier is empty afterwards. Calling this on a
    /// finished (or never set up) engine expands nothing and returns `true`.
    pub fn step(&mut self, continuous: bool) -> bool {
        while self.expand_next() && continuous {}
        self.frontier.is_empty()
    }

    /// Pop the best frontier entry and relax its usable neighbors. Returns
    /// `false` if there was nothing to expand.
    fn expand_next(&mut self) -> bool {
        let Self {
            store,
            frontier,
            session,
        } = self;
        let Some(session) = session.as_mut() else {
            return false;
        };
        let Some(current) = frontier.pop_min() else {
            return false;
        };

        session.current = Some(current);
        session.expansions += 1;

        let start_id = &session.start_id;
        let end_id = &session.end_id;
        let callbacks = &mut session.callbacks;

        let node = store.state(current).identity().clone();
        let current_g = store.state(current).g_score();
        trace!(
            "expand #{} node {} g={current_g}",
            session.expansions,
            current.index()
        );

        for neighbor in (callbacks.neighbors)(&node) {
            if let Some(usable) = callbacks.usable.as_mut() {
                if !usable(&neighbor, &node, start_id, end_id) {
                    continue;
                }
            }

            let step_cost = (callbacks.distance)(&node, &neighbor, start_id, end_id);
            let tentative_g = current_g.saturating_add(step_cost);
            let next = store.get_or_create(neighbor);

            let state = store.state(next);
            if state.is_assigned() && tentative_g >= state.g_score() {
                continue;
            }

            let h = (callbacks.heuristic)(state.identity(), Some(&node), start_id, end_id);
            let f = tentative_g.saturating_add(h);

            // The frontier ignores a second entry for the same node, so the
            // stale one has to go before the improved scores are queued.
            frontier.evict(next);
            store.relax(next, tentative_g, f, current);
            frontier.insert(next, f, tentative_g);
            trace!("relax node {} g={tentative_g} f={f}", next.index());
        }

        if frontier.is_empty() {
            let end = store.state(session.end);
            if end.parent().is_some() {
                debug!(
                    "search solved after {} expansions, cost {}",
                    session.expansions,
                    end.g_score()
                );
            } else {
                debug!(
                    "search exhausted after {} expansions, {} nodes seen",
                    session.expansions,
                    store.len()
                );
            }
        }
        true
    }
}
