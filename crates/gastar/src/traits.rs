use crate::node::Cost;

/// Minimal search-space interface: neighbor enumeration.
pub trait Pather<N> {
    /// Append the neighbors of `node` into `buf`. The caller clears `buf`
    /// before calling.
    fn neighbors(&self, node: &N, buf: &mut Vec<N>);
}

/// Pather with weighted edges.
pub trait WeightedPather<N>: Pather<N> {
    /// Cost of moving from `from` to its neighbor `to`.
    fn cost(&self, from: &N, to: &N) -> Cost;
}

/// Full A* search space.
pub trait AstarPather<N>: WeightedPather<N> {
    /// Estimated remaining cost from `node` to `goal`. Should never
    /// overestimate for the result to be optimal; this is not checked.
    fn estimate(&self, node: &N, goal: &N) -> Cost;

    /// Whether `node` may be entered from `parent`. Everything is usable by
    /// default.
    fn usable(&self, node: &N, parent: &N) -> bool {
        let _ = (node, parent);
        true
    }
}
