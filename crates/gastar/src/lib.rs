//! Graph-agnostic, incremental A* search.
//!
//! The engine never sees a graph. It works on opaque node identities (any
//! `Eq + Hash + Clone` type) and asks the caller for everything else:
//!
//! | Function | Signature | Required |
//! |---|---|---|
//! | distance | `(from, to, start, end) -> Cost` | yes |
//! | heuristic | `(node, parent, start, end) -> Cost` | yes |
//! | neighbors | `(node) -> impl IntoIterator<Item = node>` | yes |
//! | usable | `(node, parent, start, end) -> bool` | no |
//!
//! A search is configured with a [`SearchConfig`], installed with
//! [`Gastar::setup`] and driven with [`Gastar::step`], either one expansion at
//! a time or until the frontier runs dry. Node states are created on first
//! sight and improved whenever a cheaper path turns up; the frontier orders
//! them by `(f, g, registration order)` so runs are fully deterministic.
//!
//! ```
//! use gastar::{Gastar, SearchConfig};
//!
//! // Walk along the integers 0..=10 from 0 to 5.
//! let mut astar = Gastar::new();
//! astar
//!     .setup(
//!         SearchConfig::new()
//!             .start(0i32)
//!             .end(5)
//!             .distance(|_, _, _, _| 1)
//!             .heuristic(|node, _, _, end| node.abs_diff(*end))
//!             .neighbors(|n: &i32| [n - 1, n + 1])
//!             .usable(|n, _, _, _| (0..=10).contains(n)),
//!     )
//!     .unwrap();
//! astar.step(true);
//! assert!(astar.is_solved());
//! assert_eq!(astar.path_to_end().unwrap(), vec![0, 1, 2, 3, 4, 5]);
//! ```
//!
//! Search spaces that already implement the [`Pather`] trait family can be
//! plugged in with [`SearchConfig::from_pather`].

mod config;
mod engine;
mod error;
mod expand;
mod frontier;
mod node;
mod reconstruct;
mod traits;

#[cfg(test)]
mod testing;

pub use config::{DistanceFn, HeuristicFn, NeighborFn, Neighbors, SearchConfig, UsableFn};
pub use engine::{Gastar, SearchStatus};
pub use error::{Argument, Error, ErrorKind, Result};
pub use frontier::Frontier;
pub use node::{Cost, NodeRef, NodeState, NodeStore};
pub use reconstruct::PathOrigin;
pub use traits::{AstarPather, Pather, WeightedPather};
