//! Search configuration: endpoints and caller-supplied functions.

use crate::error::{Argument, Error, Result};
use crate::node::Cost;
use crate::traits::AstarPather;

/// `distance(from, to, start, end)`: cost of the edge `from -> to`.
pub type DistanceFn<'a, N> = Box<dyn FnMut(&N, &N, &N, &N) -> Cost + 'a>;

/// `heuristic(node, parent, start, end)`: estimated cost from `node` to `end`.
/// `parent` is `None` only when scoring the start node.
pub type HeuristicFn<'a, N> = Box<dyn FnMut(&N, Option<&N>, &N, &N) -> Cost + 'a>;

/// Finite sequence of neighbor identities for one node.
pub type Neighbors<'a, N> = Box<dyn Iterator<Item = N> + 'a>;

/// `neighbors(node)`: a fresh neighbor sequence for `node`.
pub type NeighborFn<'a, N> = Box<dyn FnMut(&N) -> Neighbors<'a, N> + 'a>;

/// `usable(node, parent, start, end)`: whether `node` may be entered from
/// `parent`.
pub type UsableFn<'a, N> = Box<dyn FnMut(&N, &N, &N, &N) -> bool + 'a>;

/// Builder for a search session, consumed by [`Gastar::setup`].
///
/// Every slot except [`usable`](Self::usable) is required; `setup` reports the
/// first missing one as a configuration error.
///
/// [`Gastar::setup`]: crate::Gastar::setup
pub struct SearchConfig<'a, N> {
    start: Option<N>,
    end: Option<N>,
    distance: Option<DistanceFn<'a, N>>,
    heuristic: Option<HeuristicFn<'a, N>>,
    neighbors: Option<NeighborFn<'a, N>>,
    usable: Option<UsableFn<'a, N>>,
}

impl<N> Default for SearchConfig<'_, N> {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
            distance: None,
            heuristic: None,
            neighbors: None,
            usable: None,
        }
    }
}

impl<'a, N: 'a> SearchConfig<'a, N> {
    /// An empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration whose functions are backed by `pather`. Start and end
    /// still have to be set.
    pub fn from_pather<P: AstarPather<N>>(pather: &'a P) -> Self {
        Self::new()
            .distance(move |from, to, _, _| pather.cost(from, to))
            .heuristic(move |node, _, _, end| pather.estimate(node, end))
            .neighbors(move |node: &N| {
                let mut buf = Vec::new();
                pather.neighbors(node, &mut buf);
                buf
            })
            .usable(move |node, parent, _, _| pather.usable(node, parent))
    }

    pub fn start(mut self, node: N) -> Self {
        self.start = Some(node);
        self
    }

    pub fn end(mut self, node: N) -> Self {
        self.end = Some(node);
        self
    }

    pub fn distance(mut self, f: impl FnMut(&N, &N, &N, &N) -> Cost + 'a) -> Self {
        self.distance = Some(Box::new(f));
        self
    }

    pub fn heuristic(mut self, f: impl FnMut(&N, Option<&N>, &N, &N) -> Cost + 'a) -> Self {
        self.heuristic = Some(Box::new(f));
        self
    }

    /// Set the neighbor enumerator. It is called once per expanded node and
    /// its result is drained completely before the next node is expanded.
    pub fn neighbors<F, I>(mut self, mut f: F) -> Self
    where
        F: FnMut(&N) -> I + 'a,
        I: IntoIterator<Item = N>,
        I::IntoIter: 'a,
    {
        self.neighbors = Some(Box::new(move |node: &N| -> Neighbors<'a, N> {
            Box::new(f(node).into_iter())
        }));
        self
    }

    pub fn usable(mut self, f: impl FnMut(&N, &N, &N, &N) -> bool + 'a) -> Self {
        self.usable = Some(Box::new(f));
        self
    }

    /// Split into endpoints and callbacks, or name the first missing slot.
    pub(crate) fn validate(self) -> Result<(N, N, Callbacks<'a, N>)> {
        let start = self.start.ok_or(Error::MissingArgument(Argument::Start))?;
        let end = self.end.ok_or(Error::MissingArgument(Argument::End))?;
        let distance = self
            .distance
            .ok_or(Error::MissingArgument(Argument::Distance))?;
        let heuristic = self
            .heuristic
            .ok_or(Error::MissingArgument(Argument::Heuristic))?;
        let neighbors = self
            .neighbors
            .ok_or(Error::MissingArgument(Argument::Neighbors))?;
        Ok((
            start,
            end,
            Callbacks {
                distance,
                heuristic,
                neighbors,
                usable: self.usable,
            },
        ))
    }
}

/// Validated callback set owned by a live session.
pub(crate) struct Callbacks<'a, N> {
    pub(crate) distance: DistanceFn<'a, N>,
    pub(crate) heuristic: HeuristicFn<'a, N>,
    pub(crate) neighbors: NeighborFn<'a, N>,
    pub(crate) usable: Option<UsableFn<'a, N>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::traits::{Pather, WeightedPather};

    fn complete() -> SearchConfig<'static, u32> {
        SearchConfig::new()
            .start(0)
            .end(3)
            .distance(|_, _, _, _| 1)
            .heuristic(|_, _, _, _| 0)
            .neighbors(|n: &u32| vec![n + 1])
    }

    fn missing(config: SearchConfig<'_, u32>) -> Argument {
        match config.validate() {
            Err(err) => {
                assert_eq!(err.kind(), ErrorKind::Configuration);
                err.argument().unwrap()
            }
            Ok(_) => panic!("expected a configuration error"),
        }
    }

    #[test]
    fn complete_config_validates() {
        let (start, end, cb) = complete().validate().unwrap();
        assert_eq!((start, end), (0, 3));
        assert!(cb.usable.is_none());
    }

    #[test]
    fn missing_slots_are_named() {
        assert_eq!(missing(SearchConfig::new()), Argument::Start);
        assert_eq!(missing(SearchConfig::new().start(1)), Argument::End);
        assert_eq!(
            missing(SearchConfig::new().start(1).end(2)),
            Argument::Distance
        );
        assert_eq!(
            missing(
                SearchConfig::new()
                    .start(1)
                    .end(2)
                    .distance(|_, _, _, _| 1)
            ),
            Argument::Heuristic
        );
        assert_eq!(
            missing(
                SearchConfig::new()
                    .start(1)
                    .end(2)
                    .distance(|_, _, _, _| 1)
                    .heuristic(|_, _, _, _| 0)
            ),
            Argument::Neighbors
        );
    }

    #[test]
    fn start_is_reported_before_later_slots() {
        // Only the end is present: start still comes first.
        assert_eq!(missing(SearchConfig::new().end(2)), Argument::Start);
    }

    struct Line;

    impl Pather<i32> for Line {
        fn neighbors(&self, node: &i32, buf: &mut Vec<i32>) {
            buf.push(node - 1);
            buf.push(node + 1);
        }
    }

    impl WeightedPather<i32> for Line {
        fn cost(&self, _from: &i32, _to: &i32) -> Cost {
            2
        }
    }

    impl AstarPather<i32> for Line {
        fn estimate(&self, node: &i32, goal: &i32) -> Cost {
            node.abs_diff(*goal) * 2
        }

        fn usable(&self, node: &i32, _parent: &i32) -> bool {
            *node >= 0
        }
    }

    #[test]
    fn from_pather_wires_every_slot() {
        let line = Line;
        let (_, _, mut cb) = SearchConfig::from_pather(&line)
            .start(0)
            .end(4)
            .validate()
            .unwrap();

        assert_eq!((cb.distance)(&0, &1, &0, &4), 2);
        assert_eq!((cb.heuristic)(&1, Some(&0), &0, &4), 6);
        assert_eq!((cb.neighbors)(&3).collect::<Vec<_>>(), vec![2, 4]);
        let usable = cb.usable.as_mut().unwrap();
        assert!(usable(&1, &0, &0, &4));
        assert!(!usable(&-1, &0, &0, &4));
    }
}
