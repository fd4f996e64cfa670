//! Walking parent links back to the start node.

use crate::engine::Gastar;
use crate::error::{Error, Result};
use crate::node::NodeRef;

/// Where a path reconstruction starts walking parent links from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathOrigin {
    /// The end node; requires a solved search.
    End,
    /// The most recently expanded node; requires at least one expansion.
    Current,
}

impl<N> Gastar<'_, N> {
    /// Call `visit` for every node on the parent chain from `origin` back to
    /// the start node, origin first, start last.
    ///
    /// # Errors
    ///
    /// [`Error::NotSolved`] for [`PathOrigin::End`] when the search is not
    /// solved, [`Error::NotEvaluated`] for [`PathOrigin::Current`] when no node
    /// has been expanded.
    pub fn reconstruct(&self, origin: PathOrigin, mut visit: impl FnMut(&N)) -> Result<()> {
        let mut next = Some(self.origin_node(origin)?);
        let mut visited = 0;
        while let Some(node) = next {
            let state = self.store.state(node);
            visit(state.identity());
            visited += 1;
            debug_assert!(visited <= self.store.len(), "parent chain has a cycle");
            next = state.parent();
        }
        Ok(())
    }

    /// [`reconstruct`](Self::reconstruct) from the end node.
    pub fn reconstruct_end(&self, visit: impl FnMut(&N)) -> Result<()> {
        self.reconstruct(PathOrigin::End, visit)
    }

    /// [`reconstruct`](Self::reconstruct) from the current node.
    pub fn reconstruct_current(&self, visit: impl FnMut(&N)) -> Result<()> {
        self.reconstruct(PathOrigin::Current, visit)
    }

    fn origin_node(&self, origin: PathOrigin) -> Result<NodeRef> {
        match origin {
            PathOrigin::End => match &self.session {
                Some(s) if self.is_solved() => Ok(s.end),
                _ => Err(Error::NotSolved),
            },
            PathOrigin::Current => self
                .session
                .as_ref()
                .and_then(|s| s.current)
                .ok_or(Error::NotEvaluated),
        }
    }
}

impl<N: Clone> Gastar<'_, N> {
    /// The path from the start node to `origin`, start first.
    pub fn path(&self, origin: PathOrigin) -> Result<Vec<N>> {
        let mut path = Vec::new();
        self.reconstruct(origin, |node| path.push(node.clone()))?;
        path.reverse();
        Ok(path)
    }

    /// The solved path, start first.
    pub fn path_to_end(&self) -> Result<Vec<N>> {
        self.path(PathOrigin::End)
    }

    /// The path to the most recently expanded node, start first.
    pub fn path_to_current(&self) -> Result<Vec<N>> {
        self.path(PathOrigin::Current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::testing::{Grid, grid_config};

    #[test]
    fn reconstruct_end_before_step_is_usage_error() {
        let grid = Grid::open(3, 3);
        let mut astar = Gastar::new();
        astar
            .setup(grid_config(&grid, (0, 0), (2, 2)))
            .unwrap();

        let err = astar.reconstruct_end(|_| {}).unwrap_err();
        assert_eq!(err, Error::NotSolved);
        assert_eq!(err.kind(), ErrorKind::Usage);
    }

    #[test]
    fn reconstruct_current_before_step_is_usage_error() {
        let grid = Grid::open(3, 3);
        let mut astar = Gastar::new();
        assert_eq!(
            astar.reconstruct_current(|_| {}).unwrap_err(),
            Error::NotEvaluated
        );
        astar
            .setup(grid_config(&grid, (0, 0), (2, 2)))
            .unwrap();
        assert_eq!(
            astar.reconstruct_current(|_| {}).unwrap_err(),
            Error::NotEvaluated
        );
    }

    #[test]
    fn uninitialized_engine_is_not_solved() {
        let astar: Gastar<'_, u8> = Gastar::new();
        assert_eq!(astar.path_to_end(), Err(Error::NotSolved));
    }

    #[test]
    fn reconstruct_end_walks_end_to_start() {
        let grid = Grid::open(3, 3);
        let mut astar = Gastar::new();
        astar
            .setup(grid_config(&grid, (0, 0), (2, 2)))
            .unwrap();
        astar.step(true);

        let mut visited = Vec::new();
        astar.reconstruct_end(|p| visited.push(*p)).unwrap();

        assert_eq!(visited.len(), 5);
        assert_eq!(visited.first(), Some(&(2, 2)));
        assert_eq!(visited.last(), Some(&(0, 0)));
        for pair in visited.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert_eq!(a.0.abs_diff(b.0) + a.1.abs_diff(b.1), 1, "{a:?} -> {b:?}");
        }
        assert_eq!(astar.node(&(0, 0)).unwrap().parent(), None);
    }

    #[test]
    fn reconstruct_current_follows_partial_search() {
        let grid = Grid::open(4, 4);
        let mut astar = Gastar::new();
        astar
            .setup(grid_config(&grid, (0, 0), (3, 3)))
            .unwrap();

        astar.step(false);
        assert_eq!(astar.path_to_current().unwrap(), vec![(0, 0)]);

        astar.step(false);
        astar.step(false);
        let current = *astar.current_node().unwrap();
        let path = astar.path_to_current().unwrap();
        assert_eq!(path.first(), Some(&(0, 0)));
        assert_eq!(path.last(), Some(&current));
        assert_eq!(path.len() as u32 - 1, astar.g_score(&current).unwrap());
    }

    #[test]
    fn exhausted_search_can_still_reconstruct_current() {
        let grid = Grid::with_walls(3, 3, &[(2, 1), (1, 2)]);
        let mut astar = Gastar::new();
        astar
            .setup(grid_config(&grid, (0, 0), (2, 2)))
            .unwrap();
        astar.step(true);

        assert!(astar.is_done() && !astar.is_solved());
        assert_eq!(astar.reconstruct_end(|_| {}), Err(Error::NotSolved));
        let mut count = 0;
        astar.reconstruct_current(|_| count += 1).unwrap();
        assert!(count >= 1);
    }

    #[test]
    fn path_to_end_is_start_first() {
        let grid = Grid::open(1, 3);
        let mut astar = Gastar::new();
        astar
            .setup(grid_config(&grid, (0, 0), (0, 2)))
            .unwrap();
        astar.step(true);
        assert_eq!(
            astar.path_to_end().unwrap(),
            vec![(0, 0), (0, 1), (0, 2)]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn origin_round_trip() {
        for origin in [PathOrigin::End, PathOrigin::Current] {
            let json = serde_json::to_string(&origin).unwrap();
            let back: PathOrigin = serde_json::from_str(&json).unwrap();
            assert_eq!(back, origin);
        }
    }
}
