//! Drive a stepwise search over a [`Map`].

use gastar::{AstarPather, Cost, Gastar, PathOrigin, Pather, SearchConfig, WeightedPather};
use log::{debug, info};

use crate::geom::{Point, octile, step_cost};
use crate::map::Map;

impl Pather<Point> for Map {
    fn neighbors(&self, p: &Point, buf: &mut Vec<Point>) {
        buf.extend(self.adjacent(*p));
    }
}

impl WeightedPather<Point> for Map {
    fn cost(&self, from: &Point, to: &Point) -> Cost {
        step_cost(*from, *to)
    }
}

impl AstarPather<Point> for Map {
    fn estimate(&self, from: &Point, to: &Point) -> Cost {
        octile(*from, *to)
    }

    fn usable(&self, node: &Point, _parent: &Point) -> bool {
        self.is_open(*node)
    }
}

/// Snapshot handed to the observer after every expansion.
#[derive(Debug, Clone, Copy)]
pub struct Progress<'a> {
    pub current: Option<Point>,
    /// Expanded points so far, in expansion order.
    pub explored: &'a [Point],
    pub frontier: usize,
    pub expansions: u64,
}

/// Result of a finished walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walk {
    pub solved: bool,
    /// Start first. Ends at the end point when solved, otherwise at the last
    /// expanded point.
    pub path: Vec<Point>,
    /// Cost of `path`.
    pub cost: Cost,
    pub explored: Vec<Point>,
    pub expansions: u64,
}

/// Search from `start` to `end`, one expansion at a time, reporting each step
/// to `observe`.
pub fn walk(
    map: &Map,
    start: Point,
    end: Point,
    mut observe: impl FnMut(Progress<'_>),
) -> gastar::Result<Walk> {
    let mut astar = Gastar::new();
    astar.setup(SearchConfig::from_pather(map).start(start).end(end))?;
    debug!("walking {start} -> {end} on a {}x{} map", map.width(), map.height());

    let mut explored = Vec::new();
    loop {
        let done = astar.step(false);
        let current = astar.current_node().copied();
        explored.extend(current);
        observe(Progress {
            current,
            explored: &explored,
            frontier: astar.frontier_len(),
            expansions: astar.expansions(),
        });
        if done {
            break;
        }
    }

    let solved = astar.is_solved();
    let origin = if solved {
        PathOrigin::End
    } else {
        PathOrigin::Current
    };
    let path = astar.path(origin)?;
    let cost = path.last().and_then(|p| astar.g_score(p)).unwrap_or(0);
    info!(
        "{} after {} expansions, path of {} cells costing {cost}",
        if solved { "solved" } else { "no route" },
        astar.expansions(),
        path.len(),
    );

    Ok(Walk {
        solved,
        path,
        cost,
        explored,
        expansions: astar.expansions(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::Tile;

    #[test]
    fn sample_map_is_solved_at_optimal_cost() {
        let map = Map::sample();
        let walk = walk(&map, Point::ZERO, map.bottom_right(), |_| {}).unwrap();

        assert!(walk.solved);
        assert_eq!(walk.path.first(), Some(&Point::ZERO));
        assert_eq!(walk.path.last(), Some(&Point::new(7, 7)));
        assert_eq!(walk.cost, 110);
        assert!(walk.path.iter().all(|&p| map.is_open(p)));
        let summed: Cost = walk.path.windows(2).map(|w| step_cost(w[0], w[1])).sum();
        assert_eq!(summed, walk.cost);
    }

    #[test]
    fn observer_sees_every_expansion() {
        let map = Map::sample();
        let mut calls = 0u64;
        let mut last = 0u64;
        let walk = walk(&map, Point::ZERO, map.bottom_right(), |p| {
            calls += 1;
            last = p.expansions;
            assert_eq!(p.explored.len() as u64, p.expansions);
        })
        .unwrap();

        assert_eq!(calls, walk.expansions);
        assert_eq!(last, walk.expansions);
        assert_eq!(walk.explored.len() as u64, walk.expansions);
    }

    #[test]
    fn sealed_end_falls_back_to_last_expansion() {
        let mut map = Map::new(4, 4).unwrap();
        for p in [Point::new(2, 3), Point::new(2, 2), Point::new(3, 2)] {
            map.set(p, Tile::Wall);
        }
        let walk = walk(&map, Point::ZERO, Point::new(3, 3), |_| {}).unwrap();

        assert!(!walk.solved);
        assert_eq!(walk.path.first(), Some(&Point::ZERO));
        assert_eq!(walk.path.last(), walk.explored.last());
        assert!(!walk.path.contains(&Point::new(3, 3)));
    }

    #[test]
    fn diagonal_is_cheaper_than_two_straights() {
        let map = Map::new(2, 2).unwrap();
        let walk = walk(&map, Point::ZERO, Point::new(1, 1), |_| {}).unwrap();
        assert_eq!(walk.path, vec![Point::ZERO, Point::new(1, 1)]);
        assert_eq!(walk.cost, 14);
    }
}
