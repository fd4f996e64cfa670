//! Small grid search spaces shared by the unit tests.

use std::collections::HashSet;

use crate::config::SearchConfig;
use crate::node::Cost;

pub(crate) type Cell = (i32, i32);

/// Rectangular grid with blocked cells.
pub(crate) struct Grid {
    width: i32,
    height: i32,
    walls: HashSet<Cell>,
}

impl Grid {
    pub(crate) fn open(width: i32, height: i32) -> Self {
        Self::with_walls(width, height, &[])
    }

    pub(crate) fn with_walls(width: i32, height: i32, walls: &[Cell]) -> Self {
        Self {
            width,
            height,
            walls: walls.iter().copied().collect(),
        }
    }

    pub(crate) fn contains(&self, (x, y): Cell) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    pub(crate) fn is_open(&self, p: Cell) -> bool {
        self.contains(p) && !self.walls.contains(&p)
    }

    pub(crate) fn neighbors_4(&self, (x, y): Cell) -> Vec<Cell> {
        [(0, -1), (1, 0), (0, 1), (-1, 0)]
            .into_iter()
            .map(|(dx, dy)| (x + dx, y + dy))
            .filter(|&p| self.contains(p))
            .collect()
    }

    pub(crate) fn neighbors_8(&self, (x, y): Cell) -> Vec<Cell> {
        [
            (0, -1),
            (1, -1),
            (1, 0),
            (1, 1),
            (0, 1),
            (-1, 1),
            (-1, 0),
            (-1, -1),
        ]
        .into_iter()
        .map(|(dx, dy)| (x + dx, y + dy))
        .filter(|&p| self.contains(p))
        .collect()
    }
}

fn manhattan(a: Cell, b: Cell) -> Cost {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

fn chebyshev(a: Cell, b: Cell) -> Cost {
    a.0.abs_diff(b.0).max(a.1.abs_diff(b.1))
}

/// 4-connected grid, unit steps, Manhattan estimate, walls rejected by
/// `usable`.
pub(crate) fn grid_config(grid: &Grid, start: Cell, end: Cell) -> SearchConfig<'_, Cell> {
    SearchConfig::new()
        .start(start)
        .end(end)
        .distance(|_, _, _, _| 1)
        .heuristic(|node, _, _, end| manhattan(*node, *end))
        .neighbors(move |p: &Cell| grid.neighbors_4(*p))
        .usable(move |node, _, _, _| grid.is_open(*node))
}

/// 8-connected grid, unit steps, Chebyshev estimate.
pub(crate) fn grid_config_8(grid: &Grid, start: Cell, end: Cell) -> SearchConfig<'_, Cell> {
    SearchConfig::new()
        .start(start)
        .end(end)
        .distance(|_, _, _, _| 1)
        .heuristic(|node, _, _, end| chebyshev(*node, *end))
        .neighbors(move |p: &Cell| grid.neighbors_8(*p))
        .usable(move |node, _, _, _| grid.is_open(*node))
}
