//! Grid coordinates and step costs.

use std::fmt;

use gastar::Cost;

/// Cost of an orthogonal step.
pub const STRAIGHT: Cost = 10;
/// Cost of a diagonal step.
pub const DIAGONAL: Cost = 14;

/// A 2D integer point. X grows right, Y grows down (screen coordinates).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// All eight neighbours, clockwise from straight up: up, up-right,
    /// right, down-right, down, down-left, left, up-left.
    #[inline]
    pub fn neighbors_8(self) -> [Point; 8] {
        [
            self.shift(0, -1),
            self.shift(1, -1),
            self.shift(1, 0),
            self.shift(1, 1),
            self.shift(0, 1),
            self.shift(-1, 1),
            self.shift(-1, 0),
            self.shift(-1, -1),
        ]
    }

    /// Whether `other` is a diagonal step away.
    #[inline]
    pub fn is_diagonal_to(self, other: Point) -> bool {
        self.x != other.x && self.y != other.y
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cost of a single move between adjacent points.
pub fn step_cost(from: Point, to: Point) -> Cost {
    if from.is_diagonal_to(to) {
        DIAGONAL
    } else {
        STRAIGHT
    }
}

/// Octile distance: the cheapest 8-connected walk ignoring walls.
pub fn octile(a: Point, b: Point) -> Cost {
    let dx = a.x.abs_diff(b.x);
    let dy = a.y.abs_diff(b.y);
    let (lo, hi) = if dx < dy { (dx, dy) } else { (dy, dx) };
    DIAGONAL * lo + STRAIGHT * (hi - lo)
}
