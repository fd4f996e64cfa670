//! Rectangular tile maps: parsing, the built-in sample and random generation.
//!
//! The text format has one line per row:
//!
//! | Char | Meaning |
//! |---|---|
//! | `#` | wall |
//! | `.` or `_` | floor |
//! | `S` | floor, start marker |
//! | `E` | floor, end marker |
//!
//! Blank lines at either end are ignored; every other line must have the
//! same width.

use rand::Rng;
use thiserror::Error;

use crate::geom::Point;

/// Terrain of one map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Floor,
    Wall,
}

/// Optional endpoints found while parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Markers {
    pub start: Option<Point>,
    pub end: Option<Point>,
}

#[derive(Debug, Error, PartialEq)]
pub enum MapError {
    #[error("map has no rows")]
    Empty,
    #[error("line {line}: expected {expected} cells, found {found}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}, column {column}: unknown tile {ch:?}")]
    UnknownTile { ch: char, line: usize, column: usize },
    #[error("marker {0:?} appears more than once")]
    DuplicateMarker(char),
    #[error("map size {width}x{height} is not positive or too large")]
    BadSize { width: i32, height: i32 },
    #[error("wall density {0} is not a number")]
    BadDensity(f64),
}

/// The 8x8 map used when nothing else is given.
pub const SAMPLE: &str = "\
.....##.
.....##.
..##.##.
..##....
..##....
.....##.
.....##.
.....##.
";

/// A rectangular grid of [`Tile`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl Map {
    /// Create an all-floor map.
    pub fn new(width: i32, height: i32) -> Result<Self, MapError> {
        let cells = match width.checked_mul(height) {
            Some(n) if width > 0 && height > 0 => n as usize,
            _ => return Err(MapError::BadSize { width, height }),
        };
        Ok(Self {
            width,
            height,
            tiles: vec![Tile::Floor; cells],
        })
    }

    /// The built-in [`SAMPLE`] map.
    pub fn sample() -> Self {
        match Self::parse(SAMPLE) {
            Ok((map, _)) => map,
            Err(e) => unreachable!("built-in map is malformed: {e}"),
        }
    }

    /// Parse the text format described in the module docs.
    pub fn parse(text: &str) -> Result<(Self, Markers), MapError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .skip_while(|l| l.is_empty())
            .collect();
        let rows = match lines.iter().rposition(|l| !l.is_empty()) {
            Some(last) => &lines[..=last],
            None => return Err(MapError::Empty),
        };

        let width = rows[0].chars().count();
        let mut tiles = Vec::with_capacity(width * rows.len());
        let mut markers = Markers::default();
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(MapError::Ragged {
                    line: y + 1,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                let tile = match ch {
                    '#' => Tile::Wall,
                    '.' | '_' => Tile::Floor,
                    'S' => {
                        place(&mut markers.start, p, ch)?;
                        Tile::Floor
                    }
                    'E' => {
                        place(&mut markers.end, p, ch)?;
                        Tile::Floor
                    }
                    _ => {
                        return Err(MapError::UnknownTile {
                            ch,
                            line: y + 1,
                            column: x + 1,
                        });
                    }
                };
                tiles.push(tile);
            }
        }

        let map = Self {
            width: width as i32,
            height: rows.len() as i32,
            tiles,
        };
        Ok((map, markers))
    }

    /// Generate a map where each cell is a wall with probability `density`.
    ///
    /// `density` is clamped to `0.0..=1.0`; NaN is rejected. The corners are
    /// always floor so the default endpoints are open.
    pub fn random(
        rng: &mut impl Rng,
        width: i32,
        height: i32,
        density: f64,
    ) -> Result<Self, MapError> {
        if density.is_nan() {
            return Err(MapError::BadDensity(density));
        }
        let mut map = Self::new(width, height)?;
        let density = density.clamp(0.0, 1.0);
        for tile in &mut map.tiles {
            if rng.random_bool(density) {
                *tile = Tile::Wall;
            }
        }
        map.set(Point::ZERO, Tile::Floor);
        map.set(map.bottom_right(), Tile::Floor);
        Ok(map)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// The last cell of the last row.
    pub fn bottom_right(&self) -> Point {
        Point::new(self.width - 1, self.height - 1)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    pub fn at(&self, p: Point) -> Option<Tile> {
        self.contains(p).then(|| self.tiles[self.index(p)])
    }

    /// Set a tile. Points outside the map are ignored.
    pub fn set(&mut self, p: Point, tile: Tile) {
        if self.contains(p) {
            let i = self.index(p);
            self.tiles[i] = tile;
        }
    }

    /// Whether `p` is an in-bounds floor cell.
    pub fn is_open(&self, p: Point) -> bool {
        self.at(p) == Some(Tile::Floor)
    }

    /// In-bounds 8-connected neighbours of `p`, in [`Point::neighbors_8`]
    /// order. Walls are included; the search filters them.
    pub fn adjacent(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_8().into_iter().filter(|&q| self.contains(q))
    }

    /// Every point, row by row.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Point::new(x, y)))
    }

    fn index(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }
}

fn place(slot: &mut Option<Point>, p: Point, ch: char) -> Result<(), MapError> {
    if slot.replace(p).is_some() {
        return Err(MapError::DuplicateMarker(ch));
    }
    Ok(())
}
