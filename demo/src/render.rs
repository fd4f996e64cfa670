//! Terminal rendering with crossterm.

use std::collections::HashSet;
use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use crate::geom::Point;
use crate::map::{Map, Tile};

const COL_FLOOR: Color = Color::Rgb { r: 90, g: 85, b: 80 };
const COL_WALL: Color = Color::Rgb { r: 100, g: 100, b: 130 };
const COL_EXPLORED: Color = Color::Rgb { r: 40, g: 120, b: 60 };
const COL_PATH: Color = Color::Rgb { r: 50, g: 180, b: 255 };
const COL_CURRENT: Color = Color::Rgb { r: 255, g: 220, b: 80 };
const COL_ENDPOINT: Color = Color::Rgb { r: 220, g: 50, b: 50 };

/// What to draw on top of the terrain.
#[derive(Debug, Clone, Default)]
pub struct Overlay {
    pub start: Option<Point>,
    pub end: Option<Point>,
    pub current: Option<Point>,
    explored: HashSet<Point>,
    path: HashSet<Point>,
}

impl Overlay {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            ..Self::default()
        }
    }

    pub fn explore(&mut self, p: Point) {
        self.explored.insert(p);
    }

    pub fn mark_path(&mut self, p: Point) {
        self.path.insert(p);
    }

    /// Glyph and colour of the cell at `p`, highest priority first:
    /// endpoints, current node, path, explored, terrain.
    pub fn glyph(&self, map: &Map, p: Point) -> (char, Color) {
        if self.start == Some(p) {
            ('S', COL_ENDPOINT)
        } else if self.end == Some(p) {
            ('E', COL_ENDPOINT)
        } else if self.current == Some(p) {
            ('@', COL_CURRENT)
        } else if self.path.contains(&p) {
            ('|', COL_PATH)
        } else if self.explored.contains(&p) {
            ('+', COL_EXPLORED)
        } else if map.at(p) == Some(Tile::Wall) {
            ('#', COL_WALL)
        } else {
            ('_', COL_FLOOR)
        }
    }

    /// Uncoloured rendering, one line per row, cells separated by spaces.
    pub fn plain(&self, map: &Map) -> String {
        let mut out = String::new();
        for y in 0..map.height() {
            let row: Vec<String> = (0..map.width())
                .map(|x| self.glyph(map, Point::new(x, y)).0.to_string())
                .collect();
            out.push_str(&row.join(" "));
            out.push('\n');
        }
        out
    }
}

/// Redraw the whole map at the top-left of the terminal, followed by a
/// status line.
pub fn draw<W: Write>(out: &mut W, map: &Map, overlay: &Overlay, status: &str) -> io::Result<()> {
    queue!(out, cursor::MoveTo(0, 0), Clear(ClearType::All))?;
    for y in 0..map.height() {
        for x in 0..map.width() {
            let (ch, fg) = overlay.glyph(map, Point::new(x, y));
            queue!(out, SetForegroundColor(fg), Print(ch), Print(' '))?;
        }
        queue!(out, ResetColor, Print("\r\n"))?;
    }
    queue!(out, Print(status), Print("\r\n"))?;
    out.flush()
}

/// Hide the cursor for the duration of an animation.
pub fn begin<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, cursor::Hide)?;
    out.flush()
}

/// Restore the cursor and colours.
pub fn finish<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, ResetColor, cursor::Show)?;
    out.flush()
}
