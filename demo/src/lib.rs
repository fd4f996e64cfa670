//! Grid walk demo for the `gastar` engine.
//!
//! An 8-connected tile map is searched one expansion at a time; the
//! exploration and the resulting route are drawn in the terminal.

pub mod geom;
pub mod map;
pub mod render;
pub mod walk;

pub use geom::{DIAGONAL, Point, STRAIGHT, octile, step_cost};
pub use map::{Map, MapError, Markers, SAMPLE, Tile};
pub use render::Overlay;
pub use walk::{Progress, Walk, walk};
