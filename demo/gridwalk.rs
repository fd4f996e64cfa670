//! Animated A* search on an 8-connected grid.
//!
//! Run: cargo run --bin gridwalk -- --explore

use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, ensure};
use clap::Parser;
use gastar_demo::{Map, Markers, Overlay, Point, render, walk};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gridwalk", about = "Animated A* search on an 8-connected grid")]
struct Args {
    /// Map file: '#' wall, '.' or '_' floor, 'S' start, 'E' end.
    #[arg(long, conflicts_with = "random")]
    map: Option<PathBuf>,

    /// Generate a random map from this seed.
    #[arg(long)]
    random: Option<u64>,

    /// Width of a random map.
    #[arg(long, default_value_t = 24)]
    width: i32,

    /// Height of a random map.
    #[arg(long, default_value_t = 12)]
    height: i32,

    /// Share of wall cells in a random map.
    #[arg(long, default_value_t = 0.3)]
    density: f64,

    /// Pause between frames, in milliseconds.
    #[arg(long, default_value_t = 300)]
    delay_ms: u64,

    /// Animate every expansion, not just the final route.
    #[arg(long)]
    explore: bool,

    /// Print the final map only.
    #[arg(long)]
    quiet: bool,
}

fn load(args: &Args) -> anyhow::Result<(Map, Markers)> {
    if let Some(path) = &args.map {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        return Map::parse(&text).with_context(|| format!("parsing {}", path.display()));
    }
    if let Some(seed) = args.random {
        let mut rng = StdRng::seed_from_u64(seed);
        let map = Map::random(&mut rng, args.width, args.height, args.density)?;
        return Ok((map, Markers::default()));
    }
    Ok((Map::sample(), Markers::default()))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let (map, markers) = load(&args)?;
    let start = markers.start.unwrap_or(Point::ZERO);
    let end = markers.end.unwrap_or(map.bottom_right());
    ensure!(map.is_open(start), "start {start} is not a floor cell");
    ensure!(map.is_open(end), "end {end} is not a floor cell");
    info!("{}x{} map, {start} -> {end}", map.width(), map.height());

    let delay = Duration::from_millis(args.delay_ms);
    let animate = !args.quiet;
    let mut out = io::stdout().lock();
    let mut overlay = Overlay::new(start, end);

    if animate {
        render::begin(&mut out)?;
    }
    let mut draw_err = None;
    let result = walk(&map, start, end, |progress| {
        if !(animate && args.explore) || draw_err.is_some() {
            return;
        }
        if let Some(p) = progress.current {
            overlay.explore(p);
        }
        overlay.current = progress.current;
        let status = format!(
            "expanded {}, frontier {}",
            progress.expansions, progress.frontier
        );
        if let Err(e) = render::draw(&mut out, &map, &overlay, &status) {
            draw_err = Some(e);
        }
        thread::sleep(delay);
    });
    if let Some(e) = draw_err {
        render::finish(&mut out)?;
        return Err(e.into());
    }
    let result = result?;
    overlay.current = None;

    let status = if result.solved {
        format!(
            "solved: cost {}, {} cells, {} expansions",
            result.cost,
            result.path.len(),
            result.expansions
        )
    } else {
        format!(
            "no route; best effort reaches {} after {} expansions",
            result.path.last().copied().unwrap_or(start),
            result.expansions
        )
    };

    // Reveal the route from its far end back to the start.
    for &p in result.path.iter().rev() {
        overlay.mark_path(p);
        if animate {
            render::draw(&mut out, &map, &overlay, &status)?;
            thread::sleep(delay);
        }
    }

    if animate {
        render::finish(&mut out)?;
    } else {
        writeln!(out, "{}{status}", overlay.plain(&map))?;
    }
    Ok(())
}
