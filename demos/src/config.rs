//! Driver configuration and command-line parsing.

use std::time::Duration;

use clap::Parser;
use pathduel_gen::DEFAULT_WALL_DENSITY;

/// A 24 × 16 maze, each half of an 800 × 600 window at 25 px per cell.
pub const DEFAULT_ROWS: i32 = 24;
pub const DEFAULT_COLS: i32 = 16;

/// Settings for one duel session.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "duel")]
#[command(about = "Race A* against Dijkstra on twin copies of a random maze")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DuelConfig {
    /// Maze rows.
    #[arg(long, default_value_t = DEFAULT_ROWS, value_parser = clap::value_parser!(i32).range(1..))]
    pub rows: i32,

    /// Maze columns.
    #[arg(long, default_value_t = DEFAULT_COLS, value_parser = clap::value_parser!(i32).range(1..))]
    pub cols: i32,

    /// Wall probability in [0, 1).
    #[arg(long = "density", default_value_t = DEFAULT_WALL_DENSITY, value_parser = parse_density)]
    pub wall_density: f64,

    /// RNG seed for a reproducible maze. A random one is drawn when absent.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Cancel both searches after this many steps each.
    #[arg(long)]
    pub max_steps: Option<usize>,

    /// Cancel both searches after this many milliseconds.
    #[arg(long = "time-limit-ms", value_name = "MS", value_parser = parse_millis)]
    pub time_limit: Option<Duration>,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            wall_density: DEFAULT_WALL_DENSITY,
            seed: None,
            max_steps: None,
            time_limit: None,
        }
    }
}

fn parse_density(raw: &str) -> Result<f64, String> {
    let p: f64 = raw.parse().map_err(|e| format!("{e}"))?;
    if (0.0..1.0).contains(&p) {
        Ok(p)
    } else {
        Err(format!("{p} is not in [0, 1)"))
    }
}

fn parse_millis(raw: &str) -> Result<Duration, std::num::ParseIntError> {
    raw.parse().map(Duration::from_millis)
}
