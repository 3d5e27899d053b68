//! Headless driver that races A* against Dijkstra on twin mazes.
//!
//! Stands in for an interactive visualizer: it generates a maze, runs both
//! searches step by step on independent copies, and reports what each one
//! explored. Rendering is left to whoever consumes the step events.

pub mod config;
pub mod duel;

pub use config::{DEFAULT_COLS, DEFAULT_ROWS, DuelConfig};
pub use duel::{Duel, DuelReport, RunReport};
