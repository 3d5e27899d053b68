//! Maze generation for pathduel: random wall layouts and twin grids.

pub mod mapgen;

pub use mapgen::{DEFAULT_WALL_DENSITY, GenError, MazeGen};
