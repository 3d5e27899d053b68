//! Random wall layouts.
//!
//! Every cell other than the two endpoints becomes a wall independently
//! with probability `p`. Nothing guarantees the end is reachable from the
//! start; an unsolvable maze is a normal result.

use std::fmt;

use log::debug;
use pathduel_core::{Point, Range};
use pathduel_paths::{Grid, MazeDescriptor, SearchError};
use rand::{Rng, RngExt};

/// Wall probability used when none is given.
pub const DEFAULT_WALL_DENSITY: f64 = 0.3;

/// Errors from maze generation.
#[derive(Debug, Clone, PartialEq)]
pub enum GenError {
    /// Wall density outside `[0, 1)`.
    Density(f64),
    /// The requested dimensions do not make a valid grid.
    Grid(SearchError),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Density(p) => write!(f, "wall density must be in [0, 1), got {p}"),
            Self::Grid(e) => write!(f, "invalid maze: {e}"),
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Density(_) => None,
        }
    }
}

impl From<SearchError> for GenError {
    fn from(e: SearchError) -> Self {
        Self::Grid(e)
    }
}

/// Maze generator owning its random source.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw a `rows × cols` layout with start at (0, 0) and end at
    /// (rows - 1, cols - 1), both open.
    pub fn random_walls(&mut self, rows: i32, cols: i32, p: f64) -> Result<MazeDescriptor, GenError> {
        if !(0.0..1.0).contains(&p) {
            return Err(GenError::Density(p));
        }
        if rows < 1 || cols < 1 {
            return Err(SearchError::BadDimensions { rows, cols }.into());
        }

        let start = Point::at(0, 0);
        let end = Point::at(rows - 1, cols - 1);
        let walls: Vec<bool> = Range::with_dims(rows, cols)
            .iter()
            .map(|c| c != start && c != end && self.rng.random::<f64>() < p)
            .collect();

        debug!(
            "generated {rows}x{cols} maze with {} walls (p = {p})",
            walls.iter().filter(|w| **w).count()
        );
        Ok(MazeDescriptor {
            rows,
            cols,
            walls,
            start,
            end,
        })
    }

    /// Generate a fresh grid.
    pub fn generate(&mut self, rows: i32, cols: i32, p: f64) -> Result<Grid, GenError> {
        let desc = self.random_walls(rows, cols, p)?;
        Ok(Grid::from_descriptor(&desc)?)
    }

    /// Generate two independent grids sharing one wall layout, one per
    /// algorithm in a side-by-side run.
    pub fn generate_pair(&mut self, rows: i32, cols: i32, p: f64) -> Result<(Grid, Grid), GenError> {
        let desc = self.random_walls(rows, cols, p)?;
        Ok((Grid::from_descriptor(&desc)?, Grid::from_descriptor(&desc)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded(seed: u64) -> MazeGen<StdRng> {
        MazeGen::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn endpoints_always_open() {
        let mut mg = seeded(1);
        for _ in 0..50 {
            let d = mg.random_walls(5, 7, 0.9).unwrap();
            assert_eq!(d.walls.len(), 35);
            assert!(!d.walls[0]);
            assert!(!d.walls[34]);
            assert_eq!(d.start, Point::at(0, 0));
            assert_eq!(d.end, Point::at(4, 6));
        }
    }

    #[test]
    fn zero_density_is_open() {
        let mut mg = seeded(2);
        let g = mg.generate(6, 6, 0.0).unwrap();
        assert_eq!(g.wall_count(), 0);
    }

    #[test]
    fn density_roughly_respected() {
        let mut mg = seeded(3);
        let g = mg.generate(100, 100, 0.3).unwrap();
        let frac = g.wall_count() as f64 / g.len() as f64;
        assert!((0.25..0.35).contains(&frac), "wall fraction {frac}");
    }

    #[test]
    fn same_seed_same_maze() {
        let a = seeded(9).random_walls(10, 10, 0.3).unwrap();
        let b = seeded(9).random_walls(10, 10, 0.3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn pair_shares_layout_not_state() {
        let mut mg = seeded(4);
        let (mut a, b) = mg.generate_pair(8, 8, 0.3).unwrap();
        assert_eq!(a.descriptor(), b.descriptor());
        a.set_wall(Point::at(3, 3), !a.is_wall(Point::at(3, 3)));
        assert_ne!(a.descriptor(), b.descriptor());
    }

    #[test]
    fn single_cell_maze() {
        let g = seeded(5).generate(1, 1, 0.5).unwrap();
        assert_eq!(g.start(), g.end());
        assert!(!g.is_wall(Point::ZERO));
    }

    #[test]
    fn bad_inputs() {
        let mut mg = seeded(6);
        assert_eq!(mg.random_walls(3, 3, 1.0).unwrap_err(), GenError::Density(1.0));
        assert!(matches!(mg.random_walls(3, 3, -0.1), Err(GenError::Density(_))));
        assert!(matches!(mg.random_walls(3, 3, f64::NAN), Err(GenError::Density(_))));
        assert_eq!(
            mg.random_walls(0, 3, 0.3).unwrap_err(),
            GenError::Grid(SearchError::BadDimensions { rows: 0, cols: 3 })
        );
    }
}
