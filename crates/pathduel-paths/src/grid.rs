//! The maze grid: static wall layout plus per-run search state.
//!
//! Cells live in one flat row-major `Vec`. Parent links are indices into
//! that vector, so a grid is a plain value: cloning it gives a fully
//! independent copy that another search can own.

use std::time::Instant;

use pathduel_core::{Point, Range};

use crate::error::{Endpoint, SearchError};
use crate::neighbors::Neighbors;

/// Sentinel cost meaning "not reached yet" (∞).
pub const UNREACHABLE: i32 = i32::MAX;

/// Static layout and search state of a single maze cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub is_wall: bool,
    /// Finalized by the current run (member of the closed set).
    pub visited: bool,
    /// Best known distance from the start, [`UNREACHABLE`] if none.
    pub g: i32,
    /// Heuristic estimate to the goal; 0 under Dijkstra once reached.
    pub h: i32,
    /// Row-major index of the predecessor on the best known path.
    pub parent: Option<usize>,
    /// When the cell was finalized, for renderers that animate visits.
    pub visit_time: Option<Instant>,
}

impl Cell {
    fn open() -> Self {
        Self {
            is_wall: false,
            visited: false,
            g: UNREACHABLE,
            h: UNREACHABLE,
            parent: None,
            visit_time: None,
        }
    }

    fn reset_search_state(&mut self) {
        self.visited = false;
        self.g = UNREACHABLE;
        self.h = UNREACHABLE;
        self.parent = None;
        self.visit_time = None;
    }
}

/// Plain description of a maze, as exchanged with generators and drivers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeDescriptor {
    pub rows: i32,
    pub cols: i32,
    /// Row-major wall flags, `rows * cols` entries.
    pub walls: Vec<bool>,
    pub start: Point,
    pub end: Point,
}

impl MazeDescriptor {
    /// An open maze with start at the top-left and end at the bottom-right.
    pub fn open(rows: i32, cols: i32) -> Self {
        let len = Range::with_dims(rows, cols).len();
        Self {
            rows,
            cols,
            walls: vec![false; len],
            start: Point::at(0, 0),
            end: Point::at(rows - 1, cols - 1),
        }
    }
}

/// A fixed `rows × cols` maze with exactly one start and one end cell.
#[derive(Debug, Clone)]
pub struct Grid {
    rng: Range,
    width: usize,
    pub(crate) cells: Vec<Cell>,
    start: Point,
    end: Point,
}

impl Grid {
    /// Create an open grid with start at (0, 0) and end at
    /// (rows - 1, cols - 1).
    pub fn new(rows: i32, cols: i32) -> Result<Self, SearchError> {
        check_dims(rows, cols)?;
        let rng = Range::with_dims(rows, cols);
        Ok(Self {
            rng,
            width: cols as usize,
            cells: vec![Cell::open(); rng.len()],
            start: Point::at(0, 0),
            end: Point::at(rows - 1, cols - 1),
        })
    }

    /// Build a grid from a descriptor, rejecting malformed layouts.
    pub fn from_descriptor(desc: &MazeDescriptor) -> Result<Self, SearchError> {
        check_dims(desc.rows, desc.cols)?;
        let expected = Range::with_dims(desc.rows, desc.cols).len();
        if desc.walls.len() != expected {
            return Err(SearchError::MaskSize {
                expected,
                found: desc.walls.len(),
            });
        }
        let mut grid = Self::new(desc.rows, desc.cols)?;
        for (cell, &wall) in grid.cells.iter_mut().zip(&desc.walls) {
            cell.is_wall = wall;
        }
        grid.start = desc.start;
        grid.end = desc.end;
        grid.validate()?;
        Ok(grid)
    }

    /// Export the static layout. Search state is not included.
    pub fn descriptor(&self) -> MazeDescriptor {
        MazeDescriptor {
            rows: self.rows(),
            cols: self.cols(),
            walls: self.cells.iter().map(|c| c.is_wall).collect(),
            start: self.start,
            end: self.end,
        }
    }

    /// Check that the endpoints are usable for a search.
    pub fn validate(&self) -> Result<(), SearchError> {
        for (endpoint, pos) in [(Endpoint::Start, self.start), (Endpoint::End, self.end)] {
            let Some(i) = self.idx(pos) else {
                return Err(SearchError::OutOfBounds { endpoint, pos });
            };
            if self.cells[i].is_wall {
                return Err(SearchError::WallEndpoint { endpoint, pos });
            }
        }
        if self.start == self.end && self.cells.len() > 1 {
            return Err(SearchError::SameEndpoints(self.start));
        }
        Ok(())
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.rng.height()
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.rng.width()
    }

    /// The rectangle covered by the grid.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; grids have at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    #[inline]
    pub fn is_start(&self, p: Point) -> bool {
        p == self.start
    }

    #[inline]
    pub fn is_end(&self, p: Point) -> bool {
        p == self.end
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.rng.contains(p)
    }

    /// The cell at `p`, or `None` if out of bounds.
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.idx(p).map(|i| &self.cells[i])
    }

    /// Whether `p` is a wall. Out-of-bounds points are not walls.
    pub fn is_wall(&self, p: Point) -> bool {
        self.cell(p).is_some_and(|c| c.is_wall)
    }

    /// Mark or clear a wall. Returns `false` if `p` is out of bounds.
    ///
    /// Endpoints may be walled here; such a grid is rejected when a search
    /// starts on it.
    pub fn set_wall(&mut self, p: Point, wall: bool) -> bool {
        match self.idx(p) {
            Some(i) => {
                self.cells[i].is_wall = wall;
                true
            }
            None => false,
        }
    }

    /// In-bounds axis-aligned neighbours of `p`, in the order right, down,
    /// left, up. Walls are included; the search filters them.
    #[inline]
    pub fn neighbors(&self, p: Point) -> Neighbors {
        Neighbors::new(p, self.rng)
    }

    /// Clear `visited`, `g`, `h`, `parent` and `visit_time` on every cell.
    /// Walls and endpoints are untouched.
    pub fn reset_search_state(&mut self) {
        for c in self.cells.iter_mut() {
            c.reset_search_state();
        }
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_wall).count()
    }

    /// Size of the closed set.
    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|c| c.visited).count()
    }

    /// Visited cells in row-major order.
    pub fn visited_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.visited)
            .map(|(i, _)| self.point(i))
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat row-major index. Returns `None` if out of
    /// range.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        Some(p.row() as usize * self.width + p.col() as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        Point::at((idx / self.width) as i32, (idx % self.width) as i32)
    }
}

fn check_dims(rows: i32, cols: i32) -> Result<(), SearchError> {
    if rows < 1 || cols < 1 {
        return Err(SearchError::BadDimensions { rows, cols });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_open_and_unsearched() {
        let g = Grid::new(3, 4).unwrap();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.len(), 12);
        assert_eq!(g.start(), Point::at(0, 0));
        assert_eq!(g.end(), Point::at(2, 3));
        for p in g.range() {
            let c = g.cell(p).unwrap();
            assert!(!c.is_wall);
            assert!(!c.visited);
            assert_eq!(c.g, UNREACHABLE);
            assert_eq!(c.h, UNREACHABLE);
            assert_eq!(c.parent, None);
        }
        assert!(g.validate().is_ok());
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert_eq!(
            Grid::new(0, 5).unwrap_err(),
            SearchError::BadDimensions { rows: 0, cols: 5 }
        );
        assert!(Grid::new(4, -1).is_err());
    }

    #[test]
    fn index_round_trip() {
        let g = Grid::new(3, 5).unwrap();
        for (i, p) in g.range().iter().enumerate() {
            assert_eq!(g.idx(p), Some(i));
            assert_eq!(g.point(i), p);
        }
        assert_eq!(g.idx(Point::at(3, 0)), None);
    }

    #[test]
    fn set_wall_in_and_out_of_bounds() {
        let mut g = Grid::new(2, 2).unwrap();
        assert!(g.set_wall(Point::at(0, 1), true));
        assert!(g.is_wall(Point::at(0, 1)));
        assert_eq!(g.wall_count(), 1);
        assert!(!g.set_wall(Point::at(5, 5), true));
        assert!(!g.is_wall(Point::at(5, 5)));
    }

    #[test]
    fn neighbors_stay_in_bounds() {
        let g = Grid::new(2, 3).unwrap();
        let n: Vec<Point> = g.neighbors(Point::at(1, 2)).collect();
        assert_eq!(n, vec![Point::at(1, 1), Point::at(0, 2)]);
    }

    #[test]
    fn reset_keeps_walls_and_endpoints() {
        let mut g = Grid::new(3, 3).unwrap();
        g.set_wall(Point::at(1, 1), true);
        let i = g.idx(Point::at(0, 1)).unwrap();
        g.cells[i].visited = true;
        g.cells[i].g = 1;
        g.cells[i].h = 3;
        g.cells[i].parent = Some(0);
        g.cells[i].visit_time = Some(Instant::now());

        g.reset_search_state();
        assert!(g.is_wall(Point::at(1, 1)));
        assert_eq!(g.start(), Point::at(0, 0));
        assert_eq!(g.end(), Point::at(2, 2));
        assert_eq!(g.cells[i], Cell::open());
        assert_eq!(g.visited_count(), 0);
    }

    #[test]
    fn descriptor_round_trip() {
        let mut g = Grid::new(3, 3).unwrap();
        g.set_wall(Point::at(1, 0), true);
        g.set_wall(Point::at(1, 1), true);
        let d = g.descriptor();
        assert_eq!(d.walls.iter().filter(|w| **w).count(), 2);
        let copy = Grid::from_descriptor(&d).unwrap();
        assert_eq!(copy.descriptor(), d);
    }

    #[test]
    fn huge_descriptor_sized_without_overflow() {
        assert!(MazeDescriptor::open(0, 3).walls.is_empty());
        assert!(MazeDescriptor::open(-2, -2).walls.is_empty());
        // 50_000 * 50_000 overflows i32; the mask size is checked before
        // any cell is allocated.
        let d = MazeDescriptor {
            rows: 50_000,
            cols: 50_000,
            walls: Vec::new(),
            start: Point::at(0, 0),
            end: Point::at(49_999, 49_999),
        };
        assert_eq!(
            Grid::from_descriptor(&d).unwrap_err(),
            SearchError::MaskSize {
                expected: 2_500_000_000,
                found: 0
            }
        );
    }

    #[test]
    fn out_of_bounds_start_reported_as_start() {
        use crate::policy::Dijkstra;
        use crate::search::Search;

        let mut g = Grid::new(2, 2).unwrap();
        g.start = Point::at(-1, 0);
        assert_eq!(
            Search::new(&mut g, Dijkstra).err(),
            Some(SearchError::OutOfBounds {
                endpoint: Endpoint::Start,
                pos: Point::at(-1, 0)
            })
        );
        g.start = Point::at(0, 0);
        g.end = Point::at(0, 2);
        assert_eq!(
            Search::new(&mut g, Dijkstra).err(),
            Some(SearchError::OutOfBounds {
                endpoint: Endpoint::End,
                pos: Point::at(0, 2)
            })
        );
    }

    #[test]
    fn descriptor_validation() {
        let mut d = MazeDescriptor::open(2, 2);
        d.walls.pop();
        assert_eq!(
            Grid::from_descriptor(&d).unwrap_err(),
            SearchError::MaskSize { expected: 4, found: 3 }
        );

        let mut d = MazeDescriptor::open(2, 2);
        d.walls[0] = true;
        assert!(matches!(
            Grid::from_descriptor(&d),
            Err(SearchError::WallEndpoint { endpoint: Endpoint::Start, .. })
        ));

        let mut d = MazeDescriptor::open(2, 2);
        d.end = Point::at(2, 0);
        assert!(matches!(
            Grid::from_descriptor(&d),
            Err(SearchError::OutOfBounds { endpoint: Endpoint::End, .. })
        ));

        let mut d = MazeDescriptor::open(2, 2);
        d.end = d.start;
        assert_eq!(
            Grid::from_descriptor(&d).unwrap_err(),
            SearchError::SameEndpoints(Point::ZERO)
        );

        assert!(Grid::from_descriptor(&MazeDescriptor::open(1, 1)).is_ok());
    }

    #[test]
    fn clones_are_independent() {
        let mut a = Grid::new(2, 2).unwrap();
        let b = a.clone();
        a.set_wall(Point::at(0, 1), true);
        assert!(!b.is_wall(Point::at(0, 1)));
    }

    #[test]
    fn visited_points_row_major() {
        let mut g = Grid::new(2, 2).unwrap();
        g.cells[3].visited = true;
        g.cells[1].visited = true;
        let v: Vec<Point> = g.visited_points().collect();
        assert_eq!(v, vec![Point::at(0, 1), Point::at(1, 1)]);
    }
}
