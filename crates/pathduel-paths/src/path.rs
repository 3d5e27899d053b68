use log::error;
use pathduel_core::Point;

use crate::error::SearchError;
use crate::grid::Grid;

/// Walk parent links back from `goal` and return the path in start→goal
/// order, both endpoints included.
///
/// The chain must end at the grid's start cell. A chain that revisits a
/// cell or stops anywhere else means the search state is corrupt, and is
/// reported as an internal invariant violation rather than a path.
pub fn reconstruct(grid: &Grid, goal: Point) -> Result<Vec<Point>, SearchError> {
    let Some(mut ci) = grid.idx(goal) else {
        return Err(SearchError::BrokenChain(goal));
    };
    let mut seen = vec![false; grid.len()];
    let mut path = Vec::new();
    loop {
        let p = grid.point(ci);
        if seen[ci] {
            error!("parent chain from {goal} loops at {p}");
            return Err(SearchError::ParentCycle(p));
        }
        seen[ci] = true;
        path.push(p);
        match grid.cells[ci].parent {
            Some(parent) if parent < grid.len() => ci = parent,
            Some(_) => {
                error!("parent chain from {goal} leaves the grid at {p}");
                return Err(SearchError::BrokenChain(p));
            }
            None if grid.is_start(p) => break,
            None => {
                error!("parent chain from {goal} stops at {p}");
                return Err(SearchError::BrokenChain(p));
            }
        }
    }
    path.reverse();
    Ok(path)
}
