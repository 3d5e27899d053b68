use std::fmt;

use pathduel_core::Point;

use crate::distance::manhattan;

/// How a search orders its frontier.
///
/// The expansion loop is the same for every policy; only the heuristic and
/// the priority key change.
pub trait PriorityPolicy {
    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Estimate of the remaining cost from `from` to `goal`.
    /// Must never overestimate the true cost (admissible).
    fn heuristic(&self, from: Point, goal: Point) -> i32;

    /// Frontier key for a cell with cost `g` and estimate `h`.
    fn priority(&self, g: i32, h: i32) -> i32 {
        g + h
    }
}

/// Uniform-cost search: priority is `g`, no heuristic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dijkstra;

impl PriorityPolicy for Dijkstra {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn heuristic(&self, _from: Point, _goal: Point) -> i32 {
        0
    }

    fn priority(&self, g: i32, _h: i32) -> i32 {
        g
    }
}

/// A* with the Manhattan heuristic, which is admissible and consistent on a
/// 4-connected unit-cost grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Astar;

impl PriorityPolicy for Astar {
    fn name(&self) -> &'static str {
        "astar"
    }

    fn heuristic(&self, from: Point, goal: Point) -> i32 {
        manhattan(from, goal)
    }
}

/// Runtime choice between the two policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Astar,
    Dijkstra,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Astar, Algorithm::Dijkstra];
}

impl PriorityPolicy for Algorithm {
    fn name(&self) -> &'static str {
        match self {
            Self::Astar => Astar.name(),
            Self::Dijkstra => Dijkstra.name(),
        }
    }

    fn heuristic(&self, from: Point, goal: Point) -> i32 {
        match self {
            Self::Astar => Astar.heuristic(from, goal),
            Self::Dijkstra => Dijkstra.heuristic(from, goal),
        }
    }

    fn priority(&self, g: i32, h: i32) -> i32 {
        match self {
            Self::Astar => Astar.priority(g, h),
            Self::Dijkstra => Dijkstra.priority(g, h),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Astar => f.write_str("A*"),
            Self::Dijkstra => f.write_str("Dijkstra"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dijkstra_ignores_h() {
        assert_eq!(Dijkstra.heuristic(Point::ZERO, Point::at(5, 5)), 0);
        assert_eq!(Dijkstra.priority(3, 100), 3);
    }

    #[test]
    fn astar_uses_manhattan() {
        assert_eq!(Astar.heuristic(Point::at(1, 1), Point::at(4, 3)), 5);
        assert_eq!(Astar.priority(3, 5), 8);
    }

    #[test]
    fn algorithm_delegates() {
        let goal = Point::at(2, 2);
        assert_eq!(Algorithm::Astar.heuristic(Point::ZERO, goal), 4);
        assert_eq!(Algorithm::Dijkstra.heuristic(Point::ZERO, goal), 0);
        assert_eq!(Algorithm::Astar.name(), "astar");
        assert_eq!(Algorithm::Dijkstra.to_string(), "Dijkstra");
    }
}
