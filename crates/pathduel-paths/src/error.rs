use std::fmt;

use pathduel_core::Point;

/// Which end of the search a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// Broad class of a [`SearchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The maze handed to the engine is malformed. Reported before any
    /// search step runs.
    InvalidInput,
    /// The engine broke one of its own invariants. Never expected; the
    /// run is aborted instead of returning a wrong path.
    InternalInvariantViolation,
}

/// Errors produced while building a grid or running a search.
///
/// An unreachable goal or a cancelled run is not an error; see
/// [`Outcome`](crate::Outcome).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Rows and columns must both be at least 1.
    BadDimensions { rows: i32, cols: i32 },
    /// A wall mask does not have exactly `rows * cols` entries.
    MaskSize { expected: usize, found: usize },
    /// An endpoint lies outside the grid.
    OutOfBounds { endpoint: Endpoint, pos: Point },
    /// An endpoint is a wall.
    WallEndpoint { endpoint: Endpoint, pos: Point },
    /// Start and end coincide on a grid with more than one cell.
    SameEndpoints(Point),
    /// A parent chain visits the same cell twice.
    ParentCycle(Point),
    /// A parent chain ends somewhere other than the start cell.
    BrokenChain(Point),
}

impl SearchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BadDimensions { .. }
            | Self::MaskSize { .. }
            | Self::OutOfBounds { .. }
            | Self::WallEndpoint { .. }
            | Self::SameEndpoints(_) => ErrorKind::InvalidInput,
            Self::ParentCycle(_) | Self::BrokenChain(_) => ErrorKind::InternalInvariantViolation,
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadDimensions { rows, cols } => {
                write!(f, "grid must be at least 1x1, got {rows}x{cols}")
            }
            Self::MaskSize { expected, found } => {
                write!(f, "wall mask has {found} cells, expected {expected}")
            }
            Self::OutOfBounds { endpoint, pos } => {
                write!(f, "{endpoint} cell {pos} is outside the grid")
            }
            Self::WallEndpoint { endpoint, pos } => {
                write!(f, "{endpoint} cell {pos} is a wall")
            }
            Self::SameEndpoints(pos) => {
                write!(f, "start and end are both {pos} on a multi-cell grid")
            }
            Self::ParentCycle(pos) => {
                write!(f, "internal error: parent chain loops at {pos}")
            }
            Self::BrokenChain(pos) => {
                write!(f, "internal error: parent chain stops at {pos}, not at the start")
            }
        }
    }
}

impl std::error::Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        let e = SearchError::WallEndpoint {
            endpoint: Endpoint::End,
            pos: Point::at(2, 2),
        };
        assert_eq!(e.kind(), ErrorKind::InvalidInput);
        assert_eq!(e.to_string(), "end cell (2, 2) is a wall");
        assert_eq!(
            SearchError::ParentCycle(Point::ZERO).kind(),
            ErrorKind::InternalInvariantViolation
        );
    }

    #[test]
    fn dimension_message() {
        let e = SearchError::BadDimensions { rows: 0, cols: 3 };
        assert_eq!(e.to_string(), "grid must be at least 1x1, got 0x3");
    }
}
