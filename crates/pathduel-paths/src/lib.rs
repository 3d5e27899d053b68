//! Step-wise shortest-path search on maze grids.
//!
//! This crate runs the two classical single-pair algorithms on a
//! 4-connected, unit-cost [`Grid`]:
//!
//! - **A\*** with the Manhattan heuristic ([`Astar`])
//! - **Dijkstra** ([`Dijkstra`])
//!
//! Both share one frontier-expansion template, [`Search`], parameterised by
//! a [`PriorityPolicy`]. A search is driven one finalized cell at a time,
//! either as an [`Iterator`] of [`StepEvent`]s or through
//! [`Search::run_with`], so a renderer can look at the grid between steps
//! and a [`CancelToken`](pathduel_core::CancelToken) can stop it.
//!
//! | Outcome | Meaning |
//! |---|---|
//! | [`Outcome::Found`] | goal reached, path from start to goal |
//! | [`Outcome::NotFound`] | frontier exhausted, goal unreachable |
//! | [`Outcome::Cancelled`] | stopped by the driver |
//!
//! Malformed input and broken parent chains are reported as [`SearchError`].

mod distance;
mod error;
mod frontier;
mod grid;
mod neighbors;
mod path;
mod policy;
mod search;

pub use distance::manhattan;
pub use error::{Endpoint, ErrorKind, SearchError};
pub use grid::{Cell, Grid, MazeDescriptor, UNREACHABLE};
pub use neighbors::Neighbors;
pub use path::reconstruct;
pub use policy::{Algorithm, Astar, Dijkstra, PriorityPolicy};
pub use search::{Outcome, Search, Status, StepEvent};
