//! The shared expansion loop behind both A* and Dijkstra.

use std::time::{Duration, Instant};

use log::{debug, error, trace, warn};
use pathduel_core::{CancelToken, Point};

use crate::error::{Endpoint, SearchError};
use crate::frontier::Frontier;
use crate::grid::Grid;
use crate::path::reconstruct;
use crate::policy::PriorityPolicy;

/// Emitted once per finalized cell, in finalization order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepEvent {
    pub cell: Point,
    /// Final distance from the start.
    pub g: i32,
    /// 1-based step number within the run.
    pub step: usize,
    /// Wall-clock time of finalization.
    pub at: Instant,
}

/// Terminal result of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Cells from start to goal, both included.
    Found(Vec<Point>),
    /// The frontier ran dry without reaching the goal.
    NotFound,
    /// The driver cancelled the run before it finished.
    Cancelled,
}

impl Outcome {
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            Self::Found(path) => Some(path),
            _ => None,
        }
    }

    /// Number of moves on the path.
    pub fn edges(&self) -> Option<usize> {
        self.path().map(|p| p.len().saturating_sub(1))
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Progress of a [`Search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Running,
    Done(Outcome),
    Failed(SearchError),
}

/// A single search run, advanced one finalized cell at a time.
///
/// The search borrows its grid mutably for the whole run and writes
/// `visited`, `g`, `h`, `parent` and `visit_time` into it, so a renderer can
/// read the grid through [`Search::grid`] between steps.
pub struct Search<'g, P: PriorityPolicy> {
    grid: &'g mut Grid,
    policy: P,
    frontier: Frontier,
    goal: Point,
    goal_idx: usize,
    cancel: Option<CancelToken>,
    status: Status,
    steps: usize,
    started: Instant,
}

impl<'g, P: PriorityPolicy> Search<'g, P> {
    /// Validate the grid, clear its search state and seed the frontier with
    /// the start cell.
    ///
    /// A single-cell grid finishes here with a one-cell path.
    pub fn new(grid: &'g mut Grid, policy: P) -> Result<Self, SearchError> {
        grid.validate()?;
        grid.reset_search_state();

        let start = grid.start();
        let goal = grid.end();
        let start_idx = grid.idx(start).ok_or(SearchError::OutOfBounds {
            endpoint: Endpoint::Start,
            pos: start,
        })?;
        let goal_idx = grid.idx(goal).ok_or(SearchError::OutOfBounds {
            endpoint: Endpoint::End,
            pos: goal,
        })?;

        let h = policy.heuristic(start, goal);
        let n = &mut grid.cells[start_idx];
        n.g = 0;
        n.h = h;

        let mut frontier = Frontier::new();
        let status = if start_idx == goal_idx {
            Status::Done(Outcome::Found(vec![start]))
        } else {
            frontier.push(policy.priority(0, h), start_idx);
            Status::Running
        };

        debug!(
            "{} search started on {} grid, {start} -> {goal}",
            policy.name(),
            grid.range()
        );

        Ok(Self {
            grid,
            policy,
            frontier,
            goal,
            goal_idx,
            cancel: None,
            status,
            steps: 0,
            started: Instant::now(),
        })
    }

    /// Stop the run at the next step boundary once `token` is cancelled.
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Advance until one more cell is finalized.
    ///
    /// Returns `None` once the run has reached a terminal [`Status`]. The
    /// returned event is produced after the cell's neighbours have been
    /// relaxed; cancellation is only observed between steps.
    pub fn step(&mut self) -> Option<StepEvent> {
        if self.is_finished() {
            return None;
        }
        loop {
            if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
                warn!(
                    "{} search cancelled after {} steps",
                    self.policy.name(),
                    self.steps
                );
                self.finish_with(Status::Done(Outcome::Cancelled));
                return None;
            }

            let Some(entry) = self.frontier.pop() else {
                self.finish_with(Status::Done(Outcome::NotFound));
                return None;
            };
            let ci = entry.idx;

            // Stale duplicate of an already finalized cell.
            if self.grid.cells[ci].visited {
                continue;
            }

            if ci == self.goal_idx {
                let status = match reconstruct(self.grid, self.goal) {
                    Ok(path) => Status::Done(Outcome::Found(path)),
                    Err(e) => Status::Failed(e),
                };
                self.finish_with(status);
                return None;
            }

            return Some(self.expand(ci));
        }
    }

    /// Finalize cell `ci` and relax its open neighbours.
    fn expand(&mut self, ci: usize) -> StepEvent {
        let at = Instant::now();
        let cp = self.grid.point(ci);
        let current = &mut self.grid.cells[ci];
        current.visited = true;
        current.visit_time = Some(at);
        let g = current.g;
        self.steps += 1;

        let tentative = g + 1;
        for np in self.grid.neighbors(cp) {
            let Some(ni) = self.grid.idx(np) else {
                continue;
            };
            let n = &mut self.grid.cells[ni];
            if n.is_wall || n.visited || tentative >= n.g {
                continue;
            }
            n.parent = Some(ci);
            n.g = tentative;
            n.h = self.policy.heuristic(np, self.goal);
            self.frontier.push(self.policy.priority(n.g, n.h), ni);
        }

        trace!("{} step {}: {cp} g={g}", self.policy.name(), self.steps);
        StepEvent {
            cell: cp,
            g,
            step: self.steps,
            at,
        }
    }

    fn finish_with(&mut self, status: Status) {
        match &status {
            Status::Done(outcome) => debug!(
                "{} search finished after {} steps in {:?}: {}",
                self.policy.name(),
                self.steps,
                self.started.elapsed(),
                match outcome.edges() {
                    Some(edges) => format!("path of {edges} edges"),
                    None if *outcome == Outcome::Cancelled => "cancelled".to_string(),
                    None => "no path".to_string(),
                }
            ),
            Status::Failed(e) => error!("{} search aborted: {e}", self.policy.name()),
            Status::Running => {}
        }
        self.status = status;
    }

    /// Drive the run to completion, calling `on_step` for every finalized
    /// cell.
    pub fn run_with(mut self, mut on_step: impl FnMut(&StepEvent)) -> Result<Outcome, SearchError> {
        while let Some(ev) = self.step() {
            on_step(&ev);
        }
        self.into_outcome()
    }

    /// Drain the remaining steps and return the terminal result.
    pub fn finish(self) -> Result<Outcome, SearchError> {
        self.run_with(|_| {})
    }

    fn into_outcome(self) -> Result<Outcome, SearchError> {
        match self.status {
            Status::Done(outcome) => Ok(outcome),
            Status::Failed(e) => Err(e),
            // `step` only returns `None` after leaving `Running`.
            Status::Running => Ok(Outcome::NotFound),
        }
    }

    #[inline]
    pub fn status(&self) -> &Status {
        &self.status
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        !matches!(self.status, Status::Running)
    }

    /// Number of cells finalized so far.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Frontier entries, stale duplicates included.
    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Time since the search was created.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    #[inline]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// The grid being searched, with the state of the run so far.
    #[inline]
    pub fn grid(&self) -> &Grid {
        self.grid
    }
}

impl<P: PriorityPolicy> Iterator for Search<'_, P> {
    type Item = StepEvent;

    fn next(&mut self) -> Option<StepEvent> {
        self.step()
    }
}
