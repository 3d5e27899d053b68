//! A* and Dijkstra raced on twin copies of one maze.
//!
//! [`Duel`] keeps one grid per algorithm, generated from a single wall
//! layout, and offers the three controls of an interactive visualizer:
//! generate a new maze, clear the previous search, and start a search.

use std::fmt;
use std::time::{Duration, Instant};

use log::info;
use pathduel_core::CancelToken;
use pathduel_gen::{GenError, MazeGen};
use pathduel_paths::{Algorithm, Grid, Outcome, PriorityPolicy, Search, SearchError, StepEvent};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::config::DuelConfig;

/// Result of one algorithm's run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub algorithm: Algorithm,
    pub outcome: Outcome,
    /// Size of the closed set when the run ended.
    pub visited: usize,
    pub elapsed: Duration,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<9} ", self.algorithm.to_string())?;
        match &self.outcome {
            Outcome::Found(path) => write!(f, "path of {} edges", path.len() - 1)?,
            Outcome::NotFound => f.write_str("no path")?,
            Outcome::Cancelled => f.write_str("cancelled")?,
        }
        write!(f, ", {} cells visited in {:?}", self.visited, self.elapsed)
    }
}

/// Results of both runs on the same maze.
#[derive(Debug, Clone, PartialEq)]
pub struct DuelReport {
    /// Seed the maze was generated from.
    pub seed: u64,
    pub astar: RunReport,
    pub dijkstra: RunReport,
}

impl fmt::Display for DuelReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "seed {}", self.seed)?;
        writeln!(f, "{}", self.astar)?;
        write!(f, "{}", self.dijkstra)
    }
}

/// Twin grids plus the generator that produced them.
pub struct Duel {
    config: DuelConfig,
    seed: u64,
    mapgen: MazeGen<StdRng>,
    astar: Grid,
    dijkstra: Grid,
    cancel: CancelToken,
}

impl Duel {
    /// Generate the first maze from `config`.
    pub fn new(config: DuelConfig) -> Result<Self, GenError> {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let mut mapgen = MazeGen::new(StdRng::seed_from_u64(seed));
        let (astar, dijkstra) = mapgen.generate_pair(config.rows, config.cols, config.wall_density)?;
        info!(
            "new {}x{} maze, seed {seed}, {} walls",
            config.rows,
            config.cols,
            astar.wall_count()
        );
        Ok(Self {
            config,
            seed,
            mapgen,
            astar,
            dijkstra,
            cancel: CancelToken::new(),
        })
    }

    /// Replace both grids with a freshly generated maze.
    pub fn regenerate(&mut self) -> Result<(), GenError> {
        let (astar, dijkstra) =
            self.mapgen
                .generate_pair(self.config.rows, self.config.cols, self.config.wall_density)?;
        info!("regenerated maze, {} walls", astar.wall_count());
        self.astar = astar;
        self.dijkstra = dijkstra;
        self.cancel.reset();
        Ok(())
    }

    /// Forget the last search on both grids. Walls stay.
    pub fn clear(&mut self) {
        self.astar.reset_search_state();
        self.dijkstra.reset_search_state();
        self.cancel.reset();
    }

    /// A handle that cancels a [`run`](Self::run) in progress, e.g. from
    /// another thread or from the step callback.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn config(&self) -> &DuelConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The grid searched by `algorithm`, including the last run's state.
    pub fn grid(&self, algorithm: Algorithm) -> &Grid {
        match algorithm {
            Algorithm::Astar => &self.astar,
            Algorithm::Dijkstra => &self.dijkstra,
        }
    }

    /// Run both searches, alternating one step each, until both finish.
    ///
    /// `on_step` sees every step event tagged with its algorithm. The
    /// configured step and time limits cancel both runs together.
    pub fn run(
        &mut self,
        mut on_step: impl FnMut(Algorithm, &StepEvent),
    ) -> Result<DuelReport, SearchError> {
        self.cancel.reset();
        let started = Instant::now();
        let mut astar =
            Search::new(&mut self.astar, Algorithm::Astar)?.with_cancel(self.cancel.clone());
        let mut dijkstra =
            Search::new(&mut self.dijkstra, Algorithm::Dijkstra)?.with_cancel(self.cancel.clone());
        let mut elapsed = [None, None];

        loop {
            let over_steps = self
                .config
                .max_steps
                .is_some_and(|max| astar.steps().max(dijkstra.steps()) >= max);
            let over_time = self
                .config
                .time_limit
                .is_some_and(|limit| started.elapsed() >= limit);
            if (over_steps || over_time) && !self.cancel.is_cancelled() {
                info!("limit reached after {:?}, cancelling", started.elapsed());
                self.cancel.cancel();
            }

            for (slot, search) in [&mut astar, &mut dijkstra].into_iter().enumerate() {
                if let Some(ev) = search.step() {
                    on_step(*search.policy(), &ev);
                } else if elapsed[slot].is_none() {
                    elapsed[slot] = Some(search.elapsed());
                }
            }
            if elapsed.iter().all(Option::is_some) {
                break;
            }
        }

        let astar_outcome = astar.finish()?;
        let dijkstra_outcome = dijkstra.finish()?;
        let [astar_elapsed, dijkstra_elapsed] = elapsed.map(Option::unwrap_or_default);

        let report = DuelReport {
            seed: self.seed,
            astar: RunReport {
                algorithm: Algorithm::Astar,
                outcome: astar_outcome,
                visited: self.astar.visited_count(),
                elapsed: astar_elapsed,
            },
            dijkstra: RunReport {
                algorithm: Algorithm::Dijkstra,
                outcome: dijkstra_outcome,
                visited: self.dijkstra.visited_count(),
                elapsed: dijkstra_elapsed,
            },
        };
        info!(
            "{} vs {}: {} / {} visited",
            report.astar.algorithm.name(),
            report.dijkstra.algorithm.name(),
            report.astar.visited,
            report.dijkstra.visited
        );
        Ok(report)
    }
}
