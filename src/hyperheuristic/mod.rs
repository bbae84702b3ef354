//! Adaptive selection engines.
//!
//! - [`ChoiceFunctionHH`] — Choice-function scoring with an elite archive
//! - [`TabuHH`] — Random selection filtered by a tabu list of recent successes
//! - [`Termination`] — Search budget ([`TimeLimit`], [`IterationLimit`])
//! - [`SearchResult`] — Best tour and loop counters
//!
//! Both engines keep a current and a candidate slot. A heuristic writes the
//! candidate slot from the current one; on acceptance the two slot indices
//! exchange roles while the slot contents stay where they are.

mod annealing;
mod choice_function;
mod config;
mod elite;
mod result;
mod tabu;
mod termination;

use std::time::Instant;

use tracing::{info, trace};

use crate::domain::TourDomain;
use crate::error::Result;

pub use annealing::Annealing;
pub use choice_function::{ChoiceFunction, ChoiceFunctionHH};
pub use config::{AnnealingConfig, ChoiceFunctionConfig, TabuConfig};
pub use elite::EliteArchive;
pub use result::{SearchResult, SearchStats};
pub use tabu::{TabuHH, TabuList};
pub use termination::{IterationLimit, Termination, TimeLimit};

/// Outcome of one engine iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The drawn heuristic was not applied.
    Skipped {
        /// Index of the drawn heuristic.
        heuristic: usize,
    },
    /// A heuristic produced a candidate.
    Applied {
        /// Index of the applied heuristic.
        heuristic: usize,
        /// Cost of the candidate.
        candidate_cost: i64,
        /// Whether the candidate became the current solution.
        accepted: bool,
    },
}

/// A selection engine driving a [`TourDomain`].
pub trait HyperHeuristic {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Sizes the pool, builds the starting solution, and resets learning state.
    fn initialise(&mut self, domain: &mut TourDomain) -> Result<()>;

    /// Runs one iteration.
    fn step(&mut self, domain: &mut TourDomain) -> Result<Step>;

    /// Cost of the current solution.
    fn current_cost(&self) -> i64;

    /// Initialises, then steps until `termination` expires.
    fn solve<T: Termination>(
        &mut self,
        domain: &mut TourDomain,
        termination: &mut T,
    ) -> Result<SearchResult>
    where
        Self: Sized,
    {
        let started = Instant::now();
        self.initialise(domain)?;
        info!(
            event = "search_start",
            engine = self.name(),
            locations = domain.instance().num_locations(),
            initial_cost = self.current_cost(),
        );

        let mut stats = SearchStats::default();
        termination.start();
        while !termination.is_expired() {
            stats.iterations += 1;
            match self.step(domain)? {
                Step::Skipped { heuristic } => {
                    stats.skipped += 1;
                    trace!(event = "step", iteration = stats.iterations, heuristic, skipped = true);
                }
                Step::Applied {
                    heuristic,
                    candidate_cost,
                    accepted,
                } => {
                    if accepted {
                        stats.accepted += 1;
                    }
                    trace!(
                        event = "step",
                        iteration = stats.iterations,
                        heuristic,
                        candidate_cost,
                        accepted,
                    );
                }
            }
        }

        let result = SearchResult::from_domain(domain, stats, started.elapsed())?;
        info!(
            event = "search_end",
            engine = self.name(),
            iterations = stats.iterations,
            accepted = stats.accepted,
            skipped = stats.skipped,
            best_cost = result.best_cost,
            duration_ms = result.elapsed.as_millis() as u64,
        );
        Ok(result)
    }
}

/// Current/candidate slot pair with the cost of the current solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SlotPair {
    pub current: usize,
    pub candidate: usize,
    pub current_cost: i64,
}

impl SlotPair {
    pub const CURRENT: usize = 0;
    pub const CANDIDATE: usize = 1;

    pub fn new(current_cost: i64) -> Self {
        Self {
            current: Self::CURRENT,
            candidate: Self::CANDIDATE,
            current_cost,
        }
    }

    /// The candidate becomes current.
    pub fn accept(&mut self, cost: i64) {
        std::mem::swap(&mut self.current, &mut self.candidate);
        self.current_cost = cost;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_pair_toggles() {
        let mut slots = SlotPair::new(100);
        slots.accept(90);
        assert_eq!((slots.current, slots.candidate), (1, 0));
        assert_eq!(slots.current_cost, 90);
        slots.accept(80);
        assert_eq!((slots.current, slots.candidate), (0, 1));
    }
}
