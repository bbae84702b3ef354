//! Search outcome.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::TourDomain;
use crate::error::{HyperHeuristicError, Result};

/// Iteration counters kept by the search loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Iterations started.
    pub iterations: u64,
    /// Iterations whose candidate became the current solution.
    pub accepted: u64,
    /// Iterations skipped without applying a heuristic.
    pub skipped: u64,
}

/// Best solution of a finished search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Cost of the best tour.
    pub best_cost: i64,
    /// Visiting order of the best tour, depot excluded.
    pub best_tour: Vec<usize>,
    /// Loop counters.
    pub stats: SearchStats,
    /// Wall-clock time spent in the search.
    pub elapsed: Duration,
}

impl SearchResult {
    /// Reads the best-ever record of `domain`.
    pub fn from_domain(domain: &TourDomain, stats: SearchStats, elapsed: Duration) -> Result<Self> {
        let best = domain
            .best_solution()
            .ok_or(HyperHeuristicError::NoSolution)?;
        Ok(Self {
            best_cost: best.objective_value(),
            best_tour: best.representation().to_vec(),
            stats,
            elapsed,
        })
    }
}
