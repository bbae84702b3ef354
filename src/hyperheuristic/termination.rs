//! Search budgets.
//!
//! The engine polls its budget once per iteration; an iteration in
//! progress always runs to completion.

use std::time::{Duration, Instant};

/// Decides when a search stops.
pub trait Termination {
    /// Called once before the first poll.
    fn start(&mut self) {}

    /// Whether the budget is exhausted. Polled once per iteration.
    fn is_expired(&mut self) -> bool;
}

/// Wall-clock budget measured from [`Termination::start`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_hyperheur::hyperheuristic::{Termination, TimeLimit};
///
/// let mut limit = TimeLimit::new(Duration::ZERO);
/// limit.start();
/// assert!(limit.is_expired());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeLimit {
    start: Instant,
    limit: Duration,
}

impl TimeLimit {
    /// Budget of `limit` wall-clock time.
    pub fn new(limit: Duration) -> Self {
        Self {
            start: Instant::now(),
            limit,
        }
    }

    /// Time since the budget started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Termination for TimeLimit {
    fn start(&mut self) {
        self.start = Instant::now();
    }

    fn is_expired(&mut self) -> bool {
        self.start.elapsed() >= self.limit
    }
}

/// Budget of a fixed number of iterations.
///
/// # Examples
///
/// ```
/// use u_hyperheur::hyperheuristic::{IterationLimit, Termination};
///
/// let mut limit = IterationLimit::new(2);
/// assert!(!limit.is_expired());
/// assert!(!limit.is_expired());
/// assert!(limit.is_expired());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationLimit {
    limit: u64,
    polls: u64,
}

impl IterationLimit {
    /// Allows `limit` iterations.
    pub fn new(limit: u64) -> Self {
        Self { limit, polls: 0 }
    }
}

impl Termination for IterationLimit {
    fn start(&mut self) {
        self.polls = 0;
    }

    fn is_expired(&mut self) -> bool {
        if self.polls >= self.limit {
            return true;
        }
        self.polls += 1;
        false
    }
}
