//! Low-level heuristic contract and catalogue.
//!
//! Every operator is either *unary* (changes one tour in place) or a
//! *crossover* (builds a child from two parents). Both kinds report the
//! resulting objective value and refresh the cached cost of the tour they
//! wrote. Selection engines never inspect operator types; they query
//! [`LowLevelHeuristic`] for its index, type, and control flags.
//!
//! - [`operation_times`], [`shuffle`], [`finish`] — Repeat schedules, shuffling, bookkeeping
//! - [`LowLevelHeuristic`] — Fixed index table over all ten operators

mod catalogue;
mod operators;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::evaluation::ObjectiveFunction;
use crate::models::Solution;

pub use catalogue::LowLevelHeuristic;
pub use operators::{
    accept_if_not_worse, doubling_times, finish, operation_times, random_index, shuffle,
    shuffled_positions, swap_chain,
};

/// Category a heuristic belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeuristicType {
    /// Unconditional perturbation scaled by intensity of mutation.
    Mutation,
    /// Non-worsening improvement scaled by depth of search.
    LocalSearch,
    /// Recombination of two parent tours.
    Crossover,
}

/// The two external controls, each in [0, 1].
///
/// # Examples
///
/// ```
/// use u_hyperheur::heuristics::Controls;
///
/// let controls = Controls::new(0.6, 0.3);
/// assert_eq!(controls.depth_repeats(), 4);
/// assert_eq!(controls.intensity_repeats(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Controls {
    /// Depth of search, consumed by local search operators.
    pub depth_of_search: f64,
    /// Intensity of mutation, consumed by mutation operators.
    pub intensity_of_mutation: f64,
}

impl Controls {
    /// Creates a control pair.
    pub fn new(depth_of_search: f64, intensity_of_mutation: f64) -> Self {
        Self {
            depth_of_search,
            intensity_of_mutation,
        }
    }

    /// Repeat count derived from depth of search.
    pub fn depth_repeats(&self) -> usize {
        operation_times(self.depth_of_search)
    }

    /// Repeat count derived from intensity of mutation.
    pub fn intensity_repeats(&self) -> usize {
        operation_times(self.intensity_of_mutation)
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::new(0.6, 0.3)
    }
}

/// An operator that changes a single tour in place.
pub trait UnaryHeuristic {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Category of the operator.
    fn heuristic_type(&self) -> HeuristicType;

    /// Whether the repeat count follows depth of search.
    fn uses_depth_of_search(&self) -> bool {
        self.heuristic_type() == HeuristicType::LocalSearch
    }

    /// Whether the repeat count follows intensity of mutation.
    fn uses_intensity_of_mutation(&self) -> bool {
        self.heuristic_type() == HeuristicType::Mutation
    }

    /// Applies the operator to `solution` and returns its new cost.
    fn apply<R: Rng>(
        &self,
        solution: &mut Solution,
        objective: &ObjectiveFunction<'_>,
        controls: Controls,
        rng: &mut R,
    ) -> i64
    where
        Self: Sized;
}

/// An operator that recombines two parent tours into a child.
pub trait CrossoverHeuristic {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Writes a child of `parent1` and `parent2` into `child` and returns its cost.
    ///
    /// Both controls are accepted for a uniform call shape and ignored.
    fn crossover<R: Rng>(
        &self,
        parent1: &[usize],
        parent2: &[usize],
        child: &mut Solution,
        objective: &ObjectiveFunction<'_>,
        controls: Controls,
        rng: &mut R,
    ) -> i64
    where
        Self: Sized;
}
