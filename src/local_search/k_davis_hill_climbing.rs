//! K-step variant of Davis's hill climbing.
//!
//! # Algorithm
//!
//! Per pass, draw a random permutation of positions and a step count `k` in
//! `0..n-1`. For every permuted position, bubble its element forward by `k`
//! adjacent swaps (wrapping at the end). Keep the result if the full tour
//! costs no more than before; otherwise restore the previous tour.
//!
//! # Complexity
//!
//! O(n²) per pass: each of the n moves is re-evaluated in full.

use rand::Rng;

use crate::evaluation::ObjectiveFunction;
use crate::heuristics::{
    finish, random_index, shuffled_positions, swap_chain, Controls, HeuristicType, UnaryHeuristic,
};
use crate::models::Solution;

/// Chains of `k` adjacent swaps, accepted when not worsening.
#[derive(Debug, Clone, Copy, Default)]
pub struct KDavisHillClimbing;

impl UnaryHeuristic for KDavisHillClimbing {
    fn name(&self) -> &'static str {
        "k_davis_hill_climbing"
    }

    fn heuristic_type(&self) -> HeuristicType {
        HeuristicType::LocalSearch
    }

    fn apply<R: Rng>(
        &self,
        solution: &mut Solution,
        objective: &ObjectiveFunction<'_>,
        controls: Controls,
        rng: &mut R,
    ) -> i64 {
        let n = solution.len();
        if n < 2 {
            return finish(solution, objective);
        }

        let mut cost = solution.objective_value();
        let mut snapshot = solution.representation().to_vec();
        for _ in 0..controls.depth_repeats() {
            let perm = shuffled_positions(n, rng);
            let k = random_index(rng, n - 1);
            for &start in &perm {
                snapshot.copy_from_slice(solution.representation());
                swap_chain(solution.representation_mut(), start, k);
                let candidate = objective.evaluate(solution.representation());
                if candidate <= cost {
                    cost = candidate;
                } else {
                    solution.representation_mut().copy_from_slice(&snapshot);
                }
            }
        }

        finish(solution, objective)
    }
}
