//! Next descent over adjacent swaps.
//!
//! # Algorithm
//!
//! From a random start position, scan the `n - 1` adjacent pairs in order
//! (wrapping past the end) and commit the first swap whose exact delta is not
//! positive, then stop. If no pair qualifies the tour is left unchanged.
//! This is first-improvement, not best-improvement.
//!
//! # Complexity
//!
//! O(n) per pass.

use rand::Rng;

use crate::evaluation::ObjectiveFunction;
use crate::heuristics::{finish, random_index, Controls, HeuristicType, UnaryHeuristic};
use crate::models::Solution;

/// First non-worsening adjacent swap from a random start.
#[derive(Debug, Clone, Copy, Default)]
pub struct NextDescent;

impl UnaryHeuristic for NextDescent {
    fn name(&self) -> &'static str {
        "next_descent"
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

        for _ in 0..controls.depth_repeats() {
            let start = random_index(rng, n);
            for step in 0..n - 1 {
                let current = (start + step) % n;
                let next = (current + 1) % n;
                if objective.swap_delta(solution.representation(), current, next) <= 0 {
                    solution.swap(current, next);
                    break;
                }
            }
        }

        finish(solution, objective)
    }
}
