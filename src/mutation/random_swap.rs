//! Random swap mutation.

use rand::Rng;

use crate::evaluation::ObjectiveFunction;
use crate::heuristics::{finish, random_index, Controls, HeuristicType, UnaryHeuristic};
use crate::models::Solution;

/// Swaps two distinct, uniformly chosen positions.
///
/// Repeats 1..=5 times depending on the intensity of mutation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSwap;

impl UnaryHeuristic for RandomSwap {
    fn name(&self) -> &'static str {
        "random_swap"
    }

    fn heuristic_type(&self) -> HeuristicType {
        HeuristicType::Mutation
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

        for _ in 0..controls.intensity_repeats() {
            let first = random_index(rng, n);
            let mut second = random_index(rng, n);
            while second == first {
                second = random_index(rng, n);
            }
            solution.swap(first, second);
        }

        finish(solution, objective)
    }
}
