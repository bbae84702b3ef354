//! Reinsertion mutation.
//!
//! Removes the location at one random position and reinserts it at another,
//! shifting everything in between by one place.

use rand::Rng;

use crate::evaluation::ObjectiveFunction;
use crate::heuristics::{finish, random_index, Controls, HeuristicType, UnaryHeuristic};
use crate::models::Solution;

/// Moves a random location to a random position.
///
/// Repeats 1..=5 times depending on the intensity of mutation. Drawing the
/// same position twice leaves the tour unchanged for that repeat.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reinsertion;

impl UnaryHeuristic for Reinsertion {
    fn name(&self) -> &'static str {
        "reinsertion"
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
            let from = random_index(rng, n);
            let to = random_index(rng, n);
            reinsert(solution.representation_mut(), from, to);
        }

        finish(solution, objective)
    }
}

/// Moves `tour[from]` to position `to`.
fn reinsert(tour: &mut [usize], from: usize, to: usize) {
    if from < to {
        tour[from..=to].rotate_left(1);
    } else if from > to {
        tour[to..=from].rotate_right(1);
    }
}
