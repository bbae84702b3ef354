//! Swap of the elements bordering two separated positions.
//!
//! # Algorithm
//!
//! Draw positions `a < b` in `0..n-1` with `b - a >= 2`, then swap the
//! elements at `a + 1` and `b`. This replaces the edges around both
//! elements at once. The move is kept if the tour costs no more.
//!
//! Tours with fewer than four locations have no such pair and are left
//! unchanged.

use rand::Rng;

use crate::evaluation::ObjectiveFunction;
use crate::heuristics::{
    accept_if_not_worse, finish, random_index, Controls, HeuristicType, UnaryHeuristic,
};
use crate::models::Solution;

/// Shortest tour that admits two positions at least two apart in `0..n-1`.
const MIN_LEN: usize = 4;

/// Non-worsening swap of the successors of two separated positions.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeRecombination;

impl EdgeRecombination {
    fn draw_pair<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
        loop {
            let first = random_index(rng, n - 1);
            let second = random_index(rng, n - 1);
            if first.abs_diff(second) >= 2 {
                return (first.min(second), first.max(second));
            }
        }
    }
}

impl UnaryHeuristic for EdgeRecombination {
    fn name(&self) -> &'static str {
        "edge_recombination"
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
        if n < MIN_LEN {
            return finish(solution, objective);
        }

        for _ in 0..controls.depth_repeats() {
            let (a, b) = Self::draw_pair(n, rng);
            let mut candidate = solution.representation().to_vec();
            candidate.swap(a + 1, b);
            accept_if_not_worse(solution, candidate, objective);
        }

        finish(solution, objective)
    }
}
