//! Segment reversal (2-opt style move on positions).
//!
//! # Algorithm
//!
//! Draw two positions, order them as `start <= end`, reverse the segment
//! `tour[start..=end]` on a copy and keep it if it costs no more.
//!
//! # Reference
//!
//! Croes, G. A. (1958). "A method for solving traveling-salesman problems",
//! *Operations Research* 6(6), 791-812.

use rand::Rng;

use crate::evaluation::ObjectiveFunction;
use crate::heuristics::{
    accept_if_not_worse, finish, random_index, Controls, HeuristicType, UnaryHeuristic,
};
use crate::models::Solution;

/// Non-worsening reversal of a random segment.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_hyperheur::heuristics::{Controls, UnaryHeuristic};
/// use u_hyperheur::local_search::SegmentInversion;
/// use u_hyperheur::models::{Instance, Solution};
///
/// let instance = Instance::from_coordinates(
///     (0, 0),
///     &[(10, 0), (10, 10), (0, 10), (5, 5)],
/// ).unwrap();
/// let objective = instance.objective();
/// let mut sol = Solution::evaluated(vec![0, 2, 1, 3], &objective);
/// let before = sol.objective_value();
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let after = SegmentInversion.apply(&mut sol, &objective, Controls::new(1.0, 0.0), &mut rng);
/// assert!(after <= before);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentInversion;

impl UnaryHeuristic for SegmentInversion {
    fn name(&self) -> &'static str {
        "segment_inversion"
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
            let first = random_index(rng, n);
            let second = random_index(rng, n);
            let (start, end) = (first.min(second), first.max(second));
            if start == end {
                continue;
            }
            let mut candidate = solution.representation().to_vec();
            candidate[start..=end].reverse();
            accept_if_not_worse(solution, candidate, objective);
        }

        finish(solution, objective)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{is_permutation, Instance};
    use crate::test_support::{identity, scattered};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_never_worsens() {
        let inst = scattered();
        let f = inst.objective();
        let mut sol = identity(&inst);
        let mut rng = StdRng::seed_from_u64(12);
        let mut last = sol.objective_value();
        for _ in 0..50 {
            let cost = SegmentInversion.apply(&mut sol, &f, Controls::new(0.4, 0.0), &mut rng);
            assert!(cost <= last);
            assert!(is_permutation(sol.representation(), 12));
            last = cost;
        }
    }

    #[test]
    fn test_untangles_crossing() {
        // square corners visited in crossing order; reversal of the middle pair fixes it
        let inst = Instance::from_coordinates((0, 0), &[(10, 0), (10, 10), (0, 10)])
            .expect("valid");
        let f = inst.objective();
        let mut sol = Solution::evaluated(vec![0, 2, 1], &f);
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..20 {
            SegmentInversion.apply(&mut sol, &f, Controls::new(1.0, 0.0), &mut rng);
        }
        assert_eq!(sol.objective_value(), 40);
    }
}
