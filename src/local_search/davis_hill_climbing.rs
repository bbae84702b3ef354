//! Davis's bit hill climbing adapted to tours.
//!
//! # Algorithm
//!
//! Draw a random permutation `perm` of the positions. For each `j`, evaluate
//! swapping positions `perm[j]` and `perm[(j + 1) mod n]` with the exact swap
//! delta and commit the swap if the delta is not positive. The delta is always
//! taken on the live tour, so earlier swaps of the same pass are visible.
//!
//! # Complexity
//!
//! O(n) per pass.
//!
//! # Reference
//!
//! Davis, L. (1991). "Bit-climbing, representational bias, and test suite
//! design", *Proceedings of the 4th International Conference on Genetic
//! Algorithms*, 18-23.

use rand::Rng;

use crate::evaluation::ObjectiveFunction;
use crate::heuristics::{finish, shuffled_positions, Controls, HeuristicType, UnaryHeuristic};
use crate::models::Solution;

/// Permutation-ordered pair swaps, accepting non-worsening deltas.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_hyperheur::heuristics::{Controls, UnaryHeuristic};
/// use u_hyperheur::local_search::DavisHillClimbing;
/// use u_hyperheur::models::{Instance, Solution};
///
/// let instance = Instance::from_coordinates((0, 0), &[(1, 0), (3, 0), (2, 0)]).unwrap();
/// let objective = instance.objective();
/// let mut sol = Solution::evaluated(vec![1, 0, 2], &objective);
/// let before = sol.objective_value();
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let after = DavisHillClimbing.apply(&mut sol, &objective, Controls::default(), &mut rng);
/// assert!(after <= before);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DavisHillClimbing;

impl UnaryHeuristic for DavisHillClimbing {
    fn name(&self) -> &'static str {
        "davis_hill_climbing"
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
        for _ in 0..controls.depth_repeats() {
            let perm = shuffled_positions(n, rng);
            for j in 0..n {
                let (a, b) = (perm[j], perm[(j + 1) % n]);
                let delta = objective.swap_delta(solution.representation(), a, b);
                if delta <= 0 {
                    solution.swap(a, b);
                    cost += delta;
                }
            }
        }

        let value = finish(solution, objective);
        debug_assert_eq!(value, cost, "incremental cost drifted from evaluation");
        value
    }
}
