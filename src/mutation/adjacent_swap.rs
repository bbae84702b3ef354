//! Adjacent swap mutation.

use rand::Rng;

use crate::evaluation::ObjectiveFunction;
use crate::heuristics::{
    doubling_times, finish, random_index, Controls, HeuristicType, UnaryHeuristic,
};
use crate::models::Solution;

/// Swaps a random position with the next one; the last position wraps to the first.
///
/// Repeats 1, 2, 4, 8, 16 or 32 times depending on the intensity of mutation.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_hyperheur::heuristics::{Controls, UnaryHeuristic};
/// use u_hyperheur::models::{is_permutation, Instance, Solution};
/// use u_hyperheur::mutation::AdjacentSwap;
///
/// let instance = Instance::from_coordinates((0, 0), &[(1, 0), (2, 0), (3, 0)]).unwrap();
/// let objective = instance.objective();
/// let mut sol = Solution::evaluated(vec![0, 1, 2], &objective);
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let cost = AdjacentSwap.apply(&mut sol, &objective, Controls::default(), &mut rng);
/// assert_eq!(cost, objective.evaluate(sol.representation()));
/// assert!(is_permutation(sol.representation(), 3));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AdjacentSwap;

impl UnaryHeuristic for AdjacentSwap {
    fn name(&self) -> &'static str {
        "adjacent_swap"
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

        for _ in 0..doubling_times(controls.intensity_of_mutation) {
            let index = random_index(rng, n);
            solution.swap(index, (index + 1) % n);
        }

        finish(solution, objective)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::is_permutation;
    use crate::test_support::{grid, identity};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_single_swap_changes_one_pair() {
        let inst = grid();
        let f = inst.objective();
        let mut sol = identity(&inst);
        let mut rng = StdRng::seed_from_u64(5);
        AdjacentSwap.apply(&mut sol, &f, Controls::new(0.0, 0.0), &mut rng);
        let moved: Vec<usize> = (0..10).filter(|&i| sol.representation()[i] != i).collect();
        assert_eq!(moved.len(), 2);
        let (a, b) = (moved[0], moved[1]);
        assert!(b == a + 1 || (a == 0 && b == 9));
    }

    #[test]
    fn test_cost_refreshed() {
        let inst = grid();
        let f = inst.objective();
        let mut sol = identity(&inst);
        let mut rng = StdRng::seed_from_u64(9);
        let cost = AdjacentSwap.apply(&mut sol, &f, Controls::new(0.0, 1.0), &mut rng);
        assert_eq!(cost, sol.objective_value());
        assert_eq!(cost, f.evaluate(sol.representation()));
        assert!(is_permutation(sol.representation(), 10));
    }

    #[test]
    fn test_single_location_untouched() {
        let inst = crate::models::Instance::from_coordinates((0, 0), &[(2, 0)]).expect("valid");
        let f = inst.objective();
        let mut sol = Solution::evaluated(vec![0], &f);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(AdjacentSwap.apply(&mut sol, &f, Controls::default(), &mut rng), 4);
        assert_eq!(sol.representation(), &[0]);
    }
}
