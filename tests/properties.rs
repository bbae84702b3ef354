//! Property-based tests for u-hyperheur.
//!
//! Uses proptest to check the tour invariants across many random instances.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_hyperheur::heuristics::{shuffled_positions, Controls, HeuristicType, LowLevelHeuristic};
use u_hyperheur::models::{is_permutation, Instance, Solution};

// ============================================================================
// Strategies
// ============================================================================

fn coords(max_len: usize) -> impl Strategy<Value = Vec<(i32, i32)>> {
    prop::collection::vec((-50i32..50, -50i32..50), 1..=max_len)
}

fn instance(coords: &[(i32, i32)]) -> Instance {
    Instance::from_coordinates((0, 0), coords).unwrap()
}

fn random_tour(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    shuffled_positions(n, &mut rng)
}

// ============================================================================
// Evaluation
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_reversal_keeps_cost(c in coords(25), seed in any::<u64>()) {
        let inst = instance(&c);
        let f = inst.objective();
        let tour = random_tour(c.len(), seed);
        let mut reversed = tour.clone();
        reversed.reverse();
        prop_assert_eq!(f.evaluate(&tour), f.evaluate(&reversed));
    }

    #[test]
    fn prop_swap_delta_is_exact(c in coords(12), seed in any::<u64>()) {
        let inst = instance(&c);
        let f = inst.objective();
        let tour = random_tour(c.len(), seed);
        let base = f.evaluate(&tour);
        for i in 0..tour.len() {
            for j in 0..tour.len() {
                if i == j {
                    continue;
                }
                let mut swapped = tour.clone();
                swapped.swap(i, j);
                prop_assert_eq!(f.evaluate(&swapped) - base, f.swap_delta(&tour, i, j));
            }
        }
    }
}

// ============================================================================
// Operators
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_unary_preserves_permutation(
        c in coords(20),
        seed in any::<u64>(),
        depth in 0.0..=1.0f64,
        intensity in 0.0..=1.0f64,
    ) {
        let inst = instance(&c);
        let f = inst.objective();
        let n = c.len();
        let mut rng = StdRng::seed_from_u64(seed);
        let controls = Controls::new(depth, intensity);
        for h in LowLevelHeuristic::ALL.iter().filter(|h| !h.is_crossover()) {
            let mut sol = Solution::evaluated(random_tour(n, seed), &f);
            let value = h.apply_unary(&mut sol, &f, controls, &mut rng).unwrap();
            prop_assert!(is_permutation(sol.representation(), n), "{}", h.name());
            prop_assert_eq!(value, f.evaluate(sol.representation()));
            prop_assert_eq!(value, sol.objective_value());
        }
    }

    #[test]
    fn prop_local_search_never_worsens(
        c in coords(20),
        seed in any::<u64>(),
        depth in 0.0..=1.0f64,
    ) {
        let inst = instance(&c);
        let f = inst.objective();
        let mut rng = StdRng::seed_from_u64(seed);
        for index in LowLevelHeuristic::of_type(HeuristicType::LocalSearch) {
            let h = LowLevelHeuristic::from_index(index).unwrap();
            let mut sol = Solution::evaluated(random_tour(c.len(), seed), &f);
            let before = sol.objective_value();
            let after = h.apply_unary(&mut sol, &f, Controls::new(depth, 0.0), &mut rng).unwrap();
            prop_assert!(after <= before, "{} went from {} to {}", h.name(), before, after);
        }
    }

    #[test]
    fn prop_crossover_offspring_valid(
        c in coords(20),
        seed1 in any::<u64>(),
        seed2 in any::<u64>(),
    ) {
        let inst = instance(&c);
        let f = inst.objective();
        let n = c.len();
        let p1 = random_tour(n, seed1);
        let p2 = random_tour(n, seed2);
        let mut rng = StdRng::seed_from_u64(seed1 ^ seed2);
        for h in [LowLevelHeuristic::Pmx, LowLevelHeuristic::OrderCrossover] {
            let mut child = Solution::evaluated(p1.clone(), &f);
            let value = h
                .apply_binary(&p1, &p2, &mut child, &f, Controls::default(), &mut rng)
                .unwrap();
            prop_assert!(is_permutation(child.representation(), n), "{}", h.name());
            prop_assert_eq!(value, f.evaluate(child.representation()));
        }
    }

    #[test]
    fn prop_identical_parents_reproduce(c in coords(20), seed in any::<u64>()) {
        let inst = instance(&c);
        let f = inst.objective();
        let parent = random_tour(c.len(), seed);
        let mut rng = StdRng::seed_from_u64(seed);
        for h in [LowLevelHeuristic::Pmx, LowLevelHeuristic::OrderCrossover] {
            let mut child = Solution::evaluated(parent.clone(), &f);
            h.apply_binary(&parent, &parent, &mut child, &f, Controls::default(), &mut rng)
                .unwrap();
            prop_assert_eq!(child.representation(), parent.as_slice());
        }
    }
}
