//! Partially mapped crossover (PMX).
//!
//! # Algorithm
//!
//! 1. Copy `parent2[start..=end]` into offspring 1 and `parent1[start..=end]`
//!    into offspring 2.
//! 2. The window pairs define a mapping in each direction
//!    (`parent2[i] -> parent1[i]` for offspring 1, the reverse for offspring 2).
//! 3. Outside the window each offspring takes its own parent's value; while
//!    that value already sits in the copied window, it is replaced by its
//!    image under the mapping.
//!
//! # Reference
//!
//! Goldberg, D. E. & Lingle, R. (1985). "Alleles, loci, and the traveling
//! salesman problem", *Proceedings of the 1st International Conference on
//! Genetic Algorithms*, 154-159.

use std::collections::HashMap;

use rand::Rng;

use super::{interior_window, MIN_LEN};
use crate::evaluation::ObjectiveFunction;
use crate::heuristics::{finish, Controls, CrossoverHeuristic};
use crate::models::Solution;

/// Partially mapped crossover.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_hyperheur::crossover::Pmx;
/// use u_hyperheur::heuristics::{Controls, CrossoverHeuristic};
/// use u_hyperheur::models::{is_permutation, Instance, Solution};
///
/// let coords: Vec<(i32, i32)> = (0..6).map(|i| (i * 2, i % 3)).collect();
/// let instance = Instance::from_coordinates((0, 0), &coords).unwrap();
/// let objective = instance.objective();
/// let p1 = vec![0, 1, 2, 3, 4, 5];
/// let p2 = vec![5, 3, 1, 0, 2, 4];
/// let mut child = Solution::evaluated(p1.clone(), &objective);
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let cost = Pmx.crossover(&p1, &p2, &mut child, &objective, Controls::default(), &mut rng);
/// assert!(is_permutation(child.representation(), 6));
/// assert_eq!(cost, objective.evaluate(child.representation()));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Pmx;

impl Pmx {
    /// Builds one offspring: `donor`'s window inside `base`, remapped outside.
    fn offspring(base: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
        let mapping: HashMap<usize, usize> = (start..=end).map(|i| (donor[i], base[i])).collect();

        let mut child = base.to_vec();
        child[start..=end].copy_from_slice(&donor[start..=end]);
        for (i, slot) in child.iter_mut().enumerate() {
            if (start..=end).contains(&i) {
                continue;
            }
            let mut value = base[i];
            while let Some(&next) = mapping.get(&value) {
                value = next;
            }
            *slot = value;
        }
        child
    }
}

impl CrossoverHeuristic for Pmx {
    fn name(&self) -> &'static str {
        "pmx"
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &[usize],
        parent2: &[usize],
        child: &mut Solution,
        objective: &ObjectiveFunction<'_>,
        _controls: Controls,
        rng: &mut R,
    ) -> i64 {
        assert_eq!(parent1.len(), parent2.len(), "parents differ in length");
        let n = parent1.len();
        if n < MIN_LEN {
            child.set_representation(parent1.to_vec());
            return finish(child, objective);
        }

        let (start, end) = interior_window(n, rng);
        let first = Self::offspring(parent1, parent2, start, end);
        let second = Self::offspring(parent2, parent1, start, end);
        child.set_representation(if rng.random_bool(0.5) { first } else { second });
        finish(child, objective)
    }
}
