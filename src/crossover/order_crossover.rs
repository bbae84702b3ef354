//! Order crossover (OX).
//!
//! # Algorithm
//!
//! 1. Copy `parent2[start..=end]` into offspring 1 and `parent1[start..=end]`
//!    into offspring 2.
//! 2. Fill the remaining positions of each offspring, starting right after
//!    `end` and wrapping, with its own parent's values read from the same
//!    position onwards, skipping those already placed.
//!
//! Relative order of the parent's remaining values is preserved.
//!
//! # Reference
//!
//! Davis, L. (1985). "Applying adaptive algorithms to epistatic domains",
//! *Proceedings of IJCAI 1985*, 162-164.

use std::collections::HashSet;

use rand::Rng;

use super::{interior_window, MIN_LEN};
use crate::evaluation::ObjectiveFunction;
use crate::heuristics::{finish, Controls, CrossoverHeuristic};
use crate::models::Solution;

/// Order crossover.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderCrossover;

impl OrderCrossover {
    /// Builds one offspring: `donor`'s window, the rest in `base`'s order.
    fn offspring(base: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
        let n = base.len();
        let placed: HashSet<usize> = donor[start..=end].iter().copied().collect();

        let mut child = donor.to_vec();
        let mut fill = (end + 1) % n;
        for offset in 0..n {
            let value = base[(end + 1 + offset) % n];
            if placed.contains(&value) {
                continue;
            }
            child[fill] = value;
            fill = (fill + 1) % n;
        }
        debug_assert_eq!(fill, start);
        child
    }
}

impl CrossoverHeuristic for OrderCrossover {
    fn name(&self) -> &'static str {
        "order_crossover"
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
