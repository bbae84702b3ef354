//! Building blocks shared by the low-level heuristics.
//!
//! Repeat schedules for the depth/intensity controls, random index draws,
//! shuffling, and the bookkeeping every operator performs once it has
//! finished changing a tour.

use rand::Rng;

use crate::evaluation::ObjectiveFunction;
use crate::models::{is_permutation, Solution};

/// Maps a control in [0, 1] to 1..=5 repeats (thresholds 0.2, 0.4, 0.6, 0.8).
///
/// # Examples
///
/// ```
/// use u_hyperheur::heuristics::operation_times;
///
/// assert_eq!(operation_times(0.0), 1);
/// assert_eq!(operation_times(0.3), 2);
/// assert_eq!(operation_times(0.6), 4);
/// assert_eq!(operation_times(1.0), 5);
/// ```
pub fn operation_times(control: f64) -> usize {
    if control < 0.2 {
        1
    } else if control < 0.4 {
        2
    } else if control < 0.6 {
        3
    } else if control < 0.8 {
        4
    } else {
        5
    }
}

/// Maps a control in [0, 1] to 1, 2, 4, 8, 16 or 32 repeats.
///
/// Only a control of exactly 1.0 (or above) reaches 32.
pub fn doubling_times(control: f64) -> usize {
    if control < 0.2 {
        1
    } else if control < 0.4 {
        2
    } else if control < 0.6 {
        4
    } else if control < 0.8 {
        8
    } else if control < 1.0 {
        16
    } else {
        32
    }
}

/// Draws an index uniformly from `0..n`.
///
/// # Panics
///
/// Panics if `n == 0`.
#[inline]
pub fn random_index<R: Rng>(rng: &mut R, n: usize) -> usize {
    rng.random_range(0..n as u64) as usize
}

/// Shuffles `values` in place (Fisher-Yates).
pub fn shuffle<T, R: Rng>(values: &mut [T], rng: &mut R) {
    for i in (1..values.len()).rev() {
        let j = rng.random_range(0..=i as u64) as usize;
        values.swap(i, j);
    }
}

/// A uniformly random permutation of the positions `0..n`.
pub fn shuffled_positions<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut positions: Vec<usize> = (0..n).collect();
    shuffle(&mut positions, rng);
    positions
}

/// Applies `k` successive adjacent swaps starting at `start`, wrapping around.
pub fn swap_chain(tour: &mut [usize], start: usize, k: usize) {
    let n = tour.len();
    for step in 0..k {
        let current = (start + step) % n;
        let next = (current + 1) % n;
        tour.swap(current, next);
    }
}

/// Replaces the tour with `candidate` if it costs no more than the current one.
///
/// Returns `true` if the candidate was adopted.
pub fn accept_if_not_worse(
    solution: &mut Solution,
    candidate: Vec<usize>,
    objective: &ObjectiveFunction<'_>,
) -> bool {
    let cost = objective.evaluate(&candidate);
    if cost <= solution.objective_value() {
        solution.set_representation(candidate);
        solution.set_objective_value(cost);
        true
    } else {
        false
    }
}

/// Refreshes the cached cost from the tour and returns it.
///
/// Every operator ends with this call. A tour that is no longer a permutation
/// is a bug in the operator.
pub fn finish(solution: &mut Solution, objective: &ObjectiveFunction<'_>) -> i64 {
    debug_assert!(
        is_permutation(solution.representation(), solution.len()),
        "operator broke the permutation: {:?}",
        solution.representation()
    );
    let value = objective.evaluate(solution.representation());
    solution.set_objective_value(value);
    value
}
