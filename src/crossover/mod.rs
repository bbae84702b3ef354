//! Crossover operators: recombine two parent tours into a child.
//!
//! - [`Pmx`] — Partially mapped crossover
//! - [`OrderCrossover`] — Order crossover (OX)
//!
//! Both pick an interior window `1 <= start < end <= n - 2`, build two
//! offspring and return one of them at random. Tours shorter than four
//! locations have no interior window; the child is then a copy of the
//! first parent.

mod order_crossover;
mod pmx;

pub use order_crossover::OrderCrossover;
pub use pmx::Pmx;

use rand::Rng;

use crate::heuristics::random_index;

/// Shortest tour with an interior window.
pub(crate) const MIN_LEN: usize = 4;

/// Draws `(start, end)` with `1 <= start <= n - 3` and `start < end <= n - 2`.
///
/// Requires `n >= MIN_LEN`.
pub(crate) fn interior_window<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    debug_assert!(n >= MIN_LEN);
    let start = 1 + random_index(rng, n - 3);
    let end = start + 1 + random_index(rng, n - 2 - start);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_interior_window_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in MIN_LEN..20 {
            for _ in 0..100 {
                let (start, end) = interior_window(n, &mut rng);
                assert!(start >= 1);
                assert!(start < end);
                assert!(end <= n - 2);
            }
        }
    }

    #[test]
    fn test_interior_window_smallest() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(interior_window(4, &mut rng), (1, 2));
    }
}
