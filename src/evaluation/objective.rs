//! Objective function over depot-anchored tours.
//!
//! # Cost model
//!
//! A tour `[s0, s1, .., s(n-1)]` is travelled as
//!
//! ```text
//! depot → s0 → s1 → … → s(n-1) → depot
//! ```
//!
//! and its cost is the sum of the leg costs. Full evaluation is the ground
//! truth; [`ObjectiveFunction::swap_delta`] must always agree with it.

use crate::distance::DistanceMatrix;
use crate::models::DEPOT;

/// Evaluates tours against a cost matrix.
///
/// # Examples
///
/// ```
/// use u_hyperheur::models::Instance;
///
/// let instance = Instance::from_coordinates((0, 0), &[(1, 0), (2, 0), (3, 0)]).unwrap();
/// let objective = instance.objective();
///
/// // 0→1→2→3→0 = 1 + 1 + 1 + 3
/// assert_eq!(objective.evaluate(&[0, 1, 2]), 6);
///
/// let delta = objective.swap_delta(&[0, 1, 2], 0, 2);
/// assert_eq!(objective.evaluate(&[2, 1, 0]) - 6, delta);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ObjectiveFunction<'a> {
    distances: &'a DistanceMatrix,
}

impl<'a> ObjectiveFunction<'a> {
    /// Creates an objective function over the given costs.
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        Self { distances }
    }

    /// Travel cost between two ids; either may be [`DEPOT`].
    #[inline]
    pub fn cost(&self, a: usize, b: usize) -> i64 {
        self.distances.get(a, b)
    }

    /// Travel cost between a location and the depot.
    #[inline]
    pub fn cost_to_depot(&self, id: usize) -> i64 {
        self.distances.to_depot(id)
    }

    /// Total cost of the closed tour. An empty tour costs nothing.
    pub fn evaluate(&self, tour: &[usize]) -> i64 {
        let (Some(&first), Some(&last)) = (tour.first(), tour.last()) else {
            return 0;
        };
        let inner: i64 = tour.windows(2).map(|w| self.cost(w[0], w[1])).sum();
        self.cost_to_depot(first) + inner + self.cost_to_depot(last)
    }

    /// Exact cost change of swapping positions `i` and `j` of `tour`.
    ///
    /// Only the legs touching the two positions change. For adjacent
    /// positions the shared leg keeps its cost, so two legs are replaced;
    /// otherwise four.
    ///
    /// # Panics
    ///
    /// Panics if `i == j` or either index is out of bounds.
    pub fn swap_delta(&self, tour: &[usize], i: usize, j: usize) -> i64 {
        assert_ne!(i, j, "called `swap_delta()` with identical positions");
        let n = tour.len();
        let prev = |k: usize| if k == 0 { DEPOT } else { tour[k - 1] };
        let next = |k: usize| if k == n - 1 { DEPOT } else { tour[k + 1] };

        // order so that `lo` precedes `hi` in the tour
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        let a = tour[lo];
        let b = tour[hi];

        if lo + 1 == hi {
            let before = prev(lo);
            let after = next(hi);
            self.cost(before, b) + self.cost(a, after) - self.cost(before, a) - self.cost(b, after)
        } else {
            let (pa, na) = (prev(lo), next(lo));
            let (pb, nb) = (prev(hi), next(hi));
            let removed = self.cost(pa, a) + self.cost(a, na) + self.cost(pb, b) + self.cost(b, nb);
            let added = self.cost(pa, b) + self.cost(b, na) + self.cost(pb, a) + self.cost(a, nb);
            added - removed
        }
    }
}
