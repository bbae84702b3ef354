//! Tour representation with a cached objective value.
//!
//! A solution stores the visiting order of every visitable location; the depot
//! is implicit at both ends. Cloning a solution always copies the underlying
//! buffer, so two pool slots never alias.

use crate::evaluation::ObjectiveFunction;

/// A tour (permutation of location ids) and its cached total cost.
///
/// # Examples
///
/// ```
/// use u_hyperheur::models::Solution;
///
/// let mut sol = Solution::new(vec![2, 0, 1], 42);
/// assert_eq!(sol.representation(), &[2, 0, 1]);
/// assert_eq!(sol.objective_value(), 42);
///
/// let copy = sol.clone();
/// sol.swap(0, 2);
/// assert_eq!(copy.representation(), &[2, 0, 1]);
/// assert_eq!(sol.representation(), &[1, 0, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    representation: Vec<usize>,
    objective_value: i64,
}

impl Solution {
    /// Creates a solution from a tour and a known cost.
    pub fn new(representation: Vec<usize>, objective_value: i64) -> Self {
        Self {
            representation,
            objective_value,
        }
    }

    /// Creates a solution and computes its cost from scratch.
    pub fn evaluated(representation: Vec<usize>, objective: &ObjectiveFunction<'_>) -> Self {
        let objective_value = objective.evaluate(&representation);
        Self::new(representation, objective_value)
    }

    /// The visiting order (depot excluded).
    pub fn representation(&self) -> &[usize] {
        &self.representation
    }

    /// Mutable access to the visiting order.
    ///
    /// The cached cost is not refreshed; callers must follow up with
    /// [`set_objective_value`](Self::set_objective_value).
    pub fn representation_mut(&mut self) -> &mut [usize] {
        &mut self.representation
    }

    /// Replaces the visiting order.
    pub fn set_representation(&mut self, representation: Vec<usize>) {
        self.representation = representation;
    }

    /// Cached total cost.
    pub fn objective_value(&self) -> i64 {
        self.objective_value
    }

    /// Overwrites the cached total cost.
    pub fn set_objective_value(&mut self, value: i64) {
        self.objective_value = value;
    }

    /// Swaps two positions of the tour.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.representation.swap(i, j);
    }

    /// Number of visitable locations in the tour.
    pub fn len(&self) -> usize {
        self.representation.len()
    }

    /// Returns `true` if the tour visits nothing.
    pub fn is_empty(&self) -> bool {
        self.representation.is_empty()
    }

    /// Number of locations including the depot.
    pub fn num_locations(&self) -> usize {
        self.representation.len() + 1
    }
}

/// Returns `true` if `tour` holds every id in `0..n` exactly once.
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &id in tour {
        if id >= n || seen[id] {
            return false;
        }
        seen[id] = true;
    }
    true
}
