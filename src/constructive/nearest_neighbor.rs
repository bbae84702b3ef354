//! Nearest-neighbor tour construction.
//!
//! Starts at a uniformly random location and repeatedly appends the closest
//! location not yet visited. Ties go to the lowest id. The depot plays no part
//! in the choice; it only closes the tour.
//!
//! # Complexity
//!
//! O(n²) where n = number of locations.

use rand::Rng;

use crate::heuristics::random_index;
use crate::models::Instance;

/// Constructs a tour with the nearest-neighbor heuristic.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_hyperheur::models::Instance;
/// use u_hyperheur::constructive::nearest_neighbor_tour;
///
/// let instance = Instance::from_coordinates((0, 0), &[(1, 0), (2, 0), (3, 0)]).unwrap();
/// let mut rng = StdRng::seed_from_u64(42);
/// let tour = nearest_neighbor_tour(&instance, &mut rng);
/// assert_eq!(tour.len(), 3);
/// ```
pub fn nearest_neighbor_tour<R: Rng>(instance: &Instance, rng: &mut R) -> Vec<usize> {
    let n = instance.num_locations();
    if n == 0 {
        return Vec::new();
    }

    let distances = instance.distances();
    let mut remaining: Vec<usize> = (0..n).collect();
    let mut current = remaining.remove(random_index(rng, n));
    let mut tour = Vec::with_capacity(n);
    tour.push(current);

    while let Some(next) = distances.nearest_neighbor(current, &remaining) {
        remaining.retain(|&id| id != next);
        tour.push(next);
        current = next;
    }

    tour
}
