//! Random tour construction.

use rand::Rng;

use crate::heuristics::shuffle;
use crate::models::Instance;

/// Builds a uniformly random tour over all locations (Fisher-Yates).
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_hyperheur::models::{is_permutation, Instance};
/// use u_hyperheur::constructive::random_tour;
///
/// let instance = Instance::from_coordinates((0, 0), &[(1, 0), (2, 0), (3, 0)]).unwrap();
/// let mut rng = StdRng::seed_from_u64(42);
/// let tour = random_tour(&instance, &mut rng);
/// assert!(is_permutation(&tour, 3));
/// ```
pub fn random_tour<R: Rng>(instance: &Instance, rng: &mut R) -> Vec<usize> {
    let mut tour: Vec<usize> = (0..instance.num_locations()).collect();
    shuffle(&mut tour, rng);
    tour
}
