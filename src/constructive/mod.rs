//! Constructive heuristics for building initial tours.
//!
//! - [`nearest_neighbor_tour`] — Greedy nearest-neighbor from a random start, O(n²)
//! - [`random_tour`] — Uniformly shuffled tour, O(n)

mod nearest_neighbor;
mod random;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Instance;

pub use nearest_neighbor::nearest_neighbor_tour;
pub use random::random_tour;

/// How a pool slot is (re)initialised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InitialisationMode {
    /// Uniform random permutation of all locations.
    Random,
    /// Nearest-neighbor tour from a random starting location.
    #[default]
    Constructive,
}

impl InitialisationMode {
    /// Builds a tour for `instance` according to this mode.
    pub fn build<R: Rng>(self, instance: &Instance, rng: &mut R) -> Vec<usize> {
        match self {
            Self::Random => random_tour(instance, rng),
            Self::Constructive => nearest_neighbor_tour(instance, rng),
        }
    }
}
