//! Problem instance: depot, visitable locations, and their travel costs.

use crate::distance::DistanceMatrix;
use crate::error::{HyperHeuristicError, Result};
use crate::evaluation::ObjectiveFunction;

use super::location::{Location, DEPOT};

/// An immutable single-vehicle tour instance.
///
/// Visitable locations carry ids `0..n` matching their position; the depot
/// carries [`DEPOT`]. Construction fails if either rule is broken, so a
/// search never starts on an inconsistent instance.
///
/// # Examples
///
/// ```
/// use u_hyperheur::models::Instance;
///
/// let instance = Instance::from_coordinates((0, 0), &[(3, 4), (6, 8)]).unwrap();
/// assert_eq!(instance.num_locations(), 2);
/// assert_eq!(instance.cost_to_depot(0), 5);
/// assert_eq!(instance.cost(0, 1), 5);
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    depot: Location,
    locations: Vec<Location>,
    distances: DistanceMatrix,
}

impl Instance {
    /// Creates an instance from a depot and its visitable locations.
    pub fn new(depot: Location, locations: Vec<Location>) -> Result<Self> {
        if !depot.is_depot() {
            return Err(HyperHeuristicError::MissingDepot);
        }
        if locations.is_empty() {
            return Err(HyperHeuristicError::EmptyInstance);
        }
        for (index, location) in locations.iter().enumerate() {
            if location.id() != index {
                return Err(HyperHeuristicError::NonContiguousId {
                    index,
                    id: location.id(),
                });
            }
        }
        let distances = DistanceMatrix::from_locations(&depot, &locations);
        Ok(Self {
            depot,
            locations,
            distances,
        })
    }

    /// Creates an instance from raw coordinates, numbering locations in order.
    pub fn from_coordinates(depot: (i32, i32), coordinates: &[(i32, i32)]) -> Result<Self> {
        let locations = coordinates
            .iter()
            .enumerate()
            .map(|(id, &(x, y))| Location::new(id, x, y))
            .collect();
        Self::new(Location::depot(depot.0, depot.1), locations)
    }

    /// Number of visitable locations (depot excluded).
    pub fn num_locations(&self) -> usize {
        self.locations.len()
    }

    /// The depot.
    pub fn depot(&self) -> &Location {
        &self.depot
    }

    /// All visitable locations, ordered by id.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Resolves an id (or [`DEPOT`]) to its location.
    pub fn location(&self, id: usize) -> Result<&Location> {
        if id == DEPOT {
            return Ok(&self.depot);
        }
        self.locations
            .get(id)
            .ok_or(HyperHeuristicError::UnknownLocation { id })
    }

    /// Precomputed travel costs.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Objective function bound to this instance's travel costs.
    pub fn objective(&self) -> ObjectiveFunction<'_> {
        ObjectiveFunction::new(&self.distances)
    }

    /// Travel cost between two ids; either may be [`DEPOT`].
    pub fn cost(&self, a: usize, b: usize) -> i64 {
        self.distances.get(a, b)
    }

    /// Travel cost between a location and the depot.
    pub fn cost_to_depot(&self, id: usize) -> i64 {
        self.distances.to_depot(id)
    }

    /// Resolves a tour into the closed route `depot, l0, .., l(n-1), depot`.
    pub fn route_locations(&self, tour: &[usize]) -> Result<Vec<Location>> {
        let mut route = Vec::with_capacity(tour.len() + 2);
        route.push(self.depot);
        for &id in tour {
            route.push(*self.location(id)?);
        }
        route.push(self.depot);
        Ok(route)
    }
}
