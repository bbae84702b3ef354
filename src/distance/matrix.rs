//! Dense integer cost matrix.

use crate::models::{Location, DEPOT};

/// A dense (n+1)×(n+1) cost matrix stored in row-major order.
///
/// Rows and columns `0..n` belong to the visitable locations; the last row and
/// column belong to the depot, which callers address with [`DEPOT`]. Each
/// entry is the ceiling of the Euclidean distance between the two points.
///
/// # Examples
///
/// ```
/// use u_hyperheur::models::{Location, DEPOT};
/// use u_hyperheur::distance::DistanceMatrix;
///
/// let depot = Location::depot(0, 0);
/// let locations = vec![Location::new(0, 3, 4), Location::new(1, 6, 8)];
/// let dm = DistanceMatrix::from_locations(&depot, &locations);
/// assert_eq!(dm.get(0, DEPOT), 5);
/// assert_eq!(dm.get(0, 1), 5);
/// assert_eq!(dm.num_locations(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<i64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the matrix from a depot and locations whose ids equal their position.
    pub fn from_locations(depot: &Location, locations: &[Location]) -> Self {
        let size = locations.len() + 1;
        let mut data = vec![0; size * size];
        let point = |i: usize| if i == size - 1 { depot } else { &locations[i] };
        for i in 0..size {
            for j in (i + 1)..size {
                let d = point(i).distance_to(point(j));
                data[i * size + j] = d;
                data[j * size + i] = d;
            }
        }
        Self { data, size }
    }

    #[inline]
    fn slot(&self, id: usize) -> usize {
        if id == DEPOT {
            self.size - 1
        } else {
            id
        }
    }

    /// Cost between `from` and `to`; either may be [`DEPOT`].
    ///
    /// # Panics
    ///
    /// Panics if an id is neither [`DEPOT`] nor a known location.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> i64 {
        self.data[self.slot(from) * self.size + self.slot(to)]
    }

    /// Cost between a location and the depot.
    #[inline]
    pub fn to_depot(&self, id: usize) -> i64 {
        self.get(id, DEPOT)
    }

    /// Number of visitable locations (depot excluded).
    pub fn num_locations(&self) -> usize {
        self.size - 1
    }

    /// Returns `true` if `get(a, b) == get(b, a)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.data[i * self.size + j] != self.data[j * self.size + i] {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the candidate closest to `from`, the first one on ties.
    ///
    /// Returns `None` if `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by_key(|&c| self.get(from, c))
    }
}
