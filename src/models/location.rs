//! Location type and the depot sentinel.

use serde::{Deserialize, Serialize};

/// Reserved identifier of the depot (food preparation area).
///
/// Visitable locations are numbered densely from 0; the depot never appears
/// inside a tour and is addressed through this sentinel instead.
pub const DEPOT: usize = usize::MAX;

/// A point on the integer grid, either a visitable location or the depot.
///
/// # Examples
///
/// ```
/// use u_hyperheur::models::{Location, DEPOT};
///
/// let depot = Location::depot(0, 0);
/// assert_eq!(depot.id(), DEPOT);
/// assert!(depot.is_depot());
///
/// let a = Location::new(0, 3, 4);
/// assert_eq!(a.distance_to(&depot), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    id: usize,
    x: i32,
    y: i32,
}

impl Location {
    /// Creates a visitable location.
    pub fn new(id: usize, x: i32, y: i32) -> Self {
        Self { id, x, y }
    }

    /// Creates the depot at the given coordinates.
    pub fn depot(x: i32, y: i32) -> Self {
        Self::new(DEPOT, x, y)
    }

    /// Location identifier ([`DEPOT`] for the depot).
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Returns `true` if this is the depot.
    pub fn is_depot(&self) -> bool {
        self.id == DEPOT
    }

    /// Travel cost to another location: the Euclidean distance rounded up.
    pub fn distance_to(&self, other: &Location) -> i64 {
        let dx = i128::from(self.x) - i128::from(other.x);
        let dy = i128::from(self.y) - i128::from(other.y);
        ((dx * dx + dy * dy) as f64).sqrt().ceil() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_new() {
        let l = Location::new(3, 10, -2);
        assert_eq!(l.id(), 3);
        assert_eq!(l.x(), 10);
        assert_eq!(l.y(), -2);
        assert!(!l.is_depot());
    }

    #[test]
    fn test_distance_is_ceiled() {
        let a = Location::new(0, 0, 0);
        let b = Location::new(1, 1, 1);
        // sqrt(2) rounds up to 2
        assert_eq!(a.distance_to(&b), 2);
    }

    #[test]
    fn test_distance_exact() {
        let a = Location::new(0, 0, 0);
        let b = Location::new(1, 6, 8);
        assert_eq!(a.distance_to(&b), 10);
    }

    #[test]
    fn test_distance_at_coordinate_limits() {
        let a = Location::new(0, i32::MIN, i32::MIN);
        let b = Location::new(1, i32::MAX, i32::MIN);
        let c = Location::new(2, i32::MAX, i32::MAX);
        assert_eq!(a.distance_to(&b), 4_294_967_295);
        assert_eq!(a.distance_to(&c), 6_074_000_999);
        assert_eq!(c.distance_to(&a), a.distance_to(&c));
    }

    #[test]
    fn test_distance_to_self() {
        let a = Location::new(0, 7, -3);
        assert_eq!(a.distance_to(&a), 0);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Location::new(0, 2, 9);
        let b = Location::new(1, -4, 1);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
    }
}
