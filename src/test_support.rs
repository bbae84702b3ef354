//! Shared fixtures for unit tests.

use crate::models::{Instance, Solution};

/// Ten locations on a small grid around the depot.
pub fn grid() -> Instance {
    let coords: Vec<(i32, i32)> = (0..10).map(|i| ((i % 4) * 3, (i / 4) * 5)).collect();
    Instance::from_coordinates((1, 1), &coords).expect("valid")
}

/// Twelve scattered locations with no particular structure.
pub fn scattered() -> Instance {
    let coords = [
        (12, 3),
        (-7, 18),
        (25, -4),
        (3, 3),
        (-15, -9),
        (8, 22),
        (30, 10),
        (-2, -20),
        (17, 17),
        (-11, 5),
        (6, -12),
        (21, 28),
    ];
    Instance::from_coordinates((0, 0), &coords).expect("valid")
}

/// The tour `0, 1, .., n-1` with its cost.
pub fn identity(instance: &Instance) -> Solution {
    let tour: Vec<usize> = (0..instance.num_locations()).collect();
    Solution::evaluated(tour, &instance.objective())
}
