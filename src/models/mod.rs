//! Domain model types for single-vehicle tours.
//!
//! Provides the core abstractions: locations on an integer grid, an immutable
//! instance that owns the travel costs, and solutions holding a tour together
//! with its cached objective value.

mod instance;
mod location;
mod solution;

pub use instance::Instance;
pub use location::{Location, DEPOT};
pub use solution::{is_permutation, Solution};
