//! Travel costs between locations.
//!
//! Provides a dense integer cost matrix with a dedicated depot row.

mod matrix;

pub use matrix::DistanceMatrix;
