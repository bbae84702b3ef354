//! # u-hyperheur
//!
//! Single-vehicle tour optimization driven by adaptive hyper-heuristics:
//! a library of mutation, local search, and crossover operators over a
//! permutation tour, and selection engines that learn at runtime which
//! operator to apply next.
//!
//! ## Modules
//!
//! - [`models`] — Locations, instances, and solutions
//! - [`distance`] — Ceiling-Euclidean cost matrix with the depot appended
//! - [`evaluation`] — Tour cost and exact swap deltas
//! - [`constructive`] — Random and nearest-neighbor initial tours
//! - [`heuristics`] — Operator contract, repeat schedules, and index table
//! - [`mutation`] — Adjacent swap, random swap, reinsertion
//! - [`local_search`] — Davis hill climbing family, next descent, segment moves
//! - [`crossover`] — PMX and order crossover
//! - [`domain`] — Solution pool and heuristic dispatch behind slot indices
//! - [`hyperheuristic`] — Choice-function and tabu-list selection engines
//! - [`io`] — Instance reader and route sinks
//!
//! ## Example
//!
//! ```
//! use u_hyperheur::domain::{DomainConfig, TourDomain};
//! use u_hyperheur::hyperheuristic::{
//!     ChoiceFunctionConfig, ChoiceFunctionHH, HyperHeuristic, IterationLimit,
//! };
//! use u_hyperheur::io::parse_instance;
//!
//! let text = "PREPARATION_AREA\n0 0\nENCLOSURE_LOCATIONS\n1 0\n0 1\n-1 0\n0 -1\nEOF\n";
//! let instance = parse_instance(text).unwrap();
//! let mut domain = TourDomain::new(instance, DomainConfig::default().with_seed(42)).unwrap();
//!
//! let mut engine = ChoiceFunctionHH::new(ChoiceFunctionConfig::default()).unwrap();
//! let result = engine.solve(&mut domain, &mut IterationLimit::new(50)).unwrap();
//! assert_eq!(result.best_cost, 8);
//! ```

pub mod constructive;
pub mod crossover;
pub mod distance;
pub mod domain;
pub mod error;
pub mod evaluation;
pub mod heuristics;
pub mod hyperheuristic;
pub mod io;
pub mod local_search;
pub mod models;
pub mod mutation;

#[cfg(test)]
mod test_support;

pub use error::{HyperHeuristicError, Result};
