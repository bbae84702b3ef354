//! Problem domain facade driven by the selection engines.
//!
//! - [`TourDomain`] — Instance, solution pool, generator, and best-ever record
//! - [`SolutionPool`] — Indexed slots of owned solutions
//! - [`DomainConfig`] — Controls, initialisation mode, and seed
//!
//! Engines address solutions only by slot index and heuristics only by
//! index into [`LowLevelHeuristic::ALL`](crate::heuristics::LowLevelHeuristic::ALL).

mod config;
mod pool;
mod tour_domain;

pub use config::DomainConfig;
pub use pool::SolutionPool;
pub use tour_domain::TourDomain;

pub(crate) use config::check_unit_interval;
