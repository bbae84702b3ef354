//! Local search operators: non-worsening moves on a single tour.
//!
//! - [`DavisHillClimbing`] — Swap pairs along a random permutation, delta-evaluated
//! - [`KDavisHillClimbing`] — Chains of k adjacent swaps along a random permutation
//! - [`NextDescent`] — First non-worsening adjacent swap from a random start
//! - [`EdgeRecombination`] — Swap of the elements bordering two separated positions
//! - [`SegmentInversion`] — Reversal of a random segment
//!
//! Each repeats its pass a number of times derived from the depth of search
//! and accepts a move only if the tour costs no more afterwards, so plateau
//! moves are allowed.

mod davis_hill_climbing;
mod edge_recombination;
mod k_davis_hill_climbing;
mod next_descent;
mod segment_inversion;

pub use davis_hill_climbing::DavisHillClimbing;
pub use edge_recombination::EdgeRecombination;
pub use k_davis_hill_climbing::KDavisHillClimbing;
pub use next_descent::NextDescent;
pub use segment_inversion::SegmentInversion;
