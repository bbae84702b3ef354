//! Tour cost evaluation.
//!
//! Provides full evaluation of a tour and the exact cost change of swapping two
//! positions, used by the hill-climbing operators to avoid re-evaluation.

mod objective;

pub use objective::ObjectiveFunction;
