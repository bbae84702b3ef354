//! Mutation operators: unconditional perturbations of a tour.
//!
//! - [`AdjacentSwap`] — Swaps a position with its cyclic successor
//! - [`RandomSwap`] — Swaps two distinct random positions
//! - [`Reinsertion`] — Moves one location to another position
//!
//! Each repeats its move a number of times derived from the intensity of
//! mutation and never rejects a move.

mod adjacent_swap;
mod random_swap;
mod reinsertion;

pub use adjacent_swap::AdjacentSwap;
pub use random_swap::RandomSwap;
pub use reinsertion::Reinsertion;

