//! Indexed solution slots.

use crate::error::{HyperHeuristicError, Result};
use crate::models::Solution;

/// Fixed-size array of solution slots.
///
/// Each slot owns its solution; copying between slots clones the tour, so
/// later changes to one slot never show through another.
///
/// # Examples
///
/// ```
/// use u_hyperheur::domain::SolutionPool;
/// use u_hyperheur::models::Solution;
///
/// let mut pool = SolutionPool::new(2);
/// pool.set(0, Solution::new(vec![1, 0], 7)).unwrap();
/// pool.copy(0, 1).unwrap();
/// pool.get_mut(1).unwrap().swap(0, 1);
/// assert_eq!(pool.get(0).unwrap().representation(), &[1, 0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolutionPool {
    slots: Vec<Option<Solution>>,
}

impl SolutionPool {
    /// Creates a pool of `size` empty slots.
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![None; size],
        }
    }

    /// Number of slots.
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Grows or shrinks the pool. Slots below the new size keep their content.
    pub fn resize(&mut self, size: usize) {
        self.slots.resize(size, None);
    }

    /// Whether `slot` holds a solution.
    pub fn is_occupied(&self, slot: usize) -> bool {
        matches!(self.slots.get(slot), Some(Some(_)))
    }

    /// The solution in `slot`.
    pub fn get(&self, slot: usize) -> Result<&Solution> {
        self.entry(slot)?
            .as_ref()
            .ok_or(HyperHeuristicError::EmptySlot { slot })
    }

    /// Mutable access to the solution in `slot`.
    pub fn get_mut(&mut self, slot: usize) -> Result<&mut Solution> {
        self.entry_mut(slot)?
            .as_mut()
            .ok_or(HyperHeuristicError::EmptySlot { slot })
    }

    /// Stores `solution` in `slot`, replacing any previous content.
    pub fn set(&mut self, slot: usize, solution: Solution) -> Result<()> {
        *self.entry_mut(slot)? = Some(solution);
        Ok(())
    }

    /// Deep-copies `from` into `to`.
    pub fn copy(&mut self, from: usize, to: usize) -> Result<()> {
        let solution = self.get(from)?.clone();
        self.set(to, solution)
    }

    fn entry(&self, slot: usize) -> Result<&Option<Solution>> {
        let size = self.slots.len();
        self.slots
            .get(slot)
            .ok_or(HyperHeuristicError::InvalidSlot { slot, size })
    }

    fn entry_mut(&mut self, slot: usize) -> Result<&mut Option<Solution>> {
        let size = self.slots.len();
        self.slots
            .get_mut(slot)
            .ok_or(HyperHeuristicError::InvalidSlot { slot, size })
    }
}
