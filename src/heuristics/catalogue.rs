//! Index table of the low-level heuristics.
//!
//! | Index | Heuristic                  | Type         |
//! |-------|----------------------------|--------------|
//! | 0     | K-step Davis hill climbing | local search |
//! | 1     | Next descent               | local search |
//! | 2     | Davis hill climbing        | local search |
//! | 3     | Reinsertion                | mutation     |
//! | 4     | Adjacent swap              | mutation     |
//! | 5     | PMX                        | crossover    |
//! | 6     | Edge recombination (swap)  | local search |
//! | 7     | Random swap                | mutation     |
//! | 8     | Order crossover            | crossover    |
//! | 9     | Segment inversion          | local search |

use rand::Rng;

use crate::crossover::{OrderCrossover, Pmx};
use crate::evaluation::ObjectiveFunction;
use crate::local_search::{
    DavisHillClimbing, EdgeRecombination, KDavisHillClimbing, NextDescent, SegmentInversion,
};
use crate::models::Solution;
use crate::mutation::{AdjacentSwap, RandomSwap, Reinsertion};

use super::{Controls, CrossoverHeuristic, HeuristicType, UnaryHeuristic};

/// One of the ten low-level heuristics, addressed by a shared index space.
///
/// # Examples
///
/// ```
/// use u_hyperheur::heuristics::{HeuristicType, LowLevelHeuristic};
///
/// let h = LowLevelHeuristic::from_index(5).unwrap();
/// assert_eq!(h, LowLevelHeuristic::Pmx);
/// assert!(h.is_crossover());
/// assert_eq!(LowLevelHeuristic::of_type(HeuristicType::Mutation), vec![3, 4, 7]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LowLevelHeuristic {
    /// See [`KDavisHillClimbing`].
    KDavisHillClimbing,
    /// See [`NextDescent`].
    NextDescent,
    /// See [`DavisHillClimbing`].
    DavisHillClimbing,
    /// See [`Reinsertion`].
    Reinsertion,
    /// See [`AdjacentSwap`].
    AdjacentSwap,
    /// See [`Pmx`].
    Pmx,
    /// See [`EdgeRecombination`].
    EdgeRecombination,
    /// See [`RandomSwap`].
    RandomSwap,
    /// See [`OrderCrossover`].
    OrderCrossover,
    /// See [`SegmentInversion`].
    SegmentInversion,
}

impl LowLevelHeuristic {
    /// Every heuristic, ordered by index.
    pub const ALL: [Self; 10] = [
        Self::KDavisHillClimbing,
        Self::NextDescent,
        Self::DavisHillClimbing,
        Self::Reinsertion,
        Self::AdjacentSwap,
        Self::Pmx,
        Self::EdgeRecombination,
        Self::RandomSwap,
        Self::OrderCrossover,
        Self::SegmentInversion,
    ];

    /// Number of heuristics in the index space.
    pub const COUNT: usize = Self::ALL.len();

    /// Looks up a heuristic by index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position of this heuristic in the index space.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Indices of all heuristics of the given type, ascending.
    pub fn of_type(heuristic_type: HeuristicType) -> Vec<usize> {
        Self::ALL
            .iter()
            .filter(|h| h.heuristic_type() == heuristic_type)
            .map(|h| h.index())
            .collect()
    }

    /// Short identifier used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Pmx => Pmx.name(),
            Self::OrderCrossover => OrderCrossover.name(),
            unary => match unary.as_unary() {
                Some(op) => op.name(),
                None => unreachable!("crossover heuristics are matched above"),
            },
        }
    }

    /// Category of the heuristic.
    pub fn heuristic_type(self) -> HeuristicType {
        self.as_unary()
            .map_or(HeuristicType::Crossover, |op| op.heuristic_type())
    }

    /// Whether this heuristic needs two parents.
    pub fn is_crossover(self) -> bool {
        self.heuristic_type() == HeuristicType::Crossover
    }

    /// Whether the repeat count follows depth of search.
    pub fn uses_depth_of_search(self) -> bool {
        self.as_unary().is_some_and(|op| op.uses_depth_of_search())
    }

    /// Whether the repeat count follows intensity of mutation.
    pub fn uses_intensity_of_mutation(self) -> bool {
        self.as_unary()
            .is_some_and(|op| op.uses_intensity_of_mutation())
    }

    /// Applies a unary heuristic. Returns `None` for crossover heuristics.
    pub fn apply_unary<R: Rng>(
        self,
        solution: &mut Solution,
        objective: &ObjectiveFunction<'_>,
        controls: Controls,
        rng: &mut R,
    ) -> Option<i64> {
        let value = match self {
            Self::KDavisHillClimbing => KDavisHillClimbing.apply(solution, objective, controls, rng),
            Self::NextDescent => NextDescent.apply(solution, objective, controls, rng),
            Self::DavisHillClimbing => DavisHillClimbing.apply(solution, objective, controls, rng),
            Self::Reinsertion => Reinsertion.apply(solution, objective, controls, rng),
            Self::AdjacentSwap => AdjacentSwap.apply(solution, objective, controls, rng),
            Self::EdgeRecombination => EdgeRecombination.apply(solution, objective, controls, rng),
            Self::RandomSwap => RandomSwap.apply(solution, objective, controls, rng),
            Self::SegmentInversion => SegmentInversion.apply(solution, objective, controls, rng),
            Self::Pmx | Self::OrderCrossover => return None,
        };
        Some(value)
    }

    /// Applies a crossover heuristic. Returns `None` for unary heuristics.
    pub fn apply_binary<R: Rng>(
        self,
        parent1: &[usize],
        parent2: &[usize],
        child: &mut Solution,
        objective: &ObjectiveFunction<'_>,
        controls: Controls,
        rng: &mut R,
    ) -> Option<i64> {
        match self {
            Self::Pmx => Some(Pmx.crossover(parent1, parent2, child, objective, controls, rng)),
            Self::OrderCrossover => {
                Some(OrderCrossover.crossover(parent1, parent2, child, objective, controls, rng))
            }
            _ => None,
        }
    }

    fn as_unary(self) -> Option<&'static dyn UnaryHeuristic> {
        match self {
            Self::KDavisHillClimbing => Some(&KDavisHillClimbing),
            Self::NextDescent => Some(&NextDescent),
            Self::DavisHillClimbing => Some(&DavisHillClimbing),
            Self::Reinsertion => Some(&Reinsertion),
            Self::AdjacentSwap => Some(&AdjacentSwap),
            Self::EdgeRecombination => Some(&EdgeRecombination),
            Self::RandomSwap => Some(&RandomSwap),
            Self::SegmentInversion => Some(&SegmentInversion),
            Self::Pmx | Self::OrderCrossover => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for (i, h) in LowLevelHeuristic::ALL.iter().enumerate() {
            assert_eq!(h.index(), i);
            assert_eq!(LowLevelHeuristic::from_index(i), Some(*h));
        }
        assert_eq!(LowLevelHeuristic::from_index(10), None);
    }

    #[test]
    fn test_type_partition() {
        assert_eq!(LowLevelHeuristic::of_type(HeuristicType::Mutation), vec![3, 4, 7]);
        assert_eq!(
            LowLevelHeuristic::of_type(HeuristicType::LocalSearch),
            vec![0, 1, 2, 6, 9]
        );
        assert_eq!(LowLevelHeuristic::of_type(HeuristicType::Crossover), vec![5, 8]);
    }

    #[test]
    fn test_control_flags() {
        for h in LowLevelHeuristic::ALL {
            match h.heuristic_type() {
                HeuristicType::Mutation => {
                    assert!(h.uses_intensity_of_mutation() && !h.uses_depth_of_search())
                }
                HeuristicType::LocalSearch => {
                    assert!(h.uses_depth_of_search() && !h.uses_intensity_of_mutation())
                }
                HeuristicType::Crossover => {
                    assert!(!h.uses_depth_of_search() && !h.uses_intensity_of_mutation())
                }
            }
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = LowLevelHeuristic::ALL.iter().map(|h| h.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), LowLevelHeuristic::COUNT);
    }
}
