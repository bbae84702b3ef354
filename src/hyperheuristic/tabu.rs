//! Tabu-list selection engine.
//!
//! # Algorithm
//!
//! Each iteration draws a heuristic uniformly at random. A tabu heuristic
//! ends the iteration at once. Otherwise it is applied to the current
//! solution (a crossover partners either a fresh solution or the best
//! accepted one, with equal odds). Only strictly improving candidates are
//! accepted, unless annealing is enabled. On acceptance the candidate is
//! copied to the best-accepted slot, the slot roles exchange, and the
//! heuristic becomes tabu. The whole list is then cleared if it grew past
//! its size bound, or at random.
//!
//! # Reference
//!
//! Burke, E. K., Kendall, G. & Soubeiga, E. (2003). "A tabu-search
//! hyperheuristic for timetabling and rostering", *Journal of Heuristics*
//! 9(6), 451-470.

use std::collections::BTreeMap;

use rand::Rng;
use tracing::debug;

use crate::domain::TourDomain;
use crate::error::{HyperHeuristicError, Result};
use crate::heuristics::random_index;

use super::annealing::Annealing;
use super::config::TabuConfig;
use super::{HyperHeuristic, SlotPair, Step};

/// Heuristics forbidden from reselection, with their remaining tenure.
///
/// # Examples
///
/// ```
/// use u_hyperheur::hyperheuristic::TabuList;
///
/// let mut list = TabuList::new(2);
/// list.make_tabu(4);
/// list.make_tabu(7);
/// assert_eq!(list.remaining(4), Some(1));
/// list.make_tabu(1);
/// assert!(!list.contains(4));
/// assert_eq!(list.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabuList {
    tenure: usize,
    entries: BTreeMap<usize, usize>,
}

impl TabuList {
    /// An empty list whose entries last `tenure` insertions.
    pub fn new(tenure: usize) -> Self {
        Self {
            tenure,
            entries: BTreeMap::new(),
        }
    }

    /// Whether `heuristic` is tabu.
    pub fn contains(&self, heuristic: usize) -> bool {
        self.entries.contains_key(&heuristic)
    }

    /// Remaining tenure of `heuristic`, if tabu.
    pub fn remaining(&self, heuristic: usize) -> Option<usize> {
        self.entries.get(&heuristic).copied()
    }

    /// Number of tabu heuristics.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no heuristic is tabu.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Makes `heuristic` tabu with full tenure.
    ///
    /// Every other entry loses one unit of tenure; entries reaching zero
    /// are evicted.
    pub fn make_tabu(&mut self, heuristic: usize) {
        self.entries.retain(|&h, remaining| {
            if h == heuristic {
                return false;
            }
            *remaining -= 1;
            *remaining > 0
        });
        self.entries.insert(heuristic, self.tenure);
    }

    /// Forgets every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Tabu-list hyper-heuristic.
///
/// # Examples
///
/// ```
/// use u_hyperheur::domain::{DomainConfig, TourDomain};
/// use u_hyperheur::hyperheuristic::{HyperHeuristic, IterationLimit, TabuConfig, TabuHH};
/// use u_hyperheur::models::Instance;
///
/// let coords: Vec<(i32, i32)> = (0..8).map(|i| ((i * 7) % 11, (i * 3) % 5)).collect();
/// let instance = Instance::from_coordinates((0, 0), &coords).unwrap();
/// let mut domain = TourDomain::new(instance, DomainConfig::default().with_seed(1)).unwrap();
///
/// let mut engine = TabuHH::new(TabuConfig::default()).unwrap();
/// let result = engine.solve(&mut domain, &mut IterationLimit::new(200)).unwrap();
/// assert_eq!(result.stats.iterations, 200);
/// assert_eq!(domain.best_solution_value(), Some(result.best_cost));
/// ```
#[derive(Debug, Clone)]
pub struct TabuHH {
    config: TabuConfig,
    tabu: TabuList,
    annealing: Option<Annealing>,
    slots: SlotPair,
}

impl TabuHH {
    /// Slot of a freshly initialised crossover partner.
    pub const SECOND_PARENT: usize = 2;
    /// Slot holding the most recently accepted solution.
    pub const BEST_ACCEPTED: usize = 3;
    const POOL_SIZE: usize = 4;

    /// Creates an engine after validating `config`.
    pub fn new(config: TabuConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            tabu: TabuList::new(config.tenure),
            annealing: config.annealing.as_ref().map(Annealing::new),
            slots: SlotPair::new(0),
            config,
        })
    }

    /// The tabu list.
    pub fn tabu_list(&self) -> &TabuList {
        &self.tabu
    }

    /// Annealing state, if enabled.
    pub fn annealing(&self) -> Option<&Annealing> {
        self.annealing.as_ref()
    }

    fn should_clear<R: Rng>(&self, rng: &mut R) -> bool {
        self.tabu.len() > self.config.max_list_size
            || rng.random::<f64>() < self.config.clear_probability
    }
}

impl HyperHeuristic for TabuHH {
    fn name(&self) -> &'static str {
        "tabu"
    }

    fn initialise(&mut self, domain: &mut TourDomain) -> Result<()> {
        domain.set_pool_size(Self::POOL_SIZE);
        let cost = domain.initialise_solution(SlotPair::CURRENT)?;
        domain.copy_solution(SlotPair::CURRENT, Self::BEST_ACCEPTED)?;
        self.slots = SlotPair::new(cost);
        self.tabu = TabuList::new(self.config.tenure);
        self.annealing = self.config.annealing.as_ref().map(Annealing::new);
        Ok(())
    }

    fn step(&mut self, domain: &mut TourDomain) -> Result<Step> {
        let num_heuristics = domain.number_of_heuristics();
        let h = random_index(domain.rng_mut(), num_heuristics);
        if self.tabu.contains(h) {
            return Ok(Step::Skipped { heuristic: h });
        }
        if let Some(annealing) = self.annealing.as_mut() {
            annealing.cool();
        }

        let SlotPair {
            current,
            candidate,
            current_cost,
        } = self.slots;
        let candidate_cost = if domain.is_crossover(h) {
            let partner = if domain.rng_mut().random_bool(0.5) {
                domain.initialise_solution(Self::SECOND_PARENT)?;
                Self::SECOND_PARENT
            } else {
                Self::BEST_ACCEPTED
            };
            domain
                .apply_binary(h, current, partner, candidate)?
                .ok_or(HyperHeuristicError::InvalidHeuristic { index: h })?
        } else {
            domain.apply_unary(h, current, candidate)?
        };

        let accepted = candidate_cost < current_cost
            || self.annealing.as_ref().is_some_and(|annealing| {
                annealing.accepts(current_cost, candidate_cost, domain.rng_mut())
            });
        if accepted {
            domain.copy_solution(candidate, Self::BEST_ACCEPTED)?;
            self.slots.accept(candidate_cost);
            self.tabu.make_tabu(h);
        }

        if self.should_clear(domain.rng_mut()) {
            debug!(event = "tabu_clear", size = self.tabu.len());
            self.tabu.clear();
        }

        Ok(Step::Applied {
            heuristic: h,
            candidate_cost,
            accepted,
        })
    }

    fn current_cost(&self) -> i64 {
        self.slots.current_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainConfig;
    use crate::hyperheuristic::AnnealingConfig;
    use crate::test_support::scattered;

    fn setup(config: TabuConfig) -> (TabuHH, TourDomain) {
        let mut domain =
            TourDomain::new(scattered(), DomainConfig::default().with_seed(42)).expect("valid");
        let mut engine = TabuHH::new(config).expect("valid");
        engine.initialise(&mut domain).expect("valid");
        (engine, domain)
    }

    #[test]
    fn test_make_tabu_full_tenure() {
        let mut list = TabuList::new(6);
        list.make_tabu(3);
        assert_eq!(list.remaining(3), Some(6));
        list.make_tabu(5);
        assert_eq!(list.remaining(3), Some(5));
        assert_eq!(list.remaining(5), Some(6));
    }

    #[test]
    fn test_refresh_resets_tenure() {
        let mut list = TabuList::new(3);
        list.make_tabu(1);
        list.make_tabu(2);
        list.make_tabu(1);
        assert_eq!(list.remaining(1), Some(3));
        assert_eq!(list.remaining(2), Some(2));
    }

    #[test]
    fn test_eviction_after_tenure() {
        let mut list = TabuList::new(2);
        list.make_tabu(0);
        list.make_tabu(1);
        list.make_tabu(2);
        assert!(!list.contains(0));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_initialise_pool() {
        let (engine, domain) = setup(TabuConfig::default());
        assert_eq!(domain.pool_size(), 4);
        assert!(domain
            .compare_solutions(SlotPair::CURRENT, TabuHH::BEST_ACCEPTED)
            .expect("valid"));
        assert!(engine.tabu_list().is_empty());
        assert!(engine.annealing().is_none());
    }

    #[test]
    fn test_tabu_heuristic_never_applied() {
        // clearing disabled so entries persist
        let config = TabuConfig::default()
            .with_clear_probability(0.0)
            .with_max_list_size(usize::MAX);
        let (mut engine, mut domain) = setup(config);
        for _ in 0..500 {
            let before = engine.tabu_list().clone();
            match engine.step(&mut domain).expect("valid") {
                Step::Skipped { heuristic } => assert!(before.contains(heuristic)),
                Step::Applied { heuristic, .. } => assert!(!before.contains(heuristic)),
            }
        }
    }

    #[test]
    fn test_strict_acceptance() {
        let (mut engine, mut domain) = setup(TabuConfig::default());
        for _ in 0..300 {
            let before = engine.current_cost();
            if let Step::Applied {
                candidate_cost,
                accepted,
                ..
            } = engine.step(&mut domain).expect("valid")
            {
                assert_eq!(accepted, candidate_cost < before);
                assert!(engine.current_cost() <= before);
            }
            assert_eq!(
                domain.cost(engine.slots.current).expect("valid"),
                engine.current_cost()
            );
        }
    }

    #[test]
    fn test_list_bounded() {
        let (mut engine, mut domain) = setup(TabuConfig::default().with_clear_probability(0.0));
        for _ in 0..500 {
            engine.step(&mut domain).expect("valid");
            assert!(engine.tabu_list().len() <= 9);
        }
    }

    #[test]
    fn test_annealing_cools_per_applied_step() {
        let (mut engine, mut domain) =
            setup(TabuConfig::default().with_annealing(AnnealingConfig::default()));
        let mut applied = 0;
        for _ in 0..50 {
            if let Step::Applied { .. } = engine.step(&mut domain).expect("valid") {
                applied += 1;
            }
        }
        let expected = 10_000.0 * 0.98f64.powi(applied);
        let temperature = engine.annealing().expect("enabled").temperature();
        assert!((temperature - expected).abs() < 1e-6);
    }
}
