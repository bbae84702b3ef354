//! Choice-function selection engine.
//!
//! # Algorithm
//!
//! Every heuristic `h` is scored as
//!
//! ```text
//! score(h) = alpha * f1[h] + beta * f2[h][prev] + gamma * f3[h]
//! ```
//!
//! where `f1` counts improving minus non-improving applications, `f2` does
//! the same for `h` directly after `prev`, and `f3` is the number of
//! iterations since `h` last ran. The highest score wins, ties to the lowest
//! index. With the default weights staleness dominates, so every heuristic
//! is revisited regularly.
//!
//! A crossover partners a random elite member, except on every
//! `elite_size`-th crossover call where a freshly initialised solution is
//! used. Candidates costing no more than the current solution are accepted;
//! strictly improving ones also replace the worst elite member.
//!
//! # Reference
//!
//! Drake, J. H., Özcan, E. & Burke, E. K. (2012). "An improved choice
//! function heuristic selection for cross domain heuristic search",
//! *PPSN XII*, LNCS 7492, 307-316.

use tracing::debug;

use crate::domain::TourDomain;
use crate::error::{HyperHeuristicError, Result};
use crate::heuristics::LowLevelHeuristic;

use super::config::ChoiceFunctionConfig;
use super::elite::EliteArchive;
use super::{HyperHeuristic, SlotPair, Step};

/// Learning state of the choice function.
///
/// # Examples
///
/// ```
/// use u_hyperheur::hyperheuristic::{ChoiceFunction, ChoiceFunctionConfig};
///
/// let mut cf = ChoiceFunction::new(3, &ChoiceFunctionConfig::default());
/// assert_eq!(cf.select(), 0);
/// cf.record(0, false);
/// // heuristics 1 and 2 are now stale; the lower index wins the tie
/// assert_eq!(cf.select(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceFunction {
    alpha: f64,
    beta: f64,
    gamma: f64,
    success: Vec<i64>,
    pair_success: Vec<i64>,
    staleness: Vec<i64>,
    previous: usize,
}

impl ChoiceFunction {
    /// Fresh counters for `num_heuristics` heuristics.
    pub fn new(num_heuristics: usize, config: &ChoiceFunctionConfig) -> Self {
        Self {
            alpha: config.alpha,
            beta: config.beta,
            gamma: config.gamma,
            success: vec![0; num_heuristics],
            pair_success: vec![0; num_heuristics * num_heuristics],
            staleness: vec![0; num_heuristics],
            previous: 0,
        }
    }

    /// Number of heuristics scored.
    pub fn num_heuristics(&self) -> usize {
        self.success.len()
    }

    /// Heuristic applied last (0 before any call).
    pub fn previous(&self) -> usize {
        self.previous
    }

    /// Improving minus non-improving applications of `h`.
    pub fn success(&self, h: usize) -> i64 {
        self.success[h]
    }

    /// Same as [`success`](Self::success), restricted to calls right after `prev`.
    pub fn pair_success(&self, h: usize, prev: usize) -> i64 {
        self.pair_success[h * self.num_heuristics() + prev]
    }

    /// Iterations since `h` last ran.
    pub fn staleness(&self, h: usize) -> i64 {
        self.staleness[h]
    }

    /// Current score of `h`.
    pub fn score(&self, h: usize) -> f64 {
        self.alpha * self.success[h] as f64
            + self.beta * self.pair_success(h, self.previous) as f64
            + self.gamma * self.staleness[h] as f64
    }

    /// Highest-scoring heuristic; ties go to the lowest index.
    pub fn select(&self) -> usize {
        let mut best = 0;
        let mut best_score = self.score(0);
        for h in 1..self.num_heuristics() {
            let score = self.score(h);
            if score > best_score {
                best = h;
                best_score = score;
            }
        }
        best
    }

    /// Updates the counters after applying `h`.
    pub fn record(&mut self, h: usize, improved: bool) {
        let delta = if improved { 1 } else { -1 };
        let n = self.num_heuristics();
        self.success[h] += delta;
        self.pair_success[h * n + self.previous] += delta;
        for (other, staleness) in self.staleness.iter_mut().enumerate() {
            if other == h {
                *staleness = 0;
            } else {
                *staleness += 1;
            }
        }
        self.previous = h;
    }
}

/// Choice-function hyper-heuristic with an elite archive.
///
/// Pool layout: slots 0 and 1 hold the current and candidate solutions,
/// slot 2 the occasional fresh crossover partner, and slots from 3 on the
/// elite archive.
///
/// # Examples
///
/// ```
/// use u_hyperheur::domain::{DomainConfig, TourDomain};
/// use u_hyperheur::hyperheuristic::{
///     ChoiceFunctionConfig, ChoiceFunctionHH, HyperHeuristic, IterationLimit,
/// };
/// use u_hyperheur::models::Instance;
///
/// let coords: Vec<(i32, i32)> = (0..8).map(|i| ((i * 5) % 9, (i * 4) % 7)).collect();
/// let instance = Instance::from_coordinates((0, 0), &coords).unwrap();
/// let mut domain = TourDomain::new(instance, DomainConfig::default().with_seed(3)).unwrap();
///
/// let mut engine = ChoiceFunctionHH::new(ChoiceFunctionConfig::default()).unwrap();
/// let result = engine.solve(&mut domain, &mut IterationLimit::new(100)).unwrap();
/// assert_eq!(result.stats.iterations, 100);
/// assert!(result.best_cost <= engine.current_cost());
/// ```
#[derive(Debug, Clone)]
pub struct ChoiceFunctionHH {
    config: ChoiceFunctionConfig,
    learning: ChoiceFunction,
    elite: EliteArchive,
    slots: SlotPair,
    crossover_calls: u64,
}

impl ChoiceFunctionHH {
    /// Slot of a freshly initialised crossover partner.
    pub const SECOND_PARENT: usize = 2;
    /// First slot of the elite archive.
    pub const FIRST_ELITE: usize = 3;

    /// Creates an engine after validating `config`.
    pub fn new(config: ChoiceFunctionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            learning: ChoiceFunction::new(LowLevelHeuristic::COUNT, &config),
            elite: EliteArchive::new(Self::FIRST_ELITE, config.elite_size),
            slots: SlotPair::new(0),
            crossover_calls: 0,
            config,
        })
    }

    /// Learning state.
    pub fn learning(&self) -> &ChoiceFunction {
        &self.learning
    }

    /// The elite archive.
    pub fn elite(&self) -> &EliteArchive {
        &self.elite
    }

    fn crossover_partner(&mut self, domain: &mut TourDomain) -> Result<usize> {
        self.crossover_calls += 1;
        if self.crossover_calls % self.config.elite_size as u64 == 0 {
            domain.initialise_solution(Self::SECOND_PARENT)?;
            Ok(Self::SECOND_PARENT)
        } else {
            Ok(self.elite.random_member(domain.rng_mut()))
        }
    }
}

impl HyperHeuristic for ChoiceFunctionHH {
    fn name(&self) -> &'static str {
        "choice_function"
    }

    fn initialise(&mut self, domain: &mut TourDomain) -> Result<()> {
        domain.set_pool_size(Self::FIRST_ELITE + self.config.elite_size);
        let cost = domain.initialise_solution(SlotPair::CURRENT)?;
        self.elite.fill(domain, SlotPair::CURRENT)?;
        self.slots = SlotPair::new(cost);
        self.learning = ChoiceFunction::new(domain.number_of_heuristics(), &self.config);
        self.crossover_calls = 0;
        Ok(())
    }

    fn step(&mut self, domain: &mut TourDomain) -> Result<Step> {
        let h = self.learning.select();
        let SlotPair {
            current,
            candidate,
            current_cost,
        } = self.slots;

        let candidate_cost = if domain.is_crossover(h) {
            let partner = self.crossover_partner(domain)?;
            domain
                .apply_binary(h, current, partner, candidate)?
                .ok_or(HyperHeuristicError::InvalidHeuristic { index: h })?
        } else {
            domain.apply_unary(h, current, candidate)?
        };

        let improved = candidate_cost < current_cost;
        if improved {
            let slot = self.elite.replace_worst(domain, candidate)?;
            debug!(event = "elite_update", heuristic = h, slot, cost = candidate_cost);
        }
        self.learning.record(h, improved);

        let accepted = candidate_cost <= current_cost;
        if accepted {
            self.slots.accept(candidate_cost);
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
    use crate::test_support::scattered;

    fn setup() -> (ChoiceFunctionHH, TourDomain) {
        let mut domain =
            TourDomain::new(scattered(), DomainConfig::default().with_seed(42)).expect("valid");
        let mut engine = ChoiceFunctionHH::new(ChoiceFunctionConfig::default()).expect("valid");
        engine.initialise(&mut domain).expect("valid");
        (engine, domain)
    }

    #[test]
    fn test_record_counters() {
        let mut cf = ChoiceFunction::new(4, &ChoiceFunctionConfig::default());
        cf.record(2, true);
        assert_eq!(cf.success(2), 1);
        assert_eq!(cf.pair_success(2, 0), 1);
        assert_eq!(cf.staleness(2), 0);
        assert_eq!(cf.staleness(0), 1);
        assert_eq!(cf.previous(), 2);

        cf.record(1, false);
        assert_eq!(cf.success(1), -1);
        assert_eq!(cf.pair_success(1, 2), -1);
        assert_eq!(cf.staleness(2), 1);
        assert_eq!(cf.staleness(0), 2);
    }

    #[test]
    fn test_score_formula() {
        let config = ChoiceFunctionConfig::default();
        let mut cf = ChoiceFunction::new(3, &config);
        cf.record(1, true);
        cf.record(0, true);
        // previous is 0: f1[1] = 1, f2[1][0] = 1, f3[1] = 1
        assert_eq!(cf.score(1), 0.8 + 15.0 + 2000.0);
        // f2[0][1] was credited, but f2[0][0] is what counts now
        assert_eq!(cf.score(0), 0.8);
    }

    #[test]
    fn test_select_prefers_stale() {
        let mut cf = ChoiceFunction::new(3, &ChoiceFunctionConfig::default());
        for _ in 0..5 {
            cf.record(0, true);
        }
        cf.record(1, true);
        assert_eq!(cf.select(), 2);
    }

    #[test]
    fn test_round_robin_start() {
        let (mut engine, mut domain) = setup();
        let mut order = Vec::new();
        for _ in 0..LowLevelHeuristic::COUNT {
            match engine.step(&mut domain).expect("valid") {
                Step::Applied { heuristic, .. } => order.push(heuristic),
                Step::Skipped { .. } => unreachable!("choice function never skips"),
            }
        }
        order.sort_unstable();
        assert_eq!(order, (0..LowLevelHeuristic::COUNT).collect::<Vec<_>>());
    }

    #[test]
    fn test_acceptance_and_elite() {
        let (mut engine, mut domain) = setup();
        let mut max_elite = engine.elite().max_cost(&domain).expect("valid");
        for _ in 0..300 {
            let before = engine.current_cost();
            if let Step::Applied {
                candidate_cost,
                accepted,
                ..
            } = engine.step(&mut domain).expect("valid")
            {
                assert_eq!(accepted, candidate_cost <= before);
            }
            assert!(engine.current_cost() <= before);
            assert_eq!(
                domain.cost(engine.slots.current).expect("valid"),
                engine.current_cost()
            );
            let now = engine.elite().max_cost(&domain).expect("valid");
            assert!(now <= max_elite);
            max_elite = now;
        }
    }

    #[test]
    fn test_pool_layout() {
        let (engine, domain) = setup();
        assert_eq!(domain.pool_size(), 3 + 5);
        assert_eq!(engine.elite().slots(), 3..8);
        assert_eq!(engine.learning().num_heuristics(), 10);
    }
}
