//! The tour domain: everything an engine needs behind slot and heuristic indices.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::constructive::InitialisationMode;
use crate::error::{HyperHeuristicError, Result};
use crate::heuristics::{Controls, HeuristicType, LowLevelHeuristic};
use crate::io::ResultSink;
use crate::models::{Instance, Location, Solution};

use super::config::{check_unit_interval, DomainConfig};
use super::pool::SolutionPool;

/// Pool size before an engine sets its own.
const DEFAULT_POOL_SIZE: usize = 2;

/// Single-vehicle tour domain.
///
/// Owns the instance, the solution pool, the one random generator every
/// operator draws from, and a private copy of the best solution any
/// initialisation or heuristic call has produced.
///
/// # Examples
///
/// ```
/// use u_hyperheur::domain::{DomainConfig, TourDomain};
/// use u_hyperheur::models::Instance;
///
/// let instance = Instance::from_coordinates((0, 0), &[(1, 0), (0, 1), (-1, 0), (0, -1)]).unwrap();
/// let mut domain = TourDomain::new(instance, DomainConfig::default().with_seed(42)).unwrap();
///
/// domain.set_pool_size(2);
/// let initial = domain.initialise_solution(0).unwrap();
/// let after = domain.apply_unary(2, 0, 1).unwrap();
/// assert!(after <= initial);
/// assert_eq!(domain.best_solution_value(), Some(after.min(initial)));
/// ```
#[derive(Debug)]
pub struct TourDomain {
    instance: Instance,
    controls: Controls,
    init_mode: InitialisationMode,
    rng: StdRng,
    pool: SolutionPool,
    best: Option<Solution>,
}

impl TourDomain {
    /// Creates a domain over `instance`.
    pub fn new(instance: Instance, config: DomainConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            controls: config.controls(),
            init_mode: config.init_mode,
            instance,
            rng,
            pool: SolutionPool::new(DEFAULT_POOL_SIZE),
            best: None,
        })
    }

    /// The loaded instance.
    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    /// Current depth/intensity controls.
    pub fn controls(&self) -> Controls {
        self.controls
    }

    /// The shared random generator.
    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Sets the depth of search.
    pub fn set_depth_of_search(&mut self, depth: f64) -> Result<()> {
        check_unit_interval("depth_of_search", depth)?;
        self.controls.depth_of_search = depth;
        Ok(())
    }

    /// Sets the intensity of mutation.
    pub fn set_intensity_of_mutation(&mut self, intensity: f64) -> Result<()> {
        check_unit_interval("intensity_of_mutation", intensity)?;
        self.controls.intensity_of_mutation = intensity;
        Ok(())
    }

    /// Resizes the pool, keeping slots below `size`.
    pub fn set_pool_size(&mut self, size: usize) {
        self.pool.resize(size);
    }

    /// Number of pool slots.
    pub fn pool_size(&self) -> usize {
        self.pool.size()
    }

    /// Builds a fresh solution in `slot` with the configured mode.
    pub fn initialise_solution(&mut self, slot: usize) -> Result<i64> {
        self.initialise_solution_with(slot, self.init_mode)
    }

    /// Builds a fresh solution in `slot` with an explicit mode.
    pub fn initialise_solution_with(
        &mut self,
        slot: usize,
        mode: InitialisationMode,
    ) -> Result<i64> {
        let tour = mode.build(&self.instance, &mut self.rng);
        let solution = Solution::evaluated(tour, &self.instance.objective());
        let value = solution.objective_value();
        self.pool.set(slot, solution)?;
        self.update_best(slot)?;
        Ok(value)
    }

    /// Copies `source` into `dest`, then applies unary heuristic `heuristic` to `dest`.
    ///
    /// Crossover or unknown indices are rejected before any slot is touched.
    pub fn apply_unary(&mut self, heuristic: usize, source: usize, dest: usize) -> Result<i64> {
        let llh = LowLevelHeuristic::from_index(heuristic)
            .filter(|h| !h.is_crossover())
            .ok_or(HyperHeuristicError::InvalidHeuristic { index: heuristic })?;

        self.pool.copy(source, dest)?;
        let objective = self.instance.objective();
        let solution = self.pool.get_mut(dest)?;
        let value = llh
            .apply_unary(solution, &objective, self.controls, &mut self.rng)
            .ok_or(HyperHeuristicError::InvalidHeuristic { index: heuristic })?;
        self.update_best(dest)?;
        Ok(value)
    }

    /// Writes a child of `parent1` and `parent2` into `dest`.
    ///
    /// Returns `Ok(None)` without touching any slot if `heuristic` is not a
    /// crossover operator, including indices outside the catalogue.
    pub fn apply_binary(
        &mut self,
        heuristic: usize,
        parent1: usize,
        parent2: usize,
        dest: usize,
    ) -> Result<Option<i64>> {
        let Some(llh) = LowLevelHeuristic::from_index(heuristic).filter(|h| h.is_crossover())
        else {
            return Ok(None);
        };

        let first = self.pool.get(parent1)?.representation().to_vec();
        let second = self.pool.get(parent2)?.representation().to_vec();
        self.pool.copy(parent1, dest)?;
        let objective = self.instance.objective();
        let child = self.pool.get_mut(dest)?;
        let value = llh.apply_binary(
            &first,
            &second,
            child,
            &objective,
            self.controls,
            &mut self.rng,
        );
        self.update_best(dest)?;
        Ok(value)
    }

    /// Deep-copies `from` into `to`.
    pub fn copy_solution(&mut self, from: usize, to: usize) -> Result<()> {
        self.pool.copy(from, to)
    }

    /// Objective value of `slot`, recomputed from its tour.
    pub fn cost(&self, slot: usize) -> Result<i64> {
        let solution = self.pool.get(slot)?;
        Ok(self.instance.objective().evaluate(solution.representation()))
    }

    /// The solution in `slot`.
    pub fn solution(&self, slot: usize) -> Result<&Solution> {
        self.pool.get(slot)
    }

    /// Whether two slots hold the same tour.
    pub fn compare_solutions(&self, a: usize, b: usize) -> Result<bool> {
        Ok(self.pool.get(a)?.representation() == self.pool.get(b)?.representation())
    }

    /// Total number of low-level heuristics.
    pub fn number_of_heuristics(&self) -> usize {
        LowLevelHeuristic::COUNT
    }

    /// Indices of heuristics of the given type, ascending.
    pub fn heuristics_of_type(&self, heuristic_type: HeuristicType) -> Vec<usize> {
        LowLevelHeuristic::of_type(heuristic_type)
    }

    /// Indices of heuristics whose repeat count follows depth of search.
    pub fn heuristics_using_depth_of_search(&self) -> Vec<usize> {
        LowLevelHeuristic::ALL
            .iter()
            .filter(|h| h.uses_depth_of_search())
            .map(|h| h.index())
            .collect()
    }

    /// Indices of heuristics whose repeat count follows intensity of mutation.
    pub fn heuristics_using_intensity_of_mutation(&self) -> Vec<usize> {
        LowLevelHeuristic::ALL
            .iter()
            .filter(|h| h.uses_intensity_of_mutation())
            .map(|h| h.index())
            .collect()
    }

    /// Whether `heuristic` is a crossover operator. Unknown indices are not.
    pub fn is_crossover(&self, heuristic: usize) -> bool {
        LowLevelHeuristic::from_index(heuristic).is_some_and(|h| h.is_crossover())
    }

    /// Best solution seen so far.
    pub fn best_solution(&self) -> Option<&Solution> {
        self.best.as_ref()
    }

    /// Cost of the best solution seen so far.
    pub fn best_solution_value(&self) -> Option<i64> {
        self.best.as_ref().map(Solution::objective_value)
    }

    /// The best tour resolved to `depot, l0, .., l(n-1), depot`.
    pub fn best_route_locations(&self) -> Result<Vec<Location>> {
        let best = self.best.as_ref().ok_or(HyperHeuristicError::NoSolution)?;
        self.instance.route_locations(best.representation())
    }

    /// Hands the best route to `sink`.
    pub fn write_best_route<S: ResultSink>(&self, sink: &mut S) -> Result<()> {
        let route = self.best_route_locations()?;
        sink.write_route(&route)
    }

    /// Human-readable tour and cost of `slot`.
    pub fn solution_to_string(&self, slot: usize) -> Result<String> {
        let solution = self.pool.get(slot)?;
        Ok(format!(
            "Solution {slot}:\n{}\nObjective function value: {}\n",
            join_tour(solution.representation()),
            solution.objective_value()
        ))
    }

    /// Human-readable tour and cost of the best solution.
    pub fn best_solution_to_string(&self) -> Result<String> {
        let best = self.best.as_ref().ok_or(HyperHeuristicError::NoSolution)?;
        Ok(format!(
            "Best solution found:\n{}\nObjective function value: {}\n",
            join_tour(best.representation()),
            best.objective_value()
        ))
    }

    fn update_best(&mut self, slot: usize) -> Result<()> {
        let candidate = self.pool.get(slot)?;
        let improved = self
            .best
            .as_ref()
            .map_or(true, |best| candidate.objective_value() < best.objective_value());
        if improved {
            debug!(
                event = "new_best",
                slot,
                cost = candidate.objective_value(),
                "new best solution"
            );
            self.best = Some(candidate.clone());
        }
        Ok(())
    }
}

fn join_tour(tour: &[usize]) -> String {
    tour.iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::VecSink;
    use crate::models::is_permutation;
    use crate::test_support::scattered;

    fn setup() -> TourDomain {
        let mut domain =
            TourDomain::new(scattered(), DomainConfig::default().with_seed(42)).expect("valid");
        domain.set_pool_size(4);
        domain
    }

    #[test]
    fn test_initialise_records_best() {
        let mut domain = setup();
        assert!(domain.best_solution().is_none());
        let cost = domain.initialise_solution(0).expect("valid");
        assert_eq!(domain.best_solution_value(), Some(cost));
        assert_eq!(domain.cost(0).expect("valid"), cost);
        assert!(is_permutation(
            domain.solution(0).expect("valid").representation(),
            12
        ));
    }

    #[test]
    fn test_apply_unary_leaves_source() {
        let mut domain = setup();
        domain
            .initialise_solution_with(0, InitialisationMode::Random)
            .expect("valid");
        let before = domain.solution(0).expect("valid").clone();
        for h in [3, 4, 7] {
            let value = domain.apply_unary(h, 0, 1).expect("valid");
            assert_eq!(value, domain.cost(1).expect("valid"));
            assert_eq!(domain.solution(0).expect("valid"), &before);
        }
    }

    #[test]
    fn test_apply_unary_rejects_crossover() {
        let mut domain = setup();
        domain.initialise_solution(0).expect("valid");
        assert!(matches!(
            domain.apply_unary(5, 0, 1),
            Err(HyperHeuristicError::InvalidHeuristic { index: 5 })
        ));
        assert!(domain.apply_unary(10, 0, 1).is_err());
        assert!(!domain.pool.is_occupied(1));
    }

    #[test]
    fn test_apply_binary() {
        let mut domain = setup();
        domain.initialise_solution(0).expect("valid");
        domain
            .initialise_solution_with(1, InitialisationMode::Random)
            .expect("valid");
        let value = domain.apply_binary(8, 0, 1, 2).expect("valid");
        assert_eq!(value, Some(domain.cost(2).expect("valid")));
        assert_eq!(domain.apply_binary(0, 0, 1, 3).expect("valid"), None);
        assert!(!domain.pool.is_occupied(3));
    }

    #[test]
    fn test_apply_binary_unknown_index_not_applicable() {
        let mut domain = setup();
        domain.initialise_solution(0).expect("valid");
        domain.initialise_solution(1).expect("valid");
        assert_eq!(domain.apply_binary(42, 0, 1, 2).expect("valid"), None);
        assert_eq!(
            domain
                .apply_binary(LowLevelHeuristic::COUNT, 0, 1, 2)
                .expect("valid"),
            None
        );
        assert!(!domain.pool.is_occupied(2));
        assert!(matches!(
            domain.apply_binary(5, 0, 9, 2),
            Err(HyperHeuristicError::InvalidSlot { .. })
        ));
    }

    #[test]
    fn test_best_never_increases() {
        let mut domain = setup();
        domain.initialise_solution(0).expect("valid");
        let mut best = domain.best_solution_value().expect("valid");
        for h in 0..LowLevelHeuristic::COUNT {
            if domain.is_crossover(h) {
                domain.apply_binary(h, 0, 1, 2).expect("valid");
                continue;
            }
            domain.apply_unary(h, 0, 1).expect("valid");
            domain.copy_solution(1, 0).expect("valid");
            let now = domain.best_solution_value().expect("valid");
            assert!(now <= best);
            best = now;
        }
    }

    #[test]
    fn test_compare_and_copy() {
        let mut domain = setup();
        domain.initialise_solution(0).expect("valid");
        domain.copy_solution(0, 1).expect("valid");
        assert!(domain.compare_solutions(0, 1).expect("valid"));
        domain.set_intensity_of_mutation(0.0).expect("valid");
        domain.apply_unary(7, 1, 1).expect("valid");
        assert!(!domain.compare_solutions(0, 1).expect("valid"));
    }

    #[test]
    fn test_heuristic_queries() {
        let domain = setup();
        assert_eq!(domain.number_of_heuristics(), 10);
        assert_eq!(domain.heuristics_of_type(HeuristicType::Crossover), vec![5, 8]);
        assert_eq!(domain.heuristics_using_intensity_of_mutation(), vec![3, 4, 7]);
        assert_eq!(domain.heuristics_using_depth_of_search(), vec![0, 1, 2, 6, 9]);
        assert!(domain.is_crossover(5));
        assert!(!domain.is_crossover(42));
    }

    #[test]
    fn test_set_pool_size_preserves() {
        let mut domain = setup();
        let cost = domain.initialise_solution(1).expect("valid");
        domain.set_pool_size(8);
        assert_eq!(domain.cost(1).expect("valid"), cost);
        domain.set_pool_size(1);
        assert!(matches!(
            domain.cost(1),
            Err(HyperHeuristicError::InvalidSlot { slot: 1, size: 1 })
        ));
    }

    #[test]
    fn test_controls_validation() {
        let mut domain = setup();
        assert!(domain.set_depth_of_search(1.2).is_err());
        domain.set_intensity_of_mutation(1.0).expect("valid");
        assert_eq!(domain.controls().intensity_of_mutation, 1.0);
    }

    #[test]
    fn test_best_route_and_strings() {
        let mut domain = setup();
        assert!(matches!(
            domain.best_route_locations(),
            Err(HyperHeuristicError::NoSolution)
        ));
        domain.initialise_solution(0).expect("valid");
        let route = domain.best_route_locations().expect("valid");
        assert_eq!(route.len(), 14);
        assert!(route[0].is_depot());
        assert!(route[13].is_depot());

        let mut sink = VecSink::default();
        domain.write_best_route(&mut sink).expect("valid");
        assert_eq!(sink.routes().len(), 1);
        assert_eq!(sink.routes()[0], route);

        let text = domain.best_solution_to_string().expect("valid");
        assert!(text.starts_with("Best solution found:"));
        assert!(domain
            .solution_to_string(0)
            .expect("valid")
            .contains("Objective function value"));
    }
}
