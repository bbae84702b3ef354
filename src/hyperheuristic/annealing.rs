//! Simulated annealing acceptance.
//!
//! A worse candidate is accepted with probability
//! `exp((current - candidate) / T)`; the temperature cools geometrically.
//!
//! # Reference
//!
//! Kirkpatrick, S., Gelatt, C. D. & Vecchi, M. P. (1983). "Optimization by
//! simulated annealing", *Science* 220(4598), 671-680.

use rand::Rng;

use super::config::AnnealingConfig;

/// Temperature state for annealing acceptance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Annealing {
    temperature: f64,
    cooling_rate: f64,
}

impl Annealing {
    /// Starts at the configured temperature.
    pub fn new(config: &AnnealingConfig) -> Self {
        Self {
            temperature: config.initial_temperature,
            cooling_rate: config.cooling_rate,
        }
    }

    /// Current temperature.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// One geometric cooling step.
    pub fn cool(&mut self) {
        self.temperature *= self.cooling_rate;
    }

    /// Probability of accepting `candidate` over `current`.
    pub fn acceptance_probability(&self, current: i64, candidate: i64) -> f64 {
        ((current - candidate) as f64 / self.temperature).exp()
    }

    /// Draws the acceptance decision for a candidate that does not improve.
    pub fn accepts<R: Rng>(&self, current: i64, candidate: i64, rng: &mut R) -> bool {
        rng.random::<f64>() < self.acceptance_probability(current, candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_cooling() {
        let mut annealing = Annealing::new(&AnnealingConfig::default());
        annealing.cool();
        annealing.cool();
        assert!((annealing.temperature() - 10_000.0 * 0.98 * 0.98).abs() < 1e-9);
    }

    #[test]
    fn test_probability() {
        let annealing = Annealing::new(&AnnealingConfig {
            initial_temperature: 10.0,
            cooling_rate: 0.5,
        });
        assert_eq!(annealing.acceptance_probability(100, 100), 1.0);
        let p = annealing.acceptance_probability(100, 110);
        assert!((p - (-1.0f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_cold_rejects_much_worse() {
        let mut annealing = Annealing::new(&AnnealingConfig {
            initial_temperature: 1.0,
            cooling_rate: 0.5,
        });
        for _ in 0..10 {
            annealing.cool();
        }
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            assert!(!annealing.accepts(0, 1000, &mut rng));
        }
    }
}
