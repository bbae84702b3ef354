//! Selection engine configuration.

use serde::{Deserialize, Serialize};

use crate::domain::check_unit_interval;
use crate::error::{HyperHeuristicError, Result};

/// Configuration for [`ChoiceFunctionHH`](super::ChoiceFunctionHH).
///
/// # Examples
///
/// ```
/// use u_hyperheur::hyperheuristic::ChoiceFunctionConfig;
///
/// let config = ChoiceFunctionConfig::default().with_elite_size(3);
/// assert_eq!(config.gamma, 2000.0);
/// assert_eq!(config.elite_size, 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceFunctionConfig {
    /// Weight of the per-heuristic success counter.
    pub alpha: f64,
    /// Weight of the pairwise success counter.
    pub beta: f64,
    /// Weight of the staleness counter.
    pub gamma: f64,
    /// Number of elite solutions kept as crossover partners.
    ///
    /// Also the period, in crossover calls, of second-parent reinitialisation.
    pub elite_size: usize,
}

impl Default for ChoiceFunctionConfig {
    fn default() -> Self {
        Self {
            alpha: 0.8,
            beta: 15.0,
            gamma: 2000.0,
            elite_size: 5,
        }
    }
}

impl ChoiceFunctionConfig {
    /// Sets the three score weights.
    pub fn with_weights(mut self, alpha: f64, beta: f64, gamma: f64) -> Self {
        self.alpha = alpha;
        self.beta = beta;
        self.gamma = gamma;
        self
    }

    /// Sets the elite archive size.
    pub fn with_elite_size(mut self, size: usize) -> Self {
        self.elite_size = size;
        self
    }

    /// Checks for finite weights and a non-empty archive.
    pub fn validate(&self) -> Result<()> {
        if ![self.alpha, self.beta, self.gamma].iter().all(|w| w.is_finite()) {
            return Err(HyperHeuristicError::InvalidConfig(
                "choice function weights must be finite".into(),
            ));
        }
        if self.elite_size == 0 {
            return Err(HyperHeuristicError::InvalidConfig(
                "elite_size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Simulated annealing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnealingConfig {
    /// Starting temperature.
    pub initial_temperature: f64,
    /// Geometric cooling factor applied once per non-skipped iteration.
    pub cooling_rate: f64,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 10_000.0,
            cooling_rate: 0.98,
        }
    }
}

impl AnnealingConfig {
    /// Checks for a positive temperature and a cooling rate in (0, 1).
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err(HyperHeuristicError::InvalidConfig(format!(
                "initial_temperature must be positive, got {}",
                self.initial_temperature
            )));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(HyperHeuristicError::InvalidConfig(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        Ok(())
    }
}

/// Configuration for [`TabuHH`](super::TabuHH).
///
/// Annealing is off by default; only strictly improving candidates are
/// accepted then.
///
/// # Examples
///
/// ```
/// use u_hyperheur::hyperheuristic::{AnnealingConfig, TabuConfig};
///
/// let config = TabuConfig::default()
///     .with_tenure(4)
///     .with_annealing(AnnealingConfig::default());
/// assert_eq!(config.tenure, 4);
/// assert!(config.annealing.is_some());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabuConfig {
    /// Accepted applications a heuristic stays tabu for.
    pub tenure: usize,
    /// The list is cleared once it holds more entries than this.
    pub max_list_size: usize,
    /// Per-iteration probability of clearing the list.
    pub clear_probability: f64,
    /// Optional simulated annealing acceptance.
    pub annealing: Option<AnnealingConfig>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            tenure: 6,
            max_list_size: 9,
            clear_probability: 0.16,
            annealing: None,
        }
    }
}

impl TabuConfig {
    /// Sets the tabu tenure.
    pub fn with_tenure(mut self, tenure: usize) -> Self {
        self.tenure = tenure;
        self
    }

    /// Sets the size above which the list is cleared.
    pub fn with_max_list_size(mut self, size: usize) -> Self {
        self.max_list_size = size;
        self
    }

    /// Sets the per-iteration clearing probability.
    pub fn with_clear_probability(mut self, probability: f64) -> Self {
        self.clear_probability = probability;
        self
    }

    /// Enables simulated annealing acceptance.
    pub fn with_annealing(mut self, annealing: AnnealingConfig) -> Self {
        self.annealing = Some(annealing);
        self
    }

    /// Checks tenure, clearing probability, and annealing parameters.
    pub fn validate(&self) -> Result<()> {
        if self.tenure == 0 {
            return Err(HyperHeuristicError::InvalidConfig(
                "tenure must be at least 1".into(),
            ));
        }
        check_unit_interval("clear_probability", self.clear_probability)?;
        match &self.annealing {
            Some(annealing) => annealing.validate(),
            None => Ok(()),
        }
    }
}
