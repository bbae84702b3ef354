//! Domain configuration.

use serde::{Deserialize, Serialize};

use crate::constructive::InitialisationMode;
use crate::error::{HyperHeuristicError, Result};
use crate::heuristics::Controls;

/// Configuration for a [`TourDomain`](super::TourDomain).
///
/// # Examples
///
/// ```
/// use u_hyperheur::constructive::InitialisationMode;
/// use u_hyperheur::domain::DomainConfig;
///
/// let config = DomainConfig::default()
///     .with_depth_of_search(0.9)
///     .with_init_mode(InitialisationMode::Random)
///     .with_seed(42);
/// assert_eq!(config.seed, Some(42));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainConfig {
    /// Depth of search in [0, 1].
    pub depth_of_search: f64,
    /// Intensity of mutation in [0, 1].
    pub intensity_of_mutation: f64,
    /// How fresh solutions are built.
    pub init_mode: InitialisationMode,
    /// Random seed (None for entropy).
    pub seed: Option<u64>,
}

impl Default for DomainConfig {
    fn default() -> Self {
        let controls = Controls::default();
        Self {
            depth_of_search: controls.depth_of_search,
            intensity_of_mutation: controls.intensity_of_mutation,
            init_mode: InitialisationMode::default(),
            seed: None,
        }
    }
}

impl DomainConfig {
    /// Sets the depth of search.
    pub fn with_depth_of_search(mut self, depth: f64) -> Self {
        self.depth_of_search = depth;
        self
    }

    /// Sets the intensity of mutation.
    pub fn with_intensity_of_mutation(mut self, intensity: f64) -> Self {
        self.intensity_of_mutation = intensity;
        self
    }

    /// Sets the initialisation mode.
    pub fn with_init_mode(mut self, mode: InitialisationMode) -> Self {
        self.init_mode = mode;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The control pair handed to operators.
    pub fn controls(&self) -> Controls {
        Controls::new(self.depth_of_search, self.intensity_of_mutation)
    }

    /// Checks that both controls lie in [0, 1].
    pub fn validate(&self) -> Result<()> {
        check_unit_interval("depth_of_search", self.depth_of_search)?;
        check_unit_interval("intensity_of_mutation", self.intensity_of_mutation)
    }
}

/// Rejects values outside [0, 1], including NaN.
pub(crate) fn check_unit_interval(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(HyperHeuristicError::InvalidConfig(format!(
            "{name} must be in [0, 1], got {value}"
        )))
    }
}
