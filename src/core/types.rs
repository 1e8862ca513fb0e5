use super::error::{Result, SwarmError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ===== CANONICAL CONSTANTS =====

/// Weight of the gradient term
pub const INERTIA: f64 = 0.729;
/// Weight of the pull toward the particle's own best position
pub const COGNITIVE: f64 = 1.49445;
/// Weight of the pull toward the swarm's best position
pub const SOCIAL: f64 = 1.49445;
/// Step size applied to the combined displacement
pub const LEARNING_RATE: f64 = 0.01;

/// Conventional Rastrigin search range
pub const DOMAIN_MIN: f64 = -500.0;
pub const DOMAIN_MAX: f64 = 500.0;

pub const DEFAULT_DIM: usize = 2;
pub const DEFAULT_POPULATION: usize = 30;
pub const DEFAULT_EPOCHS: usize = 50;

// ===== UPDATE RULE =====

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coefficients {
    pub inertia: f64,
    pub cognitive: f64,
    pub social: f64,
    pub learning_rate: f64,
}

impl Default for Coefficients {
    fn default() -> Self {
        Self {
            inertia: INERTIA,
            cognitive: COGNITIVE,
            social: SOCIAL,
            learning_rate: LEARNING_RATE,
        }
    }
}

impl Coefficients {
    /// Hybrid gradient/attraction step:
    /// `x - lr * (w*g + c1*(pbest - x) + c2*(sbest - x))`
    ///
    /// The particle velocity plays no part here.
    pub fn step(
        &self,
        position: &[f64],
        gradient: &[f64],
        personal_best: &[f64],
        swarm_best: &[f64],
    ) -> Vec<f64> {
        position
            .iter()
            .zip(gradient)
            .zip(personal_best)
            .zip(swarm_best)
            .map(|(((&x, &g), &pbest), &sbest)| {
                let delta = self.inertia * g
                    + self.cognitive * (pbest - x)
                    + self.social * (sbest - x);
                x - self.learning_rate * delta
            })
            .collect()
    }

    fn is_finite(&self) -> bool {
        [self.inertia, self.cognitive, self.social, self.learning_rate]
            .iter()
            .all(|c| c.is_finite())
    }
}

// ===== SWARM CONFIGURATION =====

/// Swarm construction parameters
///
/// Defaults reproduce the canonical run: 2 dimensions, 30 particles,
/// 50 epochs over the fixed domain [-500, 500). Overriding the bounds or the
/// coefficients departs from that fixed design and is meant for
/// experimentation with other objectives only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwarmConfig {
    pub dim: usize,
    pub population_size: usize,
    pub num_epochs: usize,
    pub lower_bound: f64,
    pub upper_bound: f64,
    /// Fixed seed for reproducible runs, `None` draws from entropy
    pub seed: Option<u64>,
    pub coefficients: Coefficients,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            dim: DEFAULT_DIM,
            population_size: DEFAULT_POPULATION,
            num_epochs: DEFAULT_EPOCHS,
            lower_bound: DOMAIN_MIN,
            upper_bound: DOMAIN_MAX,
            seed: None,
            coefficients: Coefficients::default(),
        }
    }
}

impl SwarmConfig {
    pub fn new(dim: usize, population_size: usize, num_epochs: usize) -> Self {
        Self {
            dim,
            population_size,
            num_epochs,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Configure the initialization domain (default: [-500, 500))
    ///
    /// Non-default bounds depart from the canonical fixed domain.
    pub fn with_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.lower_bound = lower;
        self.upper_bound = upper;
        self
    }

    pub fn with_coefficients(mut self, coefficients: Coefficients) -> Self {
        self.coefficients = coefficients;
        self
    }

    /// Parse a JSON document; absent fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SwarmError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        super::validation::validate_config(self)
    }

    pub(crate) fn coefficients_are_finite(&self) -> bool {
        self.coefficients.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_canonical_run() {
        let config = SwarmConfig::default();
        assert_eq!(config.dim, 2);
        assert_eq!(config.population_size, 30);
        assert_eq!(config.num_epochs, 50);
        assert_eq!(config.lower_bound, -500.0);
        assert_eq!(config.upper_bound, 500.0);
        assert_eq!(config.coefficients.inertia, 0.729);
        assert_eq!(config.coefficients.cognitive, 1.49445);
        assert_eq!(config.coefficients.social, 1.49445);
        assert_eq!(config.coefficients.learning_rate, 0.01);
        assert!(config.seed.is_none());
    }

    #[test]
    fn step_without_attraction_is_scaled_gradient_descent() {
        let coefficients = Coefficients::default();
        let x = [3.0, 4.0];
        let next = coefficients.step(&x, &[6.0, 8.0], &x, &x);

        assert!((next[0] - (3.0 - 0.01 * 0.729 * 6.0)).abs() < 1e-12);
        assert!((next[1] - (4.0 - 0.01 * 0.729 * 8.0)).abs() < 1e-12);
    }

    #[test]
    fn step_moves_toward_swarm_best() {
        let coefficients = Coefficients::default();
        let next = coefficients.step(&[0.0], &[0.0], &[0.0], &[10.0]);

        // -lr * c2 * (10 - 0)
        assert!((next[0] + 0.01 * 1.49445 * 10.0).abs() < 1e-12);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let json = r#"{ "dim": 5, "seed": 42, "coefficients": { "learning_rate": 0.1 } }"#;
        let config = SwarmConfig::from_json_str(json).unwrap();

        assert_eq!(config.dim, 5);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.population_size, DEFAULT_POPULATION);
        assert_eq!(config.coefficients.learning_rate, 0.1);
        assert_eq!(config.coefficients.inertia, INERTIA);
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = SwarmConfig::from_json_str("{ dim: ").unwrap_err();
        assert!(matches!(err, SwarmError::Json(_)));
    }

    #[test]
    fn missing_file_is_reported_with_path() {
        let err = SwarmConfig::from_path("/nonexistent/swarm.json").unwrap_err();
        match err {
            SwarmError::Io { path, .. } => assert!(path.ends_with("swarm.json")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn config_roundtrips_through_json() {
        let config = SwarmConfig::new(4, 8, 3).with_seed(9).with_bounds(-1.0, 1.0);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(SwarmConfig::from_json_str(&json).unwrap(), config);
    }
}
