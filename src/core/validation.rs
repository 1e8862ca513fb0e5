use super::error::{Result, SwarmError};
use super::types::SwarmConfig;

/// Validate a swarm configuration
///
/// Empty populations and zero epoch budgets are accepted; the update loop
/// simply never runs.
pub fn validate_config(config: &SwarmConfig) -> Result<()> {
    if config.dim == 0 {
        return Err(SwarmError::InvalidConfig(
            "dimensionality must be at least 1".into(),
        ));
    }

    if !config.lower_bound.is_finite() || !config.upper_bound.is_finite() {
        return Err(SwarmError::InvalidConfig(format!(
            "bounds must be finite, got [{}, {})",
            config.lower_bound, config.upper_bound
        )));
    }

    if config.lower_bound >= config.upper_bound {
        return Err(SwarmError::InvalidConfig(format!(
            "lower bound {} must be below upper bound {}",
            config.lower_bound, config.upper_bound
        )));
    }

    if !(config.upper_bound - config.lower_bound).is_finite() {
        return Err(SwarmError::InvalidConfig(format!(
            "bound span {} - {} overflows",
            config.upper_bound, config.lower_bound
        )));
    }

    if !config.coefficients_are_finite() {
        return Err(SwarmError::InvalidConfig(format!(
            "update coefficients must be finite, got {:?}",
            config.coefficients
        )));
    }

    Ok(())
}
