//! Particle swarm search hybridized with a gradient step.
//!
//! Each epoch every particle moves by
//! `x - lr * (w*grad(x) + c1*(pbest - x) + c2*(sbest - x))`, refreshes its
//! personal best, and competes for the swarm best.

pub mod core;
pub mod optimization;

pub use crate::core::{Coefficients, Result, SwarmConfig, SwarmError, validate_config};
pub use optimization::*;
