use serde::Serialize;

/// Summary of one `optimize` call
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SwarmReport {
    pub best_position: Vec<f64>,
    pub best_error: f64,
    pub epochs: usize,
    pub cost_evals: usize,
    pub grad_evals: usize,
    pub non_finite_evals: usize,
}

/// Objective being minimized - just a value and its gradient
///
/// Both functions must be deterministic. The swarm never checks that the
/// gradient has the same length as the position it was computed at.
pub trait Objective {
    /// Scalar fitness at `position` (lower is better)
    fn cost(&self, position: &[f64]) -> f64;

    /// Vector of partial derivatives at `position`
    fn gradient(&self, position: &[f64]) -> Vec<f64>;
}

impl<T: Objective + ?Sized> Objective for &T {
    fn cost(&self, position: &[f64]) -> f64 {
        (**self).cost(position)
    }

    fn gradient(&self, position: &[f64]) -> Vec<f64> {
        (**self).gradient(position)
    }
}

impl<T: Objective + ?Sized> Objective for Box<T> {
    fn cost(&self, position: &[f64]) -> f64 {
        (**self).cost(position)
    }

    fn gradient(&self, position: &[f64]) -> Vec<f64> {
        (**self).gradient(position)
    }
}

/// Callback interface for optimization progress
pub trait OptimizationCallback {
    /// Called once after every epoch with the current swarm best
    fn on_epoch(&mut self, epoch: usize, best_position: &[f64], best_error: f64);
}

/// Callback that ignores every observation
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCallback;

impl OptimizationCallback for NoopCallback {
    fn on_epoch(&mut self, _epoch: usize, _best_position: &[f64], _best_error: f64) {}
}
