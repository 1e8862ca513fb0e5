use super::traits::Objective;
use rand::Rng;

/// One candidate solution and its personal-best memory
///
/// The personal best is only ever written by [`Particle::set_position`], which
/// keeps `best_error == cost(best_position)` and `best_error <= error`.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    position: Vec<f64>,
    velocity: Vec<f64>,
    best_position: Vec<f64>,
    error: f64,
    best_error: f64,
}

impl Particle {
    /// Draw position, then velocity, uniformly from `[min, max)` per coordinate
    pub fn new<O, R>(dim: usize, min: f64, max: f64, objective: &O, rng: &mut R) -> Self
    where
        O: Objective + ?Sized,
        R: Rng + ?Sized,
    {
        let position: Vec<f64> = (0..dim).map(|_| rng.gen_range(min..max)).collect();
        let velocity: Vec<f64> = (0..dim).map(|_| rng.gen_range(min..max)).collect();
        Self::from_parts(position, velocity, objective)
    }

    /// Build a particle at a known position
    pub fn from_parts<O>(position: Vec<f64>, velocity: Vec<f64>, objective: &O) -> Self
    where
        O: Objective + ?Sized,
    {
        let error = objective.cost(&position);
        Self {
            best_position: position.clone(),
            position,
            velocity,
            error,
            best_error: error,
        }
    }

    /// Move to `new_position`, refresh the cached error and the personal best
    ///
    /// Returns the freshly evaluated error.
    pub fn set_position<O>(&mut self, new_position: Vec<f64>, objective: &O) -> f64
    where
        O: Objective + ?Sized,
    {
        self.error = objective.cost(&new_position);
        self.position = new_position;

        // NaN never compares less, so a NaN error leaves the personal best frozen
        if self.error < self.best_error {
            self.best_error = self.error;
            self.best_position.clone_from(&self.position);
        }

        self.error
    }

    pub fn position(&self) -> &[f64] {
        &self.position
    }

    /// Initial random draw; stored but never read by the update rule
    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }

    pub fn best_position(&self) -> &[f64] {
        &self.best_position
    }

    pub fn error(&self) -> f64 {
        self.error
    }

    pub fn best_error(&self) -> f64 {
        self.best_error
    }

    pub fn dim(&self) -> usize {
        self.position.len()
    }
}
