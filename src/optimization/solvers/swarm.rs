use super::particle::Particle;
use super::traits::{NoopCallback, Objective, OptimizationCallback, SwarmReport};
use crate::core::{Coefficients, Result, SwarmConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

/// Gradient-assisted particle swarm over a fully connected topology
///
/// Every particle is pulled toward one shared swarm best. Particles are
/// updated in place in index order, so an improvement found by particle `i`
/// already steers particle `i + 1` within the same epoch.
pub struct Swarm<O: Objective> {
    objective: O,
    particles: Vec<Particle>,
    best_position: Vec<f64>,
    best_error: f64,
    num_epochs: usize,
    coefficients: Coefficients,
}

impl<O: Objective> Swarm<O> {
    /// Build a swarm from a validated configuration
    pub fn new(objective: O, config: SwarmConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self::with_rng(objective, &config, &mut rng))
    }

    /// Build a swarm drawing every random value from `rng`
    ///
    /// `config` must already have passed validation.
    pub(crate) fn with_rng<R: Rng + ?Sized>(
        objective: O,
        config: &SwarmConfig,
        rng: &mut R,
    ) -> Self {
        let (min, max) = (config.lower_bound, config.upper_bound);

        let particles: Vec<Particle> = (0..config.population_size)
            .map(|_| Particle::new(config.dim, min, max, &objective, rng))
            .collect();

        // Placeholder competitor, deliberately unrelated to any particle
        let best_position: Vec<f64> = (0..config.dim)
            .map(|_| rng.gen_range(min..max))
            .collect();

        Self::from_parts(
            objective,
            particles,
            best_position,
            config.num_epochs,
            config.coefficients,
        )
    }

    /// Build a swarm from explicit particles and swarm-best seed
    ///
    /// The swarm-best error starts at +inf, so the seed position is replaced
    /// by the first particle update that yields a finite error.
    pub fn from_parts(
        objective: O,
        particles: Vec<Particle>,
        best_position: Vec<f64>,
        num_epochs: usize,
        coefficients: Coefficients,
    ) -> Self {
        Self {
            objective,
            particles,
            best_position,
            best_error: f64::INFINITY,
            num_epochs,
            coefficients,
        }
    }

    /// Run the epoch budget without progress reporting
    pub fn optimize(&mut self) -> SwarmReport {
        self.optimize_with(&mut NoopCallback)
    }

    /// Run the epoch budget, reporting the swarm best after every epoch
    ///
    /// Calling this again continues from the current state.
    pub fn optimize_with(&mut self, callback: &mut dyn OptimizationCallback) -> SwarmReport {
        info!(
            particles = self.particles.len(),
            epochs = self.num_epochs,
            "Starting swarm optimization"
        );

        let mut cost_evals = 0;
        let mut grad_evals = 0;
        let mut non_finite_evals = 0;

        for epoch in 0..self.num_epochs {
            let mut non_finite_this_epoch = 0;

            for idx in 0..self.particles.len() {
                let particle = &mut self.particles[idx];

                let gradient = self.objective.gradient(particle.position());
                grad_evals += 1;

                let new_position = self.coefficients.step(
                    particle.position(),
                    &gradient,
                    particle.best_position(),
                    &self.best_position,
                );

                let particle_error = particle.set_position(new_position, &self.objective);
                cost_evals += 1;
                if !particle_error.is_finite() {
                    non_finite_this_epoch += 1;
                }

                // Evaluated separately from the particle's cached error
                let swarm_candidate = self.objective.cost(particle.position());
                cost_evals += 1;

                if swarm_candidate < self.best_error {
                    self.best_error = swarm_candidate;
                    self.best_position = particle.position().to_vec();
                }
            }

            if non_finite_this_epoch > 0 {
                warn!(
                    epoch,
                    count = non_finite_this_epoch,
                    "Non-finite objective values encountered"
                );
                non_finite_evals += non_finite_this_epoch;
            }

            debug!(epoch, best_error = self.best_error, "Epoch complete");
            callback.on_epoch(epoch, &self.best_position, self.best_error);
        }

        info!(best_error = self.best_error, "Swarm optimization finished");

        SwarmReport {
            best_position: self.best_position.clone(),
            best_error: self.best_error,
            epochs: self.num_epochs,
            cost_evals,
            grad_evals,
            non_finite_evals,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn best_position(&self) -> &[f64] {
        &self.best_position
    }

    pub fn best_error(&self) -> f64 {
        self.best_error
    }

    pub fn num_epochs(&self) -> usize {
        self.num_epochs
    }

    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    pub fn objective(&self) -> &O {
        &self.objective
    }
}
