mod particle;
mod swarm;
pub mod traits;

pub use particle::Particle;
pub use swarm::Swarm;
pub use traits::{NoopCallback, Objective, OptimizationCallback, SwarmReport};
