pub mod callback;
pub mod problem;
pub mod solvers;

pub use callback::{EpochRecord, ProgressCallback, format_progress};
pub use problem::{FnObjective, Rastrigin, Sphere};
pub use solvers::{NoopCallback, Objective, OptimizationCallback, Particle, Swarm, SwarmReport};
