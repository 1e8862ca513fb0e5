use anyhow::Context;
use swarmgrad::{ProgressCallback, Rastrigin, Swarm, SwarmConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = match std::env::args().nth(1) {
        Some(path) => SwarmConfig::from_path(&path)
            .with_context(|| format!("Could not load swarm config from {}", path))?,
        None => SwarmConfig::default(),
    };

    tracing::info!(
        dim = config.dim,
        population = config.population_size,
        epochs = config.num_epochs,
        seed = ?config.seed,
        "Swarm configured"
    );

    let mut swarm = Swarm::new(Rastrigin::default(), config)?;
    let mut callback = ProgressCallback::new(true);
    let report = swarm.optimize_with(&mut callback);

    tracing::info!(
        best_error = report.best_error,
        cost_evals = report.cost_evals,
        grad_evals = report.grad_evals,
        "Run complete"
    );

    Ok(())
}
