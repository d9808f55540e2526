//! Headless planet soccer: runs one AI-versus-AI match and prints a JSON
//! summary to stdout.
mod config;

use anyhow::{Context, Result};
use config::CliConfig;
use runtime::Simulation;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let config = CliConfig::from_env();
    let simulation = config.resolve()?;
    tracing::info!(
        seed = simulation.seed,
        max_frames = simulation.max_frames,
        one = %simulation.profiles[0].personality,
        two = %simulation.profiles[1].personality,
        "starting match"
    );

    let summary = Simulation::new(simulation)
        .context("failed to set up simulation")?
        .run();

    let json = if config.pretty {
        serde_json::to_string_pretty(&summary)?
    } else {
        serde_json::to_string(&summary)?
    };
    println!("{json}");
    Ok(())
}

/// Logs to stderr so stdout stays machine-readable.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
