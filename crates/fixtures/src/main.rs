//! Fixture generator for the weekly metrics dashboard.
//!
//! Writes a JSON array of raw weekly records (products × shops × weeks)
//! to the path configured in `config.toml`, or to the first CLI argument.

mod config;
mod generator;

use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Создаем директорию для логов
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("fixtures.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    let config = config::load_config()?;
    let gen_config = &config.generator;

    let cli_output = std::env::args().nth(1);
    let output = config::output_path(gen_config, cli_output.as_deref());

    let mut rng = match gen_config.seed {
        Some(seed) => {
            tracing::info!("Using fixed seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let records = generator::generate(gen_config, &mut rng);
    tracing::info!(
        "Generated {} records ({} products × {} shops × {} weeks)",
        records.len(),
        gen_config.products,
        gen_config.shops.len(),
        gen_config.weeks
    );

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(&records)?;
    std::fs::write(&output, json)
        .with_context(|| format!("Failed to write fixtures to {}", output.display()))?;

    tracing::info!("Fixtures written to {}", output.display());
    Ok(())
}
