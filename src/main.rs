use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use storefront::cli::Cli;
use storefront::config::{Config, ConfigStore};
use storefront::logging::init_tracing;
use storefront::preferences::{InMemoryPreferenceService, PreferenceService};
use storefront::shutdown::ShutdownHandle;
use storefront::ui;

/// Simulated round-trip of the account service.
const SERVICE_LATENCY: Duration = Duration::from_millis(300);

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config_path();

    let mut config = Config::load_from(&config_path)?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    if cli.check_config {
        print!("{}", config.to_toml().context("Failed to render configuration")?);
        return Ok(());
    }

    let log_path = init_tracing(&config.logging, cli.log_file.as_deref())?;
    tracing::info!(
        config = %config_path.display(),
        log = %log_path.display(),
        "Starting storefront"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("storefront-rt")
        .build()
        .context("Failed to start async runtime")?;

    let service: Arc<dyn PreferenceService> =
        Arc::new(InMemoryPreferenceService::seeded().with_latency(SERVICE_LATENCY));

    ui::runtime::run(
        ConfigStore::new(config, config_path),
        runtime.handle().clone(),
        service,
        ShutdownHandle::new(),
    )?;

    tracing::info!("Storefront exited");
    Ok(())
}
