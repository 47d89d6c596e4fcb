use anyhow::Result;
use clap::Parser;
use log::Level;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod render;
mod settings;
mod transport;

#[cfg(test)]
mod test_utils;

use cli::Cli;

/// Tracing to stderr; `RUST_LOG` wins over the configured level. Records
/// from the shared crates arrive through the `log` bridge.
fn init_tracing(level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Main entry point for the Prophet Labs terminal console.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let loaded = settings::load_settings(&cli.overrides())?;
    init_tracing(loaded.settings.log_level);
    debug!("Configuration sources: {}", loaded.sources());

    let settings = loaded.settings;
    info!("Prophet console starting ({})", settings.environment_label());
    info!("Settings: {:?}", settings);

    let mut stdout = std::io::stdout().lock();
    cli.run(settings, &mut stdout).await
}
