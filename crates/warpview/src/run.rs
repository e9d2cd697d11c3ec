use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use renderer::RendererConfig;
use warpcore::EngineTuning;

use crate::cli::Cli;
use crate::settings;

pub fn initialise_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

pub fn run(cli: Cli) -> Result<()> {
    let tuning = match cli.tuning.as_deref() {
        Some(path) => {
            let tuning = settings::load_tuning(path)
                .with_context(|| format!("failed to load tuning from {}", path.display()))?;
            info!(path = %path.display(), "tuning overrides loaded");
            tuning
        }
        None => EngineTuning::default(),
    };

    let defaults = RendererConfig::default();
    let config = RendererConfig {
        surface_size: cli.window_size.unwrap_or(defaults.surface_size),
        image: cli.image,
        fps_cap: cli.fps_cap,
        vsync: !cli.no_vsync,
        tuning,
    };

    renderer::run(config)
}
