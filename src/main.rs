use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use slidedeck::config::{Args, Config};
use slidedeck::{library, viewer};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::try_from(Args::parse()).context("invalid arguments")?;

    let slides = library::load_slides(&config.image_dir, config.shuffle)
        .with_context(|| format!("cannot load slides from {}", config.image_dir.display()))?;

    viewer::run(config, slides)
}
