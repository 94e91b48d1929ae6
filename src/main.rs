mod cli;
mod logger;

use anyhow::Context;
use clap::Parser;
use pathtracer::{config::SceneConfig, render, Scene};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    logger::init_logger(args.log_level.into());

    let mut config = SceneConfig::load(&args.scene)?;
    if let Some(width) = args.width {
        config.image.width = width;
    }
    if let Some(height) = args.height {
        config.image.height = height;
    }
    if let Some(samples) = args.samples {
        config.image.samples_per_pixel = samples;
    }

    let base_dir = args.scene.parent().unwrap_or_else(|| Path::new("."));
    let scene = Scene::from_config(&config, base_dir)?;

    let image = render::render(&scene, args.seed);
    image
        .save(&args.output)
        .with_context(|| format!("Failed to save image to {:?}", args.output))?;

    log::info!("Saved {:?}", args.output);
    Ok(())
}
