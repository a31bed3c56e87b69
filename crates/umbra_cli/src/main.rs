mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use umbra_core::{load_scene, Scene};
use umbra_renderer::{render, RenderConfig};

use crate::cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::from(args.log_level.clone()))
        .init();

    log::info!("Starting umbra");

    let mut scene = load_scene(&args.scene)
        .with_context(|| format!("Failed to load scene {}", args.scene))?;
    apply_overrides(&mut scene, &args);

    let config = RenderConfig {
        shadow_bias: args.shadow_bias,
        clamp_negative_light: args.clamp_light,
        threads: args.threads,
        partition: args.partition.into(),
        ..Default::default()
    };

    let image = render(&scene, &config).context("Render failed")?;
    image
        .save(&args.output, args.gamma)
        .with_context(|| format!("Failed to write {}", args.output))?;

    log::info!("Wrote {}", args.output);
    Ok(())
}

fn apply_overrides(scene: &mut Scene, args: &Args) {
    if let Some(width) = args.width {
        scene.width = width;
    }
    if let Some(height) = args.height {
        scene.height = height;
    }
    if let Some(fov) = args.fov {
        scene.fov = fov;
    }
}
