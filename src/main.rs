/**
 * Pencil Noise CLI - generate pencil-stroke noise textures from the command line
 */

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use pencil_noise::{
    save_pencil_noise_to_png, EdgeMode, PencilNoiseConfig, PencilNoiseGenerator, DEFAULT_OUTPUT,
};

/// Pencil-stroke noise texture generator
#[derive(Parser)]
#[command(name = "pencil-noise")]
#[command(version)]
#[command(about = "Generate layered pencil-stroke noise textures", long_about = None)]
struct Cli {
    /// Output file path (overwritten if it exists)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Texture size (width and height)
    #[arg(short, long, default_value = "512")]
    size: usize,

    /// Number of noise/stripe layers to blend
    #[arg(short, long, default_value = "5")]
    layers: usize,

    /// Contrast exponent (>1 darkens midtones)
    #[arg(short, long, default_value = "1.2")]
    gamma: f32,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Wrap blur edges so the texture tiles seamlessly
    #[arg(short, long)]
    tileable: bool,

    /// Show detailed generation progress
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Validate inputs
    if cli.size == 0 || cli.size > 8192 {
        anyhow::bail!("Size must be between 1 and 8192");
    }
    if cli.layers == 0 || cli.layers > 32 {
        anyhow::bail!("Layers must be between 1 and 32");
    }
    if cli.gamma <= 0.0 {
        anyhow::bail!("Gamma must be positive");
    }

    if !cli.verbose {
        println!("Generating {}×{} pencil noise texture", cli.size, cli.size);
        println!("Layers: {}", cli.layers);
        if let Some(s) = cli.seed {
            println!("Seed: {}", s);
        }
        println!("Output: {}", cli.output.display());
        println!();
    }

    // Create output directory if it doesn't exist
    if let Some(parent) = cli.output.parent() {
        std::fs::create_dir_all(parent).context("Failed to create output directory")?;
    }

    let config = PencilNoiseConfig {
        size: cli.size,
        num_layers: cli.layers,
        gamma: cli.gamma,
        edge_mode: if cli.tileable {
            EdgeMode::Wrap
        } else {
            EdgeMode::Reflect
        },
        seed: cli.seed,
        verbose: cli.verbose,
        ..Default::default()
    };

    let generator = PencilNoiseGenerator::new(config).context("Failed to create generator")?;
    let result = generator
        .generate()
        .context("Failed to generate pencil noise")?;

    save_pencil_noise_to_png(&result, &cli.output)
        .context("Failed to save pencil noise texture")?;

    println!();
    println!("Done!");

    Ok(())
}
