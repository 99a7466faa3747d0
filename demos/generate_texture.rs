/**
 * Example: Generate a pencil noise texture
 *
 * This example demonstrates how to generate a pencil noise texture
 * with custom parameters and save it to a PNG file.
 *
 * Run with:
 *   cargo run --example generate_texture
 */

use pencil_noise::{save_pencil_noise_to_png, EdgeMode, PencilNoiseConfig, PencilNoiseGenerator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Generating pencil noise textures...\n");

    // Create configuration
    let config = PencilNoiseConfig {
        size: 256,
        num_layers: 5,
        seed: Some(42), // Use a seed for reproducibility
        verbose: true,
        ..Default::default()
    };

    // Create generator and generate texture
    let generator = PencilNoiseGenerator::new(config.clone())?;
    let result = generator.generate()?;
    save_pencil_noise_to_png(&result, "example-pencil-256.png")?;

    // Same seed with wrapped edges gives a tileable variant
    let tileable = PencilNoiseGenerator::new(PencilNoiseConfig {
        edge_mode: EdgeMode::Wrap,
        ..config
    })?;
    let tiled = tileable.generate()?;
    save_pencil_noise_to_png(&tiled, "example-pencil-256-tileable.png")?;

    println!("\nTextures saved to example-pencil-256.png and example-pencil-256-tileable.png");
    println!("Size: {}×{} pixels", result.size, result.size);
    println!("Data points: {}", result.data.len());

    Ok(())
}
