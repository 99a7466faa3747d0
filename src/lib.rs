//! Pencil Noise Library
//!
//! Procedural grayscale textures that imitate the grain of pencil strokes,
//! built by layering Gaussian-blurred white noise with randomly oriented
//! sine gratings.
//!
//! # Features
//!
//! - Multi-layer noise synthesis with harmonically decaying layer weights
//! - Separable Gaussian blur with reflect or wrap (tileable) edges
//! - FFT-accelerated wrap blur for power-of-two sizes
//! - Injectable random source for reproducible or mocked generation
//! - Grayscale PNG output
//!
//! # Quick Start
//!
//! ```no_run
//! use pencil_noise::{PencilNoiseConfig, PencilNoiseGenerator, save_pencil_noise_to_png};
//!
//! let config = PencilNoiseConfig {
//!     size: 256,
//!     num_layers: 5,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let generator = PencilNoiseGenerator::new(config).unwrap();
//! let result = generator.generate().unwrap();
//! save_pencil_noise_to_png(&result, "pencil_noise.png").unwrap();
//! ```
//!
//! Or in one call, with the default tuning:
//!
//! ```no_run
//! pencil_noise::create_pencil_noise(512, 5, "pencil_noise.png").unwrap();
//! ```
//!
//! # Bringing your own randomness
//!
//! ```
//! use pencil_noise::{PencilNoiseConfig, PencilNoiseGenerator};
//! use rand::SeedableRng;
//!
//! let generator = PencilNoiseGenerator::new(PencilNoiseConfig {
//!     size: 16,
//!     num_layers: 2,
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! let mut rng = rand_pcg::Pcg32::seed_from_u64(7);
//! let result = generator.generate_with_rng(&mut rng).unwrap();
//! assert_eq!(result.data.len(), 16 * 16);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

/// Gaussian blur module
pub mod blur;
/// Pencil noise generation module
pub mod generator;
/// Stripe grating module
pub mod stripes;

// Re-export main types for convenience
pub use blur::{EdgeMode, GaussianBlur};
pub use generator::{
    create_pencil_noise, generate_pencil_noise, save_pencil_noise_to_png, PencilNoiseConfig,
    PencilNoiseError, PencilNoiseGenerator, PencilNoiseResult, Result, DEFAULT_OUTPUT,
};
pub use stripes::{linspace, StripePattern};
