/**
 * Pencil Noise Texture Generator
 *
 * Synthesises a grayscale texture that resembles the grain of pencil strokes
 * on paper by compositing several layers of smoothed white noise with
 * directional sine gratings.
 *
 * ALGORITHM OVERVIEW
 * ==================
 *
 * For every layer i (starting at 0):
 * 1. Draw size × size uniform samples in [0, 1)
 * 2. Gaussian blur them with sigma = base_sigma + i × sigma_step
 * 3. Draw an angle in [0, π) and render a sine grating at that angle
 * 4. Blend: noise × noise_weight + stripes × stripe_weight
 * 5. Accumulate the blend with weight 1 / (i + 1)
 *
 * The first layer dominates; later layers are blurrier and fainter, which
 * gives the coarse-to-fine grain of graphite.
 *
 * POST-PROCESSING
 * ===============
 * The accumulator is divided by its maximum (the brightest sample becomes
 * exactly 1.0, the minimum is not stretched), raised to the gamma power to
 * darken midtones, then scaled to 0-255 and truncated to 8 bits.
 */

use crate::blur::{EdgeMode, GaussianBlur};
use crate::stripes::StripePattern;
use image::{GrayImage, ImageBuffer, Luma};
use indicatif::{ProgressBar, ProgressStyle};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "pencil_noise.png";

/// Configuration for pencil noise generation
#[derive(Debug, Clone)]
pub struct PencilNoiseConfig {
    /// Side length of the square texture in pixels
    pub size: usize,
    /// Number of noise/stripe layers to blend
    pub num_layers: usize,
    /// Blur sigma of the first layer
    pub base_sigma: f32,
    /// Sigma increase per layer
    pub sigma_step: f32,
    /// Blend factor of the blurred noise
    pub noise_weight: f32,
    /// Blend factor of the stripe grating
    pub stripe_weight: f32,
    /// End of the coordinate mesh the gratings are evaluated over
    pub stripe_extent: f32,
    /// Contrast exponent applied after normalisation
    pub gamma: f32,
    /// Blur edge handling (`Wrap` makes the texture tileable)
    pub edge_mode: EdgeMode,
    /// Optional random seed for reproducible results
    pub seed: Option<u64>,
    /// Show progress indicators
    pub verbose: bool,
}

impl Default for PencilNoiseConfig {
    fn default() -> Self {
        Self {
            size: 512,
            num_layers: 5,
            base_sigma: 1.0,
            sigma_step: 0.5,
            noise_weight: 0.7,
            stripe_weight: 0.3,
            stripe_extent: 20.0,
            gamma: 1.2,
            edge_mode: EdgeMode::Reflect,
            seed: None,
            verbose: false,
        }
    }
}

/// Result of pencil noise generation
#[derive(Debug, Clone)]
pub struct PencilNoiseResult {
    /// Row-major grayscale pixels (0-255)
    pub data: Vec<u8>,
    /// Side length of the texture
    pub size: usize,
}

impl PencilNoiseResult {
    /// Pixel at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.size + x]
    }

    /// Convert into a single-channel image
    pub fn to_image(&self) -> GrayImage {
        ImageBuffer::from_fn(self.size as u32, self.size as u32, |x, y| {
            Luma([self.get(x as usize, y as usize)])
        })
    }
}

/// Error types for pencil noise generation
#[derive(Error, Debug)]
pub enum PencilNoiseError {
    /// Texture size is zero
    #[error("Size must be a positive integer")]
    InvalidDimension,

    /// Layer count is zero
    #[error("Number of layers must be a positive integer")]
    InvalidLayerCount,

    /// Blur sigma parameters out of range
    #[error("Base sigma must be positive, sigma step non-negative, and the widest layer sigma at most 1024")]
    InvalidSigma,

    /// Blend weights negative, non-finite or both zero
    #[error("Blend weights must be non-negative and not both zero")]
    InvalidWeights,

    /// Gamma is zero, negative or non-finite
    #[error("Gamma must be positive")]
    InvalidGamma,

    /// Stripe extent negative or non-finite
    #[error("Stripe extent must be finite and non-negative")]
    InvalidExtent,

    /// Every accumulated sample is zero, so there is nothing to normalise by
    #[error("Accumulated texture has no positive maximum")]
    DegenerateAccumulator,

    /// Failed to encode or write the image
    #[error("Failed to save image: {0}")]
    ImageSaveError(#[from] image::ImageError),
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, PencilNoiseError>;

/**
 * Main type for generating pencil noise textures
 */
pub struct PencilNoiseGenerator {
    config: PencilNoiseConfig,
}

impl PencilNoiseGenerator {
    /// Create a new generator with the given configuration
    pub fn new(config: PencilNoiseConfig) -> Result<Self> {
        if config.size == 0 {
            return Err(PencilNoiseError::InvalidDimension);
        }
        if config.num_layers == 0 {
            return Err(PencilNoiseError::InvalidLayerCount);
        }
        if !(config.base_sigma > 0.0 && config.base_sigma.is_finite())
            || !(config.sigma_step >= 0.0 && config.sigma_step.is_finite())
        {
            return Err(PencilNoiseError::InvalidSigma);
        }

        // Widest blur is on the last layer
        let widest_sigma =
            config.base_sigma + (config.num_layers - 1) as f32 * config.sigma_step;
        if !(widest_sigma.is_finite() && widest_sigma <= GaussianBlur::MAX_SIGMA) {
            return Err(PencilNoiseError::InvalidSigma);
        }

        let weights = [config.noise_weight, config.stripe_weight];
        if weights.iter().any(|w| !(*w >= 0.0 && w.is_finite()))
            || weights.iter().all(|w| *w == 0.0)
        {
            return Err(PencilNoiseError::InvalidWeights);
        }
        if !(config.gamma > 0.0 && config.gamma.is_finite()) {
            return Err(PencilNoiseError::InvalidGamma);
        }
        if !(config.stripe_extent >= 0.0 && config.stripe_extent.is_finite()) {
            return Err(PencilNoiseError::InvalidExtent);
        }

        Ok(Self { config })
    }

    /// Configuration this generator was built with
    pub fn config(&self) -> &PencilNoiseConfig {
        &self.config
    }

    /// Blur sigma used for layer `index`
    pub fn layer_sigma(&self, index: usize) -> f32 {
        self.config.base_sigma + index as f32 * self.config.sigma_step
    }

    /// Accumulation weight of layer `index` (harmonic decay)
    pub fn layer_weight(index: usize) -> f32 {
        1.0 / (index as f32 + 1.0)
    }

    fn create_progress(&self) -> Option<ProgressBar> {
        if !self.config.verbose {
            return None;
        }

        let pb = ProgressBar::new(self.config.num_layers as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>2}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("##-"));
        }
        Some(pb)
    }

    /**
     * Build one layer: blurred noise blended with a random grating
     *
     * Random draws happen in a fixed order (the noise grid row-major, then
     * the grating angle) so a seeded source reproduces the layer exactly.
     */
    fn render_layer<R: Rng + ?Sized>(&self, rng: &mut R, index: usize) -> Vec<f32> {
        let size = self.config.size;

        let noise: Vec<f32> = (0..size * size).map(|_| rng.gen::<f32>()).collect();
        let blur = GaussianBlur::new(size, self.layer_sigma(index), self.config.edge_mode);
        let noise = blur.apply(&noise);

        let pattern = StripePattern::random(rng, self.config.stripe_extent);
        let stripes = pattern.render(size);

        debug!(
            layer = index,
            sigma = blur.sigma(),
            fft = blur.uses_fft(),
            angle = pattern.angle,
            "rendered layer"
        );

        noise
            .iter()
            .zip(stripes.iter())
            .map(|(n, s)| n * self.config.noise_weight + s * self.config.stripe_weight)
            .collect()
    }

    /**
     * Run the layer loop, returning the raw accumulator
     */
    fn accumulate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f32> {
        let size = self.config.size;
        let mut accumulator = vec![0.0f32; size * size];
        let progress = self.create_progress();

        for i in 0..self.config.num_layers {
            if let Some(pb) = &progress {
                pb.set_message(format!("Layer {} (sigma {:.1})", i + 1, self.layer_sigma(i)));
            }

            let layer = self.render_layer(rng, i);
            let weight = Self::layer_weight(i);
            for (acc, val) in accumulator.iter_mut().zip(layer.iter()) {
                *acc += val * weight;
            }

            if let Some(pb) = &progress {
                pb.inc(1);
            }
        }

        if let Some(pb) = &progress {
            pb.finish_with_message("Layers complete");
        }

        accumulator
    }

    /// Generate a texture drawing randomness from `rng`
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<PencilNoiseResult> {
        let start_time = std::time::Instant::now();

        if self.config.verbose {
            println!(
                "Generating {}×{} pencil noise texture with {} layers...",
                self.config.size, self.config.size, self.config.num_layers
            );
        }

        let accumulator = self.accumulate(rng);
        let data = finalize_accumulator(accumulator, self.config.gamma)?;

        if self.config.verbose {
            println!(
                "Pencil noise generation complete in {:.2}s",
                start_time.elapsed().as_secs_f32()
            );
        }

        Ok(PencilNoiseResult {
            data,
            size: self.config.size,
        })
    }

    /// Generate a texture using the configured seed, or OS entropy if none is set
    pub fn generate(&self) -> Result<PencilNoiseResult> {
        let mut rng = match self.config.seed {
            Some(seed) => Pcg32::seed_from_u64(seed),
            None => Pcg32::from_entropy(),
        };
        self.generate_with_rng(&mut rng)
    }
}

/**
 * Normalise, gamma-correct and quantise an accumulator
 *
 * Divides by the maximum, raises to `gamma`, scales by 255 and truncates.
 * Fails with `DegenerateAccumulator` instead of dividing by a zero maximum.
 */
pub(crate) fn finalize_accumulator(mut accumulator: Vec<f32>, gamma: f32) -> Result<Vec<u8>> {
    let max = accumulator.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    if !(max > 0.0 && max.is_finite()) {
        return Err(PencilNoiseError::DegenerateAccumulator);
    }

    // FFT rounding can leave samples a hair below zero
    for val in accumulator.iter_mut() {
        *val = (*val / max).max(0.0).powf(gamma);
    }

    Ok(accumulator.iter().map(|&v| (v * 255.0) as u8).collect())
}

/**
 * Convenience function to generate a pencil noise texture with default tuning
 */
pub fn generate_pencil_noise(size: usize, num_layers: usize) -> Result<PencilNoiseResult> {
    let config = PencilNoiseConfig {
        size,
        num_layers,
        ..Default::default()
    };
    let generator = PencilNoiseGenerator::new(config)?;
    generator.generate()
}

/**
 * Save pencil noise texture to an image file (format from the extension),
 * overwriting any existing file
 */
pub fn save_pencil_noise_to_png<P: AsRef<Path>>(result: &PencilNoiseResult, filename: P) -> Result<()> {
    result.to_image().save(&filename)?;
    info!(path = %filename.as_ref().display(), size = result.size, "saved pencil noise texture");

    Ok(())
}

/**
 * Generate with default tuning and write the texture to `filename`
 */
pub fn create_pencil_noise<P: AsRef<Path>>(
    size: usize,
    num_layers: usize,
    filename: P,
) -> Result<PencilNoiseResult> {
    let result = generate_pencil_noise(size, num_layers)?;
    save_pencil_noise_to_png(&result, filename)?;
    Ok(result)
}
