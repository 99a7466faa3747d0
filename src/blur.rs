/**
 * Separable Gaussian Blur
 *
 * Smooths a square grid of samples with an isotropic Gaussian. The kernel is
 * truncated at four standard deviations and normalised to unit sum, then
 * applied as a horizontal pass followed by a vertical pass.
 *
 * EDGE HANDLING
 * =============
 * - Reflect: samples beyond the border mirror the grid (d c b a | a b c d),
 *   which keeps the mean brightness near the edges unchanged.
 * - Wrap: coordinates wrap around (torus topology) so the blurred grid
 *   tiles seamlessly.
 *
 * FFT OPTIMISATION
 * ================
 * For wrapped blurs on power-of-two grids the convolution is performed in the
 * frequency domain. The kernel is transformed once when the blur is built and
 * every call is then a forward FFT, an element-wise product and an inverse FFT.
 */

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// How the blur samples beyond the grid border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeMode {
    /// Mirror the grid about its border
    #[default]
    Reflect,
    /// Wrap around to the opposite border (seamless tiling)
    Wrap,
}

/// Gaussian blur for square grids of a fixed side length
#[derive(Debug, Clone)]
pub struct GaussianBlur {
    size: usize,
    sigma: f32,
    edge_mode: EdgeMode,
    kernel: Vec<f32>,
    kernel_freq: Option<Vec<Complex<f32>>>,
}

impl GaussianBlur {
    /// Kernel radius in standard deviations
    const TRUNCATE: f32 = 4.0;

    /// Widest standard deviation a kernel is built for; wider requests are truncated
    pub const MAX_SIGMA: f32 = 1024.0;

    /// Check if a number is a power of two
    fn is_power_of_two(n: usize) -> bool {
        n > 0 && (n & (n - 1)) == 0
    }

    /// Build a blur for `size × size` grids.
    ///
    /// `sigma` must be positive; callers validate it before building.
    pub fn new(size: usize, sigma: f32, edge_mode: EdgeMode) -> Self {
        let kernel = Self::create_kernel(sigma);

        let mut blur = Self {
            size,
            sigma,
            edge_mode,
            kernel,
            kernel_freq: None,
        };

        if edge_mode == EdgeMode::Wrap && size > 1 && Self::is_power_of_two(size) {
            blur.kernel_freq = Some(blur.create_kernel_fft());
        }

        blur
    }

    /// Standard deviation of the kernel
    pub fn sigma(&self) -> f32 {
        self.sigma
    }

    /// Edge handling of this blur
    pub fn edge_mode(&self) -> EdgeMode {
        self.edge_mode
    }

    /// Whether calls go through the frequency-domain path
    pub fn uses_fft(&self) -> bool {
        self.kernel_freq.is_some()
    }

    /**
     * Create the normalised 1D kernel, indexed from -radius to +radius
     */
    fn create_kernel(sigma: f32) -> Vec<f32> {
        let radius = (Self::TRUNCATE * sigma.min(Self::MAX_SIGMA) + 0.5) as usize;
        let divisor = 2.0 * sigma * sigma;

        let mut kernel: Vec<f32> = (0..=2 * radius)
            .map(|i| {
                let d = i as f32 - radius as f32;
                (-d * d / divisor).exp()
            })
            .collect();

        let sum: f32 = kernel.iter().sum();
        for val in kernel.iter_mut() {
            *val /= sum;
        }

        kernel
    }

    fn radius(&self) -> usize {
        self.kernel.len() / 2
    }

    /**
     * Map an out-of-range coordinate back into the grid
     */
    #[inline]
    fn source_index(&self, i: isize) -> usize {
        let n = self.size as isize;
        match self.edge_mode {
            EdgeMode::Wrap => i.rem_euclid(n) as usize,
            EdgeMode::Reflect => {
                let m = i.rem_euclid(2 * n);
                if m >= n {
                    (2 * n - 1 - m) as usize
                } else {
                    m as usize
                }
            }
        }
    }

    /**
     * Create the 2D kernel in frequency domain for FFT convolution
     *
     * The truncated 1D kernel is folded onto the torus (taps that land on the
     * same cell after wrapping are summed), so the frequency-domain result
     * matches the spatial wrap blur exactly up to rounding.
     */
    fn create_kernel_fft(&self) -> Vec<Complex<f32>> {
        let n = self.size;
        let radius = self.radius() as isize;

        let mut wrapped = vec![0.0f32; n];
        for (k, &w) in self.kernel.iter().enumerate() {
            let offset = k as isize - radius;
            wrapped[offset.rem_euclid(n as isize) as usize] += w;
        }

        let mut kernel = vec![0.0f32; n * n];
        for y in 0..n {
            for x in 0..n {
                kernel[y * n + x] = wrapped[y] * wrapped[x];
            }
        }

        self.fft_2d_forward(&kernel)
    }

    /**
     * Perform 2D FFT on real-valued data
     */
    fn fft_2d_forward(&self, data: &[f32]) -> Vec<Complex<f32>> {
        let n = self.size;
        let mut complex_data: Vec<Complex<f32>> =
            data.iter().map(|&x| Complex::new(x, 0.0)).collect();

        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(n);

        for row in complex_data.chunks_exact_mut(n) {
            fft.process(row);
        }

        let mut column = vec![Complex::new(0.0, 0.0); n];
        for x in 0..n {
            for y in 0..n {
                column[y] = complex_data[y * n + x];
            }
            fft.process(&mut column);
            for y in 0..n {
                complex_data[y * n + x] = column[y];
            }
        }

        complex_data
    }

    /**
     * Perform 2D inverse FFT, returning the normalised real parts
     */
    fn fft_2d_inverse(&self, complex_data: &[Complex<f32>]) -> Vec<f32> {
        let n = self.size;
        let mut data = complex_data.to_vec();

        let mut planner = FftPlanner::new();
        let ifft = planner.plan_fft_inverse(n);

        let mut column = vec![Complex::new(0.0, 0.0); n];
        for x in 0..n {
            for y in 0..n {
                column[y] = data[y * n + x];
            }
            ifft.process(&mut column);
            for y in 0..n {
                data[y * n + x] = column[y];
            }
        }

        for row in data.chunks_exact_mut(n) {
            ifft.process(row);
        }

        let area = (n * n) as f32;
        data.iter().map(|c| c.re / area).collect()
    }

    /**
     * Wrapped blur via frequency domain multiplication
     *
     * Convolution theorem: convolution(A, B) = IFFT(FFT(A) × FFT(B))
     */
    fn blur_fft(&self, data: &[f32], kernel_freq: &[Complex<f32>]) -> Vec<f32> {
        let data_freq = self.fft_2d_forward(data);
        let result_freq: Vec<Complex<f32>> = data_freq
            .iter()
            .zip(kernel_freq.iter())
            .map(|(d, k)| d * k)
            .collect();

        self.fft_2d_inverse(&result_freq)
    }

    /**
     * Spatial separable blur: horizontal pass, then vertical pass
     */
    fn blur_spatial(&self, data: &[f32]) -> Vec<f32> {
        let n = self.size;
        let radius = self.radius() as isize;
        let mut horizontal = vec![0.0f32; n * n];

        for y in 0..n {
            let row = &data[y * n..(y + 1) * n];
            for x in 0..n {
                let mut sum = 0.0;
                for (k, &w) in self.kernel.iter().enumerate() {
                    let px = self.source_index(x as isize + k as isize - radius);
                    sum += row[px] * w;
                }
                horizontal[y * n + x] = sum;
            }
        }

        let mut blurred = vec![0.0f32; n * n];
        for y in 0..n {
            for x in 0..n {
                let mut sum = 0.0;
                for (k, &w) in self.kernel.iter().enumerate() {
                    let py = self.source_index(y as isize + k as isize - radius);
                    sum += horizontal[py * n + x] * w;
                }
                blurred[y * n + x] = sum;
            }
        }

        blurred
    }

    /// Blur a row-major `size × size` grid, returning a new grid of the same shape.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != size * size`.
    pub fn apply(&self, data: &[f32]) -> Vec<f32> {
        assert_eq!(
            data.len(),
            self.size * self.size,
            "grid does not match blur dimensions"
        );

        if self.size <= 1 {
            return data.to_vec();
        }

        match &self.kernel_freq {
            Some(kernel_freq) => self.blur_fft(data, kernel_freq),
            None => self.blur_spatial(data),
        }
    }
}
