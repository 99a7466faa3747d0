/**
 * Directional Stripe Gratings
 *
 * A stripe grid is sin(X cos θ + Y sin θ) × 0.5 + 0.5 evaluated over a
 * square coordinate mesh, where X varies by column and Y by row and both
 * run from 0 to the configured extent.
 */

use rand::Rng;
use std::f32::consts::PI;

/// Evenly spaced samples over the closed interval `[start, end]`.
///
/// A single sample yields `[start]`; the last of several samples is exactly `end`.
pub fn linspace(start: f32, end: f32, n: usize) -> Vec<f32> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f32;
            let mut values: Vec<f32> = (0..n).map(|i| start + i as f32 * step).collect();
            values[n - 1] = end;
            values
        }
    }
}

/// Sinusoidal grating at a fixed orientation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripePattern {
    /// Orientation in radians
    pub angle: f32,
    /// Upper bound of the coordinate mesh
    pub extent: f32,
}

impl StripePattern {
    /// Create a grating with the given orientation and mesh extent
    pub fn new(angle: f32, extent: f32) -> Self {
        Self { angle, extent }
    }

    /// Draw an orientation uniformly from `[0, π)`
    pub fn random<R: Rng + ?Sized>(rng: &mut R, extent: f32) -> Self {
        let angle = rng.gen::<f32>() * PI;
        Self::new(angle, extent)
    }

    /// Evaluate the grating on a row-major `size × size` grid, values in `[0, 1]`
    pub fn render(&self, size: usize) -> Vec<f32> {
        let coords = linspace(0.0, self.extent, size);
        let (dy, dx) = self.angle.sin_cos();

        let mut grid = Vec::with_capacity(size * size);
        for &y in &coords {
            for &x in &coords {
                grid.push((x * dx + y * dy).sin() * 0.5 + 0.5);
            }
        }

        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_linspace_endpoints() {
        let values = linspace(0.0, 20.0, 5);
        assert_eq!(values, vec![0.0, 5.0, 10.0, 15.0, 20.0]);

        let values = linspace(0.0, 20.0, 512);
        assert_eq!(values.len(), 512);
        assert_eq!(values[0], 0.0);
        assert_eq!(values[511], 20.0);
    }

    #[test]
    fn test_linspace_degenerate() {
        assert!(linspace(0.0, 20.0, 0).is_empty());
        assert_eq!(linspace(0.0, 20.0, 1), vec![0.0]);
        assert_eq!(linspace(0.0, 20.0, 2), vec![0.0, 20.0]);
    }

    #[test]
    fn test_render_shape_and_range() {
        let pattern = StripePattern::new(0.7, 20.0);
        let grid = pattern.render(32);

        assert_eq!(grid.len(), 32 * 32);
        for val in grid {
            assert!((0.0..=1.0).contains(&val));
        }
    }

    #[test]
    fn test_zero_angle_varies_by_column_only() {
        let size = 8;
        let grid = StripePattern::new(0.0, 20.0).render(size);

        for y in 1..size {
            for x in 0..size {
                assert_eq!(grid[y * size + x], grid[x]);
            }
        }
        assert!(grid[0] != grid[1]);
    }

    #[test]
    fn test_right_angle_varies_by_row_only() {
        let size = 8;
        let grid = StripePattern::new(PI / 2.0, 20.0).render(size);

        for y in 0..size {
            for x in 1..size {
                assert!((grid[y * size + x] - grid[y * size]).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_origin_is_midgrey() {
        let grid = StripePattern::new(1.3, 20.0).render(16);
        assert_eq!(grid[0], 0.5);
    }

    #[test]
    fn test_single_cell_grid() {
        assert_eq!(StripePattern::new(2.0, 20.0).render(1), vec![0.5]);
    }

    #[test]
    fn test_random_angle_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..1000 {
            let pattern = StripePattern::random(&mut rng, 20.0);
            assert!(pattern.angle >= 0.0 && pattern.angle < PI);
            assert_eq!(pattern.extent, 20.0);
        }
    }
}
