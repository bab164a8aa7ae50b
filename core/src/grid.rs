use crate::NoiseGenerator;
use crate::sampler::{Preset, ScaledSampler};

// 2D noise grid: row-major Vec<Vec<f32>> of size height×width
// access as `grid[y][x]`.
pub type NoiseGrid2D = Vec<Vec<f32>>;

// Sample a generator at every integer pixel coordinate
pub fn sample_grid<G: NoiseGenerator + ?Sized>(
    generator: &G,
    width: usize,
    height: usize,
) -> NoiseGrid2D {
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| generator.get2(x as f64, y as f64) as f32)
                .collect()
        })
        .collect()
}

// One preset frame at a given time, one value per pixel
pub fn sample_preset_grid(
    sampler: &ScaledSampler,
    preset: Preset,
    width: usize,
    height: usize,
    time: f64,
) -> NoiseGrid2D {
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| sampler.preset(preset, x as f64, y as f64, time) as f32)
                .collect()
        })
        .collect()
}

// flatten a 2D grid (row-major) into a single Vec<f32>
// For converting to an image buffer
pub fn flatten2(grid: &NoiseGrid2D) -> Vec<f32> {
    grid.iter().flat_map(|row| row.iter().cloned()).collect()
}

// Smallest and largest finite value, None when there are none
pub fn value_range(grid: &NoiseGrid2D) -> Option<(f32, f32)> {
    grid.iter()
        .flatten()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
}

// Rescale to [0, 1]; a flat grid becomes 0.5 everywhere
pub fn normalize2(grid: &mut NoiseGrid2D) {
    let Some((min, max)) = value_range(grid) else {
        return;
    };
    let range = max - min;

    for row in grid.iter_mut() {
        for val in row.iter_mut() {
            *val = if range < f32::EPSILON {
                0.5
            } else {
                (*val - min) / range
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{flatten2, normalize2, sample_grid, sample_preset_grid, value_range};
    use crate::{NoiseField, Preset, ScaledSampler};

    #[test]
    fn grid_dimensions() {
        let field = NoiseField::with_seed(2025.0);
        let grid = sample_grid(&field, 7, 3);
        assert_eq!(grid.len(), 3);
        assert_eq!(grid[0].len(), 7);
        assert_eq!(flatten2(&grid).len(), 21);
    }

    #[test]
    fn raw_grid_is_zero_on_lattice() {
        // integer pixels sit on lattice corners
        let field = NoiseField::with_seed(2025.0);
        let grid = sample_grid(&field, 16, 16);
        assert!(flatten2(&grid).iter().all(|v| *v == 0.0));
    }

    #[test]
    fn preset_grid_matches_sampler() {
        let sampler = ScaledSampler::new(NoiseField::with_seed(8.0));
        let grid = sample_preset_grid(&sampler, Preset::TempVariation, 5, 4, 3.0);
        assert_eq!(
            grid[2][3],
            sampler.temp_variation(3.0, 2.0, 3.0) as f32
        );
    }

    #[test]
    fn normalize_range() {
        let mut grid = vec![vec![-2.0, 0.0], vec![2.0, f32::NAN]];
        assert_eq!(value_range(&grid), Some((-2.0, 2.0)));
        normalize2(&mut grid);
        assert_eq!(grid[0][0], 0.0);
        assert_eq!(grid[0][1], 0.5);
        assert_eq!(grid[1][0], 1.0);
    }

    #[test]
    fn normalize_flat_grid() {
        let mut grid = vec![vec![0.3; 4]; 4];
        normalize2(&mut grid);
        assert!(flatten2(&grid).iter().all(|v| *v == 0.5));
        assert_eq!(value_range(&Vec::new()), None);
    }
}
