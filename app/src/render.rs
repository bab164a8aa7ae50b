use image::{Rgba, RgbaImage};
use palette::{Gradient, LinSrgb};
use pixel_noise::grid::{NoiseGrid2D, normalize2};
use pixel_noise::{Preset, ScaledSampler};

use crate::{Args, Mode};

// Raw noise is zero on every lattice point, so integer pixels need scaling
const RAW_FREQUENCY: f64 = 1.0 / 16.0;
const SAND: [f32; 3] = [194.0, 178.0, 128.0];
const GAS: [u8; 3] = [120, 200, 90];

pub fn render(sampler: &ScaledSampler, args: &Args) -> RgbaImage {
    let (width, height) = (args.width as usize, args.height as usize);
    match args.preset {
        Mode::Raw => {
            let frequency = args.scale.unwrap_or(RAW_FREQUENCY);
            let grid = fill(width, height, |x, y| sampler.sample_scaled(x, y, frequency, 1.0));
            heat_map(grid)
        }
        Mode::Preset(preset) => {
            let grid = fill(width, height, |x, y| match args.scale {
                Some(scale) => sampler.preset_with_scale(preset, x, y, args.time, scale),
                None => sampler.preset(preset, x, y, args.time),
            });
            match preset {
                Preset::ColorVariation => color_jitter(&grid),
                Preset::GasOpacity => gas_cloud(&grid),
                Preset::TempVariation => heat_map(grid),
            }
        }
    }
}

fn fill(width: usize, height: usize, f: impl Fn(f64, f64) -> f64) -> NoiseGrid2D {
    (0..height)
        .map(|y| (0..width).map(|x| f(x as f64, y as f64) as f32).collect())
        .collect()
}

// Normalized values through cold → neutral → hot
fn heat_map(mut grid: NoiseGrid2D) -> RgbaImage {
    normalize2(&mut grid);
    let gradient = Gradient::with_domain(vec![
        (0.0, LinSrgb::new(0.1, 0.2, 0.9)), // cold
        (0.5, LinSrgb::new(1.0, 1.0, 1.0)), // neutral
        (1.0, LinSrgb::new(0.9, 0.15, 0.1)), // hot
    ]);
    to_image(&grid, |v| {
        let rgb = gradient.get(v.clamp(0.0, 1.0)).into_format::<u8>();
        Rgba([rgb.red, rgb.green, rgb.blue, 255])
    })
}

// Brighten or darken a base color by the noise value
fn color_jitter(grid: &NoiseGrid2D) -> RgbaImage {
    to_image(grid, |v| {
        let [r, g, b] = SAND.map(|c| (c * (1.0 + v)).clamp(0.0, 255.0) as u8);
        Rgba([r, g, b, 255])
    })
}

// Noise shifts the alpha of a flat gas tint around half opacity
fn gas_cloud(grid: &NoiseGrid2D) -> RgbaImage {
    to_image(grid, |v| {
        let alpha = ((0.5 + v).clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgba([GAS[0], GAS[1], GAS[2], alpha])
    })
}

fn to_image(grid: &NoiseGrid2D, pixel: impl Fn(f32) -> Rgba<u8>) -> RgbaImage {
    let height = grid.len() as u32;
    let width = grid.first().map_or(0, |row| row.len()) as u32;
    RgbaImage::from_fn(width, height, |x, y| pixel(grid[y as usize][x as usize]))
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::{Args, Mode};
    use clap::Parser;
    use pixel_noise::{NoiseField, Preset, ScaledSampler};

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["noise-preview", "--width", "32", "--height", "16"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn parses_modes() {
        assert_eq!(args(&[]).preset, Mode::Preset(Preset::ColorVariation));
        assert_eq!(args(&["--preset", "raw"]).preset, Mode::Raw);
        assert_eq!(
            args(&["--preset", "gas-opacity"]).preset,
            Mode::Preset(Preset::GasOpacity)
        );
        assert!(Args::try_parse_from(["noise-preview", "--preset", "fire"]).is_err());
    }

    #[test]
    fn image_has_requested_size() {
        let sampler = ScaledSampler::new(NoiseField::with_seed(4.0));
        for mode in ["raw", "color-variation", "gas-opacity", "temp-variation"] {
            let img = render(&sampler, &args(&["--preset", mode]));
            assert_eq!(img.dimensions(), (32, 16));
        }
    }

    #[test]
    fn gas_alpha_follows_noise() {
        let sampler = ScaledSampler::new(NoiseField::with_seed(4.0));
        let img = render(&sampler, &args(&["--preset", "gas-opacity", "--time", "3"]));
        let v = sampler.gas_opacity(5.0, 7.0, 3.0) as f32;
        let expected = ((0.5 + v).clamp(0.0, 1.0) * 255.0).round() as u8;
        assert_eq!(img.get_pixel(5, 7)[3], expected);
    }
}
