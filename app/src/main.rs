use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

use clap::Parser;
use pixel_noise::seed::entropy_seed;
use pixel_noise::{ConfigError, FixedSeed, NoiseField, Preset, SamplerConfig, ScaledSampler};
use thiserror::Error;

mod render;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
    #[error("image size must be non-zero, got {width}×{height}")]
    EmptyImage { width: u32, height: u32 },
}

// What to draw: one of the presets, or the raw field
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mode {
    Raw,
    Preset(Preset),
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("raw") {
            Ok(Mode::Raw)
        } else {
            s.parse().map(Mode::Preset)
        }
    }
}

/// Render a noise preset into a PNG preview
#[derive(Parser, Debug)]
#[command(name = "noise-preview")]
#[command(about = "Render pixel noise presets to an image", long_about = None)]
pub struct Args {
    /// Seed handed to the noise field
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub seed: f64,

    /// Ignore --seed and draw one from the thread-local generator
    #[arg(long)]
    pub random_seed: bool,

    /// raw, color-variation, gas-opacity or temp-variation
    #[arg(long, value_name = "PRESET", default_value = "color-variation")]
    pub preset: Mode,

    #[arg(long, default_value_t = 256)]
    pub width: u32,

    #[arg(long, default_value_t = 256)]
    pub height: u32,

    /// Animation time; presets drift along y as it grows
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub time: f64,

    /// Override the preset scale (for raw: sampling frequency)
    #[arg(long)]
    pub scale: Option<f64>,

    /// TOML file with per-preset constants
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(long, value_name = "FILE", default_value = "noise.png")]
    pub output: PathBuf,
}

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.width == 0 || args.height == 0 {
        return Err(AppError::EmptyImage {
            width: args.width,
            height: args.height,
        });
    }

    let config = match &args.config {
        Some(path) => SamplerConfig::load(path)?,
        None => SamplerConfig::default(),
    };

    let seed = if args.random_seed {
        entropy_seed()
    } else {
        args.seed
    };
    let field = NoiseField::from_source(&mut FixedSeed(seed));
    log::info!(
        "seed {seed} (normalized {}), {:?}, {}×{}",
        field.normalized_seed(),
        args.preset,
        args.width,
        args.height
    );
    let sampler = ScaledSampler::with_config(field, config);

    let start = Instant::now();
    let img = render::render(&sampler, &args);
    img.save(&args.output)?;
    log::info!(
        "saved {:?} in {:.1} ms",
        args.output,
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(())
}
