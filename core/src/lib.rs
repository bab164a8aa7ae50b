// pixel_noise holds the 2D gradient noise field and the scaled preset samplers
pub mod config;
pub mod error;
pub mod gradient;
pub mod grid;
pub mod noise_field;
pub mod sampler;
pub mod seed;

pub use config::SamplerConfig;
pub use error::ConfigError;
pub use grid::{NoiseGrid2D, flatten2};
pub use noise_field::NoiseField;
pub use sampler::{Preset, PresetParams, ScaledSampler};
pub use seed::{FixedSeed, SeedSource};

// Anything that can be sampled at a continuous 2D point.
// Implemented by the raw field and by the scaled sampler so grid helpers
// accept either one.
pub trait NoiseGenerator {
    // Sample 2D noise at (x, y).
    fn get2(&self, x: f64, y: f64) -> f64;
}
