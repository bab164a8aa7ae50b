use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::NoiseGenerator;
use crate::config::SamplerConfig;
use crate::error::ConfigError;
use crate::noise_field::NoiseField;

// Scale, output amplitude and per-time-unit drift along y for one preset
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct PresetParams {
    pub scale: f64,
    pub amplitude: f64,
    pub time_factor: f64,
}

// Named pixel-effect presets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    ColorVariation,
    GasOpacity,
    TempVariation,
}

impl Preset {
    pub const ALL: [Preset; 3] = [
        Preset::ColorVariation,
        Preset::GasOpacity,
        Preset::TempVariation,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::ColorVariation => "color-variation",
            Preset::GasOpacity => "gas-opacity",
            Preset::TempVariation => "temp-variation",
        }
    }

    // Built-in constants, reproduced exactly
    pub fn defaults(self) -> PresetParams {
        match self {
            Preset::ColorVariation => PresetParams {
                scale: 0.05,
                amplitude: 0.2,
                time_factor: 0.01,
            },
            Preset::GasOpacity => PresetParams {
                scale: 0.1,
                amplitude: 0.4,
                time_factor: 0.02,
            },
            Preset::TempVariation => PresetParams {
                scale: 0.03,
                amplitude: 0.15,
                time_factor: 0.005,
            },
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownPreset(s.to_string()))
    }
}

/// Frequency/amplitude wrapper around an owned [`NoiseField`].
///
/// The presets drift the sampled point along y as `time` grows, which reads
/// as slow animation without touching the tables.
#[derive(Clone, Debug)]
pub struct ScaledSampler {
    field: NoiseField,
    config: SamplerConfig,
}

impl ScaledSampler {
    pub fn new(field: NoiseField) -> Self {
        Self::with_config(field, SamplerConfig::default())
    }

    pub fn with_config(field: NoiseField, config: SamplerConfig) -> Self {
        Self { field, config }
    }

    pub fn sample_scaled(&self, x: f64, y: f64, frequency: f64, amplitude: f64) -> f64 {
        self.field.sample(x * frequency, y * frequency) * amplitude
    }

    // Preset at its configured scale
    pub fn preset(&self, preset: Preset, x: f64, y: f64, time: f64) -> f64 {
        let scale = self.config.params(preset).scale;
        self.preset_with_scale(preset, x, y, time, scale)
    }

    pub fn preset_with_scale(&self, preset: Preset, x: f64, y: f64, time: f64, scale: f64) -> f64 {
        let params = self.config.params(preset);
        self.sample_scaled(
            x * scale,
            y * scale + time * params.time_factor,
            1.0,
            params.amplitude,
        )
    }

    /// Pixel color jitter at the configured scale.
    /// Use [`Self::preset_with_scale`] with [`Preset::ColorVariation`] for another scale.
    pub fn color_variation(&self, x: f64, y: f64, time: f64) -> f64 {
        self.preset(Preset::ColorVariation, x, y, time)
    }

    /// Gas opacity at the configured scale; override it through
    /// [`Self::preset_with_scale`] with [`Preset::GasOpacity`].
    pub fn gas_opacity(&self, x: f64, y: f64, time: f64) -> f64 {
        self.preset(Preset::GasOpacity, x, y, time)
    }

    /// Smooth shading for temperature views at the configured scale.
    /// Use [`Self::preset_with_scale`] with [`Preset::TempVariation`] for another scale.
    pub fn temp_variation(&self, x: f64, y: f64, time: f64) -> f64 {
        self.preset(Preset::TempVariation, x, y, time)
    }

    pub fn reseed(&mut self, seed: f64) {
        self.field.seed(seed);
    }

    pub fn field(&self) -> &NoiseField {
        &self.field
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }
}

impl Default for ScaledSampler {
    fn default() -> Self {
        Self::new(NoiseField::new())
    }
}

impl NoiseGenerator for ScaledSampler {
    fn get2(&self, x: f64, y: f64) -> f64 {
        self.sample_scaled(x, y, 1.0, 1.0)
    }
}
