use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sampler::{Preset, PresetParams};

/// Per-preset constants for [`crate::ScaledSampler`], loadable from TOML.
///
/// Every table and field is optional in the file; anything left out keeps
/// the built-in value:
///
/// ```toml
/// [gas_opacity]
/// amplitude = 0.5
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(from = "RawSamplerConfig")]
pub struct SamplerConfig {
    pub color_variation: PresetParams,
    pub gas_opacity: PresetParams,
    pub temp_variation: PresetParams,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            color_variation: Preset::ColorVariation.defaults(),
            gas_opacity: Preset::GasOpacity.defaults(),
            temp_variation: Preset::TempVariation.defaults(),
        }
    }
}

// File shape: every field optional, merged over the preset's own defaults
#[derive(Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawSamplerConfig {
    color_variation: RawPresetParams,
    gas_opacity: RawPresetParams,
    temp_variation: RawPresetParams,
}

#[derive(Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawPresetParams {
    scale: Option<f64>,
    amplitude: Option<f64>,
    time_factor: Option<f64>,
}

impl RawPresetParams {
    fn over(self, defaults: PresetParams) -> PresetParams {
        PresetParams {
            scale: self.scale.unwrap_or(defaults.scale),
            amplitude: self.amplitude.unwrap_or(defaults.amplitude),
            time_factor: self.time_factor.unwrap_or(defaults.time_factor),
        }
    }
}

impl From<RawSamplerConfig> for SamplerConfig {
    fn from(raw: RawSamplerConfig) -> Self {
        Self {
            color_variation: raw
                .color_variation
                .over(Preset::ColorVariation.defaults()),
            gas_opacity: raw.gas_opacity.over(Preset::GasOpacity.defaults()),
            temp_variation: raw.temp_variation.over(Preset::TempVariation.defaults()),
        }
    }
}

impl SamplerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("loaded sampler config from {path:?}");
        Ok(config)
    }

    // Every constant has to be finite or the presets would silently emit NaN
    pub fn validate(&self) -> Result<(), ConfigError> {
        for preset in Preset::ALL {
            let params = self.params(preset);
            for (field, value) in [
                ("scale", params.scale),
                ("amplitude", params.amplitude),
                ("time_factor", params.time_factor),
            ] {
                if !value.is_finite() {
                    return Err(ConfigError::NonFinite {
                        preset: preset.name(),
                        field,
                        value,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn params(&self, preset: Preset) -> PresetParams {
        match preset {
            Preset::ColorVariation => self.color_variation,
            Preset::GasOpacity => self.gas_opacity,
            Preset::TempVariation => self.temp_variation,
        }
    }

    pub fn params_mut(&mut self, preset: Preset) -> &mut PresetParams {
        match preset {
            Preset::ColorVariation => &mut self.color_variation,
            Preset::GasOpacity => &mut self.gas_opacity,
            Preset::TempVariation => &mut self.temp_variation,
        }
    }
}
