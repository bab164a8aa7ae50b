use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("preset {preset} has non-finite {field}: {value}")]
    NonFinite {
        preset: &'static str,
        field: &'static str,
        value: f64,
    },
    #[error("unknown preset {0:?}")]
    UnknownPreset(String),
}
