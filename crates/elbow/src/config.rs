use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use elbow::routing::RoutingConfig;

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "elbow";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub routing: RoutingConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// How commands print paths and points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Compact text form, e.g. `x:30,y:60,x:30`
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `elbow config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        Self::parse(&contents)
    }

    fn parse(contents: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            log::debug!("using default config: {e}");
            Self::default()
        })
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# elbow configuration (https://github.com/mklab-se/elbow)\n{yaml}");
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "routing.stump_length" => {
                self.routing.stump_length = parse_length(key, value, false)?;
            }
            "routing.compression_threshold" => {
                self.routing.compression_threshold = parse_length(key, value, true)?;
            }
            "routing.direct_removal_threshold" => {
                self.routing.direct_removal_threshold = parse_length(key, value, true)?;
            }
            "routing.snap_vertical_tolerance" => {
                self.routing.snap_vertical_tolerance = parse_length(key, value, true)?;
            }
            "routing.integrity_tolerance" => {
                self.routing.integrity_tolerance = parse_length(key, value, true)?;
            }
            "output.format" => {
                self.output.format = match value {
                    "text" => OutputFormat::Text,
                    "json" => OutputFormat::Json,
                    _ => anyhow::bail!("Invalid format: {value}. Must be 'text' or 'json'."),
                };
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: routing.stump_length, \
                 routing.compression_threshold, routing.direct_removal_threshold, \
                 routing.snap_vertical_tolerance, routing.integrity_tolerance, output.format"
            ),
        }
        Ok(())
    }
}

/// Parse a non-negative length; `allow_zero` decides whether 0 is accepted.
fn parse_length(key: &str, value: &str, allow_zero: bool) -> Result<f64> {
    let length: f64 = value
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid {key}: {value}. Must be a number."))?;
    if !length.is_finite() || length < 0.0 || (!allow_zero && length == 0.0) {
        let bound = if allow_zero { "zero or more" } else { "greater than zero" };
        anyhow::bail!("Invalid {key}: {value}. Must be {bound}.");
    }
    Ok(length)
}
