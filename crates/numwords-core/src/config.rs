//! Configuration management for numwords

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How evaluated numbers are written back into the text
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NumberFormat {
    /// 512100000
    #[default]
    Plain,
    /// 512,100,000
    Grouped,
}

impl NumberFormat {
    /// Parse a user-supplied format name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "plain" => Some(Self::Plain),
            "grouped" | "commas" => Some(Self::Grouped),
            _ => None,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Plain => "plain",
            Self::Grouped => "grouped",
        }
    }

    /// Render a value in this format
    pub fn render(&self, value: u64) -> String {
        match self {
            Self::Plain => value.to_string(),
            Self::Grouped => format_with_commas(value),
        }
    }
}

/// Format a number with commas: 50000 → "50,000"
fn format_with_commas(n: u64) -> String {
    let s = n.to_string();
    if s.len() <= 3 {
        return s;
    }
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Output format for converted numbers
    pub number_format: NumberFormat,
    /// Treat hyphens as word breaks ("twenty-two" → "twenty two")
    pub split_hyphens: bool,
    /// Report processing time after each conversion
    pub show_timings: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            number_format: NumberFormat::default(),
            split_hyphens: true,
            show_timings: false,
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_config_path()?,
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config from {:?}", config_path))?;
            let config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {:?}", config_path))?;
            tracing::debug!("Loaded config from {:?}", config_path);
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<&str>) -> Result<()> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_config_path()?,
        };

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config to {:?}", config_path))?;
        tracing::info!("Saved config to {:?}", config_path);
        Ok(())
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "numwords", "numwords")
            .context("Could not determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}
