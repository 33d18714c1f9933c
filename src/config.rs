use crate::error::{HourcastError, Result};
use dialoguer::Input;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::LazyLock;

pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com/";

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("env var pattern is valid")
});

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub location: LocationConfig,
    #[serde(default)]
    pub forecast: ForecastConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ForecastConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Saved forecast response used when no input is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_file: Option<PathBuf>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            response_file: None,
        }
    }
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(HourcastError::Config(format!(
                "Config file not found at {:?}. Run `hourcast init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| HourcastError::Config(format!("Failed to read config: {}", e)))?;

        let config = Self::parse(&config_str)?;
        tracing::info!("Loaded configuration from {}", config_path.display());
        Ok(config)
    }

    /// Parse YAML config content after `${VAR}` substitution
    pub fn parse(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content);

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| HourcastError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let LocationConfig {
            latitude,
            longitude,
        } = self.location;

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(HourcastError::Config(format!(
                "latitude {} is outside -90..90",
                latitude
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(HourcastError::Config(format!(
                "longitude {} is outside -180..180",
                longitude
            )));
        }
        Ok(())
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("hourcast").join("config.yaml");
            if xdg_config.exists() {
                return Ok(xdg_config);
            }
        }

        Self::default_config_path()
    }

    /// Returns true if a config file can be found in any standard location.
    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/hourcast/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| HourcastError::Config("Cannot determine config directory".into()))?
            .join("hourcast");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up hourcast!");
        println!();

        println!("Location");
        let latitude: f64 = Input::new()
            .with_prompt("  Latitude")
            .default(52.52)
            .interact_text()
            .map_err(|e| HourcastError::Config(format!("Input error: {}", e)))?;

        let longitude: f64 = Input::new()
            .with_prompt("  Longitude")
            .default(13.41)
            .interact_text()
            .map_err(|e| HourcastError::Config(format!("Input error: {}", e)))?;

        println!();

        println!("Forecast (leave response file blank to pass --input instead)");
        let base_url: String = Input::new()
            .with_prompt("  API base URL")
            .default(DEFAULT_BASE_URL.into())
            .interact_text()
            .map_err(|e| HourcastError::Config(format!("Input error: {}", e)))?;

        let response_file: String = Input::new()
            .with_prompt("  Saved response file")
            .default(String::new())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| HourcastError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            location: LocationConfig {
                latitude,
                longitude,
            },
            forecast: ForecastConfig {
                base_url,
                response_file: (!response_file.is_empty()).then(|| PathBuf::from(response_file)),
            },
        };
        config.validate()?;

        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| HourcastError::Config(format!("Failed to serialize config: {}", e)))?;

        let content = format!(
            "# hourcast configuration\n# Generated by `hourcast init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        for cap in ENV_VAR.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            location: LocationConfig {
                latitude: 52.52,
                longitude: 13.41,
            },
            forecast: ForecastConfig::default(),
        }
    }
}
