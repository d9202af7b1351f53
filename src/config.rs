use crate::error::{IrrigOpsError, Result};
use crate::logic::decision::{DEFAULT_MAX_DURATION, DEFAULT_MIN_DURATION};
use crate::logic::et0::{DEFAULT_ALTITUDE, DEFAULT_WIND_SPEED};
use crate::logic::{Et0Estimator, IrrigationDecisionEngine};
use crate::models::IrrigationMode;
use dialoguer::{Input, Select};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub estimator: EstimatorConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EstimatorConfig {
    /// Wind speed at 2 m, m/s
    #[serde(default = "default_wind_speed")]
    pub wind_speed: f64,
    /// Site altitude, m
    #[serde(default = "default_altitude")]
    pub altitude: f64,
}

fn default_wind_speed() -> f64 {
    DEFAULT_WIND_SPEED
}

fn default_altitude() -> f64 {
    DEFAULT_ALTITUDE
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            wind_speed: DEFAULT_WIND_SPEED,
            altitude: DEFAULT_ALTITUDE,
        }
    }
}

impl EstimatorConfig {
    pub fn build(&self) -> Et0Estimator {
        Et0Estimator::new(self.wind_speed, self.altitude)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Shortest cycle, seconds
    #[serde(default = "default_min_duration")]
    pub min_duration: i32,
    /// Longest cycle, seconds
    #[serde(default = "default_max_duration")]
    pub max_duration: i32,
}

fn default_min_duration() -> i32 {
    DEFAULT_MIN_DURATION
}

fn default_max_duration() -> i32 {
    DEFAULT_MAX_DURATION
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_duration: DEFAULT_MIN_DURATION,
            max_duration: DEFAULT_MAX_DURATION,
        }
    }
}

impl EngineConfig {
    pub fn build(&self) -> IrrigationDecisionEngine {
        IrrigationDecisionEngine::new(self.min_duration, self.max_duration)
    }
}

/// Fallback site state for CLI invocations that omit it
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Tank level, mL
    #[serde(default = "default_water_level")]
    pub water_level: u32,
    #[serde(default = "default_power_available")]
    pub power_available: bool,
    #[serde(default)]
    pub mode: IrrigationMode,
}

fn default_water_level() -> u32 {
    3000
}

fn default_power_available() -> bool {
    true
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            water_level: default_water_level(),
            power_available: default_power_available(),
            mode: IrrigationMode::default(),
        }
    }
}

impl Config {
    /// Load from `config_override`, or the first config found in the standard
    /// locations. Falls back to built-in defaults only when no override was
    /// given and nothing is found.
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(IrrigOpsError::Config(format!(
                        "Config file not found at {:?}. Run `irrigops init` to set up.",
                        p
                    )));
                }
                p
            }
            None => match Self::find_config_path() {
                Some(p) => p,
                None => {
                    tracing::info!("No config file found, using built-in defaults");
                    return Ok(Self::default());
                }
            },
        };

        tracing::debug!("Loading config from {}", config_path.display());

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| IrrigOpsError::Config(format!("Failed to read config: {}", e)))?;

        let config = Self::from_yaml(&config_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse YAML after substituting `${VAR}` environment references.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content);

        serde_yaml::from_str(&content)
            .map_err(|e| IrrigOpsError::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn validate(&self) -> Result<()> {
        let wind = self.estimator.wind_speed;
        if !wind.is_finite() || wind < 0.0 {
            return Err(IrrigOpsError::Config(format!(
                "estimator.wind_speed must be a non-negative number, got {}",
                wind
            )));
        }

        if !self.estimator.altitude.is_finite() {
            return Err(IrrigOpsError::Config(
                "estimator.altitude must be a finite number".into(),
            ));
        }

        // A zero-second cycle would read as "skip"
        if self.engine.min_duration < 1 {
            return Err(IrrigOpsError::Config(format!(
                "engine.min_duration must be at least 1 second, got {}",
                self.engine.min_duration
            )));
        }

        if self.engine.min_duration > self.engine.max_duration {
            return Err(IrrigOpsError::Config(format!(
                "engine.min_duration ({}) exceeds engine.max_duration ({})",
                self.engine.min_duration, self.engine.max_duration
            )));
        }

        Ok(())
    }

    /// Search for config.yaml in standard locations.
    fn find_config_path() -> Option<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        // Then the XDG config directory
        Self::default_config_path()
            .ok()
            .filter(|p| p.exists())
    }

    /// Default path for writing new config files (~/.config/irrigops/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| IrrigOpsError::Config("Cannot determine config directory".into()))?
            .join("irrigops");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the new Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up irrigops.");
        println!();

        println!("Site");
        let altitude: f64 = Input::new()
            .with_prompt("  Altitude (m)")
            .default(DEFAULT_ALTITUDE)
            .interact_text()
            .map_err(|e| IrrigOpsError::Config(format!("Input error: {}", e)))?;

        let wind_speed: f64 = Input::new()
            .with_prompt("  Typical wind speed at 2 m (m/s)")
            .default(DEFAULT_WIND_SPEED)
            .interact_text()
            .map_err(|e| IrrigOpsError::Config(format!("Input error: {}", e)))?;

        let water_level: u32 = Input::new()
            .with_prompt("  Default water reserve (mL)")
            .default(default_water_level())
            .interact_text()
            .map_err(|e| IrrigOpsError::Config(format!("Input error: {}", e)))?;

        let mode_names: Vec<&str> = IrrigationMode::all().iter().map(|m| m.as_str()).collect();
        let mode_idx = Select::new()
            .with_prompt("  Operating mode")
            .items(&mode_names)
            .default(0)
            .interact()
            .map_err(|e| IrrigOpsError::Config(format!("Input error: {}", e)))?;

        println!();

        println!("Irrigation cycle");
        let min_duration: i32 = Input::new()
            .with_prompt("  Minimum duration (s)")
            .default(DEFAULT_MIN_DURATION)
            .interact_text()
            .map_err(|e| IrrigOpsError::Config(format!("Input error: {}", e)))?;

        let max_duration: i32 = Input::new()
            .with_prompt("  Maximum duration (s)")
            .default(DEFAULT_MAX_DURATION)
            .interact_text()
            .map_err(|e| IrrigOpsError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            estimator: EstimatorConfig {
                wind_speed,
                altitude,
            },
            engine: EngineConfig {
                min_duration,
                max_duration,
            },
            site: SiteConfig {
                water_level,
                power_available: true,
                mode: IrrigationMode::all()[mode_idx],
            },
        };
        config.validate()?;

        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| IrrigOpsError::Config(format!("Failed to serialize config: {}", e)))?;

        // Write with a header comment
        let content = format!(
            "# irrigops configuration\n# Generated by `irrigops init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
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
        let re = match regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}") {
            Ok(re) => re,
            Err(_) => return result,
        };

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}
