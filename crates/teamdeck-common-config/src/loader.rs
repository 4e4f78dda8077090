//! Configuration file loading and parsing.

use crate::types::{TeamdeckConfig, LOG_FORMATS, LOG_LEVELS};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory holding the config file, relative to the project root.
pub const CONFIG_DIR: &str = ".teamdeck";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.yaml";

/// Config loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read config: {source}")]
    ReadError {
        #[from]
        source: std::io::Error,
    },

    #[error("invalid YAML at line {}: {message}", line_label(line))]
    ParseError { line: Option<usize>, message: String },

    #[error("validation error: {message}")]
    ValidationError { message: String },

    #[error("environment variable not found: {var}")]
    EnvVarNotFound { var: String },
}

fn line_label(line: &Option<usize>) -> String {
    line.map_or_else(|| "unknown".to_string(), |l| l.to_string())
}

/// Configuration loader.
pub struct ConfigLoader {
    base_path: PathBuf,
}

impl ConfigLoader {
    /// Create a loader for the given project directory.
    pub fn new(project_dir: impl AsRef<Path>) -> Self {
        Self {
            base_path: project_dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the config file.
    pub fn config_path(&self) -> PathBuf {
        self.base_path.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Load configuration from `.teamdeck/config.yaml`.
    pub fn load(&self) -> Result<TeamdeckConfig, ConfigError> {
        let config_path = self.config_path();

        if !config_path.exists() {
            return Ok(TeamdeckConfig::default());
        }

        self.load_file(&config_path)
    }

    /// Load configuration from an explicit file, which must exist.
    pub fn load_file(&self, path: &Path) -> Result<TeamdeckConfig, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        let expanded = self.expand_env_vars(&contents)?;

        let config: TeamdeckConfig =
            serde_yaml::from_str(&expanded).map_err(|e| ConfigError::ParseError {
                line: e.location().map(|l| l.line()),
                message: e.to_string(),
            })?;

        self.validate(&config)?;
        Ok(config)
    }

    /// Resolve the snapshot path against the project directory.
    pub fn snapshot_path(&self, config: &TeamdeckConfig) -> PathBuf {
        if config.snapshot.path.is_absolute() {
            config.snapshot.path.clone()
        } else {
            self.base_path.join(&config.snapshot.path)
        }
    }

    /// Expand environment variables in the form `${VAR}` or `${VAR:-default}`.
    fn expand_env_vars(&self, content: &str) -> Result<String, ConfigError> {
        let mut result = content.to_string();
        let re = regex::Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}").map_err(|e| {
            ConfigError::ValidationError {
                message: e.to_string(),
            }
        })?;

        for cap in re.captures_iter(content) {
            let full_match = &cap[0];
            let var_name = &cap[1];
            let default = cap.get(2).map(|m| m.as_str());

            let value = match std::env::var(var_name) {
                Ok(v) => v,
                Err(_) => match default {
                    Some(d) => d.to_string(),
                    None => {
                        return Err(ConfigError::EnvVarNotFound {
                            var: var_name.to_string(),
                        })
                    }
                },
            };

            result = result.replace(full_match, &value);
        }

        Ok(result)
    }

    /// Validate configuration values.
    fn validate(&self, config: &TeamdeckConfig) -> Result<(), ConfigError> {
        if config.snapshot.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "snapshot.path must not be empty".to_string(),
            });
        }

        let level = config.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) && level != "warning" {
            return Err(ConfigError::ValidationError {
                message: format!("logging.level must be one of {}", LOG_LEVELS.join(", ")),
            });
        }

        let format = config.logging.format.to_lowercase();
        if !LOG_FORMATS.contains(&format.as_str()) {
            return Err(ConfigError::ValidationError {
                message: format!("logging.format must be one of {}", LOG_FORMATS.join(", ")),
            });
        }

        Ok(())
    }

    /// Save configuration to file.
    pub fn save(&self, config: &TeamdeckConfig) -> Result<(), ConfigError> {
        let config_dir = self.base_path.join(CONFIG_DIR);
        std::fs::create_dir_all(&config_dir)?;

        let yaml = serde_yaml::to_string(config).map_err(|e| ConfigError::ParseError {
            line: None,
            message: e.to_string(),
        })?;

        std::fs::write(config_dir.join(CONFIG_FILE), yaml)?;
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(std::env::current_dir().unwrap_or_default())
    }
}
