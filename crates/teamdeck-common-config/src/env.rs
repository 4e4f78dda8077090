//! Environment variable handling.

use std::env;
use std::path::Path;
use thiserror::Error;

/// Environment variable errors.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("failed to load {file}: {source}")]
    Dotenv {
        file: String,
        #[source]
        source: dotenvy::Error,
    },
}

/// Environment variable names.
pub mod vars {
    // Configuration
    pub const TEAMDECK_CONFIG: &str = "TEAMDECK_CONFIG";
    pub const TEAMDECK_SNAPSHOT: &str = "TEAMDECK_SNAPSHOT";
    pub const TEAMDECK_ENV: &str = "TEAMDECK_ENV";

    // Logging
    pub const TEAMDECK_LOG_LEVEL: &str = "TEAMDECK_LOG_LEVEL";
    pub const TEAMDECK_LOG_FORMAT: &str = "TEAMDECK_LOG_FORMAT";
    pub const TEAMDECK_LOG_FILE: &str = "TEAMDECK_LOG_FILE";
    pub const TEAMDECK_LOG_SOURCE: &str = "TEAMDECK_LOG_SOURCE";
    pub const TEAMDECK_LOG_SPANS: &str = "TEAMDECK_LOG_SPANS";

    // Development
    pub const RUST_LOG: &str = "RUST_LOG";
}

/// Access to the process environment.
pub struct Environment;

impl Environment {
    /// Load `.env` files from the working directory.
    pub fn init() -> Result<(), EnvError> {
        Self::init_in(Path::new("."))
    }

    /// Load `.env.<TEAMDECK_ENV>`, `.env.local` and `.env` from `dir`.
    ///
    /// A variable is never overwritten once set, so the process environment
    /// beats every file and the most specific file beats `.env`. Missing
    /// files are skipped.
    pub fn init_in(dir: &Path) -> Result<(), EnvError> {
        if let Some(name) = Self::get(vars::TEAMDECK_ENV) {
            load(dir, &format!(".env.{name}"))?;
        }
        load(dir, ".env.local")?;
        load(dir, ".env")
    }

    /// Get a variable; an empty value counts as unset.
    pub fn get(var: &str) -> Option<String> {
        env::var(var).ok().filter(|v| !v.is_empty())
    }

    /// Get a boolean variable (`true`, `1` or `yes` are true).
    pub fn get_bool(var: &str) -> Option<bool> {
        Self::get(var).map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
    }
}

fn load(dir: &Path, file: &str) -> Result<(), EnvError> {
    match dotenvy::from_path(dir.join(file)) {
        Ok(()) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(source) => Err(EnvError::Dotenv {
            file: file.to_string(),
            source,
        }),
    }
}
