//! Configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamdeckConfig {
    /// Where the realtime snapshot is read from.
    pub snapshot: SnapshotConfig,
    /// Logging output.
    pub logging: LoggingConfig,
    /// Decision audit trail.
    pub audit: AuditConfig,
}

/// Snapshot source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Snapshot file (YAML or JSON), relative to the project directory.
    pub path: PathBuf,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("snapshot.yaml"),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level: trace, debug, info, warn or error.
    pub level: String,
    /// Output format: pretty, compact or json.
    pub format: String,
    /// Optional log file, appended to.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Audit trail configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Log granted decisions too, not only denials.
    pub log_grants: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self { log_grants: true }
    }
}

/// Log levels accepted in `logging.level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Formats accepted in `logging.format`.
pub const LOG_FORMATS: [&str; 3] = ["pretty", "compact", "json"];
