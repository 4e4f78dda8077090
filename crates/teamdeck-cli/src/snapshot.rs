//! Snapshot of the realtime store.
//!
//! The web app keeps these collections live through subscriptions; the
//! CLI reads one frozen copy from disk and hands values to the policy
//! engine exactly as the app would.

use std::path::Path;

use serde::{Deserialize, Serialize};
use teamdeck_common_core::{Error, Result};
use teamdeck_common_log::spans::{record_error, snapshot_span};
use teamdeck_common_log::timed;
use teamdeck_policy::{FileRecord, Meeting, Task, Team, UserProfile};
use tracing::{debug, Instrument};

use crate::error::CliError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub profiles: Vec<UserProfile>,
    pub teams: Vec<Team>,
    pub tasks: Vec<Task>,
    pub files: Vec<FileRecord>,
    pub meetings: Vec<Meeting>,
}

impl Snapshot {
    /// Parse a snapshot; `.json` files are read as JSON, anything else as YAML.
    pub fn parse(path: &Path, contents: &str) -> Result<Self> {
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            serde_json::from_str(contents).map_err(|e| Error::serialization(e.to_string()))
        } else {
            serde_yaml::from_str(contents).map_err(|e| Error::serialization(e.to_string()))
        }
    }

    /// Read and parse a snapshot file.
    pub async fn load(path: &Path) -> std::result::Result<Self, CliError> {
        let span = snapshot_span(&path.display().to_string());
        Self::read(path).instrument(span).await
    }

    async fn read(path: &Path) -> std::result::Result<Self, CliError> {
        let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CliError::Snapshot {
                    message: format!("snapshot not found: {}", path.display()),
                    path: path.to_path_buf(),
                }
            } else {
                CliError::io_with_path("failed to read snapshot", e, path)
            }
        })?;

        let snapshot = timed!("snapshot.parse", Self::parse(path, &contents))
            .map_err(|e| {
                record_error(&e);
                CliError::Snapshot {
                    message: format!("invalid snapshot {}: {e}", path.display()),
                    path: path.to_path_buf(),
                }
            })?;

        debug!(
            profiles = snapshot.profiles.len(),
            teams = snapshot.teams.len(),
            tasks = snapshot.tasks.len(),
            files = snapshot.files.len(),
            meetings = snapshot.meetings.len(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    /// The profile for `--user`, or `None` when no user was given.
    pub fn user(&self, uid: Option<&str>) -> Result<Option<&UserProfile>> {
        uid.map(|uid| {
            self.profiles
                .iter()
                .find(|p| p.uid.as_str() == uid)
                .ok_or_else(|| Error::not_found("user", uid))
        })
        .transpose()
    }

    pub fn task(&self, id: &str) -> Result<&Task> {
        self.tasks
            .iter()
            .find(|t| t.id.as_str() == id)
            .ok_or_else(|| Error::not_found("task", id))
    }
}
