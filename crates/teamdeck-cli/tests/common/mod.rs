//! Shared helpers for driving the `teamdeck` binary.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::{tempdir, TempDir};

/// Two teams, one user per role, a task, a file and a meeting in each team.
pub const SNAPSHOT: &str = r#"
profiles:
  - uid: core-1
    role: Core
  - uid: semi-1
    role: Semi-core
  - uid: head-a
    role: Head
    teamId: A
  - uid: vol-a
    role: Volunteer
    teamId: A
  - uid: vol-b
    role: Volunteer
    teamId: B
  - uid: vol-lost
    role: Volunteer
  - uid: drifter
    role: Unassigned
teams:
  - id: A
    name: Logistics
    members: [head-a, vol-a]
    headId: head-a
  - id: B
    name: Hospitality
    members: [vol-b]
tasks:
  - id: task-a
    title: Print badges
    teamId: A
    assignee:
      uid: vol-a
  - id: task-b
    title: Book caterer
    teamId: B
    assignee:
      uid: vol-b
files:
  - id: file-a
    name: floorplan.pdf
    teamId: A
    uploadedBy: head-a
  - id: file-b
    name: menu.pdf
    teamId: B
    uploadedBy: vol-b
meetings:
  - id: meet-a
    title: Load-in
    teamId: A
    scheduledFor: 2026-03-01T09:00:00Z
    createdBy: head-a
  - id: meet-b
    title: Tasting
    teamId: B
    scheduledFor: 2026-03-02T09:00:00Z
    createdBy: vol-b
"#;

/// Temporary project directory with a snapshot file.
pub struct TestContext {
    pub temp_dir: TempDir,
    pub snapshot_path: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let snapshot_path = temp_dir.path().join("snapshot.yaml");
        std::fs::write(&snapshot_path, SNAPSHOT).expect("Failed to write snapshot");
        Self {
            temp_dir,
            snapshot_path,
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `.teamdeck/config.yaml` inside the project directory.
    pub fn with_config(self, config: &str) -> Self {
        let dir = self.path().join(".teamdeck");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        std::fs::write(dir.join("config.yaml"), config).expect("Failed to write config");
        self
    }

    /// A command running in the project directory, isolated from the caller's env.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("teamdeck").expect("Binary not found");
        cmd.current_dir(self.path())
            .env_remove("TEAMDECK_CONFIG")
            .env_remove("TEAMDECK_SNAPSHOT")
            .env_remove("TEAMDECK_ENV")
            .env_remove("TEAMDECK_LOG_FILE")
            .env_remove("RUST_LOG")
            .env("TEAMDECK_LOG_LEVEL", "error")
            .env("NO_COLOR", "1");
        cmd
    }

    /// Like [`command`](Self::command) with `--snapshot` pointing at the fixture.
    pub fn with_snapshot(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("--snapshot").arg(&self.snapshot_path);
        cmd
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
