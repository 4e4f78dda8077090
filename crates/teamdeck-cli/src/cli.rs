//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use teamdeck_common_config::{vars, ConfigLoader, TeamdeckConfig};
use teamdeck_policy::Authorizer;

use crate::commands::{
    CheckCommand, ListCommand, MatrixCommand, NormalizeCommand, TaskStatusCommand, WhoamiCommand,
};
use crate::error::CliError;

/// Teamdeck - role-based access decisions for teams, tasks and files
#[derive(Debug, Parser)]
#[command(
    name = "teamdeck",
    author,
    version,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(
        short,
        long,
        global = true,
        env = vars::TEAMDECK_CONFIG,
        value_hint = ValueHint::FilePath
    )]
    pub config: Option<PathBuf>,

    /// Snapshot file to evaluate against (overrides `snapshot.path`)
    #[arg(
        short,
        long,
        global = true,
        env = vars::TEAMDECK_SNAPSHOT,
        value_hint = ValueHint::FilePath
    )]
    pub snapshot: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "text", value_enum)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the role by capability grid
    Matrix(MatrixCommand),

    /// Show a user's access level and capabilities
    Whoami(WhoamiCommand),

    /// Check a single capability; fails when it is not granted
    Check(CheckCommand),

    /// Check whether a user may change a task's status
    TaskStatus(TaskStatusCommand),

    /// List the records a user may see
    List(ListCommand),

    /// Normalize a role/team pairing before it is written
    Normalize(NormalizeCommand),
}

impl Cli {
    fn loader(&self) -> ConfigLoader {
        match &self.config {
            Some(path) => {
                // The config sits in `<project>/.teamdeck/`; resolve paths against `<project>`
                let project_dir = path
                    .parent()
                    .and_then(|dir| dir.parent())
                    .unwrap_or_else(|| std::path::Path::new("."));
                ConfigLoader::new(project_dir)
            }
            None => ConfigLoader::default(),
        }
    }

    /// Load configuration from the given file or the default location
    pub fn load_config(&self) -> Result<TeamdeckConfig, CliError> {
        let loader = self.loader();
        let config = match &self.config {
            Some(path) => loader.load_file(path)?,
            None => loader.load()?,
        };
        Ok(config)
    }

    /// Execute the selected command
    pub async fn execute(self, config: TeamdeckConfig) -> Result<(), CliError> {
        let snapshot_path = match &self.snapshot {
            Some(path) => path.clone(),
            None => self.loader().snapshot_path(&config),
        };

        let ctx = CommandContext {
            authorizer: Authorizer::new(config.audit.log_grants),
            config,
            snapshot_path,
            format: self.format,
        };

        match self.command {
            Command::Matrix(cmd) => cmd.execute(&ctx),
            Command::Whoami(cmd) => cmd.execute(&ctx).await,
            Command::Check(cmd) => cmd.execute(&ctx).await,
            Command::TaskStatus(cmd) => cmd.execute(&ctx).await,
            Command::List(cmd) => cmd.execute(&ctx).await,
            Command::Normalize(cmd) => cmd.execute(&ctx).await,
        }
    }
}

/// Context passed to all commands
#[derive(Debug)]
pub struct CommandContext {
    pub config: TeamdeckConfig,
    pub snapshot_path: PathBuf,
    pub format: OutputFormat,
    pub authorizer: Authorizer,
}
