//! Task status command implementation.

use clap::Parser;
use teamdeck_policy::Action;

use super::{guarded, GrantedOutput};
use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::print_output;
use crate::snapshot::Snapshot;

/// Check whether a user may change a task's status
#[derive(Debug, Parser)]
pub struct TaskStatusCommand {
    /// Task id
    #[arg(short, long)]
    pub task: String,

    /// User id to evaluate; omit to evaluate a signed-out visitor
    #[arg(short, long)]
    pub user: Option<String>,
}

impl TaskStatusCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let snapshot = Snapshot::load(&ctx.snapshot_path).await?;
        let user = snapshot.user(self.user.as_deref())?;
        let task = snapshot.task(&self.task)?;

        guarded(Action::ChangeTaskStatus, user, || {
            ctx.authorizer.task_status_change(user, task)
        })?;
        print_output(
            ctx,
            &GrantedOutput::new(Action::ChangeTaskStatus, Some(task.id.as_str())),
        )
    }
}
