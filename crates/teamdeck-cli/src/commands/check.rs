//! Check command implementation.

use clap::Parser;
use teamdeck_policy::{Action, Capability};

use super::{guarded, GrantedOutput};
use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::print_output;
use crate::snapshot::Snapshot;

/// Check a single capability; fails when it is not granted
#[derive(Debug, Parser)]
pub struct CheckCommand {
    /// Capability name, e.g. `assign-tasks`
    pub capability: Capability,

    /// User id to evaluate; omit to evaluate a signed-out visitor
    #[arg(short, long)]
    pub user: Option<String>,
}

impl CheckCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let snapshot = match &self.user {
            Some(_) => Snapshot::load(&ctx.snapshot_path).await?,
            None => Snapshot::default(),
        };
        let user = snapshot.user(self.user.as_deref())?;

        let action = Action::Require(self.capability);
        guarded(action, user, || ctx.authorizer.require(user, self.capability))?;
        print_output(ctx, &GrantedOutput::new(action, None))
    }
}
