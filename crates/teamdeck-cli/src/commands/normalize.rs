//! Normalize command implementation.

use clap::Parser;
use serde::Serialize;
use teamdeck_policy::{
    normalize_role_team_assignment, plan_membership_change, Action, MembershipPlan, Role,
    RoleChange, TeamId,
};

use super::guarded;
use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::{print_output, FormattedOutput};
use crate::snapshot::Snapshot;

/// Normalize a role/team pairing before it is written
#[derive(Debug, Parser)]
pub struct NormalizeCommand {
    /// Role to assign (`Core`, `Semi-core`, `Head`, `Volunteer`, `Unassigned`)
    #[arg(short, long)]
    pub role: Role,

    /// Team to assign
    #[arg(short, long)]
    pub team: Option<String>,

    /// Existing user the change applies to; prints the membership edits
    #[arg(long)]
    pub target: Option<String>,

    /// User performing the change; requires `can-manage-permissions`
    #[arg(long, requires = "target")]
    pub actor: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NormalizeOutput {
    role: Role,
    team_id: Option<TeamId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    plan: Option<MembershipPlan>,
}

impl FormattedOutput for NormalizeOutput {
    fn format_text(&self) -> String {
        let team = self.team_id.as_ref().map_or("none", TeamId::as_str);
        let mut lines = vec![format!("role: {}", self.role), format!("team: {team}")];

        if let Some(plan) = &self.plan {
            if plan.is_noop() {
                lines.push("membership: unchanged".to_string());
            }
            let edits = [
                ("leave", &plan.leave),
                ("join", &plan.join),
                ("step down as head of", &plan.step_down_as_head),
                ("become head of", &plan.become_head_of),
            ];
            for (label, team) in edits {
                if let Some(team) = team {
                    lines.push(format!("{label}: {team}"));
                }
            }
        }
        lines.join("\n")
    }
}

impl NormalizeCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let team_id = self.team.as_deref().map(TeamId::from);

        let Some(target) = &self.target else {
            let team_id = normalize_role_team_assignment(self.role, team_id)
                .map_err(|e| CliError::validation(e.to_string(), Some("team")))?;
            return print_output(
                ctx,
                &NormalizeOutput {
                    role: self.role,
                    team_id,
                    plan: None,
                },
            );
        };

        let snapshot = Snapshot::load(&ctx.snapshot_path).await?;
        let target = snapshot
            .user(Some(target.as_str()))?
            .ok_or_else(|| CliError::not_found("user", target))?;

        let plan = match &self.actor {
            Some(actor) => {
                let actor = snapshot.user(Some(actor.as_str()))?;
                let change = RoleChange {
                    uid: target.uid.clone(),
                    role: self.role,
                    team_id,
                };
                guarded(Action::ChangeRole, actor, || {
                    ctx.authorizer.change_role(actor, target, &change)
                })?
            }
            None => plan_membership_change(target, self.role, team_id)
                .map_err(|e| CliError::validation(e.to_string(), Some("team")))?,
        };

        print_output(
            ctx,
            &NormalizeOutput {
                role: plan.role,
                team_id: plan.team_id.clone(),
                plan: Some(plan),
            },
        )
    }
}
