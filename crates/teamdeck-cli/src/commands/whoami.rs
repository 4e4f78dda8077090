//! Whoami command implementation.

use clap::Parser;
use serde::Serialize;
use teamdeck_policy::predicates::access_level;
use teamdeck_policy::{AccessLevel, Capability, Role, TeamId, UserProfile};

use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::{print_output, FormattedOutput};
use crate::snapshot::Snapshot;

/// Show a user's access level and capabilities
#[derive(Debug, Parser)]
pub struct WhoamiCommand {
    /// User id to evaluate; omit to evaluate a signed-out visitor
    #[arg(short, long)]
    pub user: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WhoamiOutput {
    uid: Option<String>,
    role: Option<Role>,
    access_level: AccessLevel,
    team_id: Option<TeamId>,
    misconfigured: bool,
    capabilities: Vec<Capability>,
}

impl WhoamiOutput {
    fn new(user: Option<&UserProfile>) -> Self {
        Self {
            uid: user.map(|u| u.uid.to_string()),
            role: user.map(|u| u.role),
            access_level: access_level(user),
            team_id: user.and_then(|u| u.team().cloned()),
            misconfigured: user.is_some_and(UserProfile::is_misconfigured),
            capabilities: user.map(|u| u.role.capabilities()).unwrap_or_default(),
        }
    }
}

impl FormattedOutput for WhoamiOutput {
    fn format_text(&self) -> String {
        let mut lines = Vec::new();
        match (&self.uid, self.role) {
            (Some(uid), Some(role)) => {
                let team = self
                    .team_id
                    .as_ref()
                    .map_or_else(|| "no team".to_string(), |t| format!("team {t}"));
                lines.push(format!("{uid} ({role}, {team})"));
            }
            _ => lines.push("signed out".to_string()),
        }
        lines.push(format!("access level: {}", self.access_level));
        if self.capabilities.is_empty() {
            lines.push("capabilities: none".to_string());
        } else {
            let names: Vec<_> = self.capabilities.iter().map(|c| c.as_str()).collect();
            lines.push(format!("capabilities: {}", names.join(", ")));
        }
        if self.misconfigured {
            lines.push(
                "warning: team-scoped role without a team; account is not fully configured"
                    .to_string(),
            );
        }
        lines.join("\n")
    }
}

impl WhoamiCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let snapshot = match &self.user {
            Some(_) => Snapshot::load(&ctx.snapshot_path).await?,
            None => Snapshot::default(),
        };
        let user = snapshot.user(self.user.as_deref())?;
        print_output(ctx, &WhoamiOutput::new(user))
    }
}
