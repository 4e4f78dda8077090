//! List command implementation.

use clap::{Parser, ValueEnum};
use serde::Serialize;
use teamdeck_policy::rules::{file_scope, meeting_scope, task_scope, team_scope};
use teamdeck_policy::{QueryScope, Visibility};

use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::{print_output, table, FormattedOutput};
use crate::snapshot::Snapshot;

/// Record collections that can be listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Files,
    Tasks,
    Meetings,
    Teams,
}

/// List the records a user may see
#[derive(Debug, Parser)]
pub struct ListCommand {
    /// Collection to list
    #[arg(value_enum)]
    pub kind: ListKind,

    /// User id to evaluate; omit to evaluate a signed-out visitor
    #[arg(short, long)]
    pub user: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Row {
    id: String,
    name: String,
    team_id: String,
}

#[derive(Debug, Serialize)]
struct ListOutput {
    kind: ListKind,
    scope: QueryScope,
    visibility: Visibility<Row>,
}

impl FormattedOutput for ListOutput {
    fn format_text(&self) -> String {
        match &self.visibility {
            Visibility::SignedOut => "signed out".to_string(),
            Visibility::NoTeamAssigned => "no team assigned".to_string(),
            Visibility::Items(rows) if rows.is_empty() => "nothing to show".to_string(),
            Visibility::Items(rows) => {
                let cells: Vec<Vec<String>> = rows
                    .iter()
                    .map(|row| vec![row.id.clone(), row.name.clone(), row.team_id.clone()])
                    .collect();
                table(&["id", "name", "team"], &cells)
            }
        }
    }
}

impl ListCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let snapshot = Snapshot::load(&ctx.snapshot_path).await?;
        let user = snapshot.user(self.user.as_deref())?;

        let (scope, visibility) = match self.kind {
            ListKind::Files => {
                let scope = file_scope(user);
                let visibility = scope.apply(&snapshot.files).map(|f| Row {
                    id: f.id.to_string(),
                    name: f.name.clone(),
                    team_id: f.team_id.to_string(),
                });
                (scope, visibility)
            }
            ListKind::Tasks => {
                let scope = task_scope(user);
                let visibility = scope.apply(&snapshot.tasks).map(|t| Row {
                    id: t.id.to_string(),
                    name: t.title.clone(),
                    team_id: t.team_id.to_string(),
                });
                (scope, visibility)
            }
            ListKind::Meetings => {
                let scope = meeting_scope(user);
                let visibility = scope.apply(&snapshot.meetings).map(|m| Row {
                    id: m.id.to_string(),
                    name: m.title.clone(),
                    team_id: m.team_id.to_string(),
                });
                (scope, visibility)
            }
            ListKind::Teams => {
                let scope = team_scope(user);
                let visibility = scope.apply(&snapshot.teams).map(|t| Row {
                    id: t.id.to_string(),
                    name: t.name.clone(),
                    team_id: t.id.to_string(),
                });
                (scope, visibility)
            }
        };

        print_output(
            ctx,
            &ListOutput {
                kind: self.kind,
                scope,
                visibility,
            },
        )
    }
}
