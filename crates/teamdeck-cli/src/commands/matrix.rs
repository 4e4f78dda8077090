//! Matrix command implementation.

use clap::Parser;
use serde::Serialize;
use teamdeck_policy::{capability_matrix, Capability, Role};

use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::{print_output, table, FormattedOutput};

/// Print the role by capability grid
#[derive(Debug, Parser)]
pub struct MatrixCommand {}

#[derive(Debug, Serialize)]
struct MatrixRow {
    role: Role,
    capabilities: Vec<Capability>,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
struct MatrixOutput {
    rows: Vec<MatrixRow>,
}

impl FormattedOutput for MatrixOutput {
    fn format_text(&self) -> String {
        let mut header = vec!["capability"];
        header.extend(self.rows.iter().map(|row| row.role.as_str()));

        let rows: Vec<Vec<String>> = Capability::ALL
            .into_iter()
            .map(|capability| {
                let mut cells = vec![capability.to_string()];
                cells.extend(self.rows.iter().map(|row| {
                    if row.capabilities.contains(&capability) {
                        "yes".to_string()
                    } else {
                        "-".to_string()
                    }
                }));
                cells
            })
            .collect();

        table(&header, &rows)
    }
}

impl MatrixCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let rows = capability_matrix()
            .into_iter()
            .map(|(role, grid)| MatrixRow {
                role,
                capabilities: grid
                    .into_iter()
                    .filter_map(|(capability, granted)| granted.then_some(capability))
                    .collect(),
            })
            .collect();

        print_output(ctx, &MatrixOutput { rows })
    }
}
