//! Command implementations.

mod check;
mod list;
mod matrix;
mod normalize;
mod task_status;
mod whoami;

pub use check::CheckCommand;
pub use list::{ListCommand, ListKind};
pub use matrix::MatrixCommand;
pub use normalize::NormalizeCommand;
pub use task_status::TaskStatusCommand;
pub use whoami::WhoamiCommand;

use serde::Serialize;
use teamdeck_common_log::spans::{decision_span, record_error};
use teamdeck_policy::{PolicyError, UserProfile};

use crate::output::FormattedOutput;

/// Run a policy guard inside a decision span, recording a refusal on it.
pub(crate) fn guarded<T>(
    action: impl ToString,
    user: Option<&UserProfile>,
    guard: impl FnOnce() -> Result<T, PolicyError>,
) -> Result<T, PolicyError> {
    let span = decision_span(&action.to_string(), user.map_or("-", |u| u.uid.as_str()));
    let _entered = span.enter();
    guard().map_err(|e| {
        record_error(&e);
        e
    })
}

/// Outcome of a guarded check that was granted.
#[derive(Debug, Serialize)]
pub struct GrantedOutput {
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    pub granted: bool,
}

impl GrantedOutput {
    pub fn new(action: impl ToString, resource_id: Option<&str>) -> Self {
        Self {
            action: action.to_string(),
            resource_id: resource_id.map(String::from),
            granted: true,
        }
    }
}

impl FormattedOutput for GrantedOutput {
    fn format_text(&self) -> String {
        match &self.resource_id {
            Some(id) => format!("granted: {} on {}", self.action, id),
            None => format!("granted: {}", self.action),
        }
    }
}
