//! CLI error handling.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use teamdeck_common_config::ConfigError;
use teamdeck_policy::PolicyError;
use thiserror::Error;

/// CLI error type with context
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{message}")]
    Config {
        message: String,
        #[source]
        source: Option<ConfigError>,
        hint: Option<String>,
    },

    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: io::Error,
        path: Option<PathBuf>,
    },

    #[error("{message}")]
    Snapshot { message: String, path: PathBuf },

    #[error("{message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    #[error("{message}")]
    NotFound {
        message: String,
        resource_type: String,
        resource_name: String,
    },

    #[error("{source}")]
    Permission {
        #[source]
        source: PolicyError,
    },

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Get the error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "E001",
            Self::Io { .. } => "E002",
            Self::Snapshot { .. } => "E003",
            Self::Validation { .. } => "E004",
            Self::NotFound { .. } => "E005",
            Self::Permission { .. } => "E006",
            Self::Other(_) => "E999",
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        let code = match self {
            Self::Config { .. } => 2,
            Self::Io { .. } => 3,
            Self::Snapshot { .. } => 4,
            Self::Validation { .. } => 5,
            Self::NotFound { .. } => 6,
            Self::Permission { .. } => 7,
            Self::Other(_) => 1,
        };
        ExitCode::from(code)
    }

    /// Get hint for this error if available
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Config { hint, .. } => hint.as_deref(),
            Self::Snapshot { .. } => {
                Some("pass --snapshot or set snapshot.path in .teamdeck/config.yaml")
            }
            _ => None,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>, field: Option<&str>) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.map(String::from),
        }
    }

    /// Create a not found error
    pub fn not_found(resource_type: impl Into<String>, resource_name: impl Into<String>) -> Self {
        let resource_type = resource_type.into();
        let resource_name = resource_name.into();
        Self::NotFound {
            message: format!("{resource_type} not found: {resource_name}"),
            resource_type,
            resource_name,
        }
    }

    /// Create an IO error with path
    pub fn io_with_path(
        message: impl Into<String>,
        source: io::Error,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source,
            path: Some(path.into()),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: err,
            path: None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        let hint = match &err {
            ConfigError::EnvVarNotFound { var } => Some(format!(
                "export {var} or give it a default with ${{{var}:-value}}"
            )),
            ConfigError::ParseError { .. } => {
                Some("check .teamdeck/config.yaml for YAML syntax errors".to_string())
            }
            _ => None,
        };
        Self::Config {
            message: err.to_string(),
            source: Some(err),
            hint,
        }
    }
}

impl From<PolicyError> for CliError {
    fn from(err: PolicyError) -> Self {
        match err {
            PolicyError::Assignment(e) => Self::validation(e.to_string(), Some("team")),
            PolicyError::Validation(e) => Self::validation(e.to_string(), None),
            mismatch @ PolicyError::TargetMismatch { .. } => {
                Self::validation(mismatch.to_string(), Some("uid"))
            }
            denial => Self::Permission { source: denial },
        }
    }
}

impl From<teamdeck_common_core::Error> for CliError {
    fn from(err: teamdeck_common_core::Error) -> Self {
        match err {
            teamdeck_common_core::Error::NotFound { kind, id } => Self::not_found(kind, id),
            teamdeck_common_core::Error::Io(source) => Self::from(source),
            other => Self::Other(anyhow::Error::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamdeck_policy::{AssignmentError, Authorizer, Capability, Role, UserId};

    #[test]
    fn test_policy_denial_maps_to_permission() {
        let err = Authorizer::new(false)
            .require(None, Capability::ManageTeams)
            .unwrap_err();
        let cli: CliError = err.into();
        assert_eq!(cli.code(), "E006");
        assert!(cli.to_string().contains("no signed-in user"));
    }

    #[test]
    fn test_assignment_error_maps_to_validation() {
        let err = PolicyError::Assignment(AssignmentError::TeamRequired { role: Role::Head });
        let cli: CliError = err.into();
        assert!(matches!(
            cli,
            CliError::Validation { ref field, .. } if field.as_deref() == Some("team")
        ));
        assert_eq!(cli.to_string(), "role Head requires a team");
    }

    #[test]
    fn test_target_mismatch_maps_to_validation() {
        let err = PolicyError::TargetMismatch {
            requested: UserId::new("U-OTHER"),
            target: UserId::new("U5"),
        };
        let cli: CliError = err.into();
        assert_eq!(cli.code(), "E004");
        assert!(matches!(
            cli,
            CliError::Validation { ref field, .. } if field.as_deref() == Some("uid")
        ));
    }

    #[test]
    fn test_core_not_found_maps_to_not_found() {
        let cli: CliError = teamdeck_common_core::Error::not_found("user", "U1").into();
        assert_eq!(cli.code(), "E005");
        assert_eq!(cli.to_string(), "user not found: U1");
    }

    #[test]
    fn test_config_error_hint() {
        let cli: CliError = ConfigError::EnvVarNotFound { var: "SNAP".into() }.into();
        assert_eq!(cli.hint(), Some("export SNAP or give it a default with ${SNAP:-value}"));
    }
}
