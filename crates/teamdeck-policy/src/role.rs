//! Roles and access levels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Access tier of a user.
///
/// `Core` and `SemiCore` are global; `Head` and `Volunteer` are scoped to
/// the user's team. Roles are a set of capabilities, not a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Core")]
    Core,
    #[serde(rename = "Semi-core")]
    SemiCore,
    #[serde(rename = "Head")]
    Head,
    #[serde(rename = "Volunteer")]
    Volunteer,
    #[serde(rename = "Unassigned")]
    Unassigned,
}

impl Role {
    /// Every role, in privilege-check order.
    pub const ALL: [Role; 5] = [
        Role::Core,
        Role::SemiCore,
        Role::Head,
        Role::Volunteer,
        Role::Unassigned,
    ];

    /// Stored name of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Core => "Core",
            Role::SemiCore => "Semi-core",
            Role::Head => "Head",
            Role::Volunteer => "Volunteer",
            Role::Unassigned => "Unassigned",
        }
    }

    /// Whether the role's grants apply across all teams.
    pub fn is_global(self) -> bool {
        match self {
            Role::Core | Role::SemiCore => true,
            Role::Head | Role::Volunteer | Role::Unassigned => false,
        }
    }

    /// Whether the role must be paired with a team.
    pub fn is_team_scoped(self) -> bool {
        match self {
            Role::Head | Role::Volunteer => true,
            Role::Core | Role::SemiCore | Role::Unassigned => false,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a role name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0:?}")]
pub struct RoleParseError(pub String);

impl FromStr for Role {
    type Err = RoleParseError;

    /// Exact match on the stored name; no case folding or aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| RoleParseError(s.to_string()))
    }
}

/// Coarse access level reported to UI collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessLevel {
    Core,
    SemiCore,
    Head,
    Volunteer,
    None,
}

impl AccessLevel {
    /// Literal string of the level.
    pub fn as_str(self) -> &'static str {
        match self {
            AccessLevel::Core => "core",
            AccessLevel::SemiCore => "semi-core",
            AccessLevel::Head => "head",
            AccessLevel::Volunteer => "volunteer",
            AccessLevel::None => "none",
        }
    }
}

impl From<Role> for AccessLevel {
    fn from(role: Role) -> Self {
        match role {
            Role::Core => AccessLevel::Core,
            Role::SemiCore => AccessLevel::SemiCore,
            Role::Head => AccessLevel::Head,
            Role::Volunteer => AccessLevel::Volunteer,
            Role::Unassigned => AccessLevel::None,
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
