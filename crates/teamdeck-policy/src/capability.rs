//! Capability catalogue.
//!
//! Each `can_*` predicate is backed by one [`Capability`]. The grant table
//! lives in [`Capability::granted_to`] and is matched exhaustively on both
//! the capability's grant class and the role.

use crate::model::UserProfile;
use crate::role::Role;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Global, role-only permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    ManagePermissions,
    CreateUsers,
    CreateTeams,
    ManageTeams,
    AssignTasks,
    CreateTasks,
    AccessTeamsPage,
    SeeAllTeams,
    SeeAllTasks,
    SeeAllFiles,
    UploadToAnyTeam,
    ChatInAllTeams,
}

/// Which roles a capability is granted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grant {
    /// Core only.
    CoreOnly,
    /// Core, Semi-core and Head.
    Leads,
    /// Core and Semi-core.
    Global,
}

impl Capability {
    pub const ALL: [Capability; 12] = [
        Capability::ManagePermissions,
        Capability::CreateUsers,
        Capability::CreateTeams,
        Capability::ManageTeams,
        Capability::AssignTasks,
        Capability::CreateTasks,
        Capability::AccessTeamsPage,
        Capability::SeeAllTeams,
        Capability::SeeAllTasks,
        Capability::SeeAllFiles,
        Capability::UploadToAnyTeam,
        Capability::ChatInAllTeams,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Capability::ManagePermissions => "manage-permissions",
            Capability::CreateUsers => "create-users",
            Capability::CreateTeams => "create-teams",
            Capability::ManageTeams => "manage-teams",
            Capability::AssignTasks => "assign-tasks",
            Capability::CreateTasks => "create-tasks",
            Capability::AccessTeamsPage => "access-teams-page",
            Capability::SeeAllTeams => "see-all-teams",
            Capability::SeeAllTasks => "see-all-tasks",
            Capability::SeeAllFiles => "see-all-files",
            Capability::UploadToAnyTeam => "upload-to-any-team",
            Capability::ChatInAllTeams => "chat-in-all-teams",
        }
    }

    fn grant(self) -> Grant {
        match self {
            Capability::ManagePermissions
            | Capability::CreateUsers
            | Capability::CreateTeams
            | Capability::ManageTeams => Grant::CoreOnly,
            Capability::AssignTasks | Capability::CreateTasks | Capability::AccessTeamsPage => {
                Grant::Leads
            }
            Capability::SeeAllTeams
            | Capability::SeeAllTasks
            | Capability::SeeAllFiles
            | Capability::UploadToAnyTeam
            | Capability::ChatInAllTeams => Grant::Global,
        }
    }

    /// Whether `role` holds this capability.
    pub fn granted_to(self, role: Role) -> bool {
        match (self.grant(), role) {
            (_, Role::Core) => true,
            (Grant::Leads | Grant::Global, Role::SemiCore) => true,
            (Grant::Leads, Role::Head) => true,
            (Grant::CoreOnly, Role::SemiCore)
            | (Grant::CoreOnly | Grant::Global, Role::Head)
            | (_, Role::Volunteer | Role::Unassigned) => false,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a capability name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown capability: {0:?}")]
pub struct CapabilityParseError(pub String);

impl FromStr for Capability {
    type Err = CapabilityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Capability::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CapabilityParseError(s.to_string()))
    }
}

impl Role {
    /// Capabilities held by this role, in catalogue order.
    pub fn capabilities(self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|c| c.granted_to(self))
            .collect()
    }
}

/// Whether `user` holds `capability`. An absent profile holds nothing.
pub fn permits(user: Option<&UserProfile>, capability: Capability) -> bool {
    user.is_some_and(|profile| capability.granted_to(profile.role))
}

/// The full role by capability grid, rows in [`Role::ALL`] order.
pub fn capability_matrix() -> Vec<(Role, Vec<(Capability, bool)>)> {
    Role::ALL
        .into_iter()
        .map(|role| {
            let row = Capability::ALL
                .into_iter()
                .map(|c| (c, c.granted_to(role)))
                .collect();
            (role, row)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_names_roundtrip() {
        for capability in Capability::ALL {
            assert_eq!(capability.as_str().parse::<Capability>().unwrap(), capability);
            let json = serde_json::to_string(&capability).unwrap();
            assert_eq!(json, format!("\"{}\"", capability.as_str()));
        }
        assert!("Manage-Permissions".parse::<Capability>().is_err());
    }

    #[test]
    fn test_role_capability_counts() {
        assert_eq!(Role::Core.capabilities().len(), Capability::ALL.len());
        assert_eq!(Role::SemiCore.capabilities().len(), 8);
        assert_eq!(
            Role::Head.capabilities(),
            vec![
                Capability::AssignTasks,
                Capability::CreateTasks,
                Capability::AccessTeamsPage
            ]
        );
        assert!(Role::Volunteer.capabilities().is_empty());
        assert!(Role::Unassigned.capabilities().is_empty());
    }

    #[test]
    fn test_matrix_matches_granted_to() {
        let matrix = capability_matrix();
        assert_eq!(matrix.len(), Role::ALL.len());
        for (role, row) in matrix {
            assert_eq!(row.len(), Capability::ALL.len());
            for (capability, granted) in row {
                assert_eq!(granted, capability.granted_to(role));
            }
        }
    }

    #[test]
    fn test_permits_absent_profile() {
        for capability in Capability::ALL {
            assert!(!permits(None, capability));
        }
    }
}
