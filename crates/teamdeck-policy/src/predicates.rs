//! Role predicates.
//!
//! Every function accepts `None` for "nobody signed in" and answers with
//! the least-privileged value. None of them panic or inspect anything but
//! the profile's role.

use crate::capability::{permits, Capability};
use crate::model::UserProfile;
use crate::role::{AccessLevel, Role};

fn has_role(user: Option<&UserProfile>, role: Role) -> bool {
    user.is_some_and(|profile| profile.role == role)
}

pub fn is_core(user: Option<&UserProfile>) -> bool {
    has_role(user, Role::Core)
}

pub fn is_semi_core(user: Option<&UserProfile>) -> bool {
    has_role(user, Role::SemiCore)
}

pub fn is_head(user: Option<&UserProfile>) -> bool {
    has_role(user, Role::Head)
}

pub fn is_volunteer(user: Option<&UserProfile>) -> bool {
    has_role(user, Role::Volunteer)
}

pub fn can_manage_permissions(user: Option<&UserProfile>) -> bool {
    permits(user, Capability::ManagePermissions)
}

pub fn can_create_users(user: Option<&UserProfile>) -> bool {
    permits(user, Capability::CreateUsers)
}

pub fn can_create_teams(user: Option<&UserProfile>) -> bool {
    permits(user, Capability::CreateTeams)
}

pub fn can_manage_teams(user: Option<&UserProfile>) -> bool {
    permits(user, Capability::ManageTeams)
}

pub fn can_assign_tasks(user: Option<&UserProfile>) -> bool {
    permits(user, Capability::AssignTasks)
}

pub fn can_create_tasks(user: Option<&UserProfile>) -> bool {
    permits(user, Capability::CreateTasks)
}

pub fn can_see_all_teams(user: Option<&UserProfile>) -> bool {
    permits(user, Capability::SeeAllTeams)
}

pub fn can_see_all_tasks(user: Option<&UserProfile>) -> bool {
    permits(user, Capability::SeeAllTasks)
}

pub fn can_see_all_files(user: Option<&UserProfile>) -> bool {
    permits(user, Capability::SeeAllFiles)
}

pub fn can_upload_to_any_team(user: Option<&UserProfile>) -> bool {
    permits(user, Capability::UploadToAnyTeam)
}

pub fn can_chat_in_all_teams(user: Option<&UserProfile>) -> bool {
    permits(user, Capability::ChatInAllTeams)
}

pub fn can_access_teams_page(user: Option<&UserProfile>) -> bool {
    permits(user, Capability::AccessTeamsPage)
}

/// The single access level of `user`.
///
/// Checked in priority order core, semi-core, head, volunteer so the
/// answer stays well defined whatever the profile holds.
pub fn access_level(user: Option<&UserProfile>) -> AccessLevel {
    if is_core(user) {
        AccessLevel::Core
    } else if is_semi_core(user) {
        AccessLevel::SemiCore
    } else if is_head(user) {
        AccessLevel::Head
    } else if is_volunteer(user) {
        AccessLevel::Volunteer
    } else {
        AccessLevel::None
    }
}
