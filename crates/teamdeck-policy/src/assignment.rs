//! Role and team assignment.
//!
//! The invariant "Head/Volunteer need a team, Core/Semi-core have none" is
//! enforced here and nowhere else. Writers run every role or team change
//! through [`normalize_role_team_assignment`] or the `Authorizer` guards
//! built on it.

use crate::model::{Team, UserProfile};
use crate::role::Role;
use serde::{Deserialize, Serialize};
use teamdeck_common_core::{TeamId, UserId};
use thiserror::Error;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignmentError {
    #[error("role {role} requires a team")]
    TeamRequired { role: Role },
}

/// Normalize the team stored alongside `role`.
///
/// Global roles always end up without a team. Team-scoped roles must come
/// with a non-blank team. `Unassigned` keeps a non-blank team if given.
pub fn normalize_role_team_assignment(
    role: Role,
    team_id: Option<TeamId>,
) -> Result<Option<TeamId>, AssignmentError> {
    let team_id = team_id.filter(|t| !t.is_empty());
    match role {
        Role::Core | Role::SemiCore => Ok(None),
        Role::Head | Role::Volunteer => team_id
            .map(Some)
            .ok_or(AssignmentError::TeamRequired { role }),
        Role::Unassigned => Ok(team_id),
    }
}

/// Request to create a user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 100))]
    pub display_name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<TeamId>,
}

/// Request to change a user's role and/or team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleChange {
    pub uid: UserId,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<TeamId>,
}

/// Team membership edits implied by a role/team change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipPlan {
    pub uid: UserId,
    /// Role stored on the profile.
    pub role: Role,
    /// Normalized team stored on the profile.
    pub team_id: Option<TeamId>,
    /// Team whose member list loses the user.
    pub leave: Option<TeamId>,
    /// Team whose member list gains the user.
    pub join: Option<TeamId>,
    /// Team whose head id must be cleared.
    pub step_down_as_head: Option<TeamId>,
    /// Team whose head id becomes the user.
    pub become_head_of: Option<TeamId>,
}

impl MembershipPlan {
    /// No team document needs to change.
    pub fn is_noop(&self) -> bool {
        self.leave.is_none()
            && self.join.is_none()
            && self.step_down_as_head.is_none()
            && self.become_head_of.is_none()
    }

    /// Apply the plan to the caller's copies of the affected teams.
    ///
    /// Teams not mentioned by the plan are untouched. A head id is only
    /// cleared if it still points at this user.
    pub fn apply_to(&self, teams: &mut [Team]) {
        for team in teams.iter_mut() {
            if self.leave.as_ref() == Some(&team.id) {
                team.members.retain(|m| m != &self.uid);
            }
            if self.step_down_as_head.as_ref() == Some(&team.id)
                && team.head_id.as_ref() == Some(&self.uid)
            {
                team.head_id = None;
            }
            if self.join.as_ref() == Some(&team.id) && !team.has_member(&self.uid) {
                team.members.push(self.uid.clone());
            }
            if self.become_head_of.as_ref() == Some(&team.id) {
                team.head_id = Some(self.uid.clone());
            }
        }
    }
}

/// Work out the membership edits for moving `current` to `role`/`team_id`.
pub fn plan_membership_change(
    current: &UserProfile,
    role: Role,
    team_id: Option<TeamId>,
) -> Result<MembershipPlan, AssignmentError> {
    let next_team = normalize_role_team_assignment(role, team_id)?;
    let prev_team = current.team().cloned();
    let moved = prev_team != next_team;

    let was_head = current.role == Role::Head && prev_team.is_some();
    let will_head = role == Role::Head;

    Ok(MembershipPlan {
        uid: current.uid.clone(),
        role,
        team_id: next_team.clone(),
        leave: if moved { prev_team.clone() } else { None },
        join: if moved { next_team.clone() } else { None },
        step_down_as_head: if was_head && (moved || !will_head) {
            prev_team
        } else {
            None
        },
        become_head_of: if will_head && (moved || !was_head) {
            next_team
        } else {
            None
        },
    })
}
