//! Records the policy engine reasons about.
//!
//! These mirror the documents held by the realtime store. The engine only
//! ever reads them; ids are opaque partition keys.

use crate::role::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use teamdeck_common_core::{FileId, MeetingId, TaskId, TeamId, UserId};

/// Identity record of a signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub uid: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, rename = "photoURL", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<TeamId>,
}

impl UserProfile {
    pub fn new(uid: impl Into<UserId>, role: Role) -> Self {
        Self {
            uid: uid.into(),
            email: None,
            display_name: None,
            photo_url: None,
            role,
            team_id: None,
        }
    }

    pub fn with_team(mut self, team_id: impl Into<TeamId>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }

    /// The user's team, treating a blank id as no team.
    pub fn team(&self) -> Option<&TeamId> {
        self.team_id.as_ref().filter(|t| !t.is_empty())
    }

    /// Whether the user's team is exactly `team_id`.
    pub fn belongs_to(&self, team_id: &TeamId) -> bool {
        self.team().is_some_and(|t| t == team_id)
    }

    /// Whether `uid` identifies this user. Blank ids never match.
    pub fn is_user(&self, uid: &UserId) -> bool {
        !self.uid.is_empty() && &self.uid == uid
    }

    /// A team-scoped role without a team; callers surface this as
    /// "not fully configured".
    pub fn is_misconfigured(&self) -> bool {
        self.role.is_team_scoped() && self.team().is_none()
    }
}

/// Anything partitioned by team.
pub trait TeamScoped {
    fn team_id(&self) -> &TeamId;
}

/// A team and its membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub members: Vec<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Team {
    pub fn new(id: impl Into<TeamId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            members: Vec::new(),
            head_id: None,
            icon: None,
        }
    }

    pub fn has_member(&self, uid: &UserId) -> bool {
        self.members.contains(uid)
    }
}

impl TeamScoped for Team {
    fn team_id(&self) -> &TeamId {
        &self.id
    }
}

/// Task progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

/// The user a task is assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignee {
    pub uid: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub team_id: TeamId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<Assignee>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(
        id: impl Into<TaskId>,
        title: impl Into<String>,
        team_id: impl Into<TeamId>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            team_id: team_id.into(),
            assignee: None,
            status: TaskStatus::default(),
            due_date: None,
        }
    }

    pub fn assigned_to(mut self, uid: impl Into<UserId>) -> Self {
        self.assignee = Some(Assignee {
            uid: uid.into(),
            display_name: None,
        });
        self
    }

    pub fn assignee_uid(&self) -> Option<&UserId> {
        self.assignee.as_ref().map(|a| &a.uid)
    }
}

impl TeamScoped for Task {
    fn team_id(&self) -> &TeamId {
        &self.team_id
    }
}

/// An uploaded file's metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub id: FileId,
    pub name: String,
    pub team_id: TeamId,
    pub uploaded_by: UserId,
    #[serde(default)]
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<DateTime<Utc>>,
}

impl FileRecord {
    pub fn new(
        id: impl Into<FileId>,
        name: impl Into<String>,
        team_id: impl Into<TeamId>,
        uploaded_by: impl Into<UserId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            team_id: team_id.into(),
            uploaded_by: uploaded_by.into(),
            size: 0,
            content_type: None,
            uploaded_at: None,
        }
    }
}

impl TeamScoped for FileRecord {
    fn team_id(&self) -> &TeamId {
        &self.team_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: MeetingId,
    pub title: String,
    pub team_id: TeamId,
    pub scheduled_for: DateTime<Utc>,
    pub created_by: UserId,
}

impl TeamScoped for Meeting {
    fn team_id(&self) -> &TeamId {
        &self.team_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_team_is_no_team() {
        let profile = UserProfile::new("u1", Role::Volunteer).with_team("  ");
        assert!(profile.team().is_none());
        assert!(!profile.belongs_to(&TeamId::new("  ")));
        assert!(profile.is_misconfigured());
    }

    #[test]
    fn test_global_roles_are_never_misconfigured() {
        assert!(!UserProfile::new("u1", Role::Core).is_misconfigured());
        assert!(!UserProfile::new("u1", Role::Unassigned).is_misconfigured());
        assert!(!UserProfile::new("u1", Role::Head).with_team("t1").is_misconfigured());
    }

    #[test]
    fn test_profile_wire_format() {
        let json = r#"{
            "uid": "U9",
            "email": "sam@example.org",
            "displayName": "Sam",
            "photoURL": "https://example.org/sam.png",
            "role": "Semi-core",
            "teamId": "T1"
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.uid, UserId::new("U9"));
        assert_eq!(profile.role, Role::SemiCore);
        assert_eq!(profile.team(), Some(&TeamId::new("T1")));
        assert_eq!(profile.photo_url.as_deref(), Some("https://example.org/sam.png"));

        let minimal: UserProfile = serde_json::from_str(r#"{"uid":"U1","role":"Head"}"#).unwrap();
        assert!(minimal.team_id.is_none());
        assert_eq!(
            serde_json::to_string(&minimal).unwrap(),
            r#"{"uid":"U1","role":"Head"}"#
        );
    }

    #[test]
    fn test_task_wire_format() {
        let yaml = r#"
id: task-1
title: Book venue
teamId: T1
assignee:
  uid: U9
status: in-progress
"#;
        let task: Task = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.assignee_uid(), Some(&UserId::new("U9")));
        assert_eq!(task.team_id(), &TeamId::new("T1"));
    }

    #[test]
    fn test_blank_uid_never_matches() {
        let profile = UserProfile::new("", Role::Volunteer);
        assert!(!profile.is_user(&UserId::new("")));
    }
}
