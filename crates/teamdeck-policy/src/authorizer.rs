//! Guards in front of mutations.
//!
//! [`Authorizer`] turns the boolean rules into `Result`s and records each
//! decision in the audit log. It carries configuration only; every call
//! re-evaluates the rule against the snapshot it is handed, so callers
//! should invoke it immediately before writing.

use crate::assignment::{
    normalize_role_team_assignment, plan_membership_change, MembershipPlan, NewUser, RoleChange,
};
use crate::audit::AuthzDecision;
use crate::capability::{permits, Capability};
use crate::error::PolicyError;
use crate::model::{FileRecord, Task, UserProfile};
use crate::predicates::{can_create_users, can_manage_permissions};
use crate::rules::{can_change_task_status, can_edit_task, can_manage_file};
use std::fmt;
use validator::Validate;

/// A guarded operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ChangeTaskStatus,
    EditTask,
    ChangeFile,
    CreateUser,
    ChangeRole,
    Require(Capability),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::ChangeTaskStatus => f.write_str("task.status"),
            Action::EditTask => f.write_str("task.edit"),
            Action::ChangeFile => f.write_str("file.change"),
            Action::CreateUser => f.write_str("user.create"),
            Action::ChangeRole => f.write_str("user.role"),
            Action::Require(capability) => write!(f, "require:{capability}"),
        }
    }
}

/// Decision guard with audit logging.
#[derive(Debug, Clone, Copy)]
pub struct Authorizer {
    log_grants: bool,
}

impl Default for Authorizer {
    fn default() -> Self {
        Self { log_grants: true }
    }
}

impl Authorizer {
    /// With `log_grants` false only denials reach the audit log.
    pub fn new(log_grants: bool) -> Self {
        Self { log_grants }
    }

    fn decide(
        &self,
        user: Option<&UserProfile>,
        action: Action,
        resource_id: Option<&str>,
        granted: bool,
        reason: &str,
    ) -> Result<(), PolicyError> {
        let reason = match (granted, user) {
            (true, _) => None,
            (false, None) => Some("no signed-in user".to_string()),
            (false, Some(_)) => Some(reason.to_string()),
        };
        let decision = AuthzDecision::new(user, action, resource_id, granted, reason.clone());
        if !granted || self.log_grants {
            decision.log();
        }

        match (granted, user) {
            (true, _) => Ok(()),
            (false, None) => Err(PolicyError::SignedOut { action }),
            (false, Some(_)) => Err(PolicyError::PermissionDenied {
                action,
                reason: reason.unwrap_or_default(),
            }),
        }
    }

    /// Require a role-only capability.
    pub fn require(
        &self,
        user: Option<&UserProfile>,
        capability: Capability,
    ) -> Result<(), PolicyError> {
        self.decide(
            user,
            Action::Require(capability),
            None,
            permits(user, capability),
            "role lacks capability",
        )
    }

    pub fn task_status_change(
        &self,
        user: Option<&UserProfile>,
        task: &Task,
    ) -> Result<(), PolicyError> {
        self.decide(
            user,
            Action::ChangeTaskStatus,
            Some(task.id.as_str()),
            can_change_task_status(user, task),
            "not a global task viewer, head of the task's team, or its assignee",
        )
    }

    /// Guard editing, reassigning or creating a task. `task` is `None`
    /// when creating.
    pub fn task_edit(
        &self,
        user: Option<&UserProfile>,
        task: Option<&Task>,
    ) -> Result<(), PolicyError> {
        self.decide(
            user,
            Action::EditTask,
            task.map(|t| t.id.as_str()),
            can_edit_task(user),
            "role cannot assign tasks",
        )
    }

    /// Guard deleting or renaming a file.
    pub fn file_change(
        &self,
        user: Option<&UserProfile>,
        file: &FileRecord,
    ) -> Result<(), PolicyError> {
        self.decide(
            user,
            Action::ChangeFile,
            Some(file.id.as_str()),
            can_manage_file(user, file),
            "not a global file viewer or the uploader",
        )
    }

    /// Guard user creation and return the request with its team normalized.
    pub fn create_user(
        &self,
        actor: Option<&UserProfile>,
        request: NewUser,
    ) -> Result<NewUser, PolicyError> {
        self.decide(
            actor,
            Action::CreateUser,
            Some(request.email.as_str()),
            can_create_users(actor),
            "role cannot create users",
        )?;
        request.validate()?;

        let team_id = normalize_role_team_assignment(request.role, request.team_id)?;
        Ok(NewUser { team_id, ..request })
    }

    /// Guard a role or team change of `target` and plan the membership edits.
    ///
    /// `change.uid` must name `target`; the permission check runs first.
    pub fn change_role(
        &self,
        actor: Option<&UserProfile>,
        target: &UserProfile,
        change: &RoleChange,
    ) -> Result<MembershipPlan, PolicyError> {
        self.decide(
            actor,
            Action::ChangeRole,
            Some(target.uid.as_str()),
            can_manage_permissions(actor),
            "role cannot manage permissions",
        )?;

        if change.uid != target.uid {
            return Err(PolicyError::TargetMismatch {
                requested: change.uid.clone(),
                target: target.uid.clone(),
            });
        }

        Ok(plan_membership_change(
            target,
            change.role,
            change.team_id.clone(),
        )?)
    }
}
