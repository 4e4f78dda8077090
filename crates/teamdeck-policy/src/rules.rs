//! Resource-scoped rules.
//!
//! These combine a role predicate with an equality test against a
//! resource's team or owner. The caller always supplies the resource; the
//! rules never look anything up.

use crate::model::{FileRecord, Task, Team, TeamScoped, UserProfile};
use crate::predicates::{
    can_assign_tasks, can_chat_in_all_teams, can_see_all_files, can_see_all_tasks,
    can_see_all_teams, can_upload_to_any_team, is_head,
};
use serde::Serialize;
use teamdeck_common_core::TeamId;

/// Whether `user` may move `task` to another status.
///
/// Granted to global task viewers, to the head of the task's team, and to
/// the task's assignee regardless of team.
pub fn can_change_task_status(user: Option<&UserProfile>, task: &Task) -> bool {
    let Some(profile) = user else {
        return false;
    };

    can_see_all_tasks(user)
        || (is_head(user) && profile.belongs_to(&task.team_id))
        || task.assignee_uid().is_some_and(|uid| profile.is_user(uid))
}

/// Whether `user` may edit a task's fields.
pub fn can_edit_task(user: Option<&UserProfile>) -> bool {
    can_assign_tasks(user)
}

/// Whether `user` may hand a task to someone else.
pub fn can_reassign_task(user: Option<&UserProfile>) -> bool {
    can_assign_tasks(user)
}

/// Teams `user` may pick when creating or editing a task.
pub fn assignable_teams<'a>(user: Option<&UserProfile>, teams: &'a [Team]) -> Vec<&'a Team> {
    if !can_assign_tasks(user) {
        return Vec::new();
    }
    let scope = team_scope(user);
    teams.iter().filter(|team| scope.admits(*team)).collect()
}

/// Whether `user` may delete or rename `file`.
pub fn can_manage_file(user: Option<&UserProfile>, file: &FileRecord) -> bool {
    let Some(profile) = user else {
        return false;
    };
    can_see_all_files(user) || profile.is_user(&file.uploaded_by)
}

/// Teams `user` may upload files into.
pub fn upload_targets<'a>(user: Option<&UserProfile>, teams: &'a [Team]) -> Vec<&'a Team> {
    let scope = QueryScope::for_user(user, can_upload_to_any_team(user));
    teams.iter().filter(|team| scope.admits(*team)).collect()
}

/// Whether `user` may post in `team_id`'s chat.
pub fn can_chat_in_team(user: Option<&UserProfile>, team_id: &TeamId) -> bool {
    can_chat_in_all_teams(user) || user.is_some_and(|profile| profile.belongs_to(team_id))
}

/// Which files `user` may list.
pub fn file_scope(user: Option<&UserProfile>) -> QueryScope {
    QueryScope::for_user(user, can_see_all_files(user))
}

/// Which tasks `user` may list.
pub fn task_scope(user: Option<&UserProfile>) -> QueryScope {
    QueryScope::for_user(user, can_see_all_tasks(user))
}

/// Which teams `user` may list.
pub fn team_scope(user: Option<&UserProfile>) -> QueryScope {
    QueryScope::for_user(user, can_see_all_teams(user))
}

/// Which meetings `user` may list. Meetings follow team visibility.
pub fn meeting_scope(user: Option<&UserProfile>) -> QueryScope {
    QueryScope::for_user(user, can_see_all_teams(user))
}

/// Partition filter for a listing query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "scope", content = "teamId", rename_all = "kebab-case")]
pub enum QueryScope {
    /// Every team.
    All,
    /// Only records of this team.
    Team(TeamId),
    /// Signed in, but neither a global grant nor a team.
    NoTeamAssigned,
    /// Nobody signed in.
    SignedOut,
}

impl QueryScope {
    fn for_user(user: Option<&UserProfile>, sees_all: bool) -> Self {
        match user {
            None => QueryScope::SignedOut,
            Some(_) if sees_all => QueryScope::All,
            Some(profile) => profile
                .team()
                .cloned()
                .map_or(QueryScope::NoTeamAssigned, QueryScope::Team),
        }
    }

    /// Whether the scope lets `record` through.
    pub fn admits<R: TeamScoped + ?Sized>(&self, record: &R) -> bool {
        match self {
            QueryScope::All => true,
            QueryScope::Team(team_id) => record.team_id() == team_id,
            QueryScope::NoTeamAssigned | QueryScope::SignedOut => false,
        }
    }

    /// The team filter to put on a store query, if the query should run
    /// at all. `None` with [`QueryScope::All`] means "unfiltered".
    pub fn team_filter(&self) -> Option<&TeamId> {
        match self {
            QueryScope::Team(team_id) => Some(team_id),
            QueryScope::All | QueryScope::NoTeamAssigned | QueryScope::SignedOut => None,
        }
    }

    /// True when the listing must be shown as an explicit empty state
    /// instead of being queried.
    pub fn is_explicitly_empty(&self) -> bool {
        matches!(self, QueryScope::NoTeamAssigned | QueryScope::SignedOut)
    }

    /// Filter `records` through the scope.
    pub fn apply<'a, R, I>(&self, records: I) -> Visibility<&'a R>
    where
        R: TeamScoped + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        match self {
            QueryScope::NoTeamAssigned => Visibility::NoTeamAssigned,
            QueryScope::SignedOut => Visibility::SignedOut,
            QueryScope::All | QueryScope::Team(_) => Visibility::Items(
                records
                    .into_iter()
                    .filter(|record| self.admits(*record))
                    .collect(),
            ),
        }
    }
}

/// Result of a scoped listing.
///
/// `Items(vec![])` means "nothing in scope"; the other variants are the
/// explicit states a caller must render differently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "items", rename_all = "kebab-case")]
pub enum Visibility<T> {
    Items(Vec<T>),
    NoTeamAssigned,
    SignedOut,
}

impl<T> Visibility<T> {
    pub fn items(&self) -> &[T] {
        match self {
            Visibility::Items(items) => items,
            Visibility::NoTeamAssigned | Visibility::SignedOut => &[],
        }
    }

    /// Transform each visible item, keeping the explicit empty states.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Visibility<U> {
        match self {
            Visibility::Items(items) => Visibility::Items(items.into_iter().map(f).collect()),
            Visibility::NoTeamAssigned => Visibility::NoTeamAssigned,
            Visibility::SignedOut => Visibility::SignedOut,
        }
    }
}
