//! Test utilities for Teamdeck crates.

use teamdeck_policy::{FileRecord, Role, Task, Team, UserProfile};

pub mod strategies;

/// Profile with an optional team.
pub fn profile(uid: &str, role: Role, team: Option<&str>) -> UserProfile {
    let profile = UserProfile::new(uid, role);
    match team {
        Some(team) => profile.with_team(team),
        None => profile,
    }
}

pub fn core(uid: &str) -> UserProfile {
    profile(uid, Role::Core, None)
}

pub fn semi_core(uid: &str) -> UserProfile {
    profile(uid, Role::SemiCore, None)
}

pub fn head(uid: &str, team: &str) -> UserProfile {
    profile(uid, Role::Head, Some(team))
}

pub fn volunteer(uid: &str, team: Option<&str>) -> UserProfile {
    profile(uid, Role::Volunteer, team)
}

pub fn unassigned(uid: &str) -> UserProfile {
    profile(uid, Role::Unassigned, None)
}

/// Task in `team`, optionally assigned.
pub fn task(id: &str, team: &str, assignee: Option<&str>) -> Task {
    let task = Task::new(id, format!("Task {id}"), team);
    match assignee {
        Some(uid) => task.assigned_to(uid),
        None => task,
    }
}

pub fn file(id: &str, team: &str, uploaded_by: &str) -> FileRecord {
    FileRecord::new(id, format!("{id}.pdf"), team, uploaded_by)
}

/// Teams named after their ids.
pub fn teams(ids: &[&str]) -> Vec<Team> {
    ids.iter().map(|id| Team::new(*id, *id)).collect()
}

/// Assert that a Result is Ok and return the value.
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a Result is Err and return the error.
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
