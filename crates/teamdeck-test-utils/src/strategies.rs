//! Proptest strategies for policy inputs.

use proptest::prelude::*;
use teamdeck_policy::{FileRecord, Role, Task, TeamId, UserProfile};

pub fn arb_role() -> impl Strategy<Value = Role> {
    prop::sample::select(Role::ALL.to_vec())
}

/// Small id space so generated profiles and resources collide often.
pub fn arb_id() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["", "A", "B", "C"]).prop_map(String::from)
}

pub fn arb_team_id() -> impl Strategy<Value = Option<TeamId>> {
    prop::option::of(arb_id().prop_map(TeamId::new))
}

pub fn arb_profile() -> impl Strategy<Value = UserProfile> {
    (arb_id(), arb_role(), arb_team_id()).prop_map(|(uid, role, team_id)| UserProfile {
        team_id,
        ..UserProfile::new(uid, role)
    })
}

/// A profile or nobody signed in.
pub fn arb_user() -> impl Strategy<Value = Option<UserProfile>> {
    prop::option::of(arb_profile())
}

pub fn arb_task() -> impl Strategy<Value = Task> {
    (arb_id(), arb_id(), prop::option::of(arb_id())).prop_map(|(id, team, assignee)| {
        let task = Task::new(id, "generated", team);
        match assignee {
            Some(uid) => task.assigned_to(uid),
            None => task,
        }
    })
}

pub fn arb_file() -> impl Strategy<Value = FileRecord> {
    (arb_id(), arb_id(), arb_id())
        .prop_map(|(id, team, uploader)| FileRecord::new(id, "generated.bin", team, uploader))
}
