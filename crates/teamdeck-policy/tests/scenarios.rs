//! Decisions for concrete snapshots the UI runs into.

use teamdeck_policy::rules::{
    assignable_teams, can_change_task_status, file_scope, meeting_scope, upload_targets,
};
use teamdeck_policy::{Authorizer, PolicyError, Role, RoleChange, TeamId, Visibility};
use teamdeck_test_utils::{
    assert_err, assert_ok, core, file, head, profile, semi_core, task, teams, unassigned,
    volunteer,
};

#[test]
fn head_of_task_team_changes_status_of_someone_elses_task() {
    let user = head("U1", "T1");
    let task = task("task-1", "T1", Some("U9"));
    assert!(can_change_task_status(Some(&user), &task));
    assert_ok!(Authorizer::default().task_status_change(Some(&user), &task));
}

#[test]
fn assignee_changes_status_despite_team_mismatch() {
    let user = volunteer("U9", Some("T2"));
    let task = task("task-1", "T1", Some("U9"));
    assert!(can_change_task_status(Some(&user), &task));
}

#[test]
fn teammate_without_assignment_is_denied() {
    let user = volunteer("U7", Some("T1"));
    let task = task("task-1", "T1", Some("U9"));
    let err = assert_err!(Authorizer::default().task_status_change(Some(&user), &task));
    assert!(matches!(err, PolicyError::PermissionDenied { .. }));
}

#[test]
fn volunteer_without_team_sees_explicit_empty_state() {
    let files = vec![file("f1", "T1", "U1")];

    let lost = volunteer("U3", None);
    let placed = volunteer("U4", Some("T2"));

    let lost_view = file_scope(Some(&lost)).apply(&files);
    let placed_view = file_scope(Some(&placed)).apply(&files);

    assert_eq!(lost_view, Visibility::NoTeamAssigned);
    assert_eq!(placed_view, Visibility::Items(vec![]));
    assert_ne!(lost_view, placed_view);
}

#[test]
fn unassigned_users_have_no_grants() {
    let user = unassigned("U5");
    let all = teams(&["T1", "T2"]);
    assert!(assignable_teams(Some(&user), &all).is_empty());
    assert!(upload_targets(Some(&user), &all).is_empty());
    assert_eq!(
        meeting_scope(Some(&user)),
        teamdeck_policy::QueryScope::NoTeamAssigned
    );
    assert!(Authorizer::new(false)
        .require(Some(&user), teamdeck_policy::Capability::AssignTasks)
        .is_err());
}

#[test]
fn semi_core_assigns_into_any_team_but_cannot_manage_roles() {
    let user = semi_core("U2");
    let all = teams(&["T1", "T2", "T3"]);
    assert_eq!(assignable_teams(Some(&user), &all).len(), 3);

    let target = profile("U8", Role::Volunteer, Some("T1"));
    let change = RoleChange {
        uid: target.uid.clone(),
        role: Role::Volunteer,
        team_id: Some(TeamId::new("T2")),
    };
    let err = assert_err!(Authorizer::default().change_role(Some(&user), &target, &change));
    assert!(err.is_denial());

    let plan = assert_ok!(Authorizer::default().change_role(Some(&core("U0")), &target, &change));
    assert_eq!(plan.leave, Some(TeamId::new("T1")));
    assert_eq!(plan.join, Some(TeamId::new("T2")));
}
