//! Black-box tests for the `teamdeck` binary.

mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    TestContext::new()
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("matrix"))
        .stdout(predicate::str::contains("task-status"))
        .stdout(predicate::str::contains("normalize"));
}

#[test]
fn test_matrix_text() {
    TestContext::new()
        .command()
        .arg("matrix")
        .assert()
        .success()
        .stdout(predicate::str::contains("Semi-core"))
        .stdout(predicate::str::contains("manage-permissions"))
        .stdout(predicate::str::contains("upload-to-any-team"));
}

#[test]
fn test_matrix_json_rows() {
    let output = TestContext::new()
        .command()
        .args(["--format", "json", "matrix"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 5);

    let core = &rows[0];
    assert_eq!(core["role"], "Core");
    assert_eq!(core["capabilities"].as_array().unwrap().len(), 12);

    let unassigned = rows.iter().find(|r| r["role"] == "Unassigned").unwrap();
    assert!(unassigned["capabilities"].as_array().unwrap().is_empty());
}

#[test]
fn test_whoami_head() {
    TestContext::new()
        .with_snapshot()
        .args(["whoami", "--user", "head-a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("head-a (Head, team A)"))
        .stdout(predicate::str::contains("access level: head"))
        .stdout(predicate::str::contains("assign-tasks"));
}

#[test]
fn test_whoami_signed_out() {
    TestContext::new()
        .command()
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("signed out"))
        .stdout(predicate::str::contains("access level: none"))
        .stdout(predicate::str::contains("capabilities: none"));
}

#[test]
fn test_whoami_misconfigured_volunteer_json() {
    let output = TestContext::new()
        .with_snapshot()
        .args(["--format", "json", "whoami", "--user", "vol-lost"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["accessLevel"], "volunteer");
    assert_eq!(value["misconfigured"], true);
    assert!(value["teamId"].is_null());
}

#[test]
fn test_whoami_unknown_user() {
    TestContext::new()
        .with_snapshot()
        .args(["whoami", "--user", "ghost"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("user not found: ghost"));
}

#[test]
fn test_check_granted_and_denied() {
    let ctx = TestContext::new();

    ctx.with_snapshot()
        .args(["check", "assign-tasks", "--user", "head-a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("granted: require:assign-tasks"));

    ctx.with_snapshot()
        .args(["check", "see-all-files", "--user", "head-a"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("E006"));
}

#[test]
fn test_check_signed_out() {
    TestContext::new()
        .command()
        .args(["check", "access-teams-page"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("no signed-in user"));
}

#[test]
fn test_check_rejects_unknown_capability() {
    TestContext::new()
        .command()
        .args(["check", "launch-rockets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("launch-rockets"));
}

#[test]
fn test_task_status_rules() {
    let ctx = TestContext::new();

    // Head of the task's team
    ctx.with_snapshot()
        .args(["task-status", "--task", "task-a", "--user", "head-a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("granted: task.status on task-a"));

    // Assignee
    ctx.with_snapshot()
        .args(["task-status", "--task", "task-b", "--user", "vol-b"])
        .assert()
        .success();

    // Head of another team
    ctx.with_snapshot()
        .args(["task-status", "--task", "task-b", "--user", "head-a"])
        .assert()
        .code(7);

    // Semi-core sees every task
    ctx.with_snapshot()
        .args(["task-status", "--task", "task-b", "--user", "semi-1"])
        .assert()
        .success();
}

#[test]
fn test_task_status_missing_task() {
    TestContext::new()
        .with_snapshot()
        .args(["task-status", "--task", "nope", "--user", "core-1"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("task not found: nope"));
}

#[test]
fn test_list_files_scoped_to_team() {
    TestContext::new()
        .with_snapshot()
        .args(["list", "files", "--user", "vol-a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("floorplan.pdf"))
        .stdout(predicate::str::contains("menu.pdf").not());
}

#[test]
fn test_list_files_core_sees_all() {
    TestContext::new()
        .with_snapshot()
        .args(["list", "files", "--user", "core-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("floorplan.pdf"))
        .stdout(predicate::str::contains("menu.pdf"));
}

#[test]
fn test_list_files_volunteer_without_team() {
    TestContext::new()
        .with_snapshot()
        .args(["list", "files", "--user", "vol-lost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no team assigned"));
}

#[test]
fn test_list_files_unassigned_with_no_team() {
    TestContext::new()
        .with_snapshot()
        .args(["list", "files", "--user", "drifter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no team assigned"));
}

#[test]
fn test_list_tasks_semi_core_sees_all() {
    TestContext::new()
        .with_snapshot()
        .args(["list", "tasks", "--user", "semi-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Print badges"))
        .stdout(predicate::str::contains("Book caterer"));
}

#[test]
fn test_list_meetings_no_team_json() {
    let output = TestContext::new()
        .with_snapshot()
        .args(["--format", "json", "list", "meetings", "--user", "vol-lost"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["kind"], "meetings");
    assert_eq!(value["scope"]["scope"], "no-team-assigned");
    assert_eq!(value["visibility"]["state"], "no-team-assigned");
}

#[test]
fn test_list_teams_signed_out() {
    TestContext::new()
        .with_snapshot()
        .args(["list", "teams"])
        .assert()
        .success()
        .stdout(predicate::str::contains("signed out"));
}

#[test]
fn test_normalize_global_role_drops_team() {
    TestContext::new()
        .command()
        .args(["normalize", "--role", "Core", "--team", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("team: none"));
}

#[test]
fn test_normalize_head_requires_team() {
    TestContext::new()
        .command()
        .args(["normalize", "--role", "Head"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("role Head requires a team"));
}

#[test]
fn test_normalize_rejects_lowercase_role() {
    TestContext::new()
        .command()
        .args(["normalize", "--role", "core"])
        .assert()
        .failure();
}

#[test]
fn test_normalize_plans_membership_move() {
    TestContext::new()
        .with_snapshot()
        .args(["normalize", "--role", "Volunteer", "--team", "B", "--target", "head-a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("leave: A"))
        .stdout(predicate::str::contains("join: B"))
        .stdout(predicate::str::contains("step down as head of: A"));
}

#[test]
fn test_normalize_actor_needs_manage_permissions() {
    let ctx = TestContext::new();

    ctx.with_snapshot()
        .args([
            "normalize", "--role", "Head", "--team", "B", "--target", "vol-b", "--actor", "semi-1",
        ])
        .assert()
        .code(7);

    ctx.with_snapshot()
        .args([
            "normalize", "--role", "Head", "--team", "B", "--target", "vol-b", "--actor", "core-1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("become head of: B"));
}

#[test]
fn test_missing_snapshot_file() {
    TestContext::new()
        .command()
        .args(["--snapshot", "absent.yaml", "list", "tasks", "--user", "core-1"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("snapshot not found"));
}

#[test]
fn test_config_supplies_snapshot_path() {
    let ctx = TestContext::new().with_config("snapshot:\n  path: snapshot.yaml\n");
    ctx.command()
        .args(["list", "tasks", "--user", "vol-b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book caterer"))
        .stdout(predicate::str::contains("Print badges").not());
}

#[test]
fn test_invalid_config_is_reported() {
    TestContext::new()
        .with_config("logging:\n  level: loud\n")
        .command()
        .arg("matrix")
        .assert()
        .code(2);
}

#[test]
fn test_rust_log_directives_reach_the_subscriber() {
    TestContext::new()
        .with_snapshot()
        .env_remove("TEAMDECK_LOG_LEVEL")
        .env("RUST_LOG", "debug")
        .args(["list", "teams", "--user", "core-1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("snapshot loaded"));
}

#[test]
fn test_quiet_flag_overrides_rust_log() {
    TestContext::new()
        .with_snapshot()
        .env_remove("TEAMDECK_LOG_LEVEL")
        .env("RUST_LOG", "trace")
        .args(["-q", "list", "teams", "--user", "core-1"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
