//! End-to-end tests driving the turndown binary through TestWorld.

use assert_cmd::Command;
use predicates::prelude::*;
use turndown_testing::TestWorld;

#[test]
fn help_lists_command_groups() {
    Command::cargo_bin("turndown")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("clean"))
        .stdout(predicate::str::contains("spotcheck"))
        .stdout(predicate::str::contains("session"));
}

#[test]
fn init_creates_store_and_seeds_catalog() {
    let world = TestWorld::new();

    let result = world.init().unwrap();
    assert!(result.success(), "init failed: {}", result.stderr());
    assert!(world.data_dir().join("turndown.db").exists());
    assert!(world.data_dir().join("config.toml").exists());

    let rooms = world.run(&["--format", "json", "room", "list"]).unwrap();
    assert!(rooms.success());
    let rooms = rooms.json().unwrap();
    assert_eq!(rooms.as_array().unwrap().len(), 5);

    let tasks = world.run(&["--format", "json", "task", "list"]).unwrap();
    assert!(tasks.success());
    assert_eq!(tasks.json().unwrap().as_array().unwrap().len(), 5);
}

#[test]
fn init_is_idempotent() {
    let world = TestWorld::new();
    world.init().unwrap();

    let second = world.init().unwrap();
    assert!(second.success());
    assert!(second.stdout().contains("Seeded 0 rooms and 0 tasks"));
}

#[test]
fn no_subcommand_prints_guidance() {
    let world = TestWorld::new();

    let result = world.run(&[]).unwrap();
    assert!(result.success());
    assert!(result.stdout().contains("turndown init"));
}

#[test]
fn login_whoami_logout_cycle() {
    let world = TestWorld::new();
    world.init().unwrap();

    let login = world.login("alice", "staff").unwrap();
    assert!(login.success(), "login failed: {}", login.stderr());
    assert!(login.stdout().contains("alice"));

    let whoami = world.run(&["whoami"]).unwrap();
    assert!(whoami.success());
    assert!(whoami.stdout().contains("alice (staff)"));
    assert!(whoami.stdout().contains("Cleanings started today: 0/5"));

    let logout = world.run(&["logout"]).unwrap();
    assert!(logout.success());

    let whoami = world.run(&["whoami"]).unwrap();
    assert!(!whoami.success());
    assert!(whoami.stderr().contains("not logged in"));
}

#[test]
fn cleaning_workflow_records_tasks_and_completion() {
    let world = TestWorld::new();
    world.init().unwrap();
    world.login("s1", "staff").unwrap();

    let start = world
        .run(&["--format", "json", "clean", "start", "101"])
        .unwrap();
    assert!(start.success(), "start failed: {}", start.stderr());
    let session = start.json().unwrap();
    assert_eq!(session["status"], "in_progress");
    assert_eq!(session["room_id"], "101");

    let task = world
        .run(&["--format", "json", "clean", "task", "101", "make_bed"])
        .unwrap();
    assert!(task.success(), "task failed: {}", task.stderr());
    let session = task.json().unwrap();
    assert_eq!(session["tasks"][0]["task_id"], "make_bed");

    let finish = world
        .run(&["--format", "json", "clean", "finish", "101"])
        .unwrap();
    assert!(finish.success(), "finish failed: {}", finish.stderr());
    let session = finish.json().unwrap();
    assert_eq!(session["status"], "completed");
    assert!(session["ended_at"].is_string());
}

#[test]
fn clean_start_requires_staff_role() {
    let world = TestWorld::new();
    world.init().unwrap();
    world.login("sup1", "supervisor").unwrap();

    let result = world.run(&["clean", "start", "101"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("Permission denied"));
}

#[test]
fn clean_start_rejects_unknown_room() {
    let world = TestWorld::new();
    world.init().unwrap();
    world.login("s1", "staff").unwrap();

    let result = world.run(&["clean", "start", "999"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("Room '999' not found"));
}

#[test]
fn double_clean_start_is_a_conflict() {
    let world = TestWorld::new();
    world.init().unwrap();
    world.login("s1", "staff").unwrap();

    assert!(world.run(&["clean", "start", "101"]).unwrap().success());
    let second = world.run(&["clean", "start", "101"]).unwrap();
    assert!(!second.success());
    assert!(second.stderr().contains("Conflict"));
}

#[test]
fn quota_is_enforced_across_invocations() {
    let world = TestWorld::new();
    world.init().unwrap();

    world.login("boss", "owner").unwrap();
    let set = world.run(&["config", "set", "quotas.staff", "1"]).unwrap();
    assert!(set.success(), "config set failed: {}", set.stderr());

    world.login("s1", "staff").unwrap();
    assert!(world.run(&["clean", "start", "101"]).unwrap().success());
    assert!(world.run(&["clean", "finish", "101"]).unwrap().success());

    let second = world.run(&["clean", "start", "102"]).unwrap();
    assert!(!second.success());
    assert!(second.stderr().contains("Daily limit of 1 reached"));
}

#[test]
fn spot_check_workflow_after_todays_cleaning() {
    let world = TestWorld::new();
    world.init().unwrap();
    world.clean_room_as("s1", "101").unwrap();

    world.login("sup1", "supervisor").unwrap();
    let start = world
        .run(&["--format", "json", "spotcheck", "start", "101"])
        .unwrap();
    assert!(start.success(), "spotcheck start failed: {}", start.stderr());
    assert_eq!(start.json().unwrap()["status"], "in_progress");

    let submit = world
        .run(&[
            "--format",
            "json",
            "spotcheck",
            "submit",
            "101",
            "--notes",
            "dusty minibar",
        ])
        .unwrap();
    assert!(submit.success(), "submit failed: {}", submit.stderr());
    let session = submit.json().unwrap();
    assert_eq!(session["status"], "completed");
    assert_eq!(session["notes"], "dusty minibar");
}

#[test]
fn spot_check_rejected_when_room_not_cleaned_today() {
    let world = TestWorld::new();
    world.init().unwrap();
    world.login("sup1", "supervisor").unwrap();

    let result = world.run(&["spotcheck", "start", "101"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("Invalid state"));
}

#[test]
fn spot_check_submit_rejects_empty_notes() {
    let world = TestWorld::new();
    world.init().unwrap();
    world.clean_room_as("s1", "101").unwrap();

    world.login("sup1", "supervisor").unwrap();
    assert!(world.run(&["spotcheck", "start", "101"]).unwrap().success());

    let submit = world
        .run(&["spotcheck", "submit", "101", "--notes", "   "])
        .unwrap();
    assert!(!submit.success());
    assert!(submit.stderr().contains("Validation error"));

    // Session stays open and can still be submitted properly
    let retry = world
        .run(&["spotcheck", "submit", "101", "--notes", "all good"])
        .unwrap();
    assert!(retry.success(), "retry failed: {}", retry.stderr());
}

#[test]
fn session_latest_and_status_report_room_state() {
    let world = TestWorld::new();
    world.init().unwrap();
    world.clean_room_as("s1", "101").unwrap();

    let latest = world
        .run(&["--format", "json", "session", "latest", "cleaning", "101"])
        .unwrap();
    assert!(latest.success());
    let record = latest.json().unwrap();
    assert_eq!(record["kind"], "cleaning");
    assert_eq!(record["status"], "completed");

    let none = world
        .run(&["session", "latest", "spot_check", "102"])
        .unwrap();
    assert!(none.success());
    assert!(none.stdout().contains("No spot_check session recorded"));

    let status = world.run(&["session", "status", "101"]).unwrap();
    assert!(status.success());
    assert!(status.stdout().contains("Room 101"));
    assert!(status.stdout().contains("Cleaning"));
}

#[test]
fn config_show_and_set_are_permission_gated() {
    let world = TestWorld::new();
    world.init().unwrap();

    world.login("s1", "staff").unwrap();
    let show = world.run(&["config", "show"]).unwrap();
    assert!(!show.success());
    assert!(show.stderr().contains("Permission denied"));

    world.login("mgr", "manager").unwrap();
    let show = world.run(&["config", "show"]).unwrap();
    assert!(show.success(), "manager show failed: {}", show.stderr());
    assert!(show.stdout().contains("quota_tracking"));

    let set = world
        .run(&["config", "set", "default_locale", "id"])
        .unwrap();
    assert!(!set.success());
    assert!(set.stderr().contains("Permission denied"));

    world.login("boss", "owner").unwrap();
    let set = world
        .run(&["config", "set", "default_locale", "id"])
        .unwrap();
    assert!(set.success(), "owner set failed: {}", set.stderr());

    // Locale now drives catalog display
    let rooms = world.run(&["room", "list"]).unwrap();
    assert!(rooms.stdout().contains("Kamar 101"));
}

#[test]
fn config_set_rejects_unknown_key() {
    let world = TestWorld::new();
    world.init().unwrap();
    world.login("boss", "owner").unwrap();

    let result = world.run(&["config", "set", "nope", "1"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("unknown config key"));
}
