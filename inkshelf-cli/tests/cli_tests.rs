//! Integration tests for the Inkshelf CLI

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd(root: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("inkshelf-cli").unwrap();
    cmd.arg("--root").arg(root.path());
    cmd
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("inkshelf-cli").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("read"))
        .stdout(predicate::str::contains("sweep"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("inkshelf-cli").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("inkshelf"));
}

#[test]
fn test_add_help() {
    let mut cmd = Command::cargo_bin("inkshelf-cli").unwrap();
    cmd.args(["add", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--title"))
        .stdout(predicate::str::contains("--author"))
        .stdout(predicate::str::contains("--status"));
}

#[test]
fn test_list_empty_catalog() {
    let root = TempDir::new().unwrap();
    cmd(&root)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog is empty."));
}

#[test]
fn test_add_requires_login() {
    let root = TempDir::new().unwrap();
    cmd(&root)
        .args(["add", "--title", "T", "--author", "A", "--category", "C"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("not logged in"));
}

#[test]
fn test_admin_flow_add_list_info_remove() {
    let root = TempDir::new().unwrap();

    cmd(&root).arg("login").assert().success();

    cmd(&root)
        .args([
            "add",
            "--title",
            "The Trial",
            "--author",
            "Franz Kafka",
            "--category",
            "Fiction",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book added successfully (id 1)"));

    cmd(&root)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("The Trial"))
        .stdout(predicate::str::contains("Franz Kafka"));

    cmd(&root)
        .args(["info", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status:      active"))
        .stdout(predicate::str::contains("Cover:       none"))
        .stdout(predicate::str::contains("PDF:         none"));

    cmd(&root)
        .args(["info", "1", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"pdfUrl\""));

    cmd(&root)
        .args(["remove", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book deleted successfully"));

    cmd(&root)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog is empty."));
}

#[test]
fn test_edit_changes_only_submitted_fields() {
    let root = TempDir::new().unwrap();
    cmd(&root).arg("login").assert().success();
    cmd(&root)
        .args([
            "add", "--title", "T", "--author", "A", "--category", "C", "--status", "active",
        ])
        .assert()
        .success();

    cmd(&root)
        .args(["edit", "1", "--status", "archived"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book updated successfully"));

    cmd(&root)
        .args(["info", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title:       T"))
        .stdout(predicate::str::contains("Status:      archived"));
}

#[test]
fn test_commands_emit_log_events() {
    let root = TempDir::new().unwrap();
    cmd(&root).arg("login").assert().success();

    cmd(&root)
        .args([
            "--verbose", "add", "--title", "T", "--author", "A", "--category", "C",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("book added"));

    cmd(&root)
        .args(["--verbose", "remove", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("book removed"));
}

#[test]
fn test_share_prints_blurb() {
    let root = TempDir::new().unwrap();
    cmd(&root).arg("login").assert().success();
    cmd(&root)
        .args([
            "add",
            "--title",
            "The Trial",
            "--author",
            "Franz Kafka",
            "--category",
            "Fiction",
        ])
        .assert()
        .success();

    cmd(&root)
        .args(["share", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Check out \"The Trial\" by Franz Kafka"))
        .stdout(predicate::str::contains("inkshelf://book/1"));

    cmd(&root)
        .args(["share", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("book 9 not found"));
}

#[test]
fn test_logout_closes_the_gate() {
    let root = TempDir::new().unwrap();
    cmd(&root).arg("login").assert().success();
    cmd(&root).arg("logout").assert().success();

    cmd(&root)
        .args(["remove", "1"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("not logged in"));
}

#[test]
fn test_info_missing_book_fails() {
    let root = TempDir::new().unwrap();
    cmd(&root)
        .args(["info", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("book 99 not found"));
}

#[test]
fn test_sweep_with_nothing_to_do() {
    let root = TempDir::new().unwrap();
    cmd(&root).arg("login").assert().success();
    cmd(&root)
        .arg("sweep")
        .assert()
        .success()
        .stdout(predicate::str::contains("No orphaned blobs found"));
}
