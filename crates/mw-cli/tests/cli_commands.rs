//! Integration tests for the `mw` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mw() -> Command {
    Command::cargo_bin("mw").unwrap()
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_prints_a_result() {
    mw().args(["roll", "d20", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("d20 = "));
}

#[test]
fn roll_with_threshold_reports_outcome() {
    mw().args(["roll", "d20", "--vs", "10", "--seed", "1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("vs 10").and(
                predicate::str::contains("success").or(predicate::str::contains("failure")),
            ),
        );
}

#[test]
fn roll_is_deterministic_under_seed() {
    let first = mw()
        .args(["roll", "d100", "--seed", "99"])
        .assert()
        .success();
    let second = mw()
        .args(["roll", "d100", "--seed", "99"])
        .assert()
        .success();
    assert_eq!(first.get_output().stdout, second.get_output().stdout);
}

#[test]
fn roll_rejects_unknown_die() {
    mw().args(["roll", "d7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown die"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_runs_a_scripted_session() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("save.json");

    mw().args([
        "play",
        "--name",
        "Aldric",
        "--race",
        "human",
        "--class",
        "warrior",
        "--theme",
        "medieval",
        "--seed",
        "42",
        "--save",
        save.to_str().unwrap(),
    ])
    .write_stdin("go Riverdale Village\nquest add Find the amulet\nsave\nquit\n")
    .assert()
    .success()
    .stdout(
        predicate::str::contains("Aldric the Human Warrior")
            .and(predicate::str::contains("Riverdale Village"))
            .and(predicate::str::contains("Quest added: Find the amulet"))
            .and(predicate::str::contains("Game saved."))
            .and(predicate::str::contains("Farewell, adventurer!")),
    );

    assert!(save.exists());
}

#[test]
fn play_continue_restores_the_adventure() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("save.json");

    mw().args([
        "play",
        "--name",
        "Lyra",
        "--race",
        "elf",
        "--class",
        "wizard",
        "--theme",
        "high-magic",
        "--save",
        save.to_str().unwrap(),
    ])
    .write_stdin("go The Crystal Spire\nsave\nquit\n")
    .assert()
    .success();

    mw().args(["play", "--continue", "--save", save.to_str().unwrap()])
        .write_stdin("status\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Lyra the Elf Wizard")
                .and(predicate::str::contains("The Crystal Spire")),
        );
}

#[test]
fn play_continue_fails_without_a_save() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("missing.json");

    mw().args(["play", "--continue", "--save", save.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no saved game"));
}

#[test]
fn play_rejects_unknown_race() {
    mw().args(["play", "--race", "troll"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown race"));
}

// ---------------------------------------------------------------------------
// status
// ---------------------------------------------------------------------------

#[test]
fn status_shows_the_saved_adventure() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("save.json");

    mw().args([
        "play",
        "--name",
        "Thorin",
        "--race",
        "dwarf",
        "--class",
        "cleric",
        "--theme",
        "wilderness",
        "--save",
        save.to_str().unwrap(),
    ])
    .write_stdin("quest add Reclaim the hall\nsave\nquit\n")
    .assert()
    .success();

    mw().args(["status", "--save", save.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Thorin")
                .and(predicate::str::contains("Dwarf"))
                .and(predicate::str::contains("Wilderness"))
                .and(predicate::str::contains("Reclaim the hall")),
        );
}

#[test]
fn status_fails_without_a_save() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("missing.json");

    mw().args(["status", "--save", save.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no saved game"));
}
