use assert_cmd::Command;
use assert_fs::TempDir;
use common::command::{repository_dir, run_lit_command};
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;

#[test]
fn init_repository_at_path_successfully() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let dir_absolute_path = dir.path().canonicalize()?.display().to_string();
    let mut sut = Command::cargo_bin("gitlite")?;

    sut.arg("init").arg(dir.path());

    sut.assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Initialized empty gitLite repository in .+\.gitLite\n$",
        )?)
        .stdout(predicate::str::contains(dir_absolute_path));

    Ok(())
}

#[rstest]
fn init_creates_clean_layout(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_lit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let repository_path = repository_dir.path().join(".gitLite");
    assert!(repository_path.join("objects").is_dir());
    assert_eq!(std::fs::read_to_string(repository_path.join("index"))?, "[]");
    assert_eq!(std::fs::read_to_string(repository_path.join("HEAD"))?, "");

    Ok(())
}

#[rstest]
fn init_twice_reports_existing_repository(repository_dir: TempDir) {
    run_lit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    run_lit_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Reinitialized existing gitLite repository in",
        ));
}

#[rstest]
fn other_commands_create_missing_layout(repository_dir: TempDir) {
    run_lit_command(repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout("No changes in staging area.\n");

    assert!(repository_dir.path().join(".gitLite").join("HEAD").is_file());
}
