use crate::common::COMMIT_DATE;
use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A repository with `a.txt` = `hello` committed as `first`
#[fixture]
pub fn first_commit_dir(repository_dir: TempDir) -> TempDir {
    run_lit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("a.txt"),
        "hello".to_string(),
    ));
    run_lit_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    lit_commit(repository_dir.path(), "first")
        .assert()
        .success();

    repository_dir
}

/// [`first_commit_dir`] with `a.txt` changed to `hello world` and committed as `second`
#[fixture]
pub fn second_commit_dir(first_commit_dir: TempDir) -> TempDir {
    write_file(FileSpec::new(
        first_commit_dir.path().join("a.txt"),
        "hello world".to_string(),
    ));
    run_lit_command(first_commit_dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    lit_commit(first_commit_dir.path(), "second")
        .assert()
        .success();

    first_commit_dir
}

pub fn run_lit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("gitlite").expect("Failed to find gitlite binary");
    cmd.envs(vec![("NO_PAGER", "1"), ("NO_COLOR", "1")]);
    cmd.env_remove("GITLITE_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn lit_commit(dir: &Path, message: &str) -> Command {
    let mut cmd = run_lit_command(dir, &["commit", message]);
    cmd.env("GITLITE_DATE", COMMIT_DATE);
    cmd
}

/// Get the current HEAD commit SHA, empty before the first commit
pub fn get_head_commit_sha(dir: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let head_path = dir.join(".gitLite").join("HEAD");
    let head_content = std::fs::read_to_string(head_path)?;

    Ok(head_content.trim().to_string())
}

/// Get the parent commit ID of a given commit by reading the stored record
pub fn get_parent_commit_id(
    dir: &Path,
    commit_id: &str,
) -> Result<Option<String>, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(dir.join(".gitLite").join("objects").join(commit_id))?;
    let record: serde_json::Value = serde_json::from_str(&content)?;

    Ok(record["parent"]
        .as_str()
        .filter(|parent| !parent.is_empty())
        .map(str::to_string))
}
