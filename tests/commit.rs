use assert_fs::TempDir;
use common::HELLO_OID;
use common::command::{
    first_commit_dir, get_head_commit_sha, get_parent_commit_id, lit_commit, repository_dir,
    run_lit_command,
};
use common::file::{count_objects, read_index, write_generated_files};
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;

#[rstest]
fn first_commit_is_a_root_commit(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::write(repository_dir.path().join("a.txt"), "hello")?;
    run_lit_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();

    lit_commit(repository_dir.path(), "first")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\[\(root-commit\) [0-9a-f]{7}\] first\n$")?);

    let head = get_head_commit_sha(repository_dir.path())?;
    assert_eq!(head.len(), 40);
    assert_eq!(get_parent_commit_id(repository_dir.path(), &head)?, None);
    assert!(read_index(repository_dir.path()).is_empty());

    let record: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(
        repository_dir.path().join(".gitLite").join("objects").join(&head),
    )?)?;
    assert_eq!(record["message"], "first");
    assert_eq!(record["parent"], serde_json::Value::Null);
    assert_eq!(record["time"], common::COMMIT_DATE_DISPLAY);
    assert_eq!(record["changes"][0]["path"], "a.txt");
    assert_eq!(record["changes"][0]["hash"], HELLO_OID);

    Ok(())
}

#[rstest]
fn second_commit_links_to_first(first_commit_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let first = get_head_commit_sha(first_commit_dir.path())?;
    std::fs::write(first_commit_dir.path().join("a.txt"), "hello world")?;
    run_lit_command(first_commit_dir.path(), &["add", "a.txt"])
        .assert()
        .success();

    lit_commit(first_commit_dir.path(), "second")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\[[0-9a-f]{7}\] second\n$")?);

    let second = get_head_commit_sha(first_commit_dir.path())?;
    assert_ne!(first, second);
    assert_eq!(
        get_parent_commit_id(first_commit_dir.path(), &second)?,
        Some(first)
    );

    Ok(())
}

#[rstest]
fn commit_with_empty_staging_area_changes_nothing(
    first_commit_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let head = get_head_commit_sha(first_commit_dir.path())?;
    let objects = count_objects(first_commit_dir.path());

    lit_commit(first_commit_dir.path(), "empty")
        .assert()
        .code(5)
        .stdout("No changes to commit.\n");

    assert_eq!(get_head_commit_sha(first_commit_dir.path())?, head);
    assert_eq!(count_objects(first_commit_dir.path()), objects);

    Ok(())
}

#[rstest]
fn commit_in_fresh_repository_has_nothing_to_commit(repository_dir: TempDir) {
    lit_commit(repository_dir.path(), "empty")
        .assert()
        .code(5)
        .stdout("No changes to commit.\n");

    assert_eq!(get_head_commit_sha(repository_dir.path()).unwrap(), "");
}

#[rstest]
fn commit_records_every_staged_file(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let files = write_generated_files(repository_dir.path(), 4);
    run_lit_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();
    let staged = read_index(repository_dir.path());
    assert_eq!(staged.len(), files.len());

    lit_commit(repository_dir.path(), "many files")
        .assert()
        .success();

    let head = get_head_commit_sha(repository_dir.path())?;
    let record: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(
        repository_dir.path().join(".gitLite").join("objects").join(head),
    )?)?;
    let changes = record["changes"]
        .as_array()
        .ok_or("changes is not an array")?
        .iter()
        .map(|change| {
            (
                change["path"].as_str().unwrap_or_default().to_string(),
                change["hash"].as_str().unwrap_or_default().to_string(),
            )
        })
        .collect::<Vec<_>>();
    assert_eq!(changes, staged);

    Ok(())
}

#[rstest]
fn commit_prints_only_first_message_line(repository_dir: TempDir) {
    std::fs::write(repository_dir.path().join("a.txt"), "hello").unwrap();
    run_lit_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();

    lit_commit(repository_dir.path(), "subject\n\nbody text")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("] subject\n"));
}

#[rstest]
fn commit_on_dangling_head_fails_without_writing(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_lit_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    let dangling = "0".repeat(40);
    std::fs::write(repository_dir.path().join(".gitLite").join("HEAD"), &dangling)?;
    std::fs::write(repository_dir.path().join("a.txt"), "hello")?;
    run_lit_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();

    lit_commit(repository_dir.path(), "orphan")
        .assert()
        .code(3)
        .stderr(predicate::str::contains(format!(
            "Object not found: {dangling}"
        )));

    assert_eq!(get_head_commit_sha(repository_dir.path())?, dangling);
    assert_eq!(
        read_index(repository_dir.path()),
        vec![("a.txt".to_string(), HELLO_OID.to_string())]
    );
    assert_eq!(count_objects(repository_dir.path()), 1);

    Ok(())
}
