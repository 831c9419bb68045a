//! Error handling integration tests

mod common;

use common::{DIRTY_SKILL, FIXED_SKILL, TestWorkspace, UNTERMINATED_SKILL, skillfix_cmd};
use predicates::prelude::*;

#[test]
fn test_unterminated_frontmatter_warns_and_continues() {
    let workspace = TestWorkspace::new();
    workspace.write_skill("a-broken", UNTERMINATED_SKILL);
    workspace.write_skill("b-pdf", DIRTY_SKILL);

    skillfix_cmd(&workspace.path)
        .assert()
        .success()
        .stderr(predicate::str::contains("No closing --- found in"))
        .stderr(predicate::str::contains("a-broken"))
        .stdout(predicate::str::contains("Fixed: 1 skills"))
        .stdout(predicate::str::contains("Malformed: 1"));

    assert_eq!(workspace.read_skill("a-broken"), UNTERMINATED_SKILL);
    assert_eq!(workspace.read_skill("b-pdf"), FIXED_SKILL);
}

#[test]
fn test_strict_fails_on_unterminated_frontmatter() {
    let workspace = TestWorkspace::new();
    workspace.write_skill("a-broken", UNTERMINATED_SKILL);
    workspace.write_skill("b-pdf", DIRTY_SKILL);

    skillfix_cmd(&workspace.path)
        .arg("--strict")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "1 skill file(s) have malformed frontmatter",
        ));

    // Other skills are still fixed before the run fails
    assert_eq!(workspace.read_skill("b-pdf"), FIXED_SKILL);
}

#[test]
fn test_strict_succeeds_without_malformed_files() {
    let workspace = TestWorkspace::new();
    workspace.write_skill("pdf", DIRTY_SKILL);

    skillfix_cmd(&workspace.path)
        .arg("--strict")
        .assert()
        .success();
}

#[test]
fn test_missing_skills_directory_fails() {
    let workspace = TestWorkspace::new();

    skillfix_cmd(&workspace.path)
        .arg("does-not-exist")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read directory"))
        .stderr(predicate::str::contains("does-not-exist"));
}

#[test]
fn test_unknown_completions_shell_fails() {
    let workspace = TestWorkspace::new();

    skillfix_cmd(&workspace.path)
        .args(["completions", "--shell", "cmd"])
        .assert()
        .failure();
}
