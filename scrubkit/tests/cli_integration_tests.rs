// scrubkit/tests/cli_integration_tests.rs
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn scrubkit() -> Command {
    Command::cargo_bin("scrubkit").expect("binary should build")
}

#[test]
fn patterns_lists_the_builtin_library() {
    scrubkit()
        .arg("patterns")
        .assert()
        .success()
        .stdout(predicate::str::contains("email"))
        .stdout(predicate::str::contains("whitespace_compact"))
        .stdout(predicate::str::contains("script_tags"));
}

#[test]
fn apply_named_pattern_from_stdin() {
    scrubkit()
        .args(["apply", "--named", "whitespace_compact", "--replacement", " "])
        .write_stdin("a   b     c")
        .assert()
        .success()
        .stdout("a b c");
}

#[test]
fn apply_inline_pattern_with_ignore_case() {
    scrubkit()
        .args(["apply", "--pattern", "wtf", "--replacement", "X", "--ignore-case"])
        .write_stdin("WTF wtf")
        .assert()
        .success()
        .stdout("X X");
}

#[test]
fn apply_defaults_to_stripping_matches() {
    scrubkit()
        .args(["apply", "--named", "tags_simple"])
        .write_stdin("<h1>Title</h1> rest")
        .assert()
        .success()
        .stdout("Title rest");
}

#[test]
fn apply_requires_a_named_or_inline_pattern() {
    scrubkit()
        .arg("apply")
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn apply_unknown_named_pattern_fails_with_the_name() {
    scrubkit()
        .args(["apply", "--named", "not_a_pattern"])
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not_a_pattern"));
}

#[test]
fn run_applies_a_plan_file() {
    let yaml = r#"
word_map:
  chevrolet: Ford
word_map_ignore_case: true
patterns:
  - pattern: '\s+'
    replace_with: " "
  - pattern: '^\s*|\s*$'
    replace_with: ""
steps:
  - op: map_words
  - op: translate_patterns
"#;
    let mut plan = NamedTempFile::new().unwrap();
    plan.write_all(yaml.as_bytes()).unwrap();

    scrubkit()
        .args(["run", "--plan"])
        .arg(plan.path())
        .write_stdin("the Chevrolet   guys ")
        .assert()
        .success()
        .stdout("the Ford guys");
}

#[test]
fn run_reads_and_writes_files() {
    let yaml = r#"
steps:
  - op: apply_named
    name: email
    replacement: "**Email Removed**"
"#;
    let mut plan = NamedTempFile::new().unwrap();
    plan.write_all(yaml.as_bytes()).unwrap();

    let mut input = NamedTempFile::new().unwrap();
    input
        .write_all(b"contact Hank@kimball.com today")
        .unwrap();
    let output = NamedTempFile::new().unwrap();

    scrubkit()
        .args(["run", "--plan"])
        .arg(plan.path())
        .arg("--input-file")
        .arg(input.path())
        .arg("--output")
        .arg(output.path())
        .assert()
        .success();

    let written = std::fs::read_to_string(output.path()).unwrap();
    assert_eq!(written, "contact **Email Removed** today");
}

#[test]
fn run_rejects_an_invalid_plan() {
    let mut plan = NamedTempFile::new().unwrap();
    plan.write_all(b"patterns:\n  - pattern: '(unclosed'\n")
        .unwrap();

    scrubkit()
        .args(["run", "--plan"])
        .arg(plan.path())
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("(unclosed"));
}
