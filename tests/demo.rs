use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn demo_part1_echoes_input() {
    let mut cmd = Command::cargo_bin("demo").unwrap();
    cmd.arg("-p").arg("1").write_stdin("123");

    cmd.assert()
        .success()
        .stdout(predicate::str::is_match(r"\A123\nRT [0-9]+ ns\n\z").unwrap());
}

#[test]
fn demo_part2_answers_christmas_gopher() {
    let mut cmd = Command::cargo_bin("demo").unwrap();
    cmd.args(["--part", "2"]).write_stdin("anything at all");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("christmas gopher\nRT "));
}

#[test]
fn demo_part2_joins_extra_args() {
    let mut cmd = Command::cargo_bin("demo").unwrap();
    cmd.args(["-p", "2", "--args", "abc", "def"]).write_stdin("");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("abc def\n"));
}

#[test]
fn demo_rejects_invalid_part() {
    let mut cmd = Command::cargo_bin("demo").unwrap();
    cmd.args(["-p", "3"]).write_stdin("123");

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid arguments."));
}

#[test]
fn demo_rejects_unknown_flag() {
    let mut cmd = Command::cargo_bin("demo").unwrap();
    cmd.args(["-p", "1", "--frobnicate"]).write_stdin("");

    cmd.assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--frobnicate"));
}
