use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn invalid_day_fails() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "19"]);

    cmd.assert().failure().stderr(predicate::str::contains(
        "Invalid day specified. No solution exists for day 19.",
    ));
}

#[test]
fn missing_input_fails() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "1", "--input", "tests/inputs/no-such-file.txt"]);

    cmd.assert().failure().stderr(predicate::str::contains(
        "Failed to read given file(tests/inputs/no-such-file.txt).",
    ));
}

#[test]
fn input_found_in_data_dir() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "01", "--data-dir", "tests/data"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("🎄 Advent of Code [2024] - Day 1"))
        .stdout(predicate::str::contains("\t✅ Part 1 Solution: 11\n"))
        .stdout(predicate::str::contains("🕒 Execution Time: "));
}

#[test]
fn quiet_prints_answers_only() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["-q", "-d", "1", "-i", "tests/inputs/day-01.txt"]);

    cmd.assert().success().stdout(
        predicate::str::contains("Advent of Code")
            .not()
            .and(predicate::str::contains("Execution Time").not())
            .and(predicate::str::contains("Part 2 Solution: 31\n")),
    );
}
