use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "1", "--input", "tests/inputs/day-01.txt"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Part 1 Solution: 11\n"));
}

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "1", "--input", "tests/inputs/day-01.txt"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Part 2 Solution: 31\n"));
}

#[test]
fn malformed_line_fails() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "1", "--input", "tests/inputs/day-01-malformed.txt"]);

    cmd.assert()
        .failure()
        .stderr(str::contains("Failed to read line 2."))
        .stderr(str::contains("Invalid text(x) for location ID."));
}
