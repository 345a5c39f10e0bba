use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "3", "--input", "tests/inputs/day-03.txt"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Part 1 Solution: 161\n"));
}

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "3", "--input", "tests/inputs/day-03.txt"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Part 2 Solution: 48\n"));
}

#[test]
fn non_ascii_digits_are_not_operands() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "3", "--input", "tests/inputs/day-03-unicode.txt"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Part 1 Solution: 8\n"))
        .stdout(str::contains("Part 2 Solution: 8\n"));
}
