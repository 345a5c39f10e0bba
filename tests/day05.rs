use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "5", "--input", "tests/inputs/day-05.txt"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Part 1 Solution: 143\n"));
}

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "5", "--input", "tests/inputs/day-05.txt"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Part 2 Solution: 123\n"));
}
