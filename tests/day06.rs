use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "6", "--input", "tests/inputs/day-06.txt"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Part 1 Solution: 41\n"));
}

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "6", "--input", "tests/inputs/day-06.txt"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Part 2 Solution: 6\n"));
}

#[test]
fn part1_output_unreachable_when_guard_loops() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "6", "--input", "tests/inputs/day-06-loop.txt"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Part 1 Solution: -1\n"))
        .stdout(str::contains("Part 2 Solution: 0\n"));
}
