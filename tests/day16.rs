use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "16", "--input", "tests/inputs/day-16.txt"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Part 1 Solution: 7036\n"));
}

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "16", "--input", "tests/inputs/day-16.txt"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Part 2 Solution: 45\n"));
}

#[test]
fn part1_output_unreachable_when_end_walled_off() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "16", "--input", "tests/inputs/day-16-unreachable.txt"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Part 1 Solution: -1\n"))
        .stdout(str::contains("Part 2 Solution: 0\n"));
}
