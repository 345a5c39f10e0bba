use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "15", "--input", "tests/inputs/day-15.txt"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Part 1 Solution: 2028\n"));
}

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "15", "--input", "tests/inputs/day-15.txt"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Part 2 Solution: 1751\n"));
}

#[test]
fn wide_boxes_pushed_together() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "15", "--input", "tests/inputs/day-15-wide.txt"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Part 1 Solution: 908\n"))
        .stdout(str::contains("Part 2 Solution: 618\n"));
}
