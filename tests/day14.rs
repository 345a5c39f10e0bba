use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "14", "--input", "tests/inputs/day-14.txt"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Part 1 Solution: 12\n"));
}

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "14", "--input", "tests/inputs/day-14.txt"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Part 2 Solution: 0\n"));
}

#[test]
fn given_lobby_size_is_used() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args([
        "--day",
        "14",
        "--input",
        "tests/inputs/day-14.txt",
        "--lobby-width",
        "11",
        "--lobby-height",
        "7",
    ]);

    cmd.assert()
        .success()
        .stdout(str::contains("Part 1 Solution: 12\n"));
}
