use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "18", "--input", "tests/inputs/day-18.txt"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Part 1 Solution: 22\n"));
}

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "18", "--input", "tests/inputs/day-18.txt"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Part 2 Solution: 6,1\n"));
}

#[test]
fn given_memory_size_is_used() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args([
        "--day",
        "18",
        "--input",
        "tests/inputs/day-18.txt",
        "--memory-size",
        "7",
        "--fallen-bytes",
        "12",
    ]);

    cmd.assert()
        .success()
        .stdout(str::contains("Part 1 Solution: 22\n"));
}

#[test]
fn part2_output_unreachable_when_exit_never_blocked() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "18", "--input", "tests/inputs/day-18-unblocked.txt"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Part 1 Solution: 12\n"))
        .stdout(str::contains("Part 2 Solution: -1\n"));
}
