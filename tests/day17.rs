use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "17", "--input", "tests/inputs/day-17.txt"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Part 1 Solution: 4,6,3,5,6,3,5,2,1,0\n"));
}

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "17", "--input", "tests/inputs/day-17.txt"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Part 2 Solution: -1\n"));
}

#[test]
fn quine_program_finds_register_a() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "17", "--input", "tests/inputs/day-17-quine.txt"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Part 1 Solution: 5,7,3,0\n"))
        .stdout(str::contains("Part 2 Solution: 117440\n"));
}
