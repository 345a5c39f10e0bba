use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "20", "--input", "tests/inputs/day-20.txt"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Part 1 Solution: 1\n"));
}

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "20", "--input", "tests/inputs/day-20.txt"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Part 2 Solution: 285\n"));
}

#[test]
fn given_threshold_counts_small_cheats() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args([
        "--day",
        "20",
        "--input",
        "tests/inputs/day-20.txt",
        "--cheat-threshold",
        "1",
    ]);

    cmd.assert()
        .success()
        .stdout(str::contains("Part 1 Solution: 44\n"));
}

#[test]
fn default_threshold_follows_track_cell_count() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.env("RUST_LOG", "warn")
        .args(["--day", "20", "--input", "tests/inputs/day-20-straight.txt"]);

    cmd.assert()
        .success()
        .stderr(str::contains("use 100 for track of 100 cell(s)"))
        .stdout(str::contains("Part 1 Solution: 0\n"));
}

#[test]
fn example_track_uses_small_default_threshold() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.env("RUST_LOG", "warn")
        .args(["--day", "20", "--input", "tests/inputs/day-20.txt"]);

    cmd.assert()
        .success()
        .stderr(str::contains("use 50 for track of 85 cell(s)"));
}
