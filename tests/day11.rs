use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "11", "--input", "tests/inputs/day-11.txt"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Part 1 Solution: 55312\n"));
}

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "11", "--input", "tests/inputs/day-11.txt"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Part 2 Solution: 65601038650482\n"));
}

#[test]
fn stone_count_after_six_blinks() {
    let mut stones = aoc2024::day11::Stones::try_from("125 17").unwrap();
    stones.blink_n(6).unwrap();

    assert_eq!(stones.count(), 22);
}

#[test]
fn too_large_engraving_fails() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "11", "--input", "tests/inputs/day-11-overflow.txt"]);

    cmd.assert().failure().stderr(str::contains(
        "Number(1000000000000000000) multiplied by 2024 is too large to engrave on stone.",
    ));
}
