use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "9", "--input", "tests/inputs/day-09.txt"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Part 1 Solution: 1928\n"));
}

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "9", "--input", "tests/inputs/day-09.txt"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Part 2 Solution: 2858\n"));
}

#[test]
fn checksum_is_reproducible() {
    let disk = aoc2024::day09::Disk::try_from("12345").unwrap();

    assert_eq!(disk.compact_blocks().checksum(), 60);
    assert_eq!(disk.compact_blocks().checksum(), 60);
    // No file fits any free span left of it.
    assert_eq!(disk.compact_files().checksum(), 132);
}
