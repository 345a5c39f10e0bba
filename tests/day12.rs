use assert_cmd::Command;
use aoc2024::{day12::Garden, grid::Grid};
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "12", "--input", "tests/inputs/day-12.txt"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Part 1 Solution: 1930\n"));
}

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2024").unwrap();
    cmd.args(["--day", "12", "--input", "tests/inputs/day-12.txt"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Part 2 Solution: 1206\n"));
}

fn fence_prices(text: &str) -> (usize, usize) {
    let garden = Garden::new(Grid::from_text(text).unwrap());
    let regions = garden.regions();

    (
        regions.iter().map(|r| r.len() * garden.perimeter(r)).sum(),
        regions.iter().map(|r| r.len() * garden.side_n(r)).sum(),
    )
}

#[test]
fn small_garden_prices() {
    assert_eq!(fence_prices("AAAA\nBBCD\nBBCC\nEEEC"), (140, 80));
}

#[test]
fn enclosed_regions_prices() {
    assert_eq!(
        fence_prices("EEEEE\nEXXXX\nEEEEE\nEXXXX\nEEEEE"),
        (692, 236)
    );
}

#[test]
fn uniform_garden_is_one_region() {
    let garden = Garden::new(Grid::from_text("AAAA\nAAAA\nAAAA").unwrap());
    let regions = garden.regions();

    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].len(), 12);
    assert_eq!(garden.perimeter(&regions[0]), 2 * (3 + 4));
    assert_eq!(garden.side_n(&regions[0]), 4);
}
