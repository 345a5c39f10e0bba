use std::collections::{HashMap, HashSet};

use anyhow::{Context, Result};
use log::debug;

use crate::{
    grid::{Grid, Position},
    puzzle::{Answers, Parameters, Solution},
};

pub struct Puzzle;

impl Solution for Puzzle {
    fn solve(&self, input: &str, _params: &Parameters) -> Result<Answers> {
        let city = Grid::from_text(input).context("Failed to read antenna map.")?;
        let antennas = group_antennas(&city);
        debug!("Found {} antenna frequency(s).", antennas.len());

        Ok(Answers::new(
            count_antinodes(&city, &antennas, false),
            count_antinodes(&city, &antennas, true),
        ))
    }
}

/// Positions of antennas by frequency.
pub fn group_antennas(city: &Grid<char>) -> HashMap<char, Vec<Position>> {
    let mut antennas: HashMap<char, Vec<Position>> = HashMap::new();
    for (pos, c) in city.tiles().filter(|(_, c)| c.is_ascii_alphanumeric()) {
        antennas.entry(*c).or_default().push(pos);
    }

    antennas
}

/// Distinct antinode positions inside the city.
///
/// With `resonant` set every point on the line through two same-frequency antennas counts,
/// otherwise only the two points twice as far from one antenna as from the other.
pub fn count_antinodes(
    city: &Grid<char>,
    antennas: &HashMap<char, Vec<Position>>,
    resonant: bool,
) -> usize {
    let mut antinodes = HashSet::new();
    for positions in antennas.values() {
        for (ind, pos0) in positions.iter().enumerate() {
            for pos1 in &positions[(ind + 1)..] {
                let dr = pos1.r as isize - pos0.r as isize;
                let dc = pos1.c as isize - pos0.c as isize;
                if resonant {
                    let divisor = gcd(dr.unsigned_abs(), dc.unsigned_abs()) as isize;
                    let (dr, dc) = (dr / divisor, dc / divisor);
                    antinodes.extend(walk(city, *pos0, dr, dc));
                    antinodes.extend(walk(city, *pos0, -dr, -dc));
                } else {
                    antinodes.extend(city.step(pos1, dr, dc));
                    antinodes.extend(city.step(pos0, -dr, -dc));
                }
            }
        }
    }

    antinodes.len()
}

/// `start` and every in-bounds position reached by repeating the given step.
fn walk(city: &Grid<char>, start: Position, dr: isize, dc: isize) -> Vec<Position> {
    let mut positions = vec![start];
    let mut pos = start;
    while let Some(next_pos) = city.step(&pos, dr, dc) {
        positions.push(next_pos);
        pos = next_pos;
    }

    positions
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }

    a
}
