use anyhow::{Context, Result};
use log::debug;

use crate::{
    grid::{Grid, Neighborhood, Position},
    puzzle::{Answers, Parameters, Solution},
};

pub struct Puzzle;

impl Solution for Puzzle {
    fn solve(&self, input: &str, _params: &Parameters) -> Result<Answers> {
        let puzzle = Grid::from_text(input).context("Failed to read word search puzzle.")?;
        debug!(
            "Word search puzzle has {} row(s) and {} column(s).",
            puzzle.row_n(),
            puzzle.col_n()
        );

        Ok(Answers::new(
            count_word(&puzzle, "XMAS"),
            count_x_mas(&puzzle),
        ))
    }
}

/// Occurrences of `word` read in any of the eight directions.
pub fn count_word(puzzle: &Grid<char>, word: &str) -> usize {
    let letters = word.chars().collect::<Vec<_>>();
    let Some(first_letter) = letters.first() else {
        return 0;
    };

    puzzle
        .tiles()
        .filter(|(_, c)| *c == first_letter)
        .map(|(pos, _)| {
            Neighborhood::WithDiagonals
                .offsets()
                .iter()
                .filter(|(dr, dc)| reads_along(puzzle, pos, *dr, *dc, &letters))
                .count()
        })
        .sum()
}

fn reads_along(
    puzzle: &Grid<char>,
    start: Position,
    dr: isize,
    dc: isize,
    letters: &[char],
) -> bool {
    let mut pos = Some(start);
    for letter in letters {
        match pos.and_then(|p| puzzle.tile(&p)) {
            Some(c) if c == letter => (),
            _ => return false,
        }
        pos = pos.and_then(|p| puzzle.step(&p, dr, dc));
    }

    true
}

/// Number of `A`s crossed by two diagonal `MAS`, each readable either way.
pub fn count_x_mas(puzzle: &Grid<char>) -> usize {
    puzzle
        .tiles()
        .filter(|(pos, c)| {
            **c == 'A'
                && is_mas_diagonal(puzzle, pos, (-1, -1), (1, 1))
                && is_mas_diagonal(puzzle, pos, (-1, 1), (1, -1))
        })
        .count()
}

fn is_mas_diagonal(
    puzzle: &Grid<char>,
    center: &Position,
    one_end: (isize, isize),
    other_end: (isize, isize),
) -> bool {
    let letter_at = |(dr, dc): (isize, isize)| {
        puzzle
            .step(center, dr, dc)
            .and_then(|pos| puzzle.tile(&pos).copied())
    };
    matches!(
        (letter_at(one_end), letter_at(other_end)),
        (Some('M'), Some('S')) | (Some('S'), Some('M'))
    )
}
