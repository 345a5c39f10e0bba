use std::collections::HashSet;

use anyhow::{Context, Result};
use log::debug;

use crate::{
    grid::{Direction, Grid, Position},
    puzzle::{Answers, Parameters, Solution, UNREACHABLE},
    search,
};

pub struct Puzzle;

impl Solution for Puzzle {
    fn solve(&self, input: &str, _params: &Parameters) -> Result<Answers> {
        let maze = Maze::try_from(input).context("Failed to read reindeer maze.")?;
        let Some((score, tile_n)) = maze.best_paths() else {
            return Ok(Answers::new(UNREACHABLE, 0));
        };
        debug!("Best score {} covers {} tile(s).", score, tile_n);

        Ok(Answers::new(score, tile_n))
    }
}

const STEP_COST: usize = 1;
const TURN_COST: usize = 1000;

type Reindeer = (Position, Direction);

pub struct Maze {
    tiles: Grid<char>,
    start: Position,
    end: Position,
}

impl TryFrom<&str> for Maze {
    type Error = crate::grid::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let tiles = Grid::from_text(value)?;
        let start = tiles.find_unique('S')?;
        let end = tiles.find_unique('E')?;

        Ok(Self { tiles, start, end })
    }
}

impl Maze {
    /// Lowest score from the start facing east to the end, with the number of tiles
    /// lying on at least one path of that score.
    pub fn best_paths(&self) -> Option<(usize, usize)> {
        let from_start = search::min_costs([(self.start, Direction::East)], |reindeer| {
            self.moves(reindeer, false)
        });
        let to_end = search::min_costs(
            Direction::all_dirs().iter().map(|dir| (self.end, *dir)),
            |reindeer| self.moves(reindeer, true),
        );

        let best_score = Direction::all_dirs()
            .iter()
            .filter_map(|dir| from_start.get(&(self.end, *dir)))
            .min()
            .copied()?;
        let best_tiles = from_start
            .iter()
            .filter(|(reindeer, score)| {
                to_end
                    .get(*reindeer)
                    .is_some_and(|rest_score| **score + rest_score == best_score)
            })
            .map(|((pos, _), _)| *pos)
            .collect::<HashSet<_>>();

        Some((best_score, best_tiles.len()))
    }

    /// Step ahead (or back when `backward`) and both turns, with their costs.
    fn moves(&self, reindeer: &Reindeer, backward: bool) -> Vec<(Reindeer, usize)> {
        let (pos, dir) = *reindeer;
        let mut moves = vec![
            ((pos, dir.turn_clockwise()), TURN_COST),
            ((pos, dir.turn_counterclockwise()), TURN_COST),
        ];
        let step_dir = if backward { dir.reverse() } else { dir };
        if let Some(next_pos) = self
            .tiles
            .neighbor(&pos, step_dir)
            .filter(|next_pos| self.is_open(next_pos))
        {
            moves.push(((next_pos, dir), STEP_COST));
        }

        moves
    }

    fn is_open(&self, pos: &Position) -> bool {
        self.tiles.tile(pos).is_some_and(|c| *c != '#')
    }
}
