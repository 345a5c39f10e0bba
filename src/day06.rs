use std::{collections::HashSet, error, fmt::Display};

use anyhow::{Context, Result};
use log::debug;

use crate::{
    grid::{self, Direction, Grid, GridBuilder, Position},
    puzzle::{Answers, Parameters, Solution},
};

#[derive(Debug)]
pub enum Error {
    MultipleGuards(Guard, Guard),
    NoGuard,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MultipleGuards(guard0, guard1) => write!(
                f,
                "Found multiple guards({}, {}) in given laboratory, expect one only.",
                guard0, guard1
            ),
            Error::NoGuard => write!(f, "There's no guard in given laboratory, but expect one."),
        }
    }
}

impl error::Error for Error {}

pub struct Puzzle;

impl Solution for Puzzle {
    fn solve(&self, input: &str, _params: &Parameters) -> Result<Answers> {
        let mut lab = read_lab(input)?;
        let Patrol::Exit(patrolled) = lab.sim_patrol() else {
            return Ok(Answers::new(crate::puzzle::UNREACHABLE, 0));
        };
        debug!("Guard patrols {} tile(s) before leaving.", patrolled.len());

        Ok(Answers::new(patrolled.len(), lab.count_loop_obstructions(&patrolled)))
    }
}

#[derive(Debug, Clone)]
pub struct Guard {
    pos: Position,
    dir: Direction,
}

impl Display for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.dir, self.pos)
    }
}

pub enum Patrol {
    /// Positions visited before walking off the map.
    Exit(HashSet<Position>),
    Loop,
}

pub struct Laboratory {
    tiles: Grid<bool>, // Is occupied?
    guard: Guard,
}

impl Laboratory {
    pub fn sim_patrol(&self) -> Patrol {
        let mut cur_guard = self.guard.clone();
        let mut guard_states = HashSet::new();
        loop {
            if !guard_states.insert((cur_guard.pos, cur_guard.dir)) {
                return Patrol::Loop;
            }

            let Some(next_pos) = self.tiles.neighbor(&cur_guard.pos, cur_guard.dir) else {
                break;
            };

            if self.is_occupied(&next_pos) {
                cur_guard.dir = cur_guard.dir.turn_clockwise();
            } else {
                cur_guard.pos = next_pos;
            }
        }

        Patrol::Exit(guard_states.into_iter().map(|(pos, _)| pos).collect())
    }

    /// Candidates come from the original route, other tiles are never reached.
    pub fn count_loop_obstructions(&mut self, patrolled: &HashSet<Position>) -> usize {
        let start_pos = self.guard.pos;
        let mut loop_n = 0;
        for pos in patrolled.iter().filter(|pos| **pos != start_pos) {
            self.set_occupied(pos, true);
            if matches!(self.sim_patrol(), Patrol::Loop) {
                loop_n += 1;
            }
            self.set_occupied(pos, false);
        }

        loop_n
    }

    fn is_occupied(&self, pos: &Position) -> bool {
        self.tiles.tile(pos).is_some_and(|is_occupied| *is_occupied)
    }

    fn set_occupied(&mut self, pos: &Position, is_occupied: bool) {
        if let Some(tile) = self.tiles.tile_mut(pos) {
            *tile = is_occupied;
        }
    }
}

pub fn read_lab(text: &str) -> Result<Laboratory> {
    let mut builder = GridBuilder::new();
    let mut guard: Option<Guard> = None;
    let mut multiple_guards = None;
    for (ind, line) in text.lines().enumerate() {
        builder
            .add_row(line, |pos, c| match c {
                '.' => Ok(false),
                '#' => Ok(true),
                '^' => {
                    let this_guard = Guard {
                        pos,
                        dir: Direction::North,
                    };
                    if let Some(last_guard) = guard.take() {
                        multiple_guards = Some((last_guard, this_guard.clone()));
                    }
                    guard = Some(this_guard);
                    Ok(false)
                }
                other => Err(grid::Error::InvalidChar(other, pos)),
            })
            .with_context(|| format!("Failed to read laboratory row {}.", ind + 1))?;
    }

    if let Some((guard0, guard1)) = multiple_guards {
        return Err(Error::MultipleGuards(guard0, guard1).into());
    }

    Ok(Laboratory {
        tiles: builder.build(),
        guard: guard.ok_or(Error::NoGuard)?,
    })
}
