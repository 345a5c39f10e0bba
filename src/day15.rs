use std::{
    collections::{HashSet, VecDeque},
    error,
    fmt::Display,
};

use anyhow::{Context, Result};
use log::debug;

use crate::{
    grid::{self, Direction, Grid, GridBuilder, Position},
    puzzle::{Answers, Parameters, Solution},
};

#[derive(Debug)]
pub enum Error {
    NoMoves,
    InvalidMove(char),
    MultipleRobots(Position, Position),
    NoRobot,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoMoves => write!(f, "Expect a blank line and moves after warehouse map."),
            Error::InvalidMove(c) => write!(f, "Invalid character({}) for robot move.", c),
            Error::MultipleRobots(pos0, pos1) => write!(
                f,
                "Found multiple robots({}, {}) in given warehouse, expect one only.",
                pos0, pos1
            ),
            Error::NoRobot => write!(f, "There's no robot in given warehouse, but expect one."),
        }
    }
}

impl error::Error for Error {}

pub struct Puzzle;

impl Solution for Puzzle {
    fn solve(&self, input: &str, _params: &Parameters) -> Result<Answers> {
        let (map_text, moves_text) = input
            .replace("\r\n", "\n")
            .split_once("\n\n")
            .map(|(map_text, moves_text)| (map_text.to_string(), moves_text.to_string()))
            .ok_or(Error::NoMoves)?;
        let moves = read_moves(&moves_text)?;
        debug!("Robot tries {} move(s).", moves.len());

        let mut warehouse = Warehouse::new(&map_text, false).context("Failed to read warehouse.")?;
        warehouse.move_robot(&moves);
        let mut wide_warehouse =
            Warehouse::new(&map_text, true).context("Failed to read wide warehouse.")?;
        wide_warehouse.move_robot(&moves);

        Ok(Answers::new(
            warehouse.gps_sum(),
            wide_warehouse.gps_sum(),
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Empty,
    Wall,
    Box,
    BoxLeft,
    BoxRight,
}

#[derive(Debug)]
pub struct Warehouse {
    tiles: Grid<Tile>,
    robot: Position,
}

impl Warehouse {
    /// Reads the map, doubling every tile horizontally if `wide` is set.
    pub fn new(text: &str, wide: bool) -> Result<Self> {
        let mut builder = GridBuilder::new();
        let mut robot = None;
        for (ind, line) in text.lines().enumerate() {
            let row_text = if wide {
                line.chars()
                    .flat_map(|c| match c {
                        'O' => ['[', ']'],
                        '@' => ['@', '.'],
                        other => [other, other],
                    })
                    .collect::<String>()
            } else {
                line.to_string()
            };

            let mut robots = Vec::new();
            builder
                .add_row(&row_text, |pos, c| match c {
                    '.' => Ok(Tile::Empty),
                    '#' => Ok(Tile::Wall),
                    'O' => Ok(Tile::Box),
                    '[' => Ok(Tile::BoxLeft),
                    ']' => Ok(Tile::BoxRight),
                    '@' => {
                        robots.push(pos);
                        Ok(Tile::Empty)
                    }
                    other => Err(grid::Error::InvalidChar(other, pos)),
                })
                .with_context(|| format!("Failed to read warehouse row {}.", ind + 1))?;
            for pos in robots {
                if let Some(last_pos) = robot.replace(pos) {
                    return Err(Error::MultipleRobots(last_pos, pos).into());
                }
            }
        }

        Ok(Self {
            tiles: builder.build(),
            robot: robot.ok_or(Error::NoRobot)?,
        })
    }

    pub fn move_robot(&mut self, moves: &[Direction]) {
        for dir in moves {
            if let Some(pushed) = self.pushed_tiles(*dir) {
                self.shift(&pushed, *dir);
                if let Some(next_pos) = self.robot.neighbor(*dir) {
                    self.robot = next_pos;
                }
            }
        }
    }

    /// Box tiles the robot would push along `dir`, `None` when a wall blocks them.
    fn pushed_tiles(&self, dir: Direction) -> Option<Vec<Position>> {
        let mut pushed = Vec::new();
        let mut searched = HashSet::new();
        let mut search_positions = VecDeque::from([self.robot]);
        while let Some(cur_pos) = search_positions.pop_front() {
            let next_pos = self.tiles.neighbor(&cur_pos, dir)?;
            let mut add = vec![next_pos];
            match self.tiles.tile(&next_pos)? {
                Tile::Wall => return None,
                Tile::Empty => continue,
                Tile::Box => (),
                Tile::BoxLeft => add.extend(next_pos.neighbor(Direction::East)),
                Tile::BoxRight => add.extend(next_pos.neighbor(Direction::West)),
            }

            for pos in add {
                if searched.insert(pos) {
                    pushed.push(pos);
                    search_positions.push_back(pos);
                }
            }
        }

        Some(pushed)
    }

    fn shift(&mut self, positions: &[Position], dir: Direction) {
        let moved = positions
            .iter()
            .filter_map(|pos| {
                let tile = self.tiles.tile_mut(pos)?;
                let moved_tile = *tile;
                *tile = Tile::Empty;
                Some((*pos, moved_tile))
            })
            .collect::<Vec<_>>();
        for (pos, moved_tile) in moved {
            if let Some(tile) = pos
                .neighbor(dir)
                .and_then(|next_pos| self.tiles.tile_mut(&next_pos))
            {
                *tile = moved_tile;
            }
        }
    }

    /// Σ of 100 × row + column over boxes, measured from their left edge.
    pub fn gps_sum(&self) -> usize {
        self.tiles
            .tiles()
            .filter(|(_, tile)| matches!(tile, Tile::Box | Tile::BoxLeft))
            .map(|(pos, _)| 100 * pos.r + pos.c)
            .sum()
    }
}

pub fn read_moves(text: &str) -> Result<Vec<Direction>, Error> {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| Direction::try_from(c).map_err(Error::InvalidMove))
        .collect()
}
