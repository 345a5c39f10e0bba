use anyhow::{Context, Result};
use log::debug;

use crate::{
    grid::{Direction, Grid, Neighborhood, Position},
    puzzle::{Answers, Parameters, Solution},
    search,
};

pub struct Puzzle;

impl Solution for Puzzle {
    fn solve(&self, input: &str, _params: &Parameters) -> Result<Answers> {
        let garden = Garden::new(Grid::from_text(input).context("Failed to read garden map.")?);
        let regions = garden.regions();
        debug!("Garden has {} region(s).", regions.len());

        Ok(Answers::new(
            regions
                .iter()
                .map(|r| r.len() * garden.perimeter(r))
                .sum::<usize>(),
            regions
                .iter()
                .map(|r| r.len() * garden.side_n(r))
                .sum::<usize>(),
        ))
    }
}

pub struct Garden {
    plots: Grid<char>,
}

impl Garden {
    pub fn new(plots: Grid<char>) -> Self {
        Self { plots }
    }

    /// Connected plots growing the same plant, every plot in exactly one region.
    pub fn regions(&self) -> Vec<Vec<Position>> {
        search::components(self.plots.positions(), |pos| {
            self.plots
                .neighbors(pos, Neighborhood::Orthogonal)
                .filter(|next_pos| self.is_same_plant(pos, Some(*next_pos)))
                .collect::<Vec<_>>()
        })
    }

    pub fn perimeter(&self, region: &[Position]) -> usize {
        region
            .iter()
            .map(|pos| {
                Direction::all_dirs()
                    .iter()
                    .filter(|dir| !self.is_same_plant(pos, pos.neighbor(**dir)))
                    .count()
            })
            .sum()
    }

    /// Sides of a region, equal to its number of corners.
    pub fn side_n(&self, region: &[Position]) -> usize {
        region
            .iter()
            .map(|pos| {
                Direction::all_dirs()
                    .iter()
                    .filter(|dir| self.is_corner(pos, **dir))
                    .count()
            })
            .sum()
    }

    /// Whether `pos` has a corner between `dir` and the direction clockwise from it.
    fn is_corner(&self, pos: &Position, dir: Direction) -> bool {
        let next_dir = dir.turn_clockwise();
        let side0 = self.is_same_plant(pos, pos.neighbor(dir));
        let side1 = self.is_same_plant(pos, pos.neighbor(next_dir));
        let diagonal = pos
            .neighbor(dir)
            .and_then(|side_pos| side_pos.neighbor(next_dir));
        let outer = !side0 && !side1;
        let inner = side0 && side1 && !self.is_same_plant(pos, diagonal);

        outer || inner
    }

    fn is_same_plant(&self, pos: &Position, other: Option<Position>) -> bool {
        other
            .and_then(|other| self.plots.tile(&other))
            .is_some_and(|plant| self.plots.tile(pos) == Some(plant))
    }
}
