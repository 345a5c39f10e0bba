use anyhow::{Context, Result};
use log::debug;

use crate::{
    graph::Graph,
    grid::{self, Grid, Neighborhood, Position},
    puzzle::{Answers, Parameters, Solution},
    search,
};

pub struct Puzzle;

impl Solution for Puzzle {
    fn solve(&self, input: &str, _params: &Parameters) -> Result<Answers> {
        let map = TopographicMap::try_from(input).context("Failed to read topographic map.")?;
        debug!(
            "Topographic map has {} trailhead(s) and {} uphill step(s).",
            map.trailheads().count(),
            map.trails.edge_n()
        );

        Ok(Answers::new(map.score_sum(), map.rating_sum()))
    }
}

const TRAIL_END_HEIGHT: u32 = 9;

pub struct TopographicMap {
    heights: Grid<u32>,
    /// Edges only climb by exactly one.
    trails: Graph<Position>,
}

impl TryFrom<&str> for TopographicMap {
    type Error = grid::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let heights = Grid::from_text(value)?
            .try_map(|pos, c| c.to_digit(10).ok_or(grid::Error::InvalidChar(*c, pos)))?;
        let trails = Graph::from_grid(
            &heights,
            Neighborhood::Orthogonal,
            |_| true,
            |from, to| *to == from + 1,
        );

        Ok(Self { heights, trails })
    }
}

impl TopographicMap {
    pub fn trailheads(&self) -> impl Iterator<Item = Position> + '_ {
        self.heights
            .tiles()
            .filter(|(_, h)| **h == 0)
            .map(|(pos, _)| pos)
    }

    /// Σ of distinct trail ends reachable from each trailhead.
    pub fn score_sum(&self) -> usize {
        self.trailheads()
            .map(|head| {
                search::bfs_distances(head, |pos| self.trails.neighbors(pos).to_vec())
                    .into_keys()
                    .filter(|pos| self.is_trail_end(pos))
                    .count()
            })
            .sum()
    }

    /// Σ of distinct trails starting from each trailhead.
    pub fn rating_sum(&self) -> usize {
        let is_goal = |pos: &Position| self.is_trail_end(pos);
        let successors = |pos: &Position| self.trails.neighbors(pos).to_vec();
        self.trailheads()
            .map(|head| search::count_paths(&head, &is_goal, &successors))
            .sum()
    }

    fn is_trail_end(&self, pos: &Position) -> bool {
        self.heights.tile(pos) == Some(&TRAIL_END_HEIGHT)
    }
}
