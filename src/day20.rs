use std::collections::HashMap;

use anyhow::{Context, Result};
use log::{debug, warn};

use crate::{
    graph::Graph,
    grid::{self, Grid, Neighborhood, Position},
    puzzle::{Answers, Parameters, Solution},
    search,
};

pub struct Puzzle;

const SHORT_CHEAT_PICOSECONDS: usize = 2;
const LONG_CHEAT_PICOSECONDS: usize = 20;
// Track cell count below which the input is taken as the small example race.
const EXAMPLE_TRACK_LEN: usize = 100;

impl Solution for Puzzle {
    fn solve(&self, input: &str, params: &Parameters) -> Result<Answers> {
        let track = RaceTrack::try_from(input).context("Failed to read race track.")?;
        let Some(race_time) = track.race_time() else {
            warn!("End of race track can't be reached from start, no cheat helps.");
            return Ok(Answers::new(0, 0));
        };

        let threshold = params.cheat_threshold.unwrap_or_else(|| {
            let track_len = track.cell_n();
            let threshold = if track_len < EXAMPLE_TRACK_LEN { 50 } else { 100 };
            warn!(
                "No cheat threshold given, use {} for track of {} cell(s).",
                threshold, track_len
            );
            threshold
        });
        debug!("Race track takes {} picosecond(s) without cheating.", race_time);

        Ok(Answers::new(
            track.count_cheats(SHORT_CHEAT_PICOSECONDS, threshold),
            track.count_cheats(LONG_CHEAT_PICOSECONDS, threshold),
        ))
    }
}

pub struct RaceTrack {
    end: Position,
    /// Picoseconds from the start to each track position.
    times: HashMap<Position, usize>,
}

impl TryFrom<&str> for RaceTrack {
    type Error = grid::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let tiles = Grid::from_text(value)?;
        let start = tiles.find_unique('S')?;
        let end = tiles.find_unique('E')?;
        let track = Graph::from_grid(&tiles, Neighborhood::Orthogonal, |c| *c != '#', |_, _| true);
        let times = search::bfs_distances(start, |pos| track.neighbors(pos).to_vec());

        Ok(Self { end, times })
    }
}

impl RaceTrack {
    /// Picoseconds from start to end without cheating, `None` if the end is cut off.
    pub fn race_time(&self) -> Option<usize> {
        self.times.get(&self.end).copied()
    }

    /// Track cells reachable from the start.
    pub fn cell_n(&self) -> usize {
        self.times.len()
    }

    /// Cheats of at most `max_picoseconds` through walls saving at least `threshold`.
    ///
    /// A cheat from `p` to `q` at Manhattan distance `m` saves `t(q) - t(p) - m`.
    pub fn count_cheats(&self, max_picoseconds: usize, threshold: usize) -> usize {
        let reach = max_picoseconds as isize;
        self.times
            .iter()
            .map(|(from, from_time)| {
                (-reach..=reach)
                    .flat_map(|dr| {
                        let dc_reach = reach - dr.abs();
                        (-dc_reach..=dc_reach).filter_map(move |dc| from.offset(dr, dc))
                    })
                    .filter(|to| {
                        self.times.get(to).is_some_and(|to_time| {
                            to_time
                                .checked_sub(from_time + from.manhattan(to))
                                .is_some_and(|saved| saved >= threshold)
                        })
                    })
                    .count()
            })
            .sum()
    }
}
