use std::{error, fmt::Display};

use anyhow::{Context, Result};
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::puzzle::{Answers, Parameters, Solution};

#[derive(Debug)]
pub enum Error {
    InvalidRobotText(String),
    EmptyLobby(usize, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidRobotText(s) => write!(f, "Invalid text({}) for robot.", s),
            Error::EmptyLobby(width, height) => {
                write!(f, "Lobby({}x{}) has no room for robots.", width, height)
            }
        }
    }
}

impl error::Error for Error {}

pub struct Puzzle;

const SAFETY_CHECK_SECONDS: i64 = 100;
// Robot count below which the input is taken as the small example lobby.
const EXAMPLE_ROBOT_N: usize = 50;

impl Solution for Puzzle {
    fn solve(&self, input: &str, params: &Parameters) -> Result<Answers> {
        let robots = read_robots(input)?;
        let lobby = Lobby::for_robots(robots.len(), params)?;
        debug!("Simulate {} robot(s) in {}.", robots.len(), lobby);

        Ok(Answers::new(
            lobby.safety_factor(&robots, SAFETY_CHECK_SECONDS),
            lobby.safest_second(&robots),
        ))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Robot {
    pos: (i64, i64),
    velocity: (i64, i64),
}

impl TryFrom<&str> for Robot {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static ROBOT_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"p=(-?\d+),(-?\d+)\s+v=(-?\d+),(-?\d+)").unwrap());

        let caps = ROBOT_PATTERN
            .captures(value)
            .ok_or(Error::InvalidRobotText(value.to_string()))?;
        let n = |ind: usize| {
            caps[ind]
                .parse::<i64>()
                .map_err(|_| Error::InvalidRobotText(value.to_string()))
        };

        Ok(Self {
            pos: (n(1)?, n(2)?),
            velocity: (n(3)?, n(4)?),
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Lobby {
    width: i64,
    height: i64,
}

impl Display for Lobby {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "lobby({}x{})", self.width, self.height)
    }
}

impl Lobby {
    pub fn new(width: usize, height: usize) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyLobby(width, height));
        }

        Ok(Self {
            width: width as i64,
            height: height as i64,
        })
    }

    /// Lobby from the parameters, guessing from the robot count when they are absent.
    pub fn for_robots(robot_n: usize, params: &Parameters) -> Result<Self, Error> {
        let (default_width, default_height) = if robot_n < EXAMPLE_ROBOT_N {
            (11, 7)
        } else {
            (101, 103)
        };
        let width = params.lobby_width.unwrap_or_else(|| {
            warn!("No lobby width given, use {} for {} robot(s).", default_width, robot_n);
            default_width
        });
        let height = params.lobby_height.unwrap_or_else(|| {
            warn!("No lobby height given, use {} for {} robot(s).", default_height, robot_n);
            default_height
        });

        Self::new(width, height)
    }

    pub fn safety_factor(&self, robots: &[Robot], seconds: i64) -> usize {
        let mut quadrant_counts = [0usize; 4];
        let (mid_x, mid_y) = (self.width / 2, self.height / 2);
        for (x, y) in robots.iter().map(|robot| self.pos_after(robot, seconds)) {
            if x == mid_x || y == mid_y {
                continue;
            }

            quadrant_counts[usize::from(x > mid_x) * 2 + usize::from(y > mid_y)] += 1;
        }

        quadrant_counts.iter().product()
    }

    /// Earliest second in one period of the robots' motion with the lowest safety factor.
    pub fn safest_second(&self, robots: &[Robot]) -> i64 {
        (0..(self.width * self.height))
            .min_by_key(|seconds| (self.safety_factor(robots, *seconds), *seconds))
            .unwrap_or(0)
    }

    fn pos_after(&self, robot: &Robot, seconds: i64) -> (i64, i64) {
        (
            (robot.pos.0 + robot.velocity.0 * seconds).rem_euclid(self.width),
            (robot.pos.1 + robot.velocity.1 * seconds).rem_euclid(self.height),
        )
    }
}

pub fn read_robots(text: &str) -> Result<Vec<Robot>> {
    text.lines()
        .enumerate()
        .map(|(ind, line)| {
            Robot::try_from(line)
                .with_context(|| format!("Failed to read robot in line {}.", ind + 1))
        })
        .collect()
}
