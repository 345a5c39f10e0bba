use std::{error, fmt::Display};

use anyhow::{Context, Result};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::puzzle::{Answers, Parameters, Solution};

#[derive(Debug)]
pub enum Error {
    InvalidMachineText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidMachineText(s) => {
                write!(f, "Invalid text({}) for claw machine.", s)
            }
        }
    }
}

impl error::Error for Error {}

pub struct Puzzle;

const PRIZE_OFFSET: i64 = 10_000_000_000_000;
const MAX_PRESS_N: i64 = 100;

impl Solution for Puzzle {
    fn solve(&self, input: &str, _params: &Parameters) -> Result<Answers> {
        let machines = read_machines(input)?;
        debug!("Read {} claw machine(s).", machines.len());

        let limited_tokens = machines
            .iter()
            .filter_map(|m| m.min_tokens(Some(MAX_PRESS_N)))
            .sum::<i64>();
        let far_tokens = machines
            .iter()
            .map(|m| m.with_prize_offset(PRIZE_OFFSET))
            .filter_map(|m| m.min_tokens(None))
            .sum::<i64>();

        Ok(Answers::new(limited_tokens, far_tokens))
    }
}

#[derive(Debug, Clone)]
pub struct ClawMachine {
    button_a: (i64, i64),
    button_b: (i64, i64),
    prize: (i64, i64),
}

impl TryFrom<&str> for ClawMachine {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static MACHINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(
                r"Button A: X\+(\d+), Y\+(\d+)\s+Button B: X\+(\d+), Y\+(\d+)\s+Prize: X=(\d+), Y=(\d+)",
            )
            .unwrap()
        });

        let caps = MACHINE_PATTERN
            .captures(value)
            .ok_or(Error::InvalidMachineText(value.to_string()))?;
        let n = |ind: usize| {
            caps[ind]
                .parse::<i64>()
                .map_err(|_| Error::InvalidMachineText(value.to_string()))
        };

        Ok(Self {
            button_a: (n(1)?, n(2)?),
            button_b: (n(3)?, n(4)?),
            prize: (n(5)?, n(6)?),
        })
    }
}

impl ClawMachine {
    pub fn with_prize_offset(&self, offset: i64) -> Self {
        Self {
            prize: (self.prize.0 + offset, self.prize.1 + offset),
            ..self.clone()
        }
    }

    /// Tokens for the only press counts reaching the prize, by Cramer's rule.
    ///
    /// Machines with parallel buttons are treated as unwinnable.
    pub fn min_tokens(&self, max_press_n: Option<i64>) -> Option<i64> {
        let (ax, ay) = self.button_a;
        let (bx, by) = self.button_b;
        let (px, py) = self.prize;
        let det = ax * by - ay * bx;
        if det == 0 {
            return None;
        }

        let a_num = px * by - py * bx;
        let b_num = ax * py - ay * px;
        if a_num % det != 0 || b_num % det != 0 {
            return None;
        }

        let (a_n, b_n) = (a_num / det, b_num / det);
        let in_limit = |n: i64| n >= 0 && max_press_n.map_or(true, |max| n <= max);
        if in_limit(a_n) && in_limit(b_n) {
            Some(3 * a_n + b_n)
        } else {
            None
        }
    }
}

pub fn read_machines(text: &str) -> Result<Vec<ClawMachine>> {
    text.split("\n\n")
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .enumerate()
        .map(|(ind, s)| {
            ClawMachine::try_from(s)
                .with_context(|| format!("Failed to read claw machine {}.", ind + 1))
        })
        .collect()
}
