use std::{collections::HashMap, error, fmt::Display};

use anyhow::{Context, Result};
use log::debug;

use crate::puzzle::{Answers, Parameters, Solution};

#[derive(Debug)]
pub enum Error {
    InvalidStone(String),
    EngravingOverflow(u64),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidStone(s) => write!(f, "Invalid number({}) engraved on stone.", s),
            Error::EngravingOverflow(n) => write!(
                f,
                "Number({}) multiplied by 2024 is too large to engrave on stone.",
                n
            ),
        }
    }
}

impl error::Error for Error {}

pub struct Puzzle;

impl Solution for Puzzle {
    fn solve(&self, input: &str, _params: &Parameters) -> Result<Answers> {
        let mut stones = Stones::try_from(input).context("Failed to read stones.")?;
        stones.blink_n(25).context("Failed to blink 25 times.")?;
        let stone_n_25 = stones.count();
        stones.blink_n(50).context("Failed to blink 75 times.")?;
        debug!(
            "{} distinct number(s) engraved after 75 blinks.",
            stones.counts.len()
        );

        Ok(Answers::new(stone_n_25, stones.count()))
    }
}

/// Stone counts per engraved number, order never matters.
#[derive(Debug, Clone)]
pub struct Stones {
    counts: HashMap<u64, usize>,
}

impl TryFrom<&str> for Stones {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut counts = HashMap::new();
        for s in value.split_ascii_whitespace() {
            let n = s
                .parse::<u64>()
                .map_err(|_| Error::InvalidStone(s.to_string()))?;
            *counts.entry(n).or_default() += 1;
        }

        Ok(Self { counts })
    }
}

impl Stones {
    pub fn count(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn blink_n(&mut self, n: usize) -> Result<(), Error> {
        for _ in 0..n {
            self.blink()?;
        }

        Ok(())
    }

    /// Stones are left untouched when any of them can't change.
    pub fn blink(&mut self) -> Result<(), Error> {
        let mut next_counts: HashMap<u64, usize> = HashMap::with_capacity(self.counts.len());
        for (n, count) in &self.counts {
            let (first, second) = change(*n)?;
            *next_counts.entry(first).or_default() += *count;
            if let Some(second) = second {
                *next_counts.entry(second).or_default() += *count;
            }
        }

        self.counts = next_counts;

        Ok(())
    }
}

fn change(n: u64) -> Result<(u64, Option<u64>), Error> {
    if n == 0 {
        return Ok((1, None));
    }

    let digit_n = n.ilog10() + 1;
    if digit_n % 2 == 0 {
        let half_unit = 10u64.pow(digit_n / 2);
        Ok((n / half_unit, Some(n % half_unit)))
    } else {
        n.checked_mul(2024)
            .map(|next_n| (next_n, None))
            .ok_or(Error::EngravingOverflow(n))
    }
}
