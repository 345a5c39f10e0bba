use std::{error, fmt::Display};

use anyhow::{Context, Result};

use crate::puzzle::{Answers, Parameters, Solution};

#[derive(Debug)]
pub enum Error {
    InvalidLevel(String),
    EmptyReport,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidLevel(s) => write!(f, "Invalid text({}) for level in report.", s),
            Error::EmptyReport => write!(f, "Expect at least one level in report."),
        }
    }
}

impl error::Error for Error {}

pub struct Puzzle;

impl Solution for Puzzle {
    fn solve(&self, input: &str, _params: &Parameters) -> Result<Answers> {
        let reports = read_reports(input)?;
        let safe_n = reports.iter().filter(|r| r.is_safe()).count();
        let dampened_safe_n = reports.iter().filter(|r| r.is_safe_with_dampener()).count();

        Ok(Answers::new(safe_n, dampened_safe_n))
    }
}

#[derive(Debug)]
pub struct Report {
    levels: Vec<isize>,
}

impl TryFrom<&str> for Report {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let levels = value
            .split_ascii_whitespace()
            .map(|s| {
                s.parse::<isize>()
                    .map_err(|_| Error::InvalidLevel(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if levels.is_empty() {
            return Err(Error::EmptyReport);
        }

        Ok(Self { levels })
    }
}

impl Report {
    pub fn is_safe(&self) -> bool {
        Self::is_safe_levels(self.levels.iter().copied())
    }

    /// Safe as is, or after removing any single level.
    pub fn is_safe_with_dampener(&self) -> bool {
        self.is_safe()
            || (0..self.levels.len()).any(|skip_ind| {
                Self::is_safe_levels(
                    self.levels
                        .iter()
                        .enumerate()
                        .filter(|(ind, _)| *ind != skip_ind)
                        .map(|(_, level)| *level),
                )
            })
    }

    fn is_safe_levels(levels: impl Iterator<Item = isize>) -> bool {
        let mut last_level = None;
        let mut trend = None;
        for level in levels {
            if let Some(last_level) = last_level {
                let diff: isize = level - last_level;
                if !(1..=3).contains(&diff.abs()) {
                    return false;
                }

                if *trend.get_or_insert(diff.signum()) != diff.signum() {
                    return false;
                }
            }

            last_level = Some(level);
        }

        true
    }
}

pub fn read_reports(text: &str) -> Result<Vec<Report>> {
    text.lines()
        .enumerate()
        .map(|(ind, line)| {
            Report::try_from(line)
                .with_context(|| format!("Failed to read report in line {}.", ind + 1))
        })
        .collect()
}
