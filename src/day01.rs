use std::{error, fmt::Display};

use anyhow::{Context, Result};
use log::debug;

use crate::puzzle::{Answers, Parameters, Solution};

#[derive(Debug)]
pub enum Error {
    InvalidLocationId(String),
    MissingLocationId(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidLocationId(s) => write!(f, "Invalid text({}) for location ID.", s),
            Error::MissingLocationId(s) => {
                write!(f, "Expect two location IDs in line({}).", s)
            }
        }
    }
}

impl error::Error for Error {}

pub struct Puzzle;

impl Solution for Puzzle {
    fn solve(&self, input: &str, _params: &Parameters) -> Result<Answers> {
        let (mut list0, mut list1) = read_lists(input)?;
        debug!("Read {} location ID pair(s).", list0.len());
        list0.sort_unstable();
        list1.sort_unstable();

        Ok(Answers::new(
            total_distance(&list0, &list1),
            similarity_score(&list0, &list1),
        ))
    }
}

pub fn read_lists(text: &str) -> Result<(Vec<usize>, Vec<usize>)> {
    let mut list0 = Vec::new();
    let mut list1 = Vec::new();
    for (ind, line) in text.lines().enumerate() {
        let (id0, id1) =
            read_pair(line).with_context(|| format!("Failed to read line {}.", ind + 1))?;
        list0.push(id0);
        list1.push(id1);
    }

    Ok((list0, list1))
}

fn read_pair(line: &str) -> Result<(usize, usize), Error> {
    let mut ids = line.split_ascii_whitespace().map(|s| {
        s.parse::<usize>()
            .map_err(|_| Error::InvalidLocationId(s.to_string()))
    });
    match (ids.next(), ids.next(), ids.next()) {
        (Some(id0), Some(id1), None) => Ok((id0?, id1?)),
        _ => Err(Error::MissingLocationId(line.to_string())),
    }
}

/// Both lists must be sorted.
pub fn total_distance(list0: &[usize], list1: &[usize]) -> usize {
    list0
        .iter()
        .zip(list1.iter())
        .map(|(id0, id1)| id0.abs_diff(*id1))
        .sum::<usize>()
}

/// `list1` must be sorted.
pub fn similarity_score(list0: &[usize], list1: &[usize]) -> usize {
    list0
        .iter()
        .map(|id0| {
            let front = list1.partition_point(|id1| id1 < id0);
            let rear = list1.partition_point(|id1| id1 <= id0);
            id0 * (rear - front)
        })
        .sum::<usize>()
}
