use std::{error, fmt::Display};

use anyhow::{Context, Result};
use log::debug;

use crate::puzzle::{Answers, Parameters, Solution};

#[derive(Debug)]
pub enum Error {
    InvalidDigit(char, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidDigit(c, ind) => {
                write!(f, "Invalid digit({}) at {} of disk map.", c, ind)
            }
        }
    }
}

impl error::Error for Error {}

pub struct Puzzle;

impl Solution for Puzzle {
    fn solve(&self, input: &str, _params: &Parameters) -> Result<Answers> {
        let disk = Disk::try_from(input.trim()).context("Failed to read disk map.")?;
        debug!(
            "Disk has {} file(s) in {} block(s).",
            disk.files.len(),
            disk.block_n()
        );

        Ok(Answers::new(
            disk.compact_blocks().checksum(),
            disk.compact_files().checksum(),
        ))
    }
}

#[derive(Debug, Clone, Copy)]
struct Span {
    start: usize,
    len: usize,
}

/// File spans indexed by file ID, and the free spans between them.
#[derive(Debug, Clone)]
pub struct Disk {
    files: Vec<Span>,
    frees: Vec<Span>,
}

impl TryFrom<&str> for Disk {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let mut files = Vec::new();
        let mut frees = Vec::new();
        let mut start = 0;
        for (ind, c) in value.chars().enumerate() {
            let len = c.to_digit(10).ok_or(Error::InvalidDigit(c, ind))? as usize;
            let span = Span { start, len };
            if ind % 2 == 0 {
                files.push(span);
            } else if len > 0 {
                frees.push(span);
            }
            start += len;
        }

        Ok(Self { files, frees })
    }
}

impl Disk {
    pub fn block_n(&self) -> usize {
        self.files
            .iter()
            .chain(self.frees.iter())
            .map(|span| span.start + span.len)
            .max()
            .unwrap_or(0)
    }

    /// Moves single blocks from the end into the leftmost free block.
    pub fn compact_blocks(&self) -> Layout {
        let mut blocks = self.blocks().0;
        let mut front = 0;
        let mut rear = blocks.len();
        loop {
            while front < rear && blocks[front].is_some() {
                front += 1;
            }
            while rear > front && blocks[rear - 1].is_none() {
                rear -= 1;
            }
            if rear - front < 2 {
                break;
            }

            blocks.swap(front, rear - 1);
        }

        Layout(blocks)
    }

    /// Moves whole files, highest ID first, into the leftmost free span that fits.
    pub fn compact_files(&self) -> Layout {
        let mut files = self.files.clone();
        let mut frees = self.frees.clone();
        for file in files.iter_mut().rev() {
            let Some(free) = frees
                .iter_mut()
                .take_while(|free| free.start < file.start)
                .find(|free| free.len >= file.len)
            else {
                continue;
            };

            file.start = free.start;
            free.start += file.len;
            free.len -= file.len;
        }

        Disk { files, frees }.blocks()
    }

    fn blocks(&self) -> Layout {
        let mut blocks = vec![None; self.block_n()];
        for (id, file) in self.files.iter().enumerate() {
            blocks[file.start..(file.start + file.len)].fill(Some(id));
        }

        Layout(blocks)
    }
}

/// File ID of each block, `None` for free ones.
pub struct Layout(Vec<Option<usize>>);

impl Layout {
    pub fn checksum(&self) -> usize {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(pos, id)| id.map(|id| pos * id))
            .sum()
    }
}
