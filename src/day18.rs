use std::{error, fmt::Display};

use anyhow::{Context, Result};
use log::{debug, warn};

use crate::{
    graph::Graph,
    grid::{Grid, Neighborhood, Position},
    puzzle::{answer_or_unreachable, Answers, Parameters, Solution, UNREACHABLE},
    search,
};

#[derive(Debug)]
pub enum Error {
    InvalidByteText(String),
    OutsideMemory(Position, usize),
    EmptyMemory,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidByteText(s) => write!(f, "Invalid text({}) for falling byte.", s),
            Error::OutsideMemory(pos, size) => write!(
                f,
                "Byte falls at {} outside memory space of size {}.",
                pos, size
            ),
            Error::EmptyMemory => write!(f, "Memory space must have at least one cell."),
        }
    }
}

impl error::Error for Error {}

pub struct Puzzle;

// Coordinate count below which the input is taken as the small example memory.
const EXAMPLE_BYTE_N: usize = 1024;

impl Solution for Puzzle {
    fn solve(&self, input: &str, params: &Parameters) -> Result<Answers> {
        let bytes = read_bytes(input)?;
        let (default_size, default_fallen_n) = if bytes.len() < EXAMPLE_BYTE_N {
            (7, 12)
        } else {
            (71, 1024)
        };
        let size = params.memory_size.unwrap_or_else(|| {
            warn!("No memory size given, use {} for {} byte(s).", default_size, bytes.len());
            default_size
        });
        let fallen_n = params.fallen_bytes.unwrap_or_else(|| {
            warn!(
                "No fallen byte count given, use {} for {} byte(s).",
                default_fallen_n,
                bytes.len()
            );
            default_fallen_n
        });
        debug!("Memory space of size {}, {} byte(s) fallen first.", size, fallen_n);

        let mut memory = MemorySpace::new(size)?;
        for pos in &bytes {
            memory.check_inside(pos)?;
        }

        let min_steps = memory.min_steps_after(&bytes[..fallen_n.min(bytes.len())]);
        let blocking_byte = memory
            .first_blocking_byte(&bytes)
            .map(|pos| format!("{},{}", pos.c, pos.r))
            .unwrap_or_else(|| UNREACHABLE.to_string());

        Ok(Answers::new(answer_or_unreachable(min_steps), blocking_byte))
    }
}

pub struct MemorySpace {
    size: usize,
    paths: Graph<Position>,
}

impl MemorySpace {
    pub fn new(size: usize) -> Result<Self, Error> {
        if size == 0 {
            return Err(Error::EmptyMemory);
        }

        let cells = Grid::new(size, size, ());
        let paths = Graph::from_grid(&cells, Neighborhood::Orthogonal, |_| true, |_, _| true);

        Ok(Self { size, paths })
    }

    fn check_inside(&self, pos: &Position) -> Result<(), Error> {
        if pos.r < self.size && pos.c < self.size {
            Ok(())
        } else {
            Err(Error::OutsideMemory(*pos, self.size))
        }
    }

    fn start(&self) -> Position {
        Position::new(0, 0)
    }

    fn exit(&self) -> Position {
        Position::new(self.size - 1, self.size - 1)
    }

    /// Fewest steps to the exit once the given bytes have fallen, `None` if cut off.
    pub fn min_steps_after(&mut self, bytes: &[Position]) -> Option<usize> {
        let cut = bytes
            .iter()
            .map(|pos| (*pos, self.paths.isolate(pos)))
            .collect::<Vec<_>>();
        let min_steps = self.min_steps(bytes);
        for (pos, sources) in cut.iter().rev() {
            self.paths.restore(pos, sources);
        }

        min_steps
    }

    /// The first byte whose fall leaves the exit unreachable.
    ///
    /// All bytes are removed up front, then restored from the last one until the exit
    /// can be reached again; the byte restored at that moment is the blocking one.
    pub fn first_blocking_byte(&mut self, bytes: &[Position]) -> Option<Position> {
        let mut cut = bytes
            .iter()
            .map(|pos| (*pos, self.paths.isolate(pos)))
            .collect::<Vec<_>>();
        let mut fallen_n = bytes.len();
        let mut blocking_byte = None;
        while self.min_steps(&bytes[..fallen_n]).is_none() {
            let Some((pos, sources)) = cut.pop() else {
                break;
            };

            fallen_n -= 1;
            self.paths.restore(&pos, &sources);
            blocking_byte = Some(pos);
        }
        for (pos, sources) in cut.iter().rev() {
            self.paths.restore(pos, sources);
        }

        blocking_byte
    }

    /// `fallen` lists the bytes currently cut from the graph.
    fn min_steps(&self, fallen: &[Position]) -> Option<usize> {
        let start = self.start();
        if fallen.contains(&start) {
            return None;
        }

        let exit = self.exit();
        search::bfs_steps(start, |pos| *pos == exit, |pos| self.paths.neighbors(pos).to_vec())
    }
}

pub fn read_bytes(text: &str) -> Result<Vec<Position>> {
    text.lines()
        .enumerate()
        .map(|(ind, line)| {
            read_byte(line).with_context(|| format!("Failed to read byte in line {}.", ind + 1))
        })
        .collect()
}

fn read_byte(line: &str) -> Result<Position, Error> {
    let (x_text, y_text) = line
        .split_once(',')
        .ok_or(Error::InvalidByteText(line.to_string()))?;
    let n = |s: &str| {
        s.trim()
            .parse::<usize>()
            .map_err(|_| Error::InvalidByteText(line.to_string()))
    };

    Ok(Position::new(n(y_text)?, n(x_text)?))
}
