use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

pub mod graph;
pub mod grid;
pub mod indicator;
pub mod puzzle;
pub mod search;

pub mod day01;
pub mod day02;
pub mod day03;
pub mod day04;
pub mod day05;
pub mod day06;
pub mod day07;
pub mod day08;
pub mod day09;
pub mod day10;
pub mod day11;
pub mod day12;
pub mod day13;
pub mod day14;
pub mod day15;
pub mod day16;
pub mod day17;
pub mod day18;
pub mod day20;

use puzzle::{Day, Parameters};

#[derive(Debug, Parser)]
#[command(version, about = "Solutions to Advent of Code 2024.")]
pub struct CLIArgs {
    /// Day of the puzzle to solve.
    #[arg(short, long, default_value_t = 1)]
    pub day: u8,
    /// Input file, defaults to <DATA_DIR>/day-NN/data.txt.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,
    /// Width of the lobby robots move in (day 14).
    #[arg(long)]
    pub lobby_width: Option<usize>,
    /// Height of the lobby robots move in (day 14).
    #[arg(long)]
    pub lobby_height: Option<usize>,
    /// Side length of the memory space (day 18).
    #[arg(long)]
    pub memory_size: Option<usize>,
    /// Bytes fallen before the first path search (day 18).
    #[arg(long)]
    pub fallen_bytes: Option<usize>,
    /// Least picoseconds a cheat must save to count (day 20).
    #[arg(long)]
    pub cheat_threshold: Option<usize>,
    /// Print the answers only.
    #[arg(short, long)]
    pub quiet: bool,
}

impl CLIArgs {
    pub fn input_path(&self, day: Day) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(|| self.data_dir.join(day.dir_name()).join("data.txt"))
    }

    pub fn parameters(&self) -> Parameters {
        Parameters {
            lobby_width: self.lobby_width,
            lobby_height: self.lobby_height,
            memory_size: self.memory_size,
            fallen_bytes: self.fallen_bytes,
            cheat_threshold: self.cheat_threshold,
        }
    }
}

pub fn read_input<P: AsRef<Path>>(path: P) -> Result<String> {
    fs::read_to_string(&path)
        .with_context(|| format!("Failed to read given file({}).", path.as_ref().display()))
}
