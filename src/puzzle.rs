use std::{error, fmt::Display};

use anyhow::Result;
use int_enum::IntEnum;

use crate::{
    day01, day02, day03, day04, day05, day06, day07, day08, day09, day10, day11, day12, day13,
    day14, day15, day16, day17, day18, day20,
};

/// Printed in place of an answer that has no solution.
pub const UNREACHABLE: &str = "-1";

#[derive(Debug)]
pub enum Error {
    InvalidDay(u8),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidDay(n) => write!(
                f,
                "Invalid day specified. No solution exists for day {}.",
                n
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub part1: String,
    pub part2: String,
}

impl Answers {
    pub fn new(part1: impl ToString, part2: impl ToString) -> Self {
        Self {
            part1: part1.to_string(),
            part2: part2.to_string(),
        }
    }
}

/// Renders a search result, using [`UNREACHABLE`] when there is none.
pub fn answer_or_unreachable<T: Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| UNREACHABLE.to_string())
}

/// Knobs of puzzles whose example and real inputs differ in more than the text.
#[derive(Debug, Clone, Default)]
pub struct Parameters {
    pub lobby_width: Option<usize>,
    pub lobby_height: Option<usize>,
    pub memory_size: Option<usize>,
    pub fallen_bytes: Option<usize>,
    pub cheat_threshold: Option<usize>,
}

pub trait Solution {
    fn solve(&self, input: &str, params: &Parameters) -> Result<Answers>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntEnum)]
#[repr(u8)]
pub enum Day {
    HistorianHysteria = 1,
    RedNosedReports = 2,
    MullItOver = 3,
    CeresSearch = 4,
    PrintQueue = 5,
    GuardGallivant = 6,
    BridgeRepair = 7,
    ResonantCollinearity = 8,
    DiskFragmenter = 9,
    HoofIt = 10,
    PlutonianPebbles = 11,
    GardenGroups = 12,
    ClawContraption = 13,
    RestroomRedoubt = 14,
    WarehouseWoes = 15,
    ReindeerMaze = 16,
    ChronospatialComputer = 17,
    RamRun = 18,
    RaceCondition = 20,
}

impl Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Day {}: {}", self.number(), self.title())
    }
}

impl Day {
    pub fn from_number(n: u8) -> Result<Self, Error> {
        Day::try_from(n).map_err(Error::InvalidDay)
    }

    pub fn number(&self) -> u8 {
        u8::from(*self)
    }

    /// Directory name of this day's data, e.g. `day-07`.
    pub fn dir_name(&self) -> String {
        format!("day-{:02}", self.number())
    }

    pub fn title(&self) -> &'static str {
        match self {
            Day::HistorianHysteria => "Historian Hysteria",
            Day::RedNosedReports => "Red-Nosed Reports",
            Day::MullItOver => "Mull It Over",
            Day::CeresSearch => "Ceres Search",
            Day::PrintQueue => "Print Queue",
            Day::GuardGallivant => "Guard Gallivant",
            Day::BridgeRepair => "Bridge Repair",
            Day::ResonantCollinearity => "Resonant Collinearity",
            Day::DiskFragmenter => "Disk Fragmenter",
            Day::HoofIt => "Hoof It",
            Day::PlutonianPebbles => "Plutonian Pebbles",
            Day::GardenGroups => "Garden Groups",
            Day::ClawContraption => "Claw Contraption",
            Day::RestroomRedoubt => "Restroom Redoubt",
            Day::WarehouseWoes => "Warehouse Woes",
            Day::ReindeerMaze => "Reindeer Maze",
            Day::ChronospatialComputer => "Chronospatial Computer",
            Day::RamRun => "RAM Run",
            Day::RaceCondition => "Race Condition",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Day::HistorianHysteria => "🕵",
            Day::RedNosedReports => "🦌",
            Day::MullItOver => "🧮",
            Day::CeresSearch => "🔎",
            Day::PrintQueue => "🖨️",
            Day::GuardGallivant => "💂",
            Day::BridgeRepair => "🌉",
            Day::ResonantCollinearity => "📡",
            Day::DiskFragmenter => "💾",
            Day::HoofIt => "🥾",
            Day::PlutonianPebbles => "🪨",
            Day::GardenGroups => "🪴",
            Day::ClawContraption => "🕹️",
            Day::RestroomRedoubt => "🚽",
            Day::WarehouseWoes => "📦",
            Day::ReindeerMaze => "🧭",
            Day::ChronospatialComputer => "💻",
            Day::RamRun => "🐏",
            Day::RaceCondition => "🏎️",
        }
    }

    pub fn solution(&self) -> &'static dyn Solution {
        match self {
            Day::HistorianHysteria => &day01::Puzzle,
            Day::RedNosedReports => &day02::Puzzle,
            Day::MullItOver => &day03::Puzzle,
            Day::CeresSearch => &day04::Puzzle,
            Day::PrintQueue => &day05::Puzzle,
            Day::GuardGallivant => &day06::Puzzle,
            Day::BridgeRepair => &day07::Puzzle,
            Day::ResonantCollinearity => &day08::Puzzle,
            Day::DiskFragmenter => &day09::Puzzle,
            Day::HoofIt => &day10::Puzzle,
            Day::PlutonianPebbles => &day11::Puzzle,
            Day::GardenGroups => &day12::Puzzle,
            Day::ClawContraption => &day13::Puzzle,
            Day::RestroomRedoubt => &day14::Puzzle,
            Day::WarehouseWoes => &day15::Puzzle,
            Day::ReindeerMaze => &day16::Puzzle,
            Day::ChronospatialComputer => &day17::Puzzle,
            Day::RamRun => &day18::Puzzle,
            Day::RaceCondition => &day20::Puzzle,
        }
    }

    pub fn solve(&self, input: &str, params: &Parameters) -> Result<Answers> {
        self.solution().solve(input.trim_end(), params)
    }
}
