use std::{
    io::{stderr, IsTerminal},
    time::Instant,
};

use anyhow::{Context, Result};
use aoc2024::{indicator::Indicator, puzzle::Day, CLIArgs};
use clap::Parser;
use log::info;

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let day = Day::from_number(args.day)?;
    let input_path = args.input_path(day);
    info!("Solving {} with input {}.", day, input_path.display());
    let input = aoc2024::read_input(&input_path).with_context(|| {
        format!(
            "Failed to read puzzle input of day {} from given file({}).",
            day.number(),
            input_path.display()
        )
    })?;

    let start = Instant::now();
    if !args.quiet {
        println!(
            "🎄 Advent of Code [2024] - Day {} {}:",
            day.number(),
            day.icon()
        );
    }

    let indicator = (!args.quiet && stderr().is_terminal()).then(Indicator::start);
    let answers = day.solve(&input, &args.parameters());
    if let Some(indicator) = indicator {
        indicator.stop();
    }

    let answers = answers.with_context(|| format!("Failed to solve {}.", day))?;
    println!("\t✅ Part 1 Solution: {}", answers.part1);
    println!("\t✅ Part 2 Solution: {}", answers.part2);
    if !args.quiet {
        println!();
        println!("🕒 Execution Time: {:?}", start.elapsed());
    }

    Ok(())
}
