use std::{cmp::Ordering, collections::HashSet, error, fmt::Display};

use anyhow::{Context, Result};
use log::debug;

use crate::puzzle::{Answers, Parameters, Solution};

#[derive(Debug)]
pub enum Error {
    InvalidRuleText(String),
    InvalidPageNumber(String),
    EmptyUpdate,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidRuleText(s) => write!(f, "Invalid rule text({}) for printer.", s),
            Error::InvalidPageNumber(s) => {
                write!(f, "Invalid page number({}) in update.", s)
            }
            Error::EmptyUpdate => write!(f, "Expect at least one page in update."),
        }
    }
}

impl error::Error for Error {}

pub struct Puzzle;

impl Solution for Puzzle {
    fn solve(&self, input: &str, _params: &Parameters) -> Result<Answers> {
        let (rules, updates) = read_printer_settings(input)?;
        debug!("Read {} rule(s) and {} update(s).", rules.rule_n(), updates.len());

        let (valid_updates, invalid_updates): (Vec<_>, Vec<_>) =
            updates.iter().partition(|update| rules.is_valid(update));
        let valid_middle_sum = valid_updates
            .iter()
            .map(|update| middle_page(update))
            .sum::<usize>();
        let corrected_middle_sum = invalid_updates
            .iter()
            .map(|update| middle_page(&rules.correct(update)))
            .sum::<usize>();

        Ok(Answers::new(valid_middle_sum, corrected_middle_sum))
    }
}

#[derive(Debug, Default)]
pub struct PrinterRules {
    rules: HashSet<(usize, usize)>,
}

impl PrinterRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_rule(&mut self, rule_text: &str) -> Result<(), Error> {
        let (left_text, right_text) = rule_text
            .split_once('|')
            .ok_or(Error::InvalidRuleText(rule_text.to_string()))?;
        let left_n = left_text
            .parse::<usize>()
            .map_err(|_| Error::InvalidRuleText(rule_text.to_string()))?;
        let right_n = right_text
            .parse::<usize>()
            .map_err(|_| Error::InvalidRuleText(rule_text.to_string()))?;
        self.rules.insert((left_n, right_n));

        Ok(())
    }

    pub fn rule_n(&self) -> usize {
        self.rules.len()
    }

    pub fn is_valid(&self, update: &[usize]) -> bool {
        update.iter().enumerate().all(|(ind, before)| {
            update[(ind + 1)..]
                .iter()
                .all(|after| self.order(*before, *after) != Ordering::Greater)
        })
    }

    pub fn correct(&self, update: &[usize]) -> Vec<usize> {
        let mut corrected = Vec::from(update);
        corrected.sort_by(|before, after| self.order(*before, *after));

        corrected
    }

    fn order(&self, left_n: usize, right_n: usize) -> Ordering {
        if self.rules.contains(&(left_n, right_n)) {
            Ordering::Less
        } else if self.rules.contains(&(right_n, left_n)) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

pub fn read_printer_settings(text: &str) -> Result<(PrinterRules, Vec<Vec<usize>>)> {
    let mut rules = PrinterRules::new();
    let mut lines = text.lines().enumerate();
    for (_, line) in lines.by_ref() {
        if line.is_empty() {
            break;
        }

        rules
            .add_rule(line)
            .with_context(|| format!("Failed to add printer rule text({}).", line))?;
    }

    let updates = lines
        .map(|(ind, line)| {
            read_update(line).with_context(|| format!("Failed to read update in line {}.", ind + 1))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((rules, updates))
}

fn read_update(line: &str) -> Result<Vec<usize>, Error> {
    let update = line
        .split(',')
        .map(|s| {
            s.trim()
                .parse::<usize>()
                .map_err(|_| Error::InvalidPageNumber(s.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if update.is_empty() {
        return Err(Error::EmptyUpdate);
    }

    Ok(update)
}

fn middle_page(update: &[usize]) -> usize {
    update[update.len() / 2]
}
