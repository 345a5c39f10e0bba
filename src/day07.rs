use std::{error, fmt::Display};

use anyhow::{Context, Result};
use log::debug;

use crate::puzzle::{Answers, Parameters, Solution};

#[derive(Debug)]
pub enum Error {
    NoColon(String),
    InvalidNumber(String),
    NoOperand(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoColon(s) => write!(f, "Expect ':' after test value in equation({}).", s),
            Error::InvalidNumber(s) => write!(f, "Invalid number({}) in equation.", s),
            Error::NoOperand(s) => write!(f, "Expect at least one operand in equation({}).", s),
        }
    }
}

impl error::Error for Error {}

pub struct Puzzle;

impl Solution for Puzzle {
    fn solve(&self, input: &str, _params: &Parameters) -> Result<Answers> {
        let equations = read_equations(input)?;
        debug!("Read {} equation(s).", equations.len());

        Ok(Answers::new(
            calibration_result(&equations, &[Operator::Add, Operator::Mul]),
            calibration_result(
                &equations,
                &[Operator::Add, Operator::Mul, Operator::Concat],
            ),
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Mul,
    Concat,
}

impl Operator {
    /// Left operand `l` such that `l op right == result`, if any.
    fn undo(&self, result: u64, right: u64) -> Option<u64> {
        match self {
            Operator::Add => result.checked_sub(right),
            Operator::Mul if right != 0 && result % right == 0 => Some(result / right),
            Operator::Mul => None,
            Operator::Concat => {
                let unit = 10u64.checked_pow(right.checked_ilog10().unwrap_or(0) + 1)?;
                if result > right && result % unit == right {
                    Some(result / unit)
                } else {
                    None
                }
            }
        }
    }
}

#[derive(Debug)]
pub struct Equation {
    test_value: u64,
    operands: Vec<u64>,
}

impl TryFrom<&str> for Equation {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let (test_text, operands_text) = value
            .split_once(':')
            .ok_or(Error::NoColon(value.to_string()))?;
        let parse_n =
            |s: &str| s.trim().parse::<u64>().map_err(|_| Error::InvalidNumber(s.to_string()));
        let test_value = parse_n(test_text)?;
        let operands = operands_text
            .split_ascii_whitespace()
            .map(parse_n)
            .collect::<Result<Vec<_>, _>>()?;
        if operands.is_empty() {
            return Err(Error::NoOperand(value.to_string()));
        }

        Ok(Self {
            test_value,
            operands,
        })
    }
}

impl Equation {
    /// Works backwards from the test value, peeling operands off the right.
    pub fn is_solvable(&self, ops: &[Operator]) -> bool {
        fn check(result: u64, operands: &[u64], ops: &[Operator]) -> bool {
            match operands {
                [] => false,
                [first] => result == *first,
                [rest @ .., last] => ops.iter().any(|op| {
                    op.undo(result, *last)
                        .is_some_and(|left| check(left, rest, ops))
                }),
            }
        }

        check(self.test_value, &self.operands, ops)
    }
}

pub fn read_equations(text: &str) -> Result<Vec<Equation>> {
    text.lines()
        .enumerate()
        .map(|(ind, line)| {
            Equation::try_from(line)
                .with_context(|| format!("Failed to read equation in line {}.", ind + 1))
        })
        .collect()
}

pub fn calibration_result(equations: &[Equation], ops: &[Operator]) -> u64 {
    equations
        .iter()
        .filter(|e| e.is_solvable(ops))
        .map(|e| e.test_value)
        .sum()
}
