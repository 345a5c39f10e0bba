use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::puzzle::{Answers, Parameters, Solution};

pub struct Puzzle;

impl Solution for Puzzle {
    fn solve(&self, input: &str, _params: &Parameters) -> Result<Answers> {
        let memory = Memory::new(input);
        Ok(Answers::new(memory.mul_sum(), memory.enabled_mul_sum()))
    }
}

#[derive(Debug)]
enum Instruction {
    Mul(usize, usize),
    Do,
    Dont,
}

pub struct Memory {
    insts: Vec<Instruction>,
}

impl Memory {
    pub fn new(text: &str) -> Self {
        static INST_PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"mul\(([0-9]{1,3}),([0-9]{1,3})\)|do\(\)|don't\(\)").unwrap()
        });

        let insts = INST_PATTERN
            .captures_iter(text)
            .map(|caps| match &caps[0] {
                "do()" => Instruction::Do,
                "don't()" => Instruction::Dont,
                // At most three digits each, always fits.
                _ => Instruction::Mul(
                    caps[1].parse::<usize>().unwrap(),
                    caps[2].parse::<usize>().unwrap(),
                ),
            })
            .collect();

        Self { insts }
    }

    pub fn mul_sum(&self) -> usize {
        self.insts
            .iter()
            .map(|inst| match inst {
                Instruction::Mul(l_factor, r_factor) => l_factor * r_factor,
                _ => 0,
            })
            .sum()
    }

    pub fn enabled_mul_sum(&self) -> usize {
        self.insts
            .iter()
            .fold((0, true), |(sum, do_mul), inst| match inst {
                Instruction::Mul(l_factor, r_factor) if do_mul => {
                    (sum + l_factor * r_factor, do_mul)
                }
                Instruction::Mul(..) => (sum, do_mul),
                Instruction::Do => (sum, true),
                Instruction::Dont => (sum, false),
            })
            .0
    }
}
