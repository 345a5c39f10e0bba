use std::{error, fmt::Display};

use anyhow::{Context, Result};
use int_enum::IntEnum;
use log::debug;

use crate::puzzle::{answer_or_unreachable, Answers, Parameters, Solution};

#[derive(Debug)]
pub enum Error {
    NoRegisterLine(char),
    NoProgram,
    InvalidRegisterText(String),
    InvalidRegisterValue(String),
    InvalidProgramText(String),
    InvalidCode(String),
    InvalidOpcode(u8),
    InvalidComboOperand(u8),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoRegisterLine(name) => write!(
                f,
                "Can't find line for register {} in debug information.",
                name
            ),
            Error::NoProgram => write!(f, "Can't find line for program in debug information."),
            Error::InvalidRegisterText(s) => write!(f, "Invalid text({}) for register.", s),
            Error::InvalidRegisterValue(s) => write!(f, "Invalid text({}) for register value.", s),
            Error::InvalidProgramText(s) => write!(f, "Invalid text({}) for program.", s),
            Error::InvalidCode(s) => write!(f, "Invalid text({}) for 3-bit code.", s),
            Error::InvalidOpcode(n) => write!(f, "Invalid operation code({}).", n),
            Error::InvalidComboOperand(n) => write!(f, "Invalid combo operand({}).", n),
        }
    }
}

impl error::Error for Error {}

pub struct Puzzle;

impl Solution for Puzzle {
    fn solve(&self, input: &str, _params: &Parameters) -> Result<Answers> {
        let (registers, program) = read_debug_info(input)?;
        debug!("Program has {} code(s), registers {:?}.", program.len(), registers);
        let output = Computer::new(registers).run(&program)?;
        let output_text = output
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(",");

        Ok(Answers::new(
            output_text,
            answer_or_unreachable(find_quine_a(&registers, &program)?),
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    pub a: u64,
    pub b: u64,
    pub c: u64,
}

#[derive(Debug, Clone, Copy, IntEnum)]
#[repr(u8)]
enum Instruction {
    Adv = 0,
    Bxl = 1,
    Bst = 2,
    Jnz = 3,
    Bxc = 4,
    Out = 5,
    Bdv = 6,
    Cdv = 7,
}

#[derive(Debug)]
pub struct Computer {
    registers: Registers,
    inst_ptr: usize,
    output: Vec<u8>,
}

impl Computer {
    pub fn new(registers: Registers) -> Self {
        Self {
            registers,
            inst_ptr: 0,
            output: Vec::new(),
        }
    }

    /// Runs until the instruction pointer leaves the program, returning the output.
    pub fn run(mut self, program: &[u8]) -> Result<Vec<u8>, Error> {
        while let (Some(opcode), Some(operand)) = (
            program.get(self.inst_ptr).copied(),
            program.get(self.inst_ptr + 1).copied(),
        ) {
            let inst = Instruction::try_from(opcode).map_err(Error::InvalidOpcode)?;
            self.exec(inst, operand)?;
        }

        Ok(self.output)
    }

    fn exec(&mut self, inst: Instruction, operand: u8) -> Result<(), Error> {
        match inst {
            Instruction::Adv => self.registers.a = self.divide_a(operand)?,
            Instruction::Bxl => self.registers.b ^= u64::from(operand),
            Instruction::Bst => self.registers.b = self.combo_operand(operand)? % 8,
            Instruction::Jnz => {
                if self.registers.a != 0 {
                    self.inst_ptr = usize::from(operand);
                    return Ok(());
                }
            }
            Instruction::Bxc => self.registers.b ^= self.registers.c,
            Instruction::Out => self.output.push((self.combo_operand(operand)? % 8) as u8),
            Instruction::Bdv => self.registers.b = self.divide_a(operand)?,
            Instruction::Cdv => self.registers.c = self.divide_a(operand)?,
        }
        self.inst_ptr += 2;

        Ok(())
    }

    fn divide_a(&self, operand: u8) -> Result<u64, Error> {
        let shift = self.combo_operand(operand)?;
        Ok(u32::try_from(shift)
            .ok()
            .and_then(|shift| self.registers.a.checked_shr(shift))
            .unwrap_or(0))
    }

    fn combo_operand(&self, operand: u8) -> Result<u64, Error> {
        match operand {
            0..=3 => Ok(u64::from(operand)),
            4 => Ok(self.registers.a),
            5 => Ok(self.registers.b),
            6 => Ok(self.registers.c),
            other => Err(Error::InvalidComboOperand(other)),
        }
    }
}

/// Lowest initial value of register A for which the program prints itself.
///
/// Builds A three bits at a time, keeping every candidate whose output equals the tail
/// of the program produced so far.
pub fn find_quine_a(registers: &Registers, program: &[u8]) -> Result<Option<u64>, Error> {
    let mut candidates = vec![0u64];
    for ind in (0..program.len()).rev() {
        let mut next_candidates = Vec::new();
        for a in candidates.iter().filter_map(|a| a.checked_mul(8)) {
            for digit in 0..8 {
                let init_a = a + digit;
                let output = Computer::new(Registers {
                    a: init_a,
                    ..*registers
                })
                .run(program)?;
                if output == program[ind..] {
                    next_candidates.push(init_a);
                }
            }
        }
        candidates = next_candidates;
    }

    Ok(candidates.into_iter().min())
}

pub fn read_debug_info(text: &str) -> Result<(Registers, Vec<u8>)> {
    let mut lines = text.lines();
    let mut read_next_register = |name: char| -> Result<u64> {
        let line = lines.next().ok_or(Error::NoRegisterLine(name))?;
        read_register(name, line)
            .with_context(|| format!("Failed to read register {} from line({}).", name, line))
    };
    let registers = Registers {
        a: read_next_register('A')?,
        b: read_next_register('B')?,
        c: read_next_register('C')?,
    };

    let program_line = lines
        .find(|line| !line.trim().is_empty())
        .ok_or(Error::NoProgram)?;

    Ok((registers, read_program(program_line)?))
}

fn read_register(name: char, text: &str) -> Result<u64, Error> {
    let header = format!("Register {}:", name);
    let value_text = text
        .trim()
        .strip_prefix(&header)
        .ok_or(Error::InvalidRegisterText(text.to_string()))?
        .trim();
    value_text
        .parse::<u64>()
        .map_err(|_| Error::InvalidRegisterValue(value_text.to_string()))
}

fn read_program(text: &str) -> Result<Vec<u8>, Error> {
    static HEADER: &str = "Program:";
    let code_text = text
        .trim()
        .strip_prefix(HEADER)
        .ok_or(Error::InvalidProgramText(text.to_string()))?
        .trim();
    code_text
        .split(',')
        .map(|s| {
            s.trim()
                .parse::<u8>()
                .ok()
                .filter(|n| *n < 8)
                .ok_or(Error::InvalidCode(s.to_string()))
        })
        .collect()
}
