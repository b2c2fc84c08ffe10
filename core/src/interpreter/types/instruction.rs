//! Instruction set and its JSON wire form
//!
//! On the wire an instruction is a flat record: `{"opcode": "PUSH", "operand": 5}`.
//! Decoding maps it onto the closed [`Instruction`] enum. Tags outside the
//! recognized set decode to [`Instruction::Unknown`] so the interpreter can
//! reject them when they are dispatched.

use serde::{Deserialize, Serialize};
use std::fmt;

/* ===================== Instructions ===================== */

/// A single bytecode instruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawInstruction", into = "RawInstruction")]
pub enum Instruction {
    /// Push the operand onto the stack
    Push(i64),
    /// Remove the top value
    Pop,
    Add,
    Sub,
    Mul,
    /// Floor division
    Div,
    /// Append the top value to the output log without removing it
    Print,
    /// Stop the dispatch loop
    Halt,
    /// Opcode tag outside the instruction set
    Unknown(String),
}

impl Instruction {
    /// The opcode tag as it appears on the wire
    pub fn opcode(&self) -> &str {
        match self {
            Instruction::Push(_) => "PUSH",
            Instruction::Pop => "POP",
            Instruction::Add => "ADD",
            Instruction::Sub => "SUB",
            Instruction::Mul => "MUL",
            Instruction::Div => "DIV",
            Instruction::Print => "PRINT",
            Instruction::Halt => "HALT",
            Instruction::Unknown(name) => name,
        }
    }

    pub fn operand(&self) -> Option<i64> {
        match self {
            Instruction::Push(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operand() {
            Some(v) => write!(f, "{} {}", self.opcode(), v),
            None => write!(f, "{}", self.opcode()),
        }
    }
}

/* ===================== Wire Form ===================== */

/// Flat `{opcode, operand}` record used for serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInstruction {
    pub opcode: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operand: Option<i64>,
}

/// Errors raised while turning a wire record into an [`Instruction`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("PUSH requires an integer operand")]
    MissingOperand,
}

impl TryFrom<RawInstruction> for Instruction {
    type Error = DecodeError;

    fn try_from(raw: RawInstruction) -> Result<Self, Self::Error> {
        // Operands on anything but PUSH are ignored
        let instruction = match raw.opcode.as_str() {
            "PUSH" => Instruction::Push(raw.operand.ok_or(DecodeError::MissingOperand)?),
            "POP" => Instruction::Pop,
            "ADD" => Instruction::Add,
            "SUB" => Instruction::Sub,
            "MUL" => Instruction::Mul,
            "DIV" => Instruction::Div,
            "PRINT" => Instruction::Print,
            "HALT" => Instruction::Halt,
            _ => Instruction::Unknown(raw.opcode),
        };
        Ok(instruction)
    }
}

impl From<Instruction> for RawInstruction {
    fn from(instruction: Instruction) -> Self {
        let operand = instruction.operand();
        let opcode = match instruction {
            Instruction::Unknown(name) => name,
            other => other.opcode().to_string(),
        };
        RawInstruction { opcode, operand }
    }
}
