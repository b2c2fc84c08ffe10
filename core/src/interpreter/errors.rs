//! Runtime errors raised by dispatch
//!
//! Every variant ends the current run. The message strings are part of the
//! external contract; the `code()` strings are stable identifiers for callers
//! that report errors in machine-readable form.

pub const STACK_UNDERFLOW: &str = "STACK_UNDERFLOW";
pub const DIVISION_BY_ZERO: &str = "DIVISION_BY_ZERO";
pub const UNKNOWN_OPCODE: &str = "UNKNOWN_OPCODE";
pub const INTEGER_OVERFLOW: &str = "INTEGER_OVERFLOW";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VmError {
    /// An instruction needed more operands than the stack held
    #[error("Stack underflow")]
    StackUnderflow,

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Unknown opcode: {0}")]
    UnknownOpcode(String),

    /// The exact result of an arithmetic instruction does not fit in an i64
    #[error("Integer overflow")]
    IntegerOverflow,
}

impl VmError {
    pub fn code(&self) -> &'static str {
        match self {
            VmError::StackUnderflow => STACK_UNDERFLOW,
            VmError::DivisionByZero => DIVISION_BY_ZERO,
            VmError::UnknownOpcode(_) => UNKNOWN_OPCODE,
            VmError::IntegerOverflow => INTEGER_OVERFLOW,
        }
    }
}
