//! # Stack Interpreter
//!
//! Executes a linear sequence of instructions against an operand stack and
//! records the values observed by PRINT.
//!
//! ## Core Principles
//!
//! 1. **Closed instruction set**: `Instruction` is matched exhaustively; unknown
//!    tags are an explicit variant that fails on dispatch
//! 2. **Single owner**: All state lives in `VM` and is mutated through `&mut`
//! 3. **Errors as values**: Every failure is a `VmError` returned from dispatch
//! 4. **Pure executor**: No I/O - PRINT values reach the outside world only
//!    through an `OutputObserver`
//!
//! ## Example
//!
//! ```
//! use stackvm_core::interpreter::{Instruction, VM};
//!
//! let mut vm = VM::new();
//! let output = vm
//!     .execute(&[
//!         Instruction::Push(2),
//!         Instruction::Push(3),
//!         Instruction::Add,
//!         Instruction::Print,
//!         Instruction::Halt,
//!     ])
//!     .unwrap();
//! assert_eq!(output, vec![5]);
//! assert_eq!(vm.stack(), vec![5]);
//! ```

pub mod dispatch;
pub mod errors;
pub mod exec_loop;
pub mod types;
pub mod vm;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use dispatch::{dispatch, floor_div};
pub use errors::VmError;
pub use exec_loop::{run_until_done, step};
pub use types::{
    DecodeError, Effect, Instruction, OutputObserver, RawInstruction, Status, Step,
};
pub use vm::VM;
