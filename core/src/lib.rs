pub mod cli;
pub mod config;
pub mod interpreter;
pub mod programs;

// Re-export main types
pub use interpreter::{Effect, Instruction, OutputObserver, Status, VmError, VM};
