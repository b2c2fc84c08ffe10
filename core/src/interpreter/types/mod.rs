//! Type definitions for the interpreter
//!
//! This module contains all the core types used by the VM:
//! - Instructions and their wire form (Instruction, RawInstruction)
//! - Lifecycle and dispatch results (Status, Step, Effect)
//! - Output observers (OutputObserver)

pub mod control;
pub mod instruction;
pub mod observer;

// Re-export all types for convenient access
pub use control::{Effect, Status, Step};
pub use instruction::{DecodeError, Instruction, RawInstruction};
pub use observer::OutputObserver;
