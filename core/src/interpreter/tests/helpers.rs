//! Test helpers for interpreter tests
//!
//! Common utilities for decoding programs and running them on a fresh VM

use crate::interpreter::{Instruction, VmError, VM};

/// Decode a program from its JSON wire form
///
/// Tests that go through this helper also exercise the decoder, so programs
/// read the same way they would arrive from a file.
pub fn program_from_json(json: &str) -> Vec<Instruction> {
    serde_json::from_str(json).expect("Program decoding failed")
}

/// Execute a program on a fresh VM, handing back the VM for inspection
pub fn run(program: &[Instruction]) -> (VM, Result<Vec<i64>, VmError>) {
    let mut vm = VM::new();
    let result = vm.execute(program);
    (vm, result)
}

/// Execute a program that is expected to succeed and return its final stack
pub fn run_stack(program: &[Instruction]) -> Vec<i64> {
    let (vm, result) = run(program);
    result.expect("Program execution failed");
    vm.stack()
}
