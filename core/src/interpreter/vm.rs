//! Virtual Machine state
//!
//! The VM holds all execution state:
//! - stack: Operand stack, index 0 is the bottom
//! - pc: Index of the next instruction to dispatch
//! - running: Flag driving the dispatch loop
//! - output: Values observed by PRINT, in order
//! - status: Where the VM is in its lifecycle

use super::errors::VmError;
use super::exec_loop::{run_until_done, step};
use super::types::{Instruction, OutputObserver, Status, Step};
use tracing::debug;

/* ===================== VM ===================== */

/// Stack-based virtual machine
///
/// One instance can run any number of programs; every `execute()` starts from
/// a clean state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VM {
    pub(crate) stack: Vec<i64>,
    pub(crate) pc: usize,
    pub(crate) running: bool,
    pub(crate) output: Vec<i64>,
    pub(crate) status: Status,
}

impl Default for VM {
    fn default() -> Self {
        Self::new()
    }
}

impl VM {
    pub fn new() -> Self {
        VM {
            stack: Vec::new(),
            pc: 0,
            running: false,
            output: Vec::new(),
            status: Status::Idle,
        }
    }

    /// Discard all state from a previous run
    pub fn reset(&mut self) {
        self.stack.clear();
        self.output.clear();
        self.pc = 0;
        self.running = false;
        self.status = Status::Idle;
    }

    /// Reset and mark the VM as running, ready for `step()`
    pub fn start(&mut self) {
        self.reset();
        self.running = true;
        self.status = Status::Running;
    }

    /// Run a program to completion and return its output log
    ///
    /// Stops at the first HALT, at the end of the program, or at the first
    /// failing instruction. On failure the stack and output log are left as
    /// they were when the failing instruction was reached.
    pub fn execute(&mut self, program: &[Instruction]) -> Result<Vec<i64>, VmError> {
        self.execute_observed(program, &mut |_: i64| {})
    }

    /// Like `execute()`, also notifying `observer` of each output value as it
    /// is recorded
    pub fn execute_observed(
        &mut self,
        program: &[Instruction],
        observer: &mut impl OutputObserver,
    ) -> Result<Vec<i64>, VmError> {
        self.start();
        debug!(instructions = program.len(), "Executing program");

        run_until_done(self, program, observer)?;

        debug!(
            steps = self.pc,
            outputs = self.output.len(),
            depth = self.stack.len(),
            "Program finished"
        );
        Ok(self.output.clone())
    }

    /// Dispatch the instruction at `pc` and advance
    pub fn step(
        &mut self,
        program: &[Instruction],
        observer: &mut impl OutputObserver,
    ) -> Result<Step, VmError> {
        step(self, program, observer)
    }

    /* ===================== Introspection ===================== */

    /// Snapshot of the stack, bottom first
    pub fn stack(&self) -> Vec<i64> {
        self.stack.clone()
    }

    pub fn output(&self) -> &[i64] {
        &self.output
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /* ===================== Stack Discipline ===================== */

    #[inline]
    pub(crate) fn push(&mut self, val: i64) {
        self.stack.push(val);
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Result<i64, VmError> {
        self.stack.pop().ok_or(VmError::StackUnderflow)
    }

    #[inline]
    pub(crate) fn peek(&self) -> Result<i64, VmError> {
        self.stack.last().copied().ok_or(VmError::StackUnderflow)
    }

    /// Top two values as `(a, b)`, where `b` is the top of the stack
    #[inline]
    pub(crate) fn peek_pair(&self) -> Result<(i64, i64), VmError> {
        match self.stack.as_slice() {
            [.., a, b] => Ok((*a, *b)),
            _ => Err(VmError::StackUnderflow),
        }
    }

    /// Replace the top two values with `op(a, b)`
    ///
    /// The stack is only touched once `op` has succeeded.
    #[inline]
    pub(crate) fn apply_binary_op<F>(&mut self, op: F) -> Result<(), VmError>
    where
        F: FnOnce(i64, i64) -> Result<i64, VmError>,
    {
        let (a, b) = self.peek_pair()?;
        let result = op(a, b)?;
        self.stack.truncate(self.stack.len() - 2);
        self.push(result);
        Ok(())
    }
}
