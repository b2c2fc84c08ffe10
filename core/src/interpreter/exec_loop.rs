//! Core execution loop
//!
//! This module contains the step() function - the heart of the interpreter.
//! It dispatches the instruction at `pc`, advances the counter and decides
//! whether the run is over.
//!
//! ## Function Organization
//! 1. run_until_done() - Top-level driver (calls step repeatedly)
//! 2. step() - One dispatch plus the state transitions around it

use super::dispatch::dispatch;
use super::errors::VmError;
use super::types::{Effect, Instruction, OutputObserver, Status, Step};
use super::vm::VM;
use tracing::{debug, warn};

/* ===================== Public API ===================== */

/// Run the VM until it halts, runs off the end of the program, or fails
///
/// The VM must already be running (see `VM::start`).
pub fn run_until_done(
    vm: &mut VM,
    program: &[Instruction],
    observer: &mut dyn OutputObserver,
) -> Result<(), VmError> {
    loop {
        match step(vm, program, observer)? {
            Step::Continue => continue,
            Step::Done => break,
        }
    }
    Ok(())
}

/// Execute one step of the VM
///
/// Returns `Step::Done` without dispatching anything if the VM is not
/// running. A failing instruction moves the VM to `Status::Failed` and leaves
/// `pc` pointing at it.
pub fn step(
    vm: &mut VM,
    program: &[Instruction],
    observer: &mut dyn OutputObserver,
) -> Result<Step, VmError> {
    if !vm.running {
        return Ok(Step::Done);
    }

    let Some(instruction) = program.get(vm.pc) else {
        // Ran off the end without a HALT
        finish(vm);
        return Ok(Step::Done);
    };

    debug!(pc = vm.pc, %instruction, depth = vm.stack.len(), "Dispatch");

    let effect = match dispatch(vm, instruction) {
        Ok(effect) => effect,
        Err(err) => {
            vm.running = false;
            vm.status = Status::Failed;
            warn!(pc = vm.pc, code = err.code(), "Execution failed: {}", err);
            return Err(err);
        }
    };

    if let Effect::Printed(value) = effect {
        observer.on_output(value);
    }

    vm.pc += 1;

    if !vm.running {
        return Ok(Step::Done);
    }
    if vm.pc >= program.len() {
        finish(vm);
        return Ok(Step::Done);
    }
    Ok(Step::Continue)
}

fn finish(vm: &mut VM) {
    vm.running = false;
    vm.status = Status::Halted;
}
