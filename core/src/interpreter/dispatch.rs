//! Instruction handlers
//!
//! `dispatch()` applies exactly one instruction to the VM. Binary operators
//! read their operands as `(a, b)` with `b` on top of the stack and push
//! `a OP b`. A failing instruction leaves the stack untouched.

use super::errors::VmError;
use super::types::{Effect, Instruction, Status};
use super::vm::VM;

/* ===================== Dispatch ===================== */

/// Execute a single instruction against the current VM state
pub fn dispatch(vm: &mut VM, instruction: &Instruction) -> Result<Effect, VmError> {
    match instruction {
        Instruction::Push(v) => {
            vm.push(*v);
            Ok(Effect::Updated)
        }

        Instruction::Pop => vm.pop().map(Effect::Popped),

        Instruction::Add => binary(vm, |a, b| a.checked_add(b).ok_or(VmError::IntegerOverflow)),

        Instruction::Sub => binary(vm, |a, b| a.checked_sub(b).ok_or(VmError::IntegerOverflow)),

        Instruction::Mul => binary(vm, |a, b| a.checked_mul(b).ok_or(VmError::IntegerOverflow)),

        Instruction::Div => binary(vm, floor_div),

        Instruction::Print => {
            let value = vm.peek()?;
            vm.output.push(value);
            Ok(Effect::Printed(value))
        }

        Instruction::Halt => {
            vm.running = false;
            vm.status = Status::Halted;
            Ok(Effect::Halted)
        }

        Instruction::Unknown(name) => Err(VmError::UnknownOpcode(name.clone())),
    }
}

impl VM {
    /// Execute a single instruction against the current state
    pub fn dispatch(&mut self, instruction: &Instruction) -> Result<Effect, VmError> {
        dispatch(self, instruction)
    }
}

fn binary<F>(vm: &mut VM, op: F) -> Result<Effect, VmError>
where
    F: FnOnce(i64, i64) -> Result<i64, VmError>,
{
    vm.apply_binary_op(op)?;
    Ok(Effect::Updated)
}

/* ===================== Arithmetic ===================== */

/// Integer division rounding toward negative infinity
pub fn floor_div(a: i64, b: i64) -> Result<i64, VmError> {
    if b == 0 {
        return Err(VmError::DivisionByZero);
    }

    // i64::MIN / -1 is the only overflowing case
    let q = a.checked_div(b).ok_or(VmError::IntegerOverflow)?;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        Ok(q - 1)
    } else {
        Ok(q)
    }
}
