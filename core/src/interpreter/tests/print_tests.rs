//! Tests for PRINT and output observers

use super::helpers::run;
use crate::interpreter::Instruction::*;
use crate::interpreter::{OutputObserver, VmError, VM};

#[test]
fn test_print_is_non_destructive() {
    let (vm, result) = run(&[Push(42), Print, Halt]);
    assert_eq!(result, Ok(vec![42]));
    assert_eq!(vm.stack(), vec![42]);
}

#[test]
fn test_print_multiple_values() {
    let (vm, result) = run(&[Push(1), Print, Push(2), Add, Print, Halt]);
    assert_eq!(result, Ok(vec![1, 3]));
    assert_eq!(vm.output(), &[1, 3]);
}

#[test]
fn test_print_same_value_twice() {
    let (_, result) = run(&[Push(7), Print, Print]);
    assert_eq!(result, Ok(vec![7, 7]));
}

#[test]
fn test_output_kept_after_failure() {
    let (vm, result) = run(&[Push(3), Print, Push(0), Div, Print]);
    assert_eq!(result, Err(VmError::DivisionByZero));
    assert_eq!(vm.output(), &[3]);
}

/* ===================== Observers ===================== */

#[test]
fn test_closure_observer_sees_output_in_order() {
    let mut seen = Vec::new();
    let mut vm = VM::new();
    let output = vm
        .execute_observed(&[Push(1), Print, Push(5), Mul, Print, Push(2), Print], &mut |v: i64| {
            seen.push(v)
        })
        .unwrap();

    assert_eq!(output, vec![1, 5, 2]);
    assert_eq!(seen, output);
}

struct Counter {
    calls: usize,
    last: Option<i64>,
}

impl OutputObserver for Counter {
    fn on_output(&mut self, value: i64) {
        self.calls += 1;
        self.last = Some(value);
    }
}

#[test]
fn test_struct_observer() {
    let mut counter = Counter {
        calls: 0,
        last: None,
    };
    let mut vm = VM::new();
    vm.execute_observed(&[Push(8), Print, Pop, Push(9), Print, Halt, Print], &mut counter)
        .unwrap();

    assert_eq!(counter.calls, 2);
    assert_eq!(counter.last, Some(9));
}

#[test]
fn test_observer_not_called_for_failed_print() {
    let mut seen = Vec::new();
    let mut vm = VM::new();
    let result = vm.execute_observed(&[Print], &mut |v: i64| seen.push(v));

    assert_eq!(result, Err(VmError::StackUnderflow));
    assert!(seen.is_empty());
}
