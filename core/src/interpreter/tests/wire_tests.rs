//! Tests for the JSON wire form of instructions

use crate::interpreter::Instruction::*;
use crate::interpreter::{Instruction, RawInstruction};

#[test]
fn test_decode_all_opcodes() {
    let json = r#"[
        {"opcode": "PUSH", "operand": -3},
        {"opcode": "POP"},
        {"opcode": "ADD"},
        {"opcode": "SUB"},
        {"opcode": "MUL"},
        {"opcode": "DIV"},
        {"opcode": "PRINT"},
        {"opcode": "HALT"}
    ]"#;
    let program: Vec<Instruction> = serde_json::from_str(json).unwrap();
    assert_eq!(program, vec![Push(-3), Pop, Add, Sub, Mul, Div, Print, Halt]);
}

#[test]
fn test_push_without_operand_is_rejected() {
    let err = serde_json::from_str::<Instruction>(r#"{"opcode": "PUSH"}"#).unwrap_err();
    assert!(err.to_string().contains("PUSH requires an integer operand"));
}

#[test]
fn test_non_integer_operand_is_rejected() {
    assert!(serde_json::from_str::<Instruction>(r#"{"opcode": "PUSH", "operand": 1.5}"#).is_err());
    assert!(serde_json::from_str::<Instruction>(r#"{"opcode": "PUSH", "operand": "7"}"#).is_err());
}

#[test]
fn test_operand_ignored_on_other_opcodes() {
    let instruction: Instruction =
        serde_json::from_str(r#"{"opcode": "ADD", "operand": 12}"#).unwrap();
    assert_eq!(instruction, Add);
}

#[test]
fn test_opcodes_are_case_sensitive() {
    let instruction: Instruction = serde_json::from_str(r#"{"opcode": "push", "operand": 1}"#).unwrap();
    assert_eq!(instruction, Unknown("push".to_string()));
}

#[test]
fn test_encode_matches_wire_form() {
    let json = serde_json::to_value(vec![Push(5), Print, Unknown("NOP".to_string())]).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"opcode": "PUSH", "operand": 5},
            {"opcode": "PRINT"},
            {"opcode": "NOP"}
        ])
    );
}

#[test]
fn test_raw_conversion() {
    let raw = RawInstruction::from(Push(8));
    assert_eq!(raw.opcode, "PUSH");
    assert_eq!(raw.operand, Some(8));
    assert_eq!(Instruction::try_from(raw), Ok(Push(8)));
}

#[test]
fn test_display() {
    assert_eq!(Push(-4).to_string(), "PUSH -4");
    assert_eq!(Halt.to_string(), "HALT");
    assert_eq!(Unknown("JMP".to_string()).to_string(), "JMP");
}
