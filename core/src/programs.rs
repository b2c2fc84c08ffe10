//! Program loading and the bundled demo programs
//!
//! Programs on disk are JSON arrays of instructions in their wire form:
//!
//! ```json
//! [
//!   { "opcode": "PUSH", "operand": 2 },
//!   { "opcode": "PUSH", "operand": 3 },
//!   { "opcode": "ADD" },
//!   { "opcode": "PRINT" },
//!   { "opcode": "HALT" }
//! ]
//! ```

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::interpreter::Instruction::{self, *};

/* ===================== Loading ===================== */

/// Decode a program from JSON source
pub fn parse_program(source: &str) -> Result<Vec<Instruction>> {
    serde_json::from_str(source).context("Invalid program JSON")
}

/// Read and decode a program file
pub fn load_program(path: &Path) -> Result<Vec<Instruction>> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read program {}", path.display()))?;
    let program = parse_program(&source)
        .with_context(|| format!("Failed to decode program {}", path.display()))?;
    tracing::debug!(path = %path.display(), instructions = program.len(), "Loaded program");
    Ok(program)
}

/* ===================== Demos ===================== */

#[derive(Debug, Clone)]
pub struct DemoProgram {
    /// Short name used on the command line
    pub name: &'static str,
    pub title: &'static str,
    pub instructions: Vec<Instruction>,
}

/// The bundled demonstration programs, in presentation order
pub fn demos() -> Vec<DemoProgram> {
    vec![
        DemoProgram {
            name: "add",
            title: "Simple arithmetic (2 + 3)",
            instructions: vec![Push(2), Push(3), Add, Print, Halt],
        },
        DemoProgram {
            name: "mixed",
            title: "Multiple operations ((5 + 3) * 2)",
            instructions: vec![Push(5), Push(3), Add, Push(2), Mul, Print, Halt],
        },
        DemoProgram {
            name: "divide",
            title: "Division (10 / 2)",
            instructions: vec![Push(10), Push(2), Div, Print, Halt],
        },
        DemoProgram {
            name: "subtract",
            title: "Subtraction (15 - 7)",
            instructions: vec![Push(15), Push(7), Sub, Print, Halt],
        },
        DemoProgram {
            name: "complex",
            title: "Complex expression ((10 + 5) * 3 - 20) / 5",
            instructions: vec![
                Push(10),
                Push(5),
                Add, // 15
                Push(3),
                Mul, // 45
                Push(20),
                Sub, // 25
                Push(5),
                Div, // 5
                Print,
                Halt,
            ],
        },
    ]
}

pub fn find_demo(name: &str) -> Option<DemoProgram> {
    demos().into_iter().find(|demo| demo.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{Status, VM};

    #[test]
    fn test_demos_produce_expected_results() {
        let expected = [
            ("add", 5),
            ("mixed", 16),
            ("divide", 5),
            ("subtract", 8),
            ("complex", 5),
        ];

        let mut vm = VM::new();
        for (name, value) in expected {
            let demo = find_demo(name).expect("demo should exist");
            let output = vm.execute(&demo.instructions).unwrap();
            assert_eq!(output, vec![value], "demo {}", name);
            assert_eq!(vm.stack(), vec![value], "demo {}", name);
            assert_eq!(vm.status(), Status::Halted);
        }
    }

    #[test]
    fn test_demo_names_are_unique() {
        let all = demos();
        for (i, demo) in all.iter().enumerate() {
            assert!(all[i + 1..].iter().all(|other| other.name != demo.name));
        }
        assert!(find_demo("missing").is_none());
    }

    #[test]
    fn test_parse_program() {
        let program = parse_program(r#"[{"opcode": "PUSH", "operand": 1}, {"opcode": "PRINT"}]"#)
            .unwrap();
        assert_eq!(program, vec![Push(1), Print]);
    }

    #[test]
    fn test_parse_program_reports_decode_errors() {
        let err = parse_program(r#"[{"opcode": "PUSH"}]"#).unwrap_err();
        assert!(format!("{:#}", err).contains("PUSH requires an integer operand"));

        assert!(parse_program("not json").is_err());
        assert!(parse_program(r#"{"opcode": "HALT"}"#).is_err());
    }

    #[test]
    fn test_load_program_missing_file() {
        let err = load_program(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read program"));
    }

    #[test]
    fn test_load_program_from_disk() {
        let path = std::env::temp_dir().join(format!("stackvm-load-{}.json", std::process::id()));
        fs::write(&path, r#"[{"opcode": "PUSH", "operand": 4}, {"opcode": "HALT"}]"#).unwrap();

        let program = load_program(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(program.unwrap(), vec![Push(4), Halt]);
    }
}
