//! Tests for the interpreter
//!
//! Organized by feature area

mod helpers;
mod print_tests;
mod wire_tests;
