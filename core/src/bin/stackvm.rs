/// stackvm CLI
///
/// Runs JSON program files and the bundled demo programs on the interpreter.

use stackvm_core::cli;

fn main() {
    if let Err(e) = cli::run_cli() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
