use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::config::{OutputFormat, Settings};
use crate::interpreter::{Instruction, Status, VmError, VM};
use crate::programs;

#[derive(Parser)]
#[command(name = "stackvm")]
#[command(about = "stackvm - A minimal stack-based bytecode interpreter", long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default search)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Execute a program file (JSON array of instructions)
    Run {
        /// Program file to execute
        file: PathBuf,
    },

    /// Run the bundled demo programs
    Demo {
        /// Only run the demo with this name (add, mixed, divide, subtract, complex)
        name: Option<String>,
    },

    /// Decode a program file without executing it
    Check {
        /// Program file to check
        file: PathBuf,
    },

    /// Print the effective configuration
    Config,
}

/* ===================== Reports ===================== */

/// Machine-readable summary of one run
#[derive(Debug, Serialize)]
pub struct RunReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub output: Vec<i64>,
    pub stack: Vec<i64>,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

#[derive(Debug, Serialize)]
pub struct ErrorReport {
    pub code: &'static str,
    pub message: String,
}

impl RunReport {
    pub fn new(name: Option<&str>, vm: &VM, result: &Result<Vec<i64>, VmError>) -> Self {
        RunReport {
            name: name.map(str::to_string),
            output: vm.output().to_vec(),
            stack: vm.stack(),
            status: vm.status(),
            error: result.as_ref().err().map(|e| ErrorReport {
                code: e.code(),
                message: e.to_string(),
            }),
        }
    }
}

/// Result of decoding a program file without running it
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub file: String,
    pub instructions: usize,
    pub unknown_opcodes: Vec<String>,
}

impl CheckReport {
    pub fn new(file: &Path, program: &[Instruction]) -> Self {
        CheckReport {
            file: file.display().to_string(),
            instructions: program.len(),
            unknown_opcodes: program
                .iter()
                .filter(|i| matches!(i, Instruction::Unknown(_)))
                .map(|i| i.opcode().to_string())
                .collect(),
        }
    }
}

/* ===================== Entry Points ===================== */

/// Run the CLI by parsing process arguments
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    run_cli_with_args(cli)
}

/// Run the CLI with provided arguments
pub fn run_cli_from_args(args: Vec<String>) -> Result<()> {
    let cli = Cli::parse_from(args);
    run_cli_with_args(cli)
}

/// Install the tracing subscriber, preferring `RUST_LOG` over settings
pub fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    // A subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run_cli_with_args(cli: Cli) -> Result<()> {
    // Eagerly load configuration so errors show before any program output
    let settings = Settings::load(cli.config.as_deref())?;
    init_logging(&settings);

    match cli.command {
        Commands::Run { file } => {
            let program = programs::load_program(&file)?;
            run_program(&settings, None, &program)?;
        }

        Commands::Demo { name } => {
            let demos = match name {
                Some(name) => vec![programs::find_demo(&name)
                    .ok_or_else(|| anyhow!("Unknown demo: {}", name))?],
                None => programs::demos(),
            };

            for (i, demo) in demos.iter().enumerate() {
                if settings.format == OutputFormat::Text {
                    if i > 0 {
                        println!();
                    }
                    println!("Example {}: {}", i + 1, demo.title);
                }
                run_program(&settings, Some(demo.name), &demo.instructions)?;
            }
        }

        Commands::Check { file } => {
            let program = programs::load_program(&file)?;
            let report = CheckReport::new(&file, &program);

            match settings.format {
                OutputFormat::Json => println!("{}", serde_json::to_string(&report)?),
                OutputFormat::Text => {
                    println!("{}: {} instruction(s)", report.file, report.instructions);
                    if !report.unknown_opcodes.is_empty() {
                        // Decodes fine, but dispatch will reject these
                        println!("Unknown opcodes: {}", report.unknown_opcodes.join(", "));
                    }
                }
            }
        }

        Commands::Config => {
            print!("{}", settings.to_toml()?);
        }
    }

    Ok(())
}

/// Execute one program and present the result according to settings
fn run_program(settings: &Settings, name: Option<&str>, program: &[Instruction]) -> Result<()> {
    let mut vm = VM::new();
    let echo = settings.echo && settings.format == OutputFormat::Text;

    let result = vm.execute_observed(program, &mut |value: i64| {
        if echo {
            println!("{}", value);
        }
    });

    match settings.format {
        OutputFormat::Json => {
            let report = RunReport::new(name, &vm, &result);
            println!("{}", serde_json::to_string(&report)?);
        }
        OutputFormat::Text => {
            if !echo {
                println!("Output: {:?}", vm.output());
            }
            if settings.show_stack {
                println!("Stack: {:?}", vm.stack());
            }
        }
    }

    result.map(|_| ()).map_err(|err| {
        tracing::error!(code = err.code(), pc = vm.pc(), "Program failed");
        anyhow::Error::new(err).context(format!("Program failed at instruction {}", vm.pc()))
    })
}
