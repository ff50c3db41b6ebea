//! LS-8 emulator CLI.
//!
//! This binary provides a single entry point for the emulator. It performs:
//! 1. **Run:** Load a textual program image and execute it until `HLT`.
//! 2. **Disassemble:** Print a listing of a program image without running it.
//!
//! Program output (`PRN`/`PRA`) goes to stdout; diagnostics, traces and
//! statistics go to stderr.

use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::{fs, process};
use tracing::error;
use tracing_subscriber::EnvFilter;

use ls8_core::config::Config;
use ls8_core::isa::disasm::disassemble_image;
use ls8_core::sim::loader;
use ls8_core::{RunOutcome, Simulator, WriterReporter};

/// Exit code for a fatal fault or a bad invocation.
const EXIT_FAULT: i32 = 1;
/// Exit code when the step limit stops the run.
const EXIT_STEP_LIMIT: i32 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS-8 8-bit CPU emulator",
    long_about = "Run or disassemble LS-8 programs.\n\nA program is a text file with one 8-bit binary literal per line; `#` starts a comment.\n\nExamples:\n  ls8 run programs/print8.ls8\n  ls8 run --trace --max-steps 1000 programs/call.ls8\n  ls8 disasm programs/mult.ls8"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Execute a program until it halts.
    Run {
        /// Program image to execute.
        program: PathBuf,

        /// Trace every instruction to stderr.
        #[arg(short, long)]
        trace: bool,

        /// Stop after this many instructions.
        #[arg(long)]
        max_steps: Option<u64>,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print execution statistics on exit.
        #[arg(long)]
        stats: bool,
    },

    /// Print a disassembly listing of a program.
    Disasm {
        /// Program image to disassemble.
        program: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            program,
            trace,
            max_steps,
            config,
            stats,
        } => {
            init_logging(trace);
            cmd_run(&program, trace, max_steps, config.as_deref(), stats);
        }
        Commands::Disasm { program } => {
            init_logging(false);
            cmd_disasm(&program);
        }
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins; otherwise `warn`, or `trace` with `--trace`.
fn init_logging(trace: bool) {
    let default = if trace { "trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Reads the optional JSON config, falling back to defaults.
fn load_config(path: Option<&Path>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        error!("cannot read config {}: {}", path.display(), e);
        process::exit(EXIT_FAULT);
    });
    Config::from_json(&text).unwrap_or_else(|e| {
        error!("invalid config {}: {}", path.display(), e);
        process::exit(EXIT_FAULT);
    })
}

/// Runs a program: loads the image, executes under the configured step limit, reports the outcome.
///
/// On a fatal fault, dumps the machine state and exits with code 1.
fn cmd_run(
    program: &Path,
    trace: bool,
    max_steps: Option<u64>,
    config_path: Option<&Path>,
    stats: bool,
) {
    let mut config = load_config(config_path);
    if trace {
        config.general.trace_instructions = true;
    }
    if max_steps.is_some() {
        config.general.max_steps = max_steps;
    }

    let image = loader::load_program_file(program).unwrap_or_else(|e| {
        error!("{}: {}", program.display(), e);
        process::exit(EXIT_FAULT);
    });

    let mut sim = Simulator::new(WriterReporter::stdout(), &config);
    if let Err(e) = sim.cpu.load(&image) {
        error!("{}: {}", program.display(), e);
        process::exit(EXIT_FAULT);
    }

    let code = match sim.run() {
        Ok(RunOutcome::Halted { .. }) => 0,
        Ok(RunOutcome::StepLimit { steps }) => {
            eprintln!("[*] step limit reached after {steps} instructions");
            EXIT_STEP_LIMIT
        }
        Err(e) => {
            error!("fatal: {}", e);
            sim.cpu.dump_state();
            EXIT_FAULT
        }
    };

    if let Err(e) = std::io::stdout().flush() {
        error!("cannot flush stdout: {}", e);
    }
    if stats {
        sim.cpu.stats.print();
    }
    process::exit(code);
}

/// Prints `addr: instruction` for every instruction in the image.
fn cmd_disasm(program: &Path) {
    let image = loader::load_program_file(program).unwrap_or_else(|e| {
        error!("{}: {}", program.display(), e);
        process::exit(EXIT_FAULT);
    });
    for line in disassemble_image(&image) {
        println!("{line}");
    }
}
