use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use lack::Interpreter;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

/// Exit code for a script file that cannot be read.
const EXIT_NO_INPUT: u8 = 66;

/// lack runs programs written in Lack, a small dynamically typed scripting
/// language. Without a script it starts an interactive shell.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prompt shown by the interactive shell.
    #[arg(short, long, default_value = "> ")]
    prompt: String,

    /// Path of the script to run.
    script: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // RUST_LOG controls the log level; warnings and above by default.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter)
         .with_writer(io::stderr)
         .with_target(false)
         .init();

    match args.script {
        Some(path) => run_file(&path),
        None => run_prompt(&args.prompt),
    }
}

/// Runs a whole script and maps its outcome to the process exit code.
fn run_file(path: &Path) -> ExitCode {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read the script '{}': {error}", path.display());
            return ExitCode::from(EXIT_NO_INPUT);
        },
    };

    debug!(path = %path.display(), bytes = source.len(), "running script");

    match lack::run_source(&source) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::from(u8::try_from(error.exit_code()).unwrap_or(1))
        },
    }
}

/// Reads and runs one line at a time until end of input.
///
/// Variables persist from one line to the next; an error is reported and the
/// shell carries on.
fn run_prompt(prompt: &str) -> ExitCode {
    let mut interpreter = Interpreter::stdio();

    loop {
        print!("{prompt}");
        if let Err(error) = io::stdout().flush() {
            eprintln!("Failed to write the prompt: {error}");
            return ExitCode::FAILURE;
        }

        let mut line = String::new();
        match interpreter.input_mut().read_line(&mut line) {
            Ok(0) => {
                println!();
                return ExitCode::SUCCESS;
            },
            Ok(_) => {},
            Err(error) => {
                eprintln!("Error reading line from stdin: {error}");
                return ExitCode::FAILURE;
            },
        }

        if let Err(error) = interpreter.run(&line) {
            eprintln!("{error}");
        }
    }
}
