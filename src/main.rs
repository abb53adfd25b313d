//! text-ripper CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use text_ripper::cli::args::*;
use text_ripper::cli::commands::*;
use text_ripper::processor::RunStatus;

fn main() {
    // Parse command line arguments using clap
    let args = RipperArgs::parse();

    // --show and progress reports log at info level
    let mut log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Info,  // Default
        2 => LevelFilter::Debug, // Verbose
        _ => LevelFilter::Trace, // Very verbose (3+)
    };
    if args.debug() && log_level < LevelFilter::Debug {
        log_level = LevelFilter::Debug;
    }

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    match execute_command(args) {
        Ok(RunStatus::Completed) => {}
        Ok(RunStatus::Aborted { line, reason, .. }) => {
            eprintln!("Error: aborted at line {line}: {reason}");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
