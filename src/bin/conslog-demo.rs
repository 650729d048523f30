//! `conslog-demo`: prints sample lines through the console handler.
//!
//! Usage:
//!   conslog-demo [--level L] [--source] [--no-color] [--theme NAME]
//!   conslog-demo themes            One line per level for every theme

use clap::Parser;
use conslog::cli::{Cli, run};
use conslog::internal;
use std::process::ExitCode;

fn main() -> ExitCode {
    internal::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("conslog-demo: {e}");
            ExitCode::FAILURE
        }
    }
}
