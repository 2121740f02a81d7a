//! autocare - vehicle maintenance tracking and symptom diagnostics
//!
//! A CLI tool that tracks service history per vehicle, flags maintenance
//! that is coming due, and suggests probable causes for symptoms.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
