//! Syllabize CLI binary.

use clap::Parser;
use std::process;
use syllabize::cli::{args::SyllabizeArgs, commands::execute_command};

fn main() {
    // Parse command line arguments using clap
    let args = SyllabizeArgs::parse();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
