//! Gazetteer CLI binary.

use std::process;

use clap::Parser;
use gazetteer::cli::args::GazetteerArgs;
use gazetteer::cli::commands::execute_command;

fn main() {
    // Parse command line arguments using clap
    let args = GazetteerArgs::parse();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
