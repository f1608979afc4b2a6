//! Rollbook CLI
//!
//! Command-line interface for Rollbook

use clap::{Parser, Subcommand};
use rollbook_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "rollbook")]
#[command(about = "Rollbook - academic records registry", long_about = None)]
struct Cli {
    /// Emit JSON structured logs instead of human-readable output
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the registry walkthrough (students, courses, enrollment, cascade)
    Demo(commands::demo::DemoArgs),
}

fn main() {
    let cli = Cli::parse();

    if cli.json_logs {
        init(Profile::Production);
    } else {
        init(Profile::Development);
    }

    let result = match cli.command {
        Commands::Demo(args) => commands::demo::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
