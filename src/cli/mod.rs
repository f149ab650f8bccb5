// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate random passwords from the terminal", long_about = None)]
pub struct Args {
    /// Command to execute; starts the interactive form when omitted
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
