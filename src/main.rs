use clap::Parser;
use std::io;
use std::path::Path;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};

mod cli;
mod clipboard;
mod core;
mod generators;
mod models;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;

fn main() -> Result<(), io::Error> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .init();

    log::info!("🔐 Starting PassGen - Random Password Generator");

    let should_exit = Arc::new(AtomicBool::new(false));

    {
        let should_exit = Arc::clone(&should_exit);
        ctrlc::set_handler(move || {
            log::info!("🔴 Ctrl+C received. Shutting down...");
            should_exit.store(true, Ordering::SeqCst);
            std::process::exit(0);
        }).expect("Failed to set Ctrl+C handler");
    }

    // One-shot command mode
    if let Some(command) = args.command {
        match command {
            CliCommand::Generate {
                length,
                uppercase,
                no_uppercase,
                numbers,
                no_numbers,
                special,
                no_special,
                copy,
                json,
            } => {
                cli::handlers::handle_generate(
                    &config,
                    length,
                    uppercase,
                    no_uppercase,
                    numbers,
                    no_numbers,
                    special,
                    no_special,
                    copy,
                    json,
                )
                .map_err(|e| {
                    log::error!("Generate command failed: {}", e);
                    io::Error::new(io::ErrorKind::Other, e.to_string())
                })?;
            }
        }
        return Ok(());
    }

    // Interactive form
    cli::menu::run_menu(&config, should_exit).map_err(|e| {
        log::error!("Menu error: {}", e);
        io::Error::new(io::ErrorKind::Other, e.to_string())
    })?;

    log::info!("✅ PassGen shutdown complete.");

    Ok(())
}
