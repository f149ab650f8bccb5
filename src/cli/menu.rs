// src/cli/menu.rs
use inquire::{InquireError, Select, Text};
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use console::style;

use crate::clipboard::CopyNotifier;
use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::models::{GenerationRequest, MAX_LENGTH, MIN_LENGTH};

fn toggle_label(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

pub fn run_menu(config: &Config, should_exit: Arc<AtomicBool>) -> Result<(), Box<dyn Error>> {
    println!("╔══════════════════════════════════════╗");
    println!("║       🔐 PASSGEN — PASSWORDS         ║");
    println!("╚══════════════════════════════════════╝");

    let generator = PasswordGenerator::new();
    let notifier = CopyNotifier::new();
    let mut request = config.initial_request();
    let mut password = String::new();

    // Main application loop
    let mut exit_requested = false;
    while !exit_requested && !should_exit.load(Ordering::SeqCst) {
        // Current form state and the password display region
        println!();
        println!(
            "Options: uppercase {} | numbers {} | special {} | length {}",
            toggle_label(request.include_uppercase),
            toggle_label(request.include_numbers),
            toggle_label(request.include_special_chars),
            request.length,
        );
        if password.is_empty() {
            println!("{}", style("Your Password").dim());
        } else {
            println!("{}", style(&password).cyan().bold());
        }

        let options = vec![
            "🔠  Toggle uppercase letters",
            "🔢  Toggle numbers",
            "💥  Toggle special characters",
            "📏  Set password length",
            "🔐  Generate password",
            "📋  Copy password to clipboard",
            "❌  Exit",
        ];

        let selection_result = Select::new("Choose an option:", options)
            .with_help_message("Use arrow keys to navigate, Enter to select. Ctrl+C to exit.")
            .prompt_skippable();

        // Check if we should exit
        if should_exit.load(Ordering::SeqCst) {
            break;
        }

        // Process selection
        match selection_result {
            Ok(Some(selection)) => match selection {
                "🔠  Toggle uppercase letters" => {
                    request.include_uppercase = !request.include_uppercase;
                }
                "🔢  Toggle numbers" => {
                    request.include_numbers = !request.include_numbers;
                }
                "💥  Toggle special characters" => {
                    request.include_special_chars = !request.include_special_chars;
                }
                "📏  Set password length" => {
                    let prompt = format!("Password length ({}-{}):", MIN_LENGTH, MAX_LENGTH);
                    let parsed = Text::new(&prompt)
                        .with_default(&request.length.to_string())
                        .prompt()
                        .and_then(|s| {
                            s.trim()
                                .parse::<usize>()
                                .map_err(|_| InquireError::Custom("Invalid number".into()))
                        });

                    match parsed {
                        Ok(length) if GenerationRequest::length_in_range(length) => {
                            request.length = length;
                        }
                        Ok(length) => {
                            println!(
                                "❌ Length {} is out of range, keeping {}.",
                                length, request.length
                            );
                        }
                        Err(e) => {
                            println!("❌ {}", e);
                        }
                    }
                }
                "🔐  Generate password" => match generator.generate_password(&request) {
                    Ok(generated) => {
                        password = generated;
                        log::debug!("Generated a {}-character password", request.length);
                    }
                    Err(e) => {
                        println!("❌ Failed to generate password: {}", e);
                    }
                },
                "📋  Copy password to clipboard" => {
                    if password.is_empty() {
                        println!("❗ No password generated yet.");
                    } else {
                        // Fire-and-forget: the hide timer runs on its own
                        let _ = notifier.copy(&password);
                    }
                }
                "❌  Exit" => {
                    println!("👋 Goodbye!");
                    should_exit.store(true, Ordering::SeqCst);
                    exit_requested = true;
                }
                _ => {}
            },
            Ok(None) => {
                // Check if Ctrl+C was pressed
                if should_exit.load(Ordering::SeqCst) {
                    break;
                }
                // Sleep briefly to avoid consuming CPU while waiting for input
                thread::sleep(Duration::from_millis(100));
            }
            Err(e) => {
                println!("Error: {}", e);
                break;
            }
        }
    }

    Ok(())
}
