// src/cli/handlers.rs
use std::error::Error;

use serde_json::json;

use crate::clipboard::CopyNotifier;
use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::models::GenerationRequest;

// Resolve an enable/disable flag pair against the configured default
fn resolve_flag(enable: bool, disable: bool, default: bool) -> bool {
    if enable {
        true
    } else if disable {
        false
    } else {
        default
    }
}

// Handler for the one-shot generate command
pub fn handle_generate(
    config: &Config,
    length: Option<usize>,
    uppercase: bool,
    no_uppercase: bool,
    numbers: bool,
    no_numbers: bool,
    special: bool,
    no_special: bool,
    copy: bool,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let defaults = config.initial_request();
    let request = GenerationRequest {
        length: length.unwrap_or(defaults.length),
        include_uppercase: resolve_flag(uppercase, no_uppercase, defaults.include_uppercase),
        include_numbers: resolve_flag(numbers, no_numbers, defaults.include_numbers),
        include_special_chars: resolve_flag(special, no_special, defaults.include_special_chars),
    };

    let generator = PasswordGenerator::new();
    let password = generator.generate_password(&request)?;

    if json {
        let output = json!({
            "password": password,
            "length": request.length,
            "include_uppercase": request.include_uppercase,
            "include_numbers": request.include_numbers,
            "include_special_chars": request.include_special_chars,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", password);
    }

    if copy {
        let notifier = CopyNotifier::new();
        // Let the confirmation window elapse before the process exits
        if let Some(timer) = notifier.copy(&password) {
            let _ = timer.join();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flags_win_over_defaults() {
        assert!(resolve_flag(true, false, false));
        assert!(!resolve_flag(false, true, true));
    }

    #[test]
    fn absent_flags_fall_back_to_the_default() {
        assert!(resolve_flag(false, false, true));
        assert!(!resolve_flag(false, false, false));
    }
}
