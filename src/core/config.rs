// src/core/config.rs
use std::env;
use log::LevelFilter;

use crate::models::GenerationRequest;

// Configuration for the password generator
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation defaults
    pub default_length: usize,
    pub default_include_uppercase: bool,
    pub default_include_numbers: bool,
    pub default_include_special_chars: bool,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        let request = GenerationRequest::default();
        Self {
            default_length: request.length,
            default_include_uppercase: request.include_uppercase,
            default_include_numbers: request.include_numbers,
            default_include_special_chars: request.include_special_chars,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        // Password Generation
        if let Ok(val) = env::var("PASSGEN_DEFAULT_LENGTH") {
            match val.parse::<usize>() {
                Ok(length) if GenerationRequest::length_in_range(length) => {
                    config.default_length = length;
                }
                _ => log::warn!("Ignoring invalid PASSGEN_DEFAULT_LENGTH '{}'", val),
            }
        }

        if let Ok(val) = env::var("PASSGEN_DEFAULT_UPPERCASE") {
            match val.parse() {
                Ok(enabled) => config.default_include_uppercase = enabled,
                Err(_) => log::warn!("Ignoring invalid PASSGEN_DEFAULT_UPPERCASE '{}'", val),
            }
        }

        if let Ok(val) = env::var("PASSGEN_DEFAULT_NUMBERS") {
            match val.parse() {
                Ok(enabled) => config.default_include_numbers = enabled,
                Err(_) => log::warn!("Ignoring invalid PASSGEN_DEFAULT_NUMBERS '{}'", val),
            }
        }

        if let Ok(val) = env::var("PASSGEN_DEFAULT_SPECIAL") {
            match val.parse() {
                Ok(enabled) => config.default_include_special_chars = enabled,
                Err(_) => log::warn!("Ignoring invalid PASSGEN_DEFAULT_SPECIAL '{}'", val),
            }
        }

        // Logging
        if let Ok(level) = env::var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        config
    }

    // Initial form state seeded from the configured defaults
    pub fn initial_request(&self) -> GenerationRequest {
        GenerationRequest {
            length: self.default_length,
            include_uppercase: self.default_include_uppercase,
            include_numbers: self.default_include_numbers,
            include_special_chars: self.default_include_special_chars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_the_request_defaults() {
        let config = Config::default();
        let request = GenerationRequest::default();
        assert_eq!(config.default_length, request.length);
        assert_eq!(config.default_include_uppercase, request.include_uppercase);
        assert_eq!(config.default_include_numbers, request.include_numbers);
        assert_eq!(
            config.default_include_special_chars,
            request.include_special_chars
        );
    }

    #[test]
    fn initial_request_carries_the_configured_defaults() {
        let mut config = Config::default();
        config.default_length = 20;
        config.default_include_numbers = true;

        let request = config.initial_request();
        assert_eq!(request.length, 20);
        assert!(request.include_uppercase);
        assert!(request.include_numbers);
        assert!(!request.include_special_chars);
    }

    // The only test that calls load(), so the process environment is not
    // mutated concurrently.
    #[test]
    fn load_reads_the_environment_and_rejects_bad_values() {
        env::set_var("PASSGEN_DEFAULT_LENGTH", "30");
        env::set_var("PASSGEN_DEFAULT_NUMBERS", "true");
        env::set_var("PASSGEN_DEFAULT_SPECIAL", "not-a-bool");

        let config = Config::load();
        assert_eq!(config.default_length, GenerationRequest::default().length);
        assert!(config.default_include_numbers);
        assert!(!config.default_include_special_chars);

        env::remove_var("PASSGEN_DEFAULT_LENGTH");
        env::remove_var("PASSGEN_DEFAULT_NUMBERS");
        env::remove_var("PASSGEN_DEFAULT_SPECIAL");
    }
}
