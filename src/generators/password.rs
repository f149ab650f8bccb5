// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use thiserror::Error;

use crate::models::{GenerationRequest, MAX_LENGTH, MIN_LENGTH};

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const NUMBERS: &[u8] = b"0123456789";
const SPECIAL_CHARS: &[u8] = b"!@#$%^&*()_+=-[]{}|:<>?,.";

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("password length {0} is out of range ({MIN_LENGTH}-{MAX_LENGTH})")]
    InvalidLength(usize),
}

pub type Result<T> = std::result::Result<T, GenerateError>;

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    // Compose the alphabet in fixed class order. Lowercase is unconditional,
    // so the alphabet is never empty.
    fn compose_alphabet(request: &GenerationRequest) -> Vec<u8> {
        let mut chars = Vec::new();

        chars.extend_from_slice(LOWERCASE);
        if request.include_uppercase {
            chars.extend_from_slice(UPPERCASE);
        }
        if request.include_numbers {
            chars.extend_from_slice(NUMBERS);
        }
        if request.include_special_chars {
            chars.extend_from_slice(SPECIAL_CHARS);
        }

        chars
    }

    /// Generate a password by sampling each character independently and
    /// uniformly from the alphabet the request implies.
    pub fn generate_password(&self, request: &GenerationRequest) -> Result<String> {
        if !GenerationRequest::length_in_range(request.length) {
            return Err(GenerateError::InvalidLength(request.length));
        }

        let chars = Self::compose_alphabet(request);
        let mut rng = rand::thread_rng();
        let dist = Uniform::from(0..chars.len());

        Ok((0..request.length)
            .map(|_| chars[dist.sample(&mut rng)] as char)
            .collect())
    }
}
