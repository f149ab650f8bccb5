// src/generators/mod.rs
mod password;

pub use password::{GenerateError, PasswordGenerator};
