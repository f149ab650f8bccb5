// src/models.rs
use serde::{Serialize, Deserialize};

/// Shortest length the length control accepts.
pub const MIN_LENGTH: usize = 5;

/// Longest length the length control accepts.
pub const MAX_LENGTH: usize = 25;

// Password generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_special_chars: bool,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: 15,
            include_uppercase: true,
            include_numbers: false,
            include_special_chars: false,
        }
    }
}

impl GenerationRequest {
    pub fn length_in_range(length: usize) -> bool {
        (MIN_LENGTH..=MAX_LENGTH).contains(&length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_initial_form_state() {
        let request = GenerationRequest::default();
        assert_eq!(request.length, 15);
        assert!(request.include_uppercase);
        assert!(!request.include_numbers);
        assert!(!request.include_special_chars);
    }

    #[test]
    fn length_bounds_are_inclusive() {
        assert!(GenerationRequest::length_in_range(MIN_LENGTH));
        assert!(GenerationRequest::length_in_range(MAX_LENGTH));
        assert!(!GenerationRequest::length_in_range(MIN_LENGTH - 1));
        assert!(!GenerationRequest::length_in_range(MAX_LENGTH + 1));
    }
}
