//! Error types for payload access and configuration.
//!
//! Absence of a generated value is not an error: it travels through the
//! combinators as [`Maybe::Absent`](crate::Maybe::Absent). The types here
//! cover the two places where something is genuinely wrong.

use thiserror::Error;

/// Reading the payload of an absent value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("None: accessing undefined value")]
    EmptyValue,
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Invalid max depth (must be > 0)
    #[error("Invalid max depth: {0} (must be > 0)")]
    InvalidMaxDepth(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            AccessError::EmptyValue.to_string(),
            "None: accessing undefined value"
        );
        assert_eq!(
            ConfigError::InvalidMaxDepth(0).to_string(),
            "Invalid max depth: 0 (must be > 0)"
        );
    }
}
