//! Extra generators for common data types and patterns
//!
//! This module provides generators for:
//! - Text types (character classes, fixed-length strings, identifiers)
//! - Domain types (UUIDs)

pub mod domain;
pub mod text;
