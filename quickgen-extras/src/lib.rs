//! # Quickgen Extras
//!
//! Additional generators for the Quickgen generator library.
//!
//! This crate provides extra generators for:
//! - **Text**: ASCII character classes, alphanumeric and hex strings, identifiers
//! - **Domain**: version 4 UUIDs
//!
//! Everything here is built from the core combinators, so the usual absence
//! rules apply: a string generator produces nothing if any of its parts does.
//!
//! ## Quick Start
//!
//! ```rust
//! use quickgen_extras::prelude::*;
//! use quickgen::Generator;
//!
//! // Generate a hex string
//! let hex = hex_string(6).generate().get();
//! assert_eq!(hex.len(), 6);
//!
//! // Generate an identifier
//! let name = identifier(10).generate().get();
//! assert!(name.starts_with(|c: char| c.is_ascii_lowercase()));
//!
//! // Generate a UUID
//! let id = uuid().generate().get();
//! assert_eq!(id.len(), 36); // UUID format: xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx
//! ```
//!
//! ### Text Generators
//!
//! ```rust
//! use quickgen_extras::prelude::*;
//! use quickgen::{Generator, pure};
//!
//! // Build strings from parts
//! let greeting = concat(vec![pure("hello"), pure(", "), pure("world")]);
//! assert_eq!(greeting.generate().get(), "hello, world");
//!
//! let code = repeat(4, num_char());
//! assert!(code.generate().get().chars().all(|c| c.is_ascii_digit()));
//! ```

// Re-export quickgen for convenience
pub use quickgen;

// Generators module
pub mod generators;

// Re-export commonly used items
pub mod prelude {
    //! Convenient re-exports of commonly used generators

    // Text generators
    pub use crate::generators::text::{
        AsciiRange, alpha_char, alpha_lower_char, alpha_num_char, alpha_num_string,
        alpha_upper_char, ascii_range, concat, hex_char, hex_string, identifier, num_char, repeat,
    };

    // Domain generators
    pub use crate::generators::domain::uuid;
}
