//! # Quickgen - Composable Test Data Generators
//!
//! Quickgen provides small random value generators and combinators that build
//! larger generators out of them. A generator either produces a value or
//! reports that it could not ([`Maybe::Absent`]), for instance because it was
//! given an empty range. Composite generators propagate that absence instead
//! of failing.
//!
//! ## Quick Start
//!
//! ```rust
//! use quickgen::{Generator, choose, n_tuple, one_of_values};
//!
//! let age = choose(0.0, 120.0).map(|age: f64| age.floor() as u8);
//! let city = one_of_values(["London", "Bristol", "Bolton"]);
//! let person = n_tuple((age, city));
//!
//! let (age, city) = person.generate().get();
//! assert!(age <= 120);
//! assert!(["London", "Bristol", "Bolton"].contains(&city));
//! ```
//!
//! ## Randomness
//!
//! All generators draw from a thread-local source of uniform values in
//! `[0, 1)`. Tests can script it:
//!
//! ```rust
//! use quickgen::{Generator, choose};
//! use quickgen::rng::{FixedSource, with_random_source};
//!
//! let value = with_random_source(FixedSource(0.5), || choose(0.0, 10.0).generate());
//! assert_eq!(value.get(), 5.0);
//! ```

// Public modules
pub mod aggregate;
pub mod config;
pub mod error;
pub mod generator;
pub mod lazy;
pub mod macros;
pub mod maybe;
pub mod primitives;
pub mod rng;
pub mod selection;

// Re-export the main public API
pub use aggregate::{
    ArrayOf, ArrayOfLength, Construct, FieldGenerators, NTuple, NonEmptyArray, Object, array_of,
    array_of_length, n_tuple, non_empty_array, object, times,
};
pub use config::GeneratorConfig;
pub use error::{AccessError, ConfigError};
pub use generator::{BoxedGenerator, FlatMap, Generator, Map};
pub use lazy::{Lazy, recursive, recursive_with_config};
pub use maybe::{Absent, Maybe, Present};
pub use primitives::{Choose, Never, Pure, choose, never, pure};
pub use rng::{RandomSource, random, with_random_source};
pub use selection::{
    Frequency, OneOf, SequenceOf, frequency, frequency_of_values, one_of, one_of_values,
    sequence_of, sequence_of_values,
};
