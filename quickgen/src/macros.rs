//! Declarative macros for choosing between generators of different types.
//!
//! The function forms ([`one_of`](crate::one_of), [`sequence_of`](crate::sequence_of),
//! [`frequency`](crate::frequency)) need candidates of a single type. These
//! macros box each candidate first, so any mix of generators with the same
//! value type can be listed.

/// Uniform choice between generators of possibly different types
///
/// ```rust
/// use quickgen::{Generator, choose, one_of, pure};
///
/// let generator = one_of![pure(1.0), choose(2.0, 3.0), pure(4.0).map(|x| x * 2.0)];
/// let value = generator.generate().get();
/// assert!(value == 1.0 || (2.0..=3.0).contains(&value) || value == 8.0);
/// ```
#[macro_export]
macro_rules! one_of {
    ($($generator:expr),* $(,)?) => {
        $crate::one_of(::std::vec![$($crate::Generator::boxed($generator)),*])
    };
}

/// Round-robin cycling through generators of possibly different types
///
/// ```rust
/// use quickgen::{Generator, pure, sequence_of};
///
/// let generator = sequence_of![pure(1), pure(2).map(|x| x * 10)];
/// assert_eq!(generator.generate().get(), 1);
/// assert_eq!(generator.generate().get(), 20);
/// assert_eq!(generator.generate().get(), 1);
/// ```
#[macro_export]
macro_rules! sequence_of {
    ($($generator:expr),* $(,)?) => {
        $crate::sequence_of(::std::vec![$($crate::Generator::boxed($generator)),*])
    };
}

/// Weighted choice between generators of possibly different types
///
/// ```rust
/// use quickgen::{Generator, frequency, never, pure};
///
/// let generator = frequency![0.0 => never(), 2.5 => pure("picked")];
/// assert_eq!(generator.generate().get(), "picked");
/// ```
#[macro_export]
macro_rules! frequency {
    ($($weight:expr => $generator:expr),* $(,)?) => {
        $crate::frequency(::std::vec![$(($weight, $crate::Generator::boxed($generator))),*])
    };
}
