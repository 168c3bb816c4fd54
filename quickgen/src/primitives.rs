//! Primitive generators: constants, failure and numeric ranges.

use std::fmt;
use std::marker::PhantomData;

use num_traits::{Float, NumCast};

use crate::generator::Generator;
use crate::maybe::{Absent, Maybe, Present};
use crate::rng::random;

/// A generator that always produces the same value
#[derive(Debug, Clone)]
pub struct Pure<T> {
    value: Maybe<T>,
}

impl<T: Clone> Pure<T> {
    /// Create a new constant generator
    pub fn new(value: T) -> Self {
        Self {
            value: Present(value),
        }
    }
}

impl<T: Clone> Generator for Pure<T> {
    type Value = T;

    fn generate(&self) -> Maybe<T> {
        self.value.clone()
    }
}

/// A generator that never produces a value
pub struct Never<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Never<T> {
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for Never<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Never<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Never<T> {}

impl<T> fmt::Debug for Never<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Never")
    }
}

impl<T> Generator for Never<T> {
    type Value = T;

    fn generate(&self) -> Maybe<T> {
        Absent
    }
}

/// A generator for real numbers drawn uniformly from `[min, max]`
///
/// The draw is `random() * (max - min) + min`, so a single-point range
/// always yields exactly `min`. An empty range (`max < min`) yields nothing.
#[derive(Debug, Clone, Copy)]
pub struct Choose<T> {
    min: T,
    max: T,
}

impl<T: Float> Choose<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: Float> Generator for Choose<T> {
    type Value = T;

    fn generate(&self) -> Maybe<T> {
        if self.max < self.min {
            return Absent;
        }
        let unit: Maybe<T> = <T as NumCast>::from(random()).into();
        unit.map(|unit| unit * (self.max - self.min) + self.min)
    }
}

/// Create a generator that always produces `value`
pub fn pure<T: Clone>(value: T) -> Pure<T> {
    Pure::new(value)
}

/// Create a generator that never produces a value
pub fn never<T>() -> Never<T> {
    Never::new()
}

/// Create a generator for real numbers in `[min, max]`
///
/// Integral values are obtained by rounding at the call site:
/// `choose(0.0, 120.0).map(f64::floor)`.
pub fn choose<T: Float>(min: T, max: T) -> Choose<T> {
    Choose::new(min, max)
}
