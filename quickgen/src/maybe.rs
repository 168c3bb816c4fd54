//! The optional value produced by every generator.
//!
//! A generator either produces a value or reports that it could not produce
//! one (an empty range, an empty candidate list, a negative length). `Maybe`
//! carries that outcome. Absence is an ordinary result and is propagated by
//! the combinators; reading the payload of an absent value is a programming
//! error and panics.

use crate::error::AccessError;

/// Presence or absence of a generated value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    /// A generated value
    Present(T),
    /// No value could be generated
    Absent,
}

pub use Maybe::{Absent, Present};

impl<T> Maybe<T> {
    /// Wrap a value that is known to exist
    pub fn pure(value: T) -> Self {
        Present(value)
    }

    /// Whether a value is present
    pub fn is_defined(&self) -> bool {
        matches!(self, Present(_))
    }

    /// Apply `f` to the payload, leaving absence untouched
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Present(value) => Present(f(value)),
            Absent => Absent,
        }
    }

    /// Feed the payload to `f` and return its result directly
    pub fn flat_map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Present(value) => f(value),
            Absent => Absent,
        }
    }

    /// Borrow the payload
    ///
    /// # Panics
    ///
    /// Panics if the value is absent.
    pub fn value(&self) -> &T {
        match self {
            Present(value) => value,
            Absent => panic!("{}", AccessError::EmptyValue),
        }
    }

    /// Take the payload
    ///
    /// # Panics
    ///
    /// Panics if the value is absent.
    pub fn get(self) -> T {
        match self {
            Present(value) => value,
            Absent => panic!("{}", AccessError::EmptyValue),
        }
    }

    /// Take the payload, reporting absence as an error instead of panicking
    pub fn try_get(self) -> Result<T, AccessError> {
        match self {
            Present(value) => Ok(value),
            Absent => Err(AccessError::EmptyValue),
        }
    }

    /// Borrow the payload without taking it
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Present(value) => Present(value),
            Absent => Absent,
        }
    }

    /// Convert into the standard `Option`
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Present(value),
            None => Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Present(value) => Some(value),
            Absent => None,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Absent
    }
}
