//! Generators that pick one of several candidate generators.
//!
//! - [`one_of`]: uniform random choice
//! - [`frequency`]: weighted random choice
//! - [`sequence_of`]: round-robin cycling
//!
//! Each has a `*_values` form that wraps plain values in [`pure`].

use std::cell::Cell;

use crate::generator::Generator;
use crate::maybe::{Absent, Maybe};
use crate::primitives::{Pure, pure};
use crate::rng::random;

/// Uniform random choice between generators
#[derive(Debug, Clone)]
pub struct OneOf<G> {
    generators: Vec<G>,
}

impl<G: Generator> OneOf<G> {
    pub fn new(generators: Vec<G>) -> Self {
        Self { generators }
    }

    fn random_generator(&self) -> Option<&G> {
        let length = self.generators.len();
        if length == 0 {
            return None;
        }
        // random() may come arbitrarily close to 1
        let index = (random() * length as f64).min((length - 1) as f64).floor() as usize;
        self.generators.get(index)
    }
}

impl<G: Generator> Generator for OneOf<G> {
    type Value = G::Value;

    fn generate(&self) -> Maybe<G::Value> {
        match self.random_generator() {
            Some(generator) => generator.generate(),
            None => Absent,
        }
    }
}

/// Round-robin cycling through generators
///
/// The cursor advances on every call. A clone starts from the cursor position
/// of its source and advances independently; share a single instance (by
/// reference or through [`BoxedGenerator`](crate::BoxedGenerator)) to keep one
/// cursor. Not meant to be driven from several threads at once.
#[derive(Debug, Clone)]
pub struct SequenceOf<G> {
    generators: Vec<G>,
    cursor: Cell<usize>,
}

impl<G: Generator> SequenceOf<G> {
    pub fn new(generators: Vec<G>) -> Self {
        Self {
            generators,
            cursor: Cell::new(0),
        }
    }

    fn next_generator(&self) -> Option<&G> {
        let length = self.generators.len();
        if length == 0 {
            return None;
        }
        let index = self.cursor.get();
        self.cursor.set((index + 1) % length);
        self.generators.get(index)
    }
}

impl<G: Generator> Generator for SequenceOf<G> {
    type Value = G::Value;

    fn generate(&self) -> Maybe<G::Value> {
        match self.next_generator() {
            Some(generator) => generator.generate(),
            None => Absent,
        }
    }
}

/// Weighted random choice between generators
///
/// Entries whose weight is not a positive finite number are dropped at
/// construction. The
/// remaining weights are normalised into probabilities and an index is
/// sampled by inverting the cumulative distribution.
#[derive(Debug, Clone)]
pub struct Frequency<G> {
    generators: Vec<G>,
    probabilities: Vec<f64>,
}

impl<G: Generator> Frequency<G> {
    pub fn new(entries: Vec<(f64, G)>) -> Self {
        let total_entries = entries.len();
        let (weights, generators): (Vec<f64>, Vec<G>) = entries
            .into_iter()
            .filter(|(weight, _)| weight.is_finite() && *weight > 0.0)
            .unzip();

        if weights.len() < total_entries {
            tracing::trace!(
                dropped = total_entries - weights.len(),
                "ignoring non-positive or non-finite frequency weights"
            );
        }

        Self {
            generators,
            probabilities: weights_to_probabilities(&weights),
        }
    }

    /// Index of the first entry whose cumulative probability reaches `unit`
    fn sample_index(&self, unit: f64) -> Option<usize> {
        let mut accumulated = 0.0;
        for (index, probability) in self.probabilities.iter().enumerate() {
            accumulated += probability;
            if accumulated >= unit {
                return Some(index);
            }
        }
        None
    }
}

impl<G: Generator> Generator for Frequency<G> {
    type Value = G::Value;

    fn generate(&self) -> Maybe<G::Value> {
        if self.generators.is_empty() {
            return Absent;
        }

        let unit = random();
        match self.sample_index(unit).and_then(|index| self.generators.get(index)) {
            Some(generator) => generator.generate(),
            None => {
                // rounding left the cumulative mass short of the draw
                tracing::debug!(
                    unit,
                    probabilities = ?self.probabilities,
                    "frequency draw matched no entry"
                );
                Absent
            }
        }
    }
}

fn weights_to_probabilities(weights: &[f64]) -> Vec<f64> {
    // scale by the largest weight first so the sum cannot overflow
    let largest = weights.iter().copied().fold(0.0, f64::max);
    let scaled: Vec<f64> = weights.iter().map(|weight| weight / largest).collect();
    let total: f64 = scaled.iter().sum();
    scaled.iter().map(|weight| weight / total).collect()
}

/// Create a generator delegating to one of `generators`, chosen uniformly per call
pub fn one_of<G, I>(generators: I) -> OneOf<G>
where
    G: Generator,
    I: IntoIterator<Item = G>,
{
    OneOf::new(generators.into_iter().collect())
}

/// Create a generator producing one of `values`, chosen uniformly per call
pub fn one_of_values<T, I>(values: I) -> OneOf<Pure<T>>
where
    T: Clone,
    I: IntoIterator<Item = T>,
{
    one_of(values.into_iter().map(pure))
}

/// Create a generator cycling through `generators` in order
pub fn sequence_of<G, I>(generators: I) -> SequenceOf<G>
where
    G: Generator,
    I: IntoIterator<Item = G>,
{
    SequenceOf::new(generators.into_iter().collect())
}

/// Create a generator cycling through `values` in order
pub fn sequence_of_values<T, I>(values: I) -> SequenceOf<Pure<T>>
where
    T: Clone,
    I: IntoIterator<Item = T>,
{
    sequence_of(values.into_iter().map(pure))
}

/// Create a generator choosing between `(weight, generator)` entries
pub fn frequency<G, I>(entries: I) -> Frequency<G>
where
    G: Generator,
    I: IntoIterator<Item = (f64, G)>,
{
    Frequency::new(entries.into_iter().collect())
}

/// Create a generator choosing between `(weight, value)` entries
pub fn frequency_of_values<T, I>(entries: I) -> Frequency<Pure<T>>
where
    T: Clone,
    I: IntoIterator<Item = (f64, T)>,
{
    frequency(
        entries
            .into_iter()
            .map(|(weight, value)| (weight, pure(value))),
    )
}
