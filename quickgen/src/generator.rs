//! Core generator trait and its composition operators.

use std::fmt;
use std::rc::Rc;

use crate::maybe::Maybe;

/// A computation that produces an optional value on demand
///
/// Only [`generate`](Generator::generate) has to be implemented; `map`,
/// `flat_map` and `boxed` are built on top of it. Every call is independent:
/// nothing is cached between calls.
pub trait Generator {
    /// The type of values this generator produces
    type Value;

    /// Produce one value, or [`Maybe::Absent`] if none can be produced
    fn generate(&self) -> Maybe<Self::Value>;

    /// Transform every produced value with `f`
    fn map<F, U>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Value) -> U,
    {
        Map {
            generator: self,
            mapper: f,
        }
    }

    /// Feed every produced value to `f` and generate from the generator it returns
    ///
    /// `f` is not called when this generator produces nothing.
    fn flat_map<F, H>(self, f: F) -> FlatMap<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Value) -> H,
        H: Generator,
    {
        FlatMap {
            generator: self,
            binder: f,
        }
    }

    /// Erase the concrete type of this generator
    fn boxed(self) -> BoxedGenerator<Self::Value>
    where
        Self: Sized + 'static,
    {
        BoxedGenerator::new(self)
    }
}

impl<G: Generator + ?Sized> Generator for &G {
    type Value = G::Value;

    fn generate(&self) -> Maybe<Self::Value> {
        (**self).generate()
    }
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    type Value = G::Value;

    fn generate(&self) -> Maybe<Self::Value> {
        (**self).generate()
    }
}

impl<G: Generator + ?Sized> Generator for Rc<G> {
    type Value = G::Value;

    fn generate(&self) -> Maybe<Self::Value> {
        (**self).generate()
    }
}

/// A generator that maps values from one type to another
#[derive(Clone)]
pub struct Map<G, F> {
    generator: G,
    mapper: F,
}

impl<G, F, U> Generator for Map<G, F>
where
    G: Generator,
    F: Fn(G::Value) -> U,
{
    type Value = U;

    fn generate(&self) -> Maybe<U> {
        self.generator.generate().map(|value| (self.mapper)(value))
    }
}

/// A generator that chains a second, value-dependent generator
#[derive(Clone)]
pub struct FlatMap<G, F> {
    generator: G,
    binder: F,
}

impl<G, F, H> Generator for FlatMap<G, F>
where
    G: Generator,
    F: Fn(G::Value) -> H,
    H: Generator,
{
    type Value = H::Value;

    fn generate(&self) -> Maybe<H::Value> {
        self.generator
            .generate()
            .flat_map(|value| (self.binder)(value).generate())
    }
}

/// A shared, type-erased generator
///
/// Clones refer to the same underlying instance, so a stateful generator
/// (see [`sequence_of`](crate::sequence_of)) keeps a single cursor across
/// all of its clones.
pub struct BoxedGenerator<T> {
    inner: Rc<dyn Generator<Value = T>>,
}

impl<T> BoxedGenerator<T> {
    /// Create a new boxed generator
    pub fn new<G: Generator<Value = T> + 'static>(generator: G) -> Self {
        Self {
            inner: Rc::new(generator),
        }
    }
}

impl<T> Clone for BoxedGenerator<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for BoxedGenerator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedGenerator").finish_non_exhaustive()
    }
}

impl<T> Generator for BoxedGenerator<T> {
    type Value = T;

    fn generate(&self) -> Maybe<T> {
        self.inner.generate()
    }
}
