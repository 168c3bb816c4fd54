//! Self-referential generators.
//!
//! [`recursive`] hands its builder a [`Lazy`] handle standing for the
//! generator being defined. The handle rebuilds the generator only when it is
//! asked for a value, so the definition can refer to itself without
//! constructing an infinite structure up front.

use std::fmt;
use std::rc::Rc;

use crate::config::GeneratorConfig;
use crate::generator::{BoxedGenerator, Generator};
use crate::maybe::{Absent, Maybe};

type Builder<T> = dyn Fn(Lazy<T>) -> BoxedGenerator<T>;

/// Deferred reference to a recursive generator
///
/// Each level of nesting counts towards [`GeneratorConfig::max_depth`]; past
/// the limit the handle produces nothing.
pub struct Lazy<T> {
    builder: Rc<Builder<T>>,
    depth: usize,
    max_depth: usize,
}

impl<T> Lazy<T> {
    /// Nesting level this handle would build at
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Build the generator one level down
    pub fn force(&self) -> BoxedGenerator<T> {
        (self.builder)(Lazy {
            builder: Rc::clone(&self.builder),
            depth: self.depth + 1,
            max_depth: self.max_depth,
        })
    }
}

impl<T> Clone for Lazy<T> {
    fn clone(&self) -> Self {
        Self {
            builder: Rc::clone(&self.builder),
            depth: self.depth,
            max_depth: self.max_depth,
        }
    }
}

impl<T> fmt::Debug for Lazy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lazy")
            .field("depth", &self.depth)
            .field("max_depth", &self.max_depth)
            .finish_non_exhaustive()
    }
}

impl<T> Generator for Lazy<T> {
    type Value = T;

    fn generate(&self) -> Maybe<T> {
        if self.depth >= self.max_depth {
            tracing::trace!(depth = self.depth, "recursive generator reached max depth");
            return Absent;
        }
        self.force().generate()
    }
}

/// Create a recursive generator with the default configuration
///
/// ```rust
/// use quickgen::{Generator, frequency, pure, recursive};
///
/// // Length of a randomly grown chain
/// let depth = recursive(|nested| {
///     frequency([
///         (0.6, pure(0u32).boxed()),
///         (0.4, nested.map(|d: u32| d + 1).boxed()),
///     ])
/// });
/// assert!(depth.generate().get() < 32);
/// ```
pub fn recursive<T, G, F>(block: F) -> BoxedGenerator<T>
where
    T: 'static,
    G: Generator<Value = T> + 'static,
    F: Fn(Lazy<T>) -> G + 'static,
{
    recursive_with_config(&GeneratorConfig::default(), block)
}

/// Create a recursive generator bounded by `config.max_depth`
pub fn recursive_with_config<T, G, F>(config: &GeneratorConfig, block: F) -> BoxedGenerator<T>
where
    T: 'static,
    G: Generator<Value = T> + 'static,
    F: Fn(Lazy<T>) -> G + 'static,
{
    let builder: Rc<Builder<T>> = Rc::new(move |lazy| block(lazy).boxed());
    let root = Lazy {
        builder,
        depth: 0,
        max_depth: config.max_depth,
    };
    root.force()
}
