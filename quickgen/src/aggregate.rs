//! Generators that assemble several values into one: tuples, records and
//! arrays.
//!
//! All of them are all-or-nothing: the result is present only if every
//! constituent draw produced a value. Every constituent is still drawn on
//! each call, in order, even after an earlier one came up empty, so a
//! composite always consumes the same number of draws from its children.

use crate::generator::Generator;
use crate::maybe::{Absent, Maybe, Present};
use crate::primitives::{Choose, choose};

/// A fixed collection of generators producing their values together
///
/// Implemented for tuples of generators (arity 0 to 12) and for `Vec`s of
/// generators of one type.
pub trait FieldGenerators {
    /// The values produced by one draw of every field
    type Output;

    /// Draw every field once, in order
    fn generate_fields(&self) -> Maybe<Self::Output>;
}

/// A function building a value from positional arguments
///
/// Implemented for every `Fn` of arity 0 to 12, with the arguments packed
/// in a tuple.
pub trait Construct<Args> {
    type Output;

    fn construct(&self, args: Args) -> Self::Output;
}

macro_rules! impl_field_generators {
    ($($generator:ident . $index:tt),*) => {
        impl<$($generator: Generator),*> FieldGenerators for ($($generator,)*) {
            type Output = ($($generator::Value,)*);

            #[allow(non_snake_case, unreachable_patterns)]
            fn generate_fields(&self) -> Maybe<Self::Output> {
                let ($($generator,)*) = ($(self.$index.generate(),)*);
                match ($($generator,)*) {
                    ($(Present($generator),)*) => Present(($($generator,)*)),
                    _ => Absent,
                }
            }
        }
    };
}

macro_rules! impl_construct {
    ($($arg:ident),*) => {
        impl<Func, Out, $($arg),*> Construct<($($arg,)*)> for Func
        where
            Func: Fn($($arg),*) -> Out,
        {
            type Output = Out;

            #[allow(non_snake_case)]
            fn construct(&self, ($($arg,)*): ($($arg,)*)) -> Out {
                (self)($($arg),*)
            }
        }
    };
}

impl_field_generators!();
impl_field_generators!(G1.0);
impl_field_generators!(G1.0, G2.1);
impl_field_generators!(G1.0, G2.1, G3.2);
impl_field_generators!(G1.0, G2.1, G3.2, G4.3);
impl_field_generators!(G1.0, G2.1, G3.2, G4.3, G5.4);
impl_field_generators!(G1.0, G2.1, G3.2, G4.3, G5.4, G6.5);
impl_field_generators!(G1.0, G2.1, G3.2, G4.3, G5.4, G6.5, G7.6);
impl_field_generators!(G1.0, G2.1, G3.2, G4.3, G5.4, G6.5, G7.6, G8.7);
impl_field_generators!(G1.0, G2.1, G3.2, G4.3, G5.4, G6.5, G7.6, G8.7, G9.8);
impl_field_generators!(G1.0, G2.1, G3.2, G4.3, G5.4, G6.5, G7.6, G8.7, G9.8, G10.9);
impl_field_generators!(G1.0, G2.1, G3.2, G4.3, G5.4, G6.5, G7.6, G8.7, G9.8, G10.9, G11.10);
impl_field_generators!(G1.0, G2.1, G3.2, G4.3, G5.4, G6.5, G7.6, G8.7, G9.8, G10.9, G11.10, G12.11);

impl_construct!();
impl_construct!(A1);
impl_construct!(A1, A2);
impl_construct!(A1, A2, A3);
impl_construct!(A1, A2, A3, A4);
impl_construct!(A1, A2, A3, A4, A5);
impl_construct!(A1, A2, A3, A4, A5, A6);
impl_construct!(A1, A2, A3, A4, A5, A6, A7);
impl_construct!(A1, A2, A3, A4, A5, A6, A7, A8);
impl_construct!(A1, A2, A3, A4, A5, A6, A7, A8, A9);
impl_construct!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10);
impl_construct!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11);
impl_construct!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12);

impl<G: Generator> FieldGenerators for Vec<G> {
    type Output = Vec<G::Value>;

    fn generate_fields(&self) -> Maybe<Self::Output> {
        all_or_nothing(self.iter().map(Generator::generate).collect())
    }
}

/// Keep the values only if every draw produced one
fn all_or_nothing<T>(draws: Vec<Maybe<T>>) -> Maybe<Vec<T>> {
    let mut values = Vec::with_capacity(draws.len());
    for draw in draws {
        match draw {
            Present(value) => values.push(value),
            Absent => return Absent,
        }
    }
    Present(values)
}

/// Draw `length` values from the same generator; absent for a negative length
fn generate_repeated<G: Generator + ?Sized>(generator: &G, length: isize) -> Maybe<Vec<G::Value>> {
    if length < 0 {
        return Absent;
    }
    all_or_nothing((0..length).map(|_| generator.generate()).collect())
}

/// Tuple of independently generated fields
#[derive(Debug, Clone)]
pub struct NTuple<F> {
    fields: F,
}

impl<F: FieldGenerators> Generator for NTuple<F> {
    type Value = F::Output;

    fn generate(&self) -> Maybe<F::Output> {
        self.fields.generate_fields()
    }
}

/// Record built by a constructor from independently generated fields
#[derive(Debug, Clone)]
pub struct Object<C, F> {
    constructor: C,
    fields: F,
}

impl<C, F> Generator for Object<C, F>
where
    F: FieldGenerators,
    C: Construct<F::Output>,
{
    type Value = C::Output;

    fn generate(&self) -> Maybe<C::Output> {
        self.fields
            .generate_fields()
            .map(|args| self.constructor.construct(args))
    }
}

/// Array of a fixed length drawn from one generator
#[derive(Debug, Clone)]
pub struct ArrayOfLength<G> {
    generator: G,
    length: isize,
}

impl<G: Generator> Generator for ArrayOfLength<G> {
    type Value = Vec<G::Value>;

    fn generate(&self) -> Maybe<Self::Value> {
        generate_repeated(&self.generator, self.length)
    }
}

/// Array whose length is drawn uniformly from `[0, max_length]` on each call
#[derive(Debug, Clone)]
pub struct ArrayOf<G> {
    generator: G,
    length: Choose<f64>,
}

impl<G: Generator> Generator for ArrayOf<G> {
    type Value = Vec<G::Value>;

    fn generate(&self) -> Maybe<Self::Value> {
        self.length
            .generate()
            .flat_map(|length| generate_repeated(&self.generator, length.round() as isize))
    }
}

/// One mandatory element followed by `max_size - 1` more
#[derive(Debug, Clone)]
pub struct NonEmptyArray<G> {
    generator: G,
    max_size: isize,
}

impl<G: Generator> Generator for NonEmptyArray<G> {
    type Value = Vec<G::Value>;

    fn generate(&self) -> Maybe<Self::Value> {
        let first = self.generator.generate();
        let suffix = generate_repeated(&self.generator, self.max_size.saturating_sub(1));
        match (first, suffix) {
            (Present(first), Present(suffix)) => {
                let mut values = Vec::with_capacity(suffix.len() + 1);
                values.push(first);
                values.extend(suffix);
                Present(values)
            }
            _ => Absent,
        }
    }
}

/// Create a generator producing a tuple (or `Vec`) of one draw per field
///
/// ```rust
/// use quickgen::{Generator, n_tuple, pure};
///
/// let pair = n_tuple((pure(1), pure("one")));
/// assert_eq!(pair.generate().get(), (1, "one"));
/// ```
pub fn n_tuple<F: FieldGenerators>(fields: F) -> NTuple<F> {
    NTuple { fields }
}

/// Create a generator applying `constructor` to one draw per field, in order
///
/// ```rust
/// use quickgen::{Generator, object, pure};
///
/// #[derive(Debug, PartialEq)]
/// struct City {
///     name: &'static str,
///     population: u32,
/// }
///
/// let city = object(
///     |name, population| City { name, population },
///     (pure("Bolton"), pure(194_000)),
/// );
/// assert_eq!(city.generate().get().name, "Bolton");
/// ```
pub fn object<C, F>(constructor: C, fields: F) -> Object<C, F>
where
    F: FieldGenerators,
    C: Construct<F::Output>,
{
    Object {
        constructor,
        fields,
    }
}

/// Create a generator drawing `count` values from `generator`
///
/// A negative count is treated as zero.
pub fn times<G: Generator>(count: isize, generator: G) -> ArrayOfLength<G> {
    ArrayOfLength {
        generator,
        length: count.max(0),
    }
}

/// Create a generator for arrays of exactly `length` values
///
/// A negative length never produces a value. A zero length always produces
/// an empty array, whatever `generator` does.
pub fn array_of_length<G: Generator>(generator: G, length: isize) -> ArrayOfLength<G> {
    ArrayOfLength { generator, length }
}

/// Create a generator for arrays of at most `max_length` values
pub fn array_of<G: Generator>(generator: G, max_length: isize) -> ArrayOf<G> {
    ArrayOf {
        generator,
        length: choose(0.0, max_length as f64),
    }
}

/// Create a generator for arrays holding one element plus `max_size - 1` more
///
/// Produces nothing when `max_size < 1`.
pub fn non_empty_array<G: Generator>(generator: G, max_size: isize) -> NonEmptyArray<G> {
    NonEmptyArray {
        generator,
        max_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{Pure, never, pure};
    use crate::rng::{FixedSource, SequenceSource, with_random_source};
    use crate::selection::{frequency, sequence_of_values};
    use std::cell::Cell;

    struct Counting<'a> {
        calls: &'a Cell<usize>,
        produce: bool,
    }

    impl Generator for Counting<'_> {
        type Value = u8;

        fn generate(&self) -> Maybe<u8> {
            self.calls.set(self.calls.get() + 1);
            if self.produce { Present(7) } else { Absent }
        }
    }

    #[test]
    fn test_n_tuple_all_present() {
        let generator = n_tuple((pure(1), pure(2), pure(3)));
        assert_eq!(generator.generate(), Present((1, 2, 3)));
    }

    #[test]
    fn test_n_tuple_with_absent_field() {
        let empty = never::<i32>();
        assert_eq!(n_tuple((pure(1), empty, pure(2))).generate(), Absent);
        assert_eq!(n_tuple((empty, empty, empty)).generate(), Absent);
    }

    #[test]
    fn test_n_tuple_empty_and_variadic() {
        assert_eq!(n_tuple(()).generate(), Present(()));
        assert_eq!(
            n_tuple(vec![pure(1), pure(2), pure(3)]).generate(),
            Present(vec![1, 2, 3])
        );
        assert_eq!(n_tuple(Vec::<Pure<i32>>::new()).generate(), Present(vec![]));
    }

    #[test]
    fn test_n_tuple_draws_every_field() {
        let first = Cell::new(0);
        let second = Cell::new(0);
        let third = Cell::new(0);
        let generator = n_tuple((
            Counting { calls: &first, produce: false },
            Counting { calls: &second, produce: true },
            Counting { calls: &third, produce: true },
        ));

        assert_eq!(generator.generate(), Absent);
        assert_eq!(generator.generate(), Absent);
        assert_eq!((first.get(), second.get(), third.get()), (2, 2, 2));
    }

    #[test]
    fn test_object() {
        #[derive(Debug, PartialEq)]
        struct City {
            name: String,
            population: u32,
            area: f64,
        }

        let city = |name: String, population: u32, area: f64| City {
            name,
            population,
            area,
        };

        let generator = object(city, (pure("name1".to_string()), pure(123), pure(10.0)));
        assert_eq!(
            generator.generate(),
            Present(City {
                name: "name1".to_string(),
                population: 123,
                area: 10.0,
            })
        );

        let generator = object(city, (pure("name1".to_string()), never::<u32>(), pure(10.0)));
        assert_eq!(generator.generate(), Absent);
    }

    #[test]
    fn test_object_without_fields() {
        let generator = object(|| "unit", ());
        assert_eq!(generator.generate(), Present("unit"));
    }

    #[test]
    fn test_times() {
        assert_eq!(times(5, pure('a')).generate(), Present(vec!['a'; 5]));
        assert_eq!(times(1, pure('a')).generate(), pure('a').map(|c| vec![c]).generate());
        assert_eq!(times(0, never::<char>()).generate(), Present(vec![]));
        assert_eq!(times(-3, never::<char>()).generate(), Present(vec![]));
    }

    #[test]
    fn test_times_reuses_one_instance() {
        let generator = times(4, sequence_of_values([1, 2, 3]));
        assert_eq!(generator.generate(), Present(vec![1, 2, 3, 1]));
        assert_eq!(generator.generate(), Present(vec![2, 3, 1, 2]));
    }

    #[test]
    fn test_array_of_length() {
        assert_eq!(
            array_of_length(pure("abc"), 5).generate(),
            Present(vec!["abc"; 5])
        );
        assert_eq!(array_of_length(pure(3), 0).generate(), Present(vec![]));
        assert_eq!(array_of_length(never::<i32>(), 0).generate(), Present(vec![]));
        assert_eq!(array_of_length(pure(3), -5).generate(), Absent);
    }

    #[test]
    fn test_array_of_length_with_absent_draw() {
        let element = frequency([(0.1, pure(3).boxed()), (0.9, never().boxed())]);
        let generator = array_of_length(element, 3);
        let value = with_random_source(SequenceSource::new(vec![0.05, 0.06, 0.15]), || {
            generator.generate()
        });
        assert_eq!(value, Absent);
    }

    #[test]
    fn test_array_of_at_most_max_length() {
        let max_length = 10;
        let generator = array_of(pure(3), max_length);

        let value = with_random_source(FixedSource(0.5 + 1.0 / 100.0), || generator.generate());
        assert_eq!(value, Present(vec![3; 5]));
    }

    #[test]
    fn test_array_of_lengths_vary() {
        let generator = array_of(pure(3), 10);
        let values = with_random_source(SequenceSource::new(vec![0.11, 0.21, 0.31]), || {
            (0..3).map(|_| generator.generate().get()).collect::<Vec<_>>()
        });
        assert_eq!(values, vec![vec![3], vec![3, 3], vec![3, 3, 3]]);
    }

    #[test]
    fn test_array_of_degenerate_lengths() {
        assert_eq!(array_of(pure(3), 0).generate(), Present(vec![]));
        assert_eq!(array_of(never::<i32>(), 0).generate(), Present(vec![]));
        assert_eq!(array_of(pure(3), -5).generate(), Absent);
    }

    #[test]
    fn test_non_empty_array() {
        assert_eq!(non_empty_array(pure(5), 1).generate(), Present(vec![5]));

        let generator = non_empty_array(pure(5), 3);
        for _ in 0..50 {
            let values = generator.generate().get();
            assert_eq!(values.len(), 3);
            assert!(values.iter().all(|&v| v == 5));
        }

        assert_eq!(non_empty_array(pure(5), 0).generate(), Absent);
        assert_eq!(non_empty_array(pure(5), -1).generate(), Absent);
    }

    #[test]
    fn test_non_empty_array_smallest_size() {
        assert_eq!(non_empty_array(pure(1), isize::MIN).generate(), Absent);
    }

    #[test]
    fn test_non_empty_array_draws_first_element_even_when_absent() {
        let calls = Cell::new(0);
        let generator = non_empty_array(Counting { calls: &calls, produce: true }, 0);
        assert_eq!(generator.generate(), Absent);
        assert_eq!(calls.get(), 1);
    }
}
