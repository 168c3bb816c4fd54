//! Character and string generators
//!
//! Characters are drawn from inclusive ASCII code point ranges:
//! - Lowercase and uppercase letters, digits, uppercase hex digits
//! - Mixtures of those through uniform choice
//!
//! Strings are assembled from character or string generators by
//! concatenation ([`concat`]) or repetition ([`repeat`]).

use quickgen::{BoxedGenerator, Choose, Generator, Maybe, OneOf, choose, n_tuple, one_of, times};

// ============================================================================
// Character Generators
// ============================================================================

/// Generator for one character in an inclusive ASCII code point range
#[derive(Debug, Clone, Copy)]
pub struct AsciiRange {
    codes: Choose<f64>,
}

impl Generator for AsciiRange {
    type Value = char;

    fn generate(&self) -> Maybe<char> {
        // ceil keeps the upper bound reachable
        self.codes
            .generate()
            .map(|code| char::from(code.ceil() as u8))
    }
}

/// Create a generator for characters with codes in `[from, to]`
///
/// The drawn code point is rounded up, so `from` itself only comes out when
/// the random source returns exactly `0.0`. In practice the lowest character
/// of a range (`'a'`, `'A'`, `'0'`) is almost never produced, and [`hex_char`]
/// effectively never yields `'0'` or `'A'`. Produces nothing when `from > to`.
pub fn ascii_range(from: u8, to: u8) -> AsciiRange {
    AsciiRange {
        codes: choose(f64::from(from), f64::from(to)),
    }
}

/// Lowercase letters `a`-`z`
pub fn alpha_lower_char() -> AsciiRange {
    ascii_range(b'a', b'z')
}

/// Uppercase letters `A`-`Z`
pub fn alpha_upper_char() -> AsciiRange {
    ascii_range(b'A', b'Z')
}

/// Digits `0`-`9`
pub fn num_char() -> AsciiRange {
    ascii_range(b'0', b'9')
}

/// Letters of either case, each case chosen with equal probability
pub fn alpha_char() -> OneOf<AsciiRange> {
    one_of([alpha_lower_char(), alpha_upper_char()])
}

/// Letters or digits, each class chosen with equal probability
pub fn alpha_num_char() -> OneOf<BoxedGenerator<char>> {
    one_of([alpha_char().boxed(), num_char().boxed()])
}

/// Uppercase hexadecimal digits; the `0`-`9` and `A`-`F` groups are equally likely
pub fn hex_char() -> OneOf<AsciiRange> {
    one_of([num_char(), ascii_range(b'A', b'F')])
}

// ============================================================================
// String Generators
// ============================================================================

/// Create a generator joining one draw of each generator, in order
///
/// Produces nothing if any part is absent; no parts give the empty string.
pub fn concat<G>(generators: Vec<G>) -> impl Generator<Value = String>
where
    G: Generator,
    G::Value: Into<String>,
{
    n_tuple(generators).map(join)
}

/// Create a generator joining `count` draws of one generator
///
/// A count of zero or less gives the empty string.
pub fn repeat<G>(count: isize, generator: G) -> impl Generator<Value = String>
where
    G: Generator,
    G::Value: Into<String>,
{
    times(count, generator).map(join)
}

/// Alphanumeric strings of exactly `length` characters
pub fn alpha_num_string(length: isize) -> impl Generator<Value = String> {
    repeat(length, alpha_num_char())
}

/// Uppercase hexadecimal strings of exactly `length` characters
pub fn hex_string(length: isize) -> impl Generator<Value = String> {
    repeat(length, hex_char())
}

/// Identifiers of 1 to `max_length` characters
///
/// The first character is a lowercase letter, the rest are alphanumeric.
/// Produces nothing when `max_length < 1`.
pub fn identifier(max_length: isize) -> impl Generator<Value = String> {
    choose(1.0, max_length as f64)
        .map(|length: f64| length.ceil() as isize)
        .flat_map(|length| {
            alpha_num_string(length - 1).flat_map(|suffix| {
                alpha_lower_char().map(move |prefix| {
                    let mut identifier = String::with_capacity(suffix.len() + 1);
                    identifier.push(prefix);
                    identifier.push_str(&suffix);
                    identifier
                })
            })
        })
}

fn join<T: Into<String>>(parts: Vec<T>) -> String {
    parts.into_iter().map(Into::into).collect()
}
