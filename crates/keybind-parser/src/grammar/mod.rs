//! # Grammar
//!
//! Recognizes a whitespace-separated list of atoms and translates them
//! into a normalized [`Sequence`](crate::sequence::Sequence).
//!
//! ```text
//! sequence = atom+
//! atom     = "!"? (angle | plus | bare)
//! angle    = "<" modifier* key ">"
//! plus     = (modifier "+")+ key
//! modifier = "c" | "s" | "a" | "m" | "d"        -- angle form, each `mod-`
//!          | "Ctrl" | "Shift" | "Alt"           -- plus form
//!          | "Meta" | "Cmd" | "Super" | "Win"
//! key      = fn-key | numpad-key | named-key | char
//! ```
//!
//! A bare atom is a single character unless it forms the longest prefix
//! match of a known named-key word or an `f`/`kp` pattern — see
//! [`tokens`] for exactly how that boundary is decided.

mod atom;
mod scanner;
mod tokens;


use crate::error::{ParseError, ParseErrorKind};
use crate::sequence::Sequence;
use crate::symbol::KeyResolver;
use atom::parse_atom;
use scanner::Scanner;

/// Parses a whitespace-separated binding string into a normalized
/// [`Sequence`].
///
/// # Errors
///
/// Returns a [`ParseError`] for any of the kinds in
/// [`ParseErrorKind`]: an unbalanced bracket, an unrecognized modifier or
/// key token, a dangling `!`, or an empty sequence.
///
/// # Examples
///
/// ```
/// use keybind_parser::{parse, KeyResolver, KeySymbol};
///
/// struct Qwerty;
/// impl KeyResolver for Qwerty {
///     fn keycode(&self, symbol: KeySymbol) -> Option<i32> {
///         match symbol {
///             KeySymbol::Char(c) => Some(c as i32),
///             _ => None,
///         }
///     }
///     fn scancode(&self, _symbol: KeySymbol) -> Option<i32> {
///         None
///     }
/// }
///
/// let sequence = parse("ab", &Qwerty).unwrap();
/// assert_eq!(sequence.len(), 2);
/// ```
pub fn parse(input: &str, resolver: &dyn KeyResolver) -> Result<Sequence, ParseError> {
	let mut scanner = Scanner::new(input);
	let mut sequence = Sequence::new();

	loop {
		scanner.skip_whitespace();
		if scanner.is_end() {
			break;
		}
		sequence.push(parse_atom(&mut scanner, resolver)?);
	}

	if sequence.is_empty() {
		return Err(ParseError::new(ParseErrorKind::EmptySequence, 0));
	}

	Ok(sequence)
}
