//! Parser error values. The parser never panics on malformed input; every
//! failure mode surfaces as an [`Err`] carrying one of these kinds.

use std::fmt;

use thiserror::Error;

/// The reason a binding string failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
	/// An angle-bracket atom was missing its opening or closing bracket.
	#[error("unbalanced '<' / '>'")]
	UnbalancedBracket,
	/// A `Mod+` or `m-` prefix did not name a recognized modifier.
	#[error("unknown modifier '{0}'")]
	UnknownModifier(String),
	/// A key token did not resolve through either injected resolver.
	#[error("unknown key '{0}'")]
	UnknownKey(String),
	/// The binding string contained no atoms at all.
	#[error("empty binding sequence")]
	EmptySequence,
	/// A trailing `!` had no atom to apply to.
	#[error("dangling '!' with no following key")]
	DanglingKeyup,
}

/// A parse failure, tagged with the byte offset into the input where it
/// was detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
	pub kind: ParseErrorKind,
	pub position: usize,
}

impl ParseError {
	pub(crate) fn new(kind: ParseErrorKind, position: usize) -> Self {
		Self { kind, position }
	}
}

impl fmt::Display for ParseError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "parse error at byte {}: {}", self.position, self.kind)
	}
}

impl std::error::Error for ParseError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		Some(&self.kind)
	}
}
