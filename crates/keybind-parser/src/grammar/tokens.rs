//! Tokenization of the bare (non-bracketed, non-plus) portion of an atom:
//! deciding how many characters belong to one key token.
//!
//! Named-key words are matched longest-first at a word boundary so that
//! `"delete"` isn't cut short at `"del"`; anything that isn't a known word
//! or an `f`/`kp` pattern falls back to exactly one character, which is
//! what lets `"ab"` tokenize as two atoms while `"esc"` stays one.

use crate::error::{ParseError, ParseErrorKind};
use crate::grammar::scanner::Scanner;
use crate::symbol::{KeySymbol, NamedKey};

/// Every spelling `NamedKey::from_token` accepts, longest first so the
/// scanner commits to the longest valid word at the cursor.
const NAMED_KEY_WORDS: &[&str] = &[
	"backspace", "capslock", "pagedown", "pageup", "delete", "escape", "insert", "return",
	"space", "caps", "home", "down", "left", "tab", "end", "ins", "del", "esc", "bs", "up",
	"enter", "pause", "right",
];

/// Scans one bare key token at the cursor: the longest matching named-key
/// word, an `f`/`kp` pattern, or else exactly one character.
pub(crate) fn scan_bare_token(scanner: &mut Scanner) -> String {
	for word in NAMED_KEY_WORDS {
		if matches_word_boundary(scanner, word) {
			scanner.advance_bytes(word.len());
			return (*word).to_string();
		}
	}

	if let Some(token) = try_scan_fn_or_numpad(scanner) {
		return token;
	}

	scanner.next().map(|ch| ch.to_string()).unwrap_or_default()
}

fn matches_word_boundary(scanner: &Scanner, word: &str) -> bool {
	if !scanner.starts_with_ci(word) {
		return false;
	}
	match scanner.peek_run().get(word.len()..) {
		Some(rest) => !rest.starts_with(|c: char| c.is_alphanumeric()),
		None => true,
	}
}

fn try_scan_fn_or_numpad(scanner: &mut Scanner) -> Option<String> {
	if matches!(scanner.peek(), Some(ch) if ch.eq_ignore_ascii_case(&'f')) {
		let snapshot = scanner.snapshot();
		scanner.next();
		let digits = scanner.take_while(|ch| ch.is_ascii_digit());
		let boundary_ok = !matches!(scanner.peek(), Some(ch) if ch.is_alphanumeric());
		if !digits.is_empty() && boundary_ok {
			return Some(format!("f{digits}"));
		}
		scanner.restore(snapshot);
	}

	if scanner.starts_with_ci("kp") {
		let snapshot = scanner.snapshot();
		scanner.advance_bytes(2);
		let digits = scanner.take_while(|ch| ch.is_ascii_digit());
		let boundary_ok = !matches!(scanner.peek(), Some(ch) if ch.is_alphanumeric());
		if digits.chars().count() == 1 && boundary_ok {
			return Some(format!("kp{digits}"));
		}
		scanner.restore(snapshot);
	}

	None
}

/// Classifies an already-scanned token string into a [`KeySymbol`].
///
/// `position` is only used to tag an error if the token turns out to be
/// an out-of-range function key or numpad digit.
pub(crate) fn classify(token: &str, position: usize) -> Result<KeySymbol, ParseError> {
	if token.chars().count() == 1 {
		let ch = token.chars().next().expect("checked non-empty above");
		return Ok(KeySymbol::Char(ch.to_ascii_lowercase()));
	}

	let lower = token.to_ascii_lowercase();

	if let Some(named) = NamedKey::from_token(&lower) {
		return Ok(KeySymbol::Named(named));
	}

	if let Some(digits) = lower.strip_prefix('f')
		&& let Ok(n) = digits.parse::<u8>()
		&& (1..=24).contains(&n)
	{
		return Ok(KeySymbol::Function(n));
	}

	if let Some(digits) = lower.strip_prefix("kp")
		&& let Ok(n) = digits.parse::<u8>()
		&& n <= 9
	{
		return Ok(KeySymbol::Numpad(n));
	}

	Err(ParseError::new(ParseErrorKind::UnknownKey(token.to_string()), position))
}
