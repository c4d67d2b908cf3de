//! Parsing of a single atom: an optional `!` keyup prefix, followed by a
//! bare key, an angle-bracket vim form, or a vscode plus-form.

use crate::error::{ParseError, ParseErrorKind};
use crate::grammar::scanner::Scanner;
use crate::grammar::tokens::{classify, scan_bare_token};
use crate::sequence::{DirectedMatcher, Matcher, Modifiers};
use crate::symbol::{KeyResolver, KeySymbol};

pub(crate) fn parse_atom(
	scanner: &mut Scanner,
	resolver: &dyn KeyResolver,
) -> Result<DirectedMatcher, ParseError> {
	let atom_start = scanner.position();
	let keyup = scanner.peek() == Some('!');
	if keyup {
		scanner.next();
		if scanner.is_end() || matches!(scanner.peek(), Some(ch) if ch.is_whitespace()) {
			return Err(ParseError::new(ParseErrorKind::DanglingKeyup, atom_start));
		}
	}

	let (mods, symbol, symbol_pos) = if scanner.peek() == Some('<') {
		parse_angle(scanner)?
	} else {
		parse_bare_or_plus(scanner)?
	};

	let matcher = resolve_symbol(symbol, mods, symbol_pos, resolver)?;
	Ok(if keyup { DirectedMatcher::Keyup(matcher) } else { DirectedMatcher::Keydown(matcher) })
}

fn parse_angle(scanner: &mut Scanner) -> Result<(Modifiers, KeySymbol, usize), ParseError> {
	let open_pos = scanner.position();
	scanner.next(); // '<'

	let inner_pos = scanner.position();
	let inner = scanner.take_while(|ch| ch != '>');
	if scanner.peek() != Some('>') {
		return Err(ParseError::new(ParseErrorKind::UnbalancedBracket, open_pos));
	}
	scanner.next(); // '>'

	let (mods, token) = strip_angle_modifiers(&inner);
	if token.is_empty() {
		return Err(ParseError::new(ParseErrorKind::UnknownKey(String::new()), inner_pos));
	}

	let symbol = classify(&token, inner_pos)?;
	Ok((mods, symbol, inner_pos))
}

/// Strips any number of `c-`/`s-`/`a-`/`m-`/`d-` prefixes (case-insensitive,
/// combinable) from the inside of a `<...>` atom, returning the modifiers
/// collected and the remaining key token.
fn strip_angle_modifiers(inner: &str) -> (Modifiers, String) {
	let mut mods = Modifiers::NONE;
	let mut rest = inner;

	loop {
		// `get`, not a byte-length slice: a leading multi-byte character
		// (e.g. `<c€>`) must fall through to "no prefix here", not panic.
		let Some(prefix) = rest.get(..2) else { break };
		match prefix.to_ascii_lowercase().as_str() {
			"c-" => mods.control = true,
			"s-" => mods.shift = true,
			"a-" => mods.alt = true,
			"m-" | "d-" => mods.meta = true,
			_ => break,
		}
		rest = &rest[2..];
	}

	(mods, rest.to_string())
}

fn parse_bare_or_plus(scanner: &mut Scanner) -> Result<(Modifiers, KeySymbol, usize), ParseError> {
	let run = scanner.peek_run();
	if run.len() > 1 && run.contains('+') {
		let pos = scanner.position();
		let raw = scanner.take_while(|ch| !ch.is_whitespace());
		let (mods, token) = split_plus(&raw, pos)?;
		let symbol = classify(&token, pos)?;
		return Ok((mods, symbol, pos));
	}

	let pos = scanner.position();
	let token = scan_bare_token(scanner);
	let symbol = classify(&token, pos)?;
	Ok((Modifiers::NONE, symbol, pos))
}

/// Splits a vscode-style `Mod+Mod+key` atom into its modifier record and
/// trailing key token.
fn split_plus(raw: &str, position: usize) -> Result<(Modifiers, String), ParseError> {
	let mut parts: Vec<&str> = raw.split('+').collect();
	let key = match parts.pop() {
		Some(key) if !key.is_empty() => key,
		_ => return Err(ParseError::new(ParseErrorKind::UnknownKey(raw.to_string()), position)),
	};

	let mut mods = Modifiers::NONE;
	for part in parts {
		match part.to_ascii_lowercase().as_str() {
			"ctrl" => mods.control = true,
			"shift" => mods.shift = true,
			"alt" => mods.alt = true,
			"meta" | "cmd" | "super" | "win" => mods.meta = true,
			other => return Err(ParseError::new(ParseErrorKind::UnknownModifier(other.to_string()), position)),
		}
	}

	Ok((mods, key.to_string()))
}

fn resolve_symbol(
	symbol: KeySymbol,
	mods: Modifiers,
	position: usize,
	resolver: &dyn KeyResolver,
) -> Result<Matcher, ParseError> {
	if let Some(code) = resolver.keycode(symbol) {
		return Ok(Matcher::Keycode { code, mods });
	}
	if let Some(code) = resolver.scancode(symbol) {
		return Ok(Matcher::Scancode { code, mods });
	}
	Err(ParseError::new(ParseErrorKind::UnknownKey(symbol.to_string()), position))
}
