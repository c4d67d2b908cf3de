//! The closed vocabulary of key symbols the parser can produce, and the
//! trait callers implement to resolve a symbol to a physical code.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A key symbol as recognized by the grammar, before resolution to a
/// physical keycode or scancode.
///
/// This set is closed: the parser never invents a new variant at runtime,
/// it only ever produces one of these four shapes from the surface
/// syntax described in the crate docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KeySymbol {
	/// A single printable codepoint, e.g. `'a'` or `'3'`.
	Char(char),
	/// A function key, `F1`..`F24`.
	Function(u8),
	/// A numpad digit key, `0`..`9`.
	Numpad(u8),
	/// One of the named keys in [`NamedKey`].
	Named(NamedKey),
}

impl fmt::Display for KeySymbol {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			KeySymbol::Char(c) => write!(f, "{c}"),
			KeySymbol::Function(n) => write!(f, "f{n}"),
			KeySymbol::Numpad(n) => write!(f, "kp{n}"),
			KeySymbol::Named(named) => write!(f, "{named}"),
		}
	}
}

/// The named keys recognized by the surface grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NamedKey {
	Escape,
	Tab,
	Return,
	Space,
	Backspace,
	Delete,
	Insert,
	Pause,
	CapsLock,
	Home,
	End,
	PageUp,
	PageDown,
	Up,
	Down,
	Left,
	Right,
}

impl fmt::Display for NamedKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			NamedKey::Escape => "esc",
			NamedKey::Tab => "tab",
			NamedKey::Return => "return",
			NamedKey::Space => "space",
			NamedKey::Backspace => "backspace",
			NamedKey::Delete => "delete",
			NamedKey::Insert => "insert",
			NamedKey::Pause => "pause",
			NamedKey::CapsLock => "caps",
			NamedKey::Home => "home",
			NamedKey::End => "end",
			NamedKey::PageUp => "pageup",
			NamedKey::PageDown => "pagedown",
			NamedKey::Up => "up",
			NamedKey::Down => "down",
			NamedKey::Left => "left",
			NamedKey::Right => "right",
		};
		f.write_str(name)
	}
}

impl NamedKey {
	/// Looks up a named key by its lower-cased token spelling, including
	/// the common aliases (`enter` for `return`, `del` for `delete`, `ins`
	/// for `insert`).
	///
	/// Matching is case-insensitive; `token` must already be lower-cased.
	pub(crate) fn from_token(token: &str) -> Option<Self> {
		Some(match token {
			"esc" | "escape" => NamedKey::Escape,
			"tab" => NamedKey::Tab,
			"return" | "enter" => NamedKey::Return,
			"space" => NamedKey::Space,
			"backspace" | "bs" => NamedKey::Backspace,
			"del" | "delete" => NamedKey::Delete,
			"ins" | "insert" => NamedKey::Insert,
			"pause" => NamedKey::Pause,
			"caps" | "capslock" => NamedKey::CapsLock,
			"home" => NamedKey::Home,
			"end" => NamedKey::End,
			"pageup" => NamedKey::PageUp,
			"pagedown" => NamedKey::PageDown,
			"up" => NamedKey::Up,
			"down" => NamedKey::Down,
			"left" => NamedKey::Left,
			"right" => NamedKey::Right,
			_ => return None,
		})
	}
}

/// Injected mapping from a [`KeySymbol`] to a physical key code.
///
/// The parser is agnostic of actual keyboard layouts; it asks the
/// resolver for a keycode first and, failing that, a scancode. If both
/// return `None` the parser fails with
/// [`UnknownKey`](crate::error::ParseErrorKind::UnknownKey).
pub trait KeyResolver {
	/// Resolves `symbol` to a physical keycode, if the layout defines one.
	fn keycode(&self, symbol: KeySymbol) -> Option<i32>;

	/// Resolves `symbol` to a physical scancode, if the layout defines one.
	fn scancode(&self, symbol: KeySymbol) -> Option<i32>;
}
