//! The physical key event the engine is driven with.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use keybind_parser::Modifiers;

/// One physical key press or release, as reported by the host's input
/// backend. The engine compares `keycode` or `scancode` — whichever the
/// matching binding's [`Matcher`](keybind_parser::Matcher) variant names —
/// plus `modifiers`, for strict equality. `text` carries the OS-composed
/// text for the press, if any; the engine never inspects it, it only
/// round-trips it into [`Effect::Unhandled`](crate::Effect::Unhandled) so
/// a caller can fall back to literal text insertion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyEvent {
	pub keycode: i32,
	pub scancode: i32,
	pub modifiers: Modifiers,
	pub text: Option<String>,
}

impl KeyEvent {
	/// Builds a key event with no modifiers and no composed text.
	pub fn new(keycode: i32, scancode: i32) -> Self {
		Self { keycode, scancode, modifiers: Modifiers::NONE, text: None }
	}

	/// Returns a copy of this event with `modifiers` replaced.
	pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
		self.modifiers = modifiers;
		self
	}
}
