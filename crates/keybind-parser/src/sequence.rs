//! The normalized output of the parser: a sequence of direction-tagged
//! matchers, each a physical code plus a modifier record.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A modifier record. Two modifier values compare for equality field-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Modifiers {
	pub control: bool,
	pub shift: bool,
	pub alt: bool,
	pub meta: bool,
}

impl Modifiers {
	/// The designated "no modifiers" value.
	pub const NONE: Modifiers = Modifiers { control: false, shift: false, alt: false, meta: false };
}

/// One key pattern to match: a physical code plus the modifiers that must
/// be held alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Matcher {
	/// Matches a physical keycode from the injected resolver.
	Keycode { code: i32, mods: Modifiers },
	/// Matches a physical scancode from the injected resolver.
	Scancode { code: i32, mods: Modifiers },
}

/// A [`Matcher`] tagged with the direction of the press it matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DirectedMatcher {
	Keydown(Matcher),
	Keyup(Matcher),
}

impl DirectedMatcher {
	/// The wrapped matcher, independent of direction.
	pub fn matcher(&self) -> Matcher {
		match self {
			DirectedMatcher::Keydown(m) | DirectedMatcher::Keyup(m) => *m,
		}
	}

	/// Whether this step only fires on a keyup.
	pub fn is_keyup(&self) -> bool {
		matches!(self, DirectedMatcher::Keyup(_))
	}
}

/// An ordered, non-empty list of direction-tagged matchers produced by
/// parsing one binding string.
pub type Sequence = Vec<DirectedMatcher>;
