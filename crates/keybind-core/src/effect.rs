//! The externally visible result of feeding the engine a key event.

use crate::event::KeyEvent;

/// One outcome of a [`keyDown`](crate::Engine::key_down)/[`flush`](crate::Engine::flush)
/// call. A single call can produce any number of these, in the order the
/// keys that caused them arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect<Payload> {
	/// A binding's sequence fully matched; dispatch its payload.
	Execute(Payload),
	/// `key` matched no binding's prefix and could not be resolved.
	Unhandled(KeyEvent),
}

impl<Payload> Effect<Payload> {
	/// The payload of an [`Effect::Execute`], if this is one.
	pub fn payload(&self) -> Option<&Payload> {
		match self {
			Effect::Execute(payload) => Some(payload),
			Effect::Unhandled(_) => None,
		}
	}
}
