//! Registration-time errors. The matching runtime itself never fails —
//! unmatched input always surfaces as an [`Effect::Unhandled`](crate::Effect::Unhandled)
//! — so this is the only error type the crate exposes.

use thiserror::Error;

/// Why a binding was rejected at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistrationError {
	/// `addBinding`/`addMapping` was called with an empty matcher sequence.
	/// `keybind_parser::parse` never produces one, so this only fires for
	/// sequences a caller assembled by hand.
	#[error("binding sequence must not be empty")]
	EmptySequence,
}
