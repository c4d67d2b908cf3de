//! A registered rule: a matcher sequence plus what to do once it fully
//! matches.

use std::fmt;

use keybind_parser::Sequence;

use crate::event::KeyEvent;

/// A binding's identity. Allocated monotonically from the engine's
/// internal counter; ids are never recycled within a process run.
pub type BindingId = u64;

/// What happens once a binding's sequence fully matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action<Payload> {
	/// Emit `Execute(payload)` to the caller.
	Dispatch(Payload),
	/// Re-inject `keys` into the engine's pending buffer instead of
	/// surfacing anything to the caller directly.
	Remap(Vec<KeyEvent>),
}

/// A registered `sequence -> action` rule, gated by a per-call context
/// predicate.
pub struct Binding<Payload, Context> {
	pub id: BindingId,
	pub sequence: Sequence,
	pub action: Action<Payload>,
	pub(crate) enabled: Box<dyn Fn(&Context) -> bool>,
}

impl<Payload, Context> Binding<Payload, Context> {
	pub(crate) fn new(
		id: BindingId,
		sequence: Sequence,
		action: Action<Payload>,
		enabled: Box<dyn Fn(&Context) -> bool>,
	) -> Self {
		Self { id, sequence, action, enabled }
	}

	pub(crate) fn is_enabled(&self, context: &Context) -> bool {
		(self.enabled)(context)
	}
}

impl<Payload: fmt::Debug, Context> fmt::Debug for Binding<Payload, Context> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Binding")
			.field("id", &self.id)
			.field("sequence", &self.sequence)
			.field("action", &self.action)
			.field("enabled", &"<predicate>")
			.finish()
	}
}
