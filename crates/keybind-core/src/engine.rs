//! The matching runtime: buffer management, ambiguity resolution, and the
//! remap re-entry loop.
//!
//! The public surface is deliberately small — [`Engine::add_binding`],
//! [`Engine::add_mapping`], [`Engine::key_down`], [`Engine::key_up`], and
//! [`Engine::flush`] — with all of the longest-match/ambiguity/remap
//! bookkeeping private to this module.

use keybind_parser::{DirectedMatcher, Matcher, Sequence};

use crate::binding::{Action, Binding, BindingId};
use crate::effect::Effect;
use crate::error::RegistrationError;
use crate::event::KeyEvent;

#[cfg(test)]
mod tests;

/// How a registered binding's sequence relates to a buffered key prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PrefixState {
	/// Some buffered key mismatched one of the binding's matchers.
	Dropped,
	/// Every buffered key matched so far, but the sequence has matchers
	/// left to consume.
	Potential,
	/// Every matcher in the sequence matched a buffered key, in order.
	/// Any buffered keys past the sequence's length are not this
	/// binding's concern.
	Ready,
}

fn matches_one(matcher: &Matcher, event: &KeyEvent) -> bool {
	match *matcher {
		Matcher::Keycode { code, mods } => code == event.keycode && mods == event.modifiers,
		Matcher::Scancode { code, mods } => code == event.scancode && mods == event.modifiers,
	}
}

/// A [`Keyup`](DirectedMatcher::Keyup) matcher can never be satisfied: the
/// current algorithm drives matching from keydown buffering only, and
/// `Engine::key_up` is a deliberate no-op. A sequence containing a keyup
/// step therefore always drops as soon as that step is reached.
fn matches_step(step: &DirectedMatcher, event: &KeyEvent) -> bool {
	if step.is_keyup() {
		return false;
	}
	matches_one(&step.matcher(), event)
}

fn prefix_state(sequence: &Sequence, buffer: &[KeyEvent]) -> PrefixState {
	let checked = sequence.len().min(buffer.len());
	for i in 0..checked {
		if !matches_step(&sequence[i], &buffer[i]) {
			return PrefixState::Dropped;
		}
	}
	if sequence.len() <= buffer.len() { PrefixState::Ready } else { PrefixState::Potential }
}

/// Default cap on consecutive remap expansions within one resolution.
/// A chain of remaps that points back into itself would otherwise recurse
/// forever; exceeding the cap emits the offending remap's own keys as
/// `Unhandled` instead of recursing further.
pub const DEFAULT_MAX_REMAP_DEPTH: u32 = 64;

/// The stateful matcher runtime. Generic over the opaque `Payload`
/// dispatched to the caller and the opaque `Context` each binding's
/// enabled-predicate is evaluated against.
pub struct Engine<Payload, Context> {
	next_id: BindingId,
	bindings: Vec<Binding<Payload, Context>>,
	pending: Vec<KeyEvent>,
	max_remap_depth: u32,
}

impl<Payload, Context> Default for Engine<Payload, Context> {
	fn default() -> Self {
		Self::new()
	}
}

impl<Payload, Context> Engine<Payload, Context> {
	pub fn new() -> Self {
		Self {
			next_id: 0,
			bindings: Vec::new(),
			pending: Vec::new(),
			max_remap_depth: DEFAULT_MAX_REMAP_DEPTH,
		}
	}

	/// Builds an engine with a non-default remap recursion cap. See
	/// [`DEFAULT_MAX_REMAP_DEPTH`].
	pub fn with_max_remap_depth(max_remap_depth: u32) -> Self {
		Self { max_remap_depth, ..Self::new() }
	}

	/// The keys buffered since the last full resolution, in arrival order.
	pub fn pending(&self) -> &[KeyEvent] {
		&self.pending
	}

	/// Registers a dispatch binding. `sequence` must be non-empty.
	pub fn add_binding(
		&mut self,
		sequence: Sequence,
		enabled: impl Fn(&Context) -> bool + 'static,
		payload: Payload,
	) -> Result<BindingId, RegistrationError> {
		self.register(sequence, enabled, Action::Dispatch(payload))
	}

	/// Registers a remap binding: once `sequence` fully matches, `keys`
	/// are re-fed through this same engine instead of being dispatched.
	pub fn add_mapping(
		&mut self,
		sequence: Sequence,
		enabled: impl Fn(&Context) -> bool + 'static,
		keys: Vec<KeyEvent>,
	) -> Result<BindingId, RegistrationError> {
		self.register(sequence, enabled, Action::Remap(keys))
	}

	fn register(
		&mut self,
		sequence: Sequence,
		enabled: impl Fn(&Context) -> bool + 'static,
		action: Action<Payload>,
	) -> Result<BindingId, RegistrationError> {
		if sequence.is_empty() {
			return Err(RegistrationError::EmptySequence);
		}
		let id = self.next_id;
		self.next_id += 1;
		// New registrations go to the front: ties at a shared ready prefix
		// are broken by iterating front-to-back, so last-registered wins.
		self.bindings.insert(0, Binding::new(id, sequence, action, Box::new(enabled)));
		tracing::debug!(id, "registered binding");
		Ok(id)
	}

	/// A no-op: the matching algorithm buffers keydowns only, so there is
	/// nothing for a keyup to advance yet. Kept for API symmetry with
	/// `key_down` and for a future keyup-aware matcher.
	pub fn key_up(&mut self, _context: &Context, _key: KeyEvent) -> Vec<Effect<Payload>> {
		Vec::new()
	}

	/// Partitions the bindings enabled under `context` into whether any is
	/// `Ready` against `buffer`, and whether any is `Potential`. Read-only:
	/// a panicking predicate must leave the engine's own state untouched, so
	/// every entry point computes this against a buffer it hasn't committed
	/// to `self.pending` yet.
	fn classify(&self, context: &Context, buffer: &[KeyEvent]) -> (Option<usize>, bool) {
		let mut ready_index = None;
		let mut potential = false;
		for (index, binding) in self.bindings.iter().enumerate() {
			if !binding.is_enabled(context) {
				continue;
			}
			match prefix_state(&binding.sequence, buffer) {
				PrefixState::Dropped => {}
				PrefixState::Potential => potential = true,
				PrefixState::Ready => {
					if ready_index.is_none() {
						ready_index = Some(index);
					}
				}
			}
		}
		(ready_index, potential)
	}
}

impl<Payload: Clone, Context> Engine<Payload, Context> {
	/// Feeds one keydown event. Buffers it, then resolves: waits if the
	/// extended buffer is still ambiguous, dispatches immediately if a
	/// binding is unambiguously ready, or — if nothing can accept the
	/// buffer at all — recovers via the same two-pass logic `flush` uses.
	pub fn key_down(&mut self, context: &Context, key: KeyEvent) -> Vec<Effect<Payload>> {
		let mut candidate = self.pending.clone();
		candidate.push(key);
		let (ready, potential) = self.classify(context, &candidate);
		self.pending = candidate;

		if potential {
			tracing::trace!(len = self.pending.len(), "buffering ambiguous key");
			return Vec::new();
		}

		let mut depth = 0;
		match ready {
			Some(index) => self.commit_and_continue(context, index, &mut depth),
			None => self.flush_inner(context, &mut depth),
		}
	}

	/// Forces resolution of any pending keys as if no further input could
	/// arrive: the external entry point for a timer-driven flush, and also
	/// how `key_down` recovers once nothing is ready or potential, and how
	/// a remap's injected keys are settled within the same call.
	pub fn flush(&mut self, context: &Context) -> Vec<Effect<Payload>> {
		let mut depth = 0;
		self.flush_inner(context, &mut depth)
	}

	fn commit_and_continue(
		&mut self,
		context: &Context,
		ready_index: usize,
		depth: &mut u32,
	) -> Vec<Effect<Payload>> {
		let mut effects = self.commit(context, ready_index, depth);
		if !self.pending.is_empty() {
			effects.extend(self.resolve_immediate(context, depth));
		}
		effects
	}

	/// Non-forced resolution of whatever is currently buffered: used for
	/// the leftover tail after a commit consumes only a prefix of the
	/// buffer, so trailing keys still get a chance to wait for more input
	/// instead of being forced. Behaves exactly like `key_down`'s own
	/// policy, just without appending a fresh key first.
	fn resolve_immediate(&mut self, context: &Context, depth: &mut u32) -> Vec<Effect<Payload>> {
		if self.pending.is_empty() {
			return Vec::new();
		}
		let (ready, potential) = self.classify(context, &self.pending);
		if potential {
			return Vec::new();
		}
		match ready {
			Some(index) => self.commit_and_continue(context, index, depth),
			None => self.flush_inner(context, depth),
		}
	}

	fn flush_inner(&mut self, context: &Context, depth: &mut u32) -> Vec<Effect<Payload>> {
		let (mut effects, carry_over) = self.forced_pass(context, depth);
		for key in carry_over {
			self.pending.push(key);
			effects.extend(self.resolve_immediate(context, depth));
		}
		effects
	}

	/// The forced pass of flush: commit ready bindings (ignoring
	/// ambiguity) until stuck, then shrink the buffer from its tail,
	/// collecting the shrunk-off keys as carry-over for the settled pass.
	fn forced_pass(
		&mut self,
		context: &Context,
		depth: &mut u32,
	) -> (Vec<Effect<Payload>>, Vec<KeyEvent>) {
		let mut effects = Vec::new();
		let mut carry_over = Vec::new();

		loop {
			if self.pending.is_empty() {
				break;
			}
			let (ready, _potential) = self.classify(context, &self.pending);
			if let Some(index) = ready {
				effects.extend(self.commit(context, index, depth));
				continue;
			}
			if self.pending.len() == 1 {
				let key = self.pending.pop().expect("checked non-empty above");
				tracing::debug!(keycode = key.keycode, "flush: no binding accepted key, unhandled");
				effects.push(Effect::Unhandled(key));
				break;
			}
			let shrunk = self.pending.pop().expect("checked non-empty above");
			tracing::trace!(len = self.pending.len(), "flush: shrinking ambiguous prefix");
			carry_over.push(shrunk);
		}

		carry_over.reverse();
		(effects, carry_over)
	}

	/// Consumes the matched prefix for `self.bindings[ready_index]` and
	/// either dispatches its payload or expands its remap. Remap expansion
	/// always recurses into `flush_inner`: the injected keys have no
	/// further external input to wait on within this call, so ambiguity
	/// involving them must be forced, not buffered.
	fn commit(&mut self, context: &Context, ready_index: usize, depth: &mut u32) -> Vec<Effect<Payload>> {
		let sequence_len = self.bindings[ready_index].sequence.len();
		let action = self.bindings[ready_index].action.clone();
		self.pending.drain(0..sequence_len);

		match action {
			Action::Dispatch(payload) => {
				tracing::debug!(binding_id = self.bindings[ready_index].id, "dispatch");
				vec![Effect::Execute(payload)]
			}
			Action::Remap(keys) => {
				if *depth >= self.max_remap_depth {
					tracing::debug!(depth = *depth, "remap depth exceeded, keys unhandled");
					return keys.into_iter().map(Effect::Unhandled).collect();
				}
				*depth += 1;
				tracing::trace!(depth = *depth, added = keys.len(), "expanding remap");
				let mut expanded = keys;
				expanded.append(&mut self.pending);
				self.pending = expanded;
				self.flush_inner(context, depth)
			}
		}
	}
}
