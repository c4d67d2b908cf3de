use keybind_parser::{KeyResolver, KeySymbol, Modifiers, Sequence, parse};
use proptest::prelude::*;
use rstest::rstest;

use super::*;
use crate::effect::Effect;
use crate::event::KeyEvent;

/// A resolver standing in for a real keyboard layout, matching the stub
/// used for the parser's own grammar tests: keycodes for every symbol the
/// grammar can produce, no scancodes.
struct Ascii;

impl KeyResolver for Ascii {
	fn keycode(&self, symbol: KeySymbol) -> Option<i32> {
		Some(match symbol {
			KeySymbol::Char(c) => c as i32,
			KeySymbol::Function(n) => 1000 + n as i32,
			KeySymbol::Numpad(n) => 2000 + n as i32,
			KeySymbol::Named(named) => 3000 + named as i32,
		})
	}

	fn scancode(&self, _symbol: KeySymbol) -> Option<i32> {
		None
	}
}

fn seq(binding: &str) -> Sequence {
	parse(binding, &Ascii).unwrap()
}

fn key(c: char) -> KeyEvent {
	KeyEvent::new(c as i32, 0)
}

fn key_with(c: char, mods: Modifiers) -> KeyEvent {
	key(c).with_modifiers(mods)
}

fn ctrl() -> Modifiers {
	Modifiers { control: true, ..Modifiers::NONE }
}

type TestEngine = Engine<&'static str, ()>;

// --- end-to-end resolution scenarios ----------------------------------

#[test]
fn scenario_1_single_key_binding() {
	let mut engine = TestEngine::new();
	engine.add_binding(seq("a"), |_| true, "P1").unwrap();

	assert_eq!(engine.key_down(&(), key('a')), vec![Effect::Execute("P1")]);
	assert_eq!(engine.flush(&()), Vec::new());
}

#[test]
fn scenario_2_two_key_sequence() {
	let mut engine = TestEngine::new();
	engine.add_binding(seq("ab"), |_| true, "P1").unwrap();

	assert_eq!(engine.key_down(&(), key('a')), Vec::new());
	assert_eq!(engine.key_down(&(), key('b')), vec![Effect::Execute("P1")]);
}

#[test]
fn scenario_3_flush_commits_longest_ready_so_far() {
	let mut engine = TestEngine::new();
	engine.add_binding(seq("ab"), |_| true, "P1").unwrap();
	engine.add_binding(seq("a"), |_| true, "P2").unwrap();

	assert_eq!(engine.key_down(&(), key('a')), Vec::new());
	assert_eq!(engine.flush(&()), vec![Effect::Execute("P2")]);
}

#[test]
fn scenario_4_ready_dispatch_plus_trailing_unhandled_key() {
	let mut engine = TestEngine::new();
	engine.add_binding(seq("ab"), |_| true, "P1").unwrap();
	engine.add_binding(seq("a"), |_| true, "P2").unwrap();

	assert_eq!(engine.key_down(&(), key('a')), Vec::new());
	assert_eq!(
		engine.key_down(&(), key('c')),
		vec![Effect::Execute("P2"), Effect::Unhandled(key('c'))]
	);
}

#[test]
fn scenario_5_remap_reenters_matching_pipeline() {
	let mut engine = TestEngine::new();
	engine.add_mapping(seq("a"), |_| true, vec![key('b')]).unwrap();
	engine.add_binding(seq("b"), |_| true, "P3").unwrap();

	assert_eq!(engine.key_down(&(), key('a')), vec![Effect::Execute("P3")]);
}

#[test]
fn scenario_6_modifiers_distinguish_otherwise_identical_keys() {
	let mut engine = TestEngine::new();
	engine.add_binding(seq("<c-a>"), |_| true, "P4").unwrap();

	assert_eq!(engine.key_down(&(), key_with('a', ctrl())), vec![Effect::Execute("P4")]);

	let mut effects = engine.key_down(&(), key('a'));
	effects.extend(engine.flush(&()));
	assert_eq!(effects, vec![Effect::Unhandled(key('a'))]);
}

// --- registration and lifecycle edge cases -----------------------------

#[test]
fn disabled_binding_behaves_as_if_absent() {
	let mut engine = Engine::<&str, bool>::new();
	engine.add_binding(seq("a"), |enabled: &bool| *enabled, "P1").unwrap();

	assert_eq!(engine.key_down(&false, key('a')), vec![Effect::Unhandled(key('a'))]);
	assert_eq!(engine.key_down(&true, key('a')), vec![Effect::Execute("P1")]);
}

#[test]
fn last_registered_binding_wins_a_shared_ready_prefix() {
	let mut engine = TestEngine::new();
	engine.add_binding(seq("a"), |_| true, "first").unwrap();
	engine.add_binding(seq("a"), |_| true, "second").unwrap();

	assert_eq!(engine.key_down(&(), key('a')), vec![Effect::Execute("second")]);
}

#[test]
fn remap_cycle_is_capped_and_surfaces_unhandled() {
	let mut engine = Engine::<&str, ()>::with_max_remap_depth(4);
	engine.add_mapping(seq("a"), |_| true, vec![key('a')]).unwrap();

	let effects = engine.key_down(&(), key('a'));
	assert_eq!(effects, vec![Effect::Unhandled(key('a'))]);
}

#[test]
fn keyup_matcher_can_never_match_the_keydown_driven_algorithm() {
	let mut engine = TestEngine::new();
	engine.add_binding(seq("!a"), |_| true, "P").unwrap();

	let mut effects = engine.key_down(&(), key('a'));
	effects.extend(engine.flush(&()));
	assert_eq!(effects, vec![Effect::Unhandled(key('a'))]);
	assert_eq!(engine.key_up(&(), key('a')), Vec::new());
}

#[test]
fn empty_sequence_is_rejected_at_registration() {
	let mut engine = TestEngine::new();
	let err = engine.add_binding(Sequence::new(), |_| true, "P").unwrap_err();
	assert_eq!(err, RegistrationError::EmptySequence);
}

#[test]
fn binding_ids_are_unique_and_increase_monotonically() {
	let mut engine = TestEngine::new();
	let first = engine.add_binding(seq("a"), |_| true, "P1").unwrap();
	let second = engine.add_binding(seq("b"), |_| true, "P2").unwrap();
	assert!(second > first);
}

#[rstest]
#[case("a", 'a', true)]
#[case("a", 'b', false)]
#[case("esc", 'a', false)]
fn single_key_binding_matches_only_its_own_key(
	#[case] binding: &str,
	#[case] input: char,
	#[case] should_match: bool,
) {
	let mut engine = TestEngine::new();
	engine.add_binding(seq(binding), |_| true, "P").unwrap();

	let mut effects = engine.key_down(&(), key(input));
	effects.extend(engine.flush(&()));

	if should_match {
		assert_eq!(effects, vec![Effect::Execute("P")]);
	} else {
		assert_eq!(effects, vec![Effect::Unhandled(key(input))]);
	}
}

// --- property-based coverage -------------------------------------------

proptest! {
	/// While the fed keys are a strict prefix of a registered binding,
	/// the engine must never emit `Execute` — it has no way to know yet
	/// whether more keys are coming to complete a longer match.
	#[test]
	fn strict_prefix_never_emits_execute(prefix_len in 1usize..5) {
		let mut engine = TestEngine::new();
		engine.add_binding(seq("abcde"), |_| true, "P").unwrap();

		let chars = ['a', 'b', 'c', 'd', 'e'];
		let mut effects = Vec::new();
		for &c in &chars[..prefix_len] {
			effects.extend(engine.key_down(&(), key(c)));
		}

		prop_assert!(effects.iter().all(|effect| !matches!(effect, Effect::Execute(_))));
	}

	/// Feeding the exact key sequence of an enabled binding and then
	/// flushing emits exactly one `Execute` — an unambiguous match fires
	/// once, not once per key and not zero times.
	#[test]
	fn exact_sequence_then_flush_dispatches_exactly_once(len in 1usize..6) {
		let mut engine = TestEngine::new();
		let binding_str: String = ['a', 'b', 'c', 'd', 'e'][..len].iter().collect();
		engine.add_binding(seq(&binding_str), |_| true, "P").unwrap();

		let mut effects = Vec::new();
		for c in binding_str.chars() {
			effects.extend(engine.key_down(&(), key(c)));
		}
		effects.extend(engine.flush(&()));

		prop_assert_eq!(effects, vec![Effect::Execute("P")]);
	}
}
