//! `keybind`: an input binding engine for a modal text editor.
//!
//! Consumes a stream of physical key events, matches them against a
//! registry of user-declared binding sequences such as `<c-a>` (vim-style)
//! or `Ctrl+a` (vscode-style), and emits effects: either a dispatch of an
//! opaque payload or a remap that re-feeds another key sequence through
//! the engine.
//!
//! Bindings are parsed once at registration time with [`parse`]; the
//! resulting [`Sequence`] is handed to [`Engine::add_binding`] or
//! [`Engine::add_mapping`]. From then on, feed physical key events with
//! [`Engine::key_down`] and resolve ambiguity on a timeout with
//! [`Engine::flush`].
//!
//! # Example
//!
//! ```
//! use keybind::{parse, Effect, Engine, KeyEvent, KeyResolver, KeySymbol};
//!
//! struct Qwerty;
//! impl KeyResolver for Qwerty {
//!     fn keycode(&self, symbol: KeySymbol) -> Option<i32> {
//!         match symbol {
//!             KeySymbol::Char(c) => Some(c as i32),
//!             _ => None,
//!         }
//!     }
//!     fn scancode(&self, _symbol: KeySymbol) -> Option<i32> {
//!         None
//!     }
//! }
//!
//! let mut engine = Engine::<&str, ()>::new();
//! let sequence = parse("ab", &Qwerty).unwrap();
//! engine.add_binding(sequence, |_| true, "insert-mode:ab").unwrap();
//!
//! assert!(engine.key_down(&(), KeyEvent::new('a' as i32, 0)).is_empty());
//! assert_eq!(
//!     engine.key_down(&(), KeyEvent::new('b' as i32, 0)),
//!     vec![Effect::Execute("insert-mode:ab")]
//! );
//! ```

pub use keybind_core as core;
pub use keybind_parser as parser;

pub use keybind_core::{
	Action, Binding, BindingId, DEFAULT_MAX_REMAP_DEPTH, Effect, Engine, KeyEvent,
	RegistrationError,
};
pub use keybind_parser::{
	DirectedMatcher, KeyResolver, KeySymbol, Matcher, Modifiers, NamedKey, ParseError,
	ParseErrorKind, Sequence, parse,
};
