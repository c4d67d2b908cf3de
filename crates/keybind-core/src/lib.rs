//! The matcher runtime: a stateful engine that accumulates key events
//! against a registry of bindings and emits [`Effect`]s.
//!
//! Consumers parse binding strings with `keybind_parser::parse` once, at
//! registration time, then drive the engine with [`Engine::key_down`],
//! [`Engine::key_up`], and [`Engine::flush`] as physical key events arrive.
//! The engine is a single-threaded cooperative state machine: every call
//! synchronously returns the effects produced by that one transition; see
//! the crate-level scenarios in `engine`'s tests for the full resolution
//! policy (longest match, ambiguity, flush, and remap re-entry).

mod binding;
mod effect;
mod engine;
mod error;
mod event;

pub use binding::{Action, Binding, BindingId};
pub use effect::Effect;
pub use engine::{DEFAULT_MAX_REMAP_DEPTH, Engine};
pub use error::RegistrationError;
pub use event::KeyEvent;

pub use keybind_parser as parser;
