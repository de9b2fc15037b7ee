//! # typed-emitter
//!
//! **typed-emitter** is a strongly-typed, synchronous event emitter for Rust.
//!
//! Callers declare their events as types, register listeners per event and
//! later emit an event to invoke every listener registered for it, in order,
//! on the caller's thread.
//!
//! ## Architecture
//! ```text
//!   events! { struct Saved: (String, u64); }        (caller-declared contract)
//!                          │
//!                          ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Emitter                                                          │
//! │  - Registry: TypeId ──► ordered Vec<Entry { id, Listener }>       │
//! │  - key insertion order (event_names)                              │
//! │  - EmitterConfig (advisory max_listeners)                         │
//! └──────┬─────────────────────┬──────────────────────┬───────────────┘
//!        │ on / prepend        │ once / prepend_once  │ emit::<Saved>(&args)
//!        ▼                     ▼                      ▼
//!   push back / front     wrap(listener, id)     snapshot list ──► call in order
//!                         removes entry `id`,          │
//!                         then runs once               └─ Err ──► EmitError
//! ```
//!
//! ## Lifecycle of one listener list
//! ```text
//! absent ──on/prepend/once──► [l1] ──on──► [l1, l2] ──prepend──► [l0, l1, l2]
//!    ▲                                                               │
//!    └──── off (last entry) / remove_all_listeners / clear ◄─────────┘
//! ```
//!
//! ## Features
//! | Area              | Description                                                  | Key types / traits              |
//! |-------------------|--------------------------------------------------------------|---------------------------------|
//! | **Contract**      | Events are types; their argument tuple is checked at compile | [`Event`], [`events!`]          |
//! | **Listeners**     | Identity-compared handles, infallible or fallible            | [`Listener`]                    |
//! | **Dispatch**      | Ordered, prepend, once, snapshot-on-emit, reentrant          | [`Emitter`]                     |
//! | **Errors**        | Listener failures propagate out of `emit`                    | [`EmitError`], [`ListenerError`]|
//! | **Configuration** | Advisory max-listeners hint, warns through `tracing`         | [`EmitterConfig`]               |
//!
//! ## Example
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use typed_emitter::{Emitter, Listener, events};
//!
//! events! {
//!     pub struct Foo as "foo": (String, i32);
//!     pub struct Bar as "bar": ();
//! }
//!
//! let calls = Rc::new(RefCell::new(Vec::new()));
//! let emitter = Emitter::new();
//!
//! let (c1, c2, c3) = (calls.clone(), calls.clone(), calls.clone());
//! emitter
//!     .on::<Foo>(Listener::new(move |(a, b): &(String, i32)| {
//!         c1.borrow_mut().push(format!("foo {a} {b}"));
//!     }))
//!     .on::<Bar>(Listener::new(move |_: &()| c2.borrow_mut().push("bar 1".into())))
//!     .prepend_listener::<Bar>(Listener::new(move |_: &()| c3.borrow_mut().push("bar 2".into())));
//!
//! assert!(emitter.emit::<Bar>(&())?);
//! assert!(emitter.emit::<Foo>(&("x".into(), 1))?);
//! assert_eq!(*calls.borrow(), ["bar 2", "bar 1", "foo x 1"]);
//! assert_eq!(emitter.event_names(), ["foo", "bar"]);
//! # Ok::<(), typed_emitter::EmitError>(())
//! ```
mod config;
mod core;
mod error;
mod events;
mod listeners;

// ---- Public re-exports ----

pub use config::{DEFAULT_MAX_LISTENERS, EmitterConfig};
pub use crate::core::{Emitter, EmitterBuilder};
pub use error::{EmitError, ListenerError};
pub use events::Event;
pub use listeners::Listener;
