//! # Emitter: registers listeners and dispatches events synchronously.
//!
//! The [`Emitter`] owns the [`Registry`] behind `Rc<RefCell<..>>`. Every
//! operation takes `&self` and borrows the registry only for its own
//! bookkeeping, so a listener may call back into the emitter it is running on
//! (register, remove, emit) without a borrow conflict.
//!
//! ## Dispatch
//! ```text
//! emit::<E>(&args)
//!   ├─ borrow registry ── snapshot E's list ── release borrow
//!   │     └─ no list ──► Ok(false)
//!   └─ for (position, listener) in snapshot:
//!          listener.call(&args)
//!            ├─ Ok  ──► next
//!            └─ Err ──► EmitError::Listener { position, .. }   (later listeners skipped)
//!      Ok(true)
//! ```
//!
//! ## Reentrancy
//! - **Snapshot**: one `emit` delivers to exactly the listeners present when it began.
//!   A listener added meanwhile waits for the next emit; one removed meanwhile still
//!   runs in this round.
//! - **Once**: a once-wrapper unregisters itself before invoking its listener, so a
//!   re-emit from inside that listener no longer sees it. Copies still held by an
//!   outer snapshot are skipped.
//! - **Panics** are not caught and unwind through `emit`.
//!
//! ## Example
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use typed_emitter::{Emitter, Listener, events};
//!
//! events! {
//!     pub struct Greet: (String, u32);
//! }
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&log);
//! let emitter = Emitter::new();
//!
//! emitter.on::<Greet>(Listener::new(move |(name, n): &(String, u32)| {
//!     sink.borrow_mut().push(format!("{name}:{n}"));
//! }));
//!
//! assert!(emitter.emit::<Greet>(&("ada".to_string(), 1)).unwrap());
//! assert_eq!(*log.borrow(), vec!["ada:1".to_string()]);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::builder::EmitterBuilder;
use super::once;
use super::registry::{Position, Registry};
use crate::config::EmitterConfig;
use crate::error::EmitError;
use crate::events::Event;
use crate::listeners::Listener;

/// Typed, synchronous event emitter.
///
/// Single-threaded (`!Send`, `!Sync`). To let a listener reach the emitter it
/// is registered on, keep the emitter in an `Rc` and capture a `Weak` in the
/// listener; a strong capture would form a reference cycle.
pub struct Emitter {
    registry: Rc<RefCell<Registry>>,
}

impl Emitter {
    /// Creates an emitter with [`EmitterConfig::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EmitterConfig::default())
    }

    /// Creates an emitter with the given configuration.
    #[must_use]
    pub fn with_config(config: EmitterConfig) -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry::new(config))),
        }
    }

    /// Returns a builder for a non-default configuration.
    #[must_use]
    pub fn builder() -> EmitterBuilder {
        EmitterBuilder::new()
    }

    // ---------------------------
    // Registration
    // ---------------------------

    /// Appends `listener` to the end of `E`'s list.
    ///
    /// No duplicate check: adding the same listener twice yields two entries,
    /// each invoked once per emit.
    pub fn add_listener<E: Event>(&self, listener: Listener<E::Args>) -> &Self {
        self.register::<E>(listener, Position::Back)
    }

    /// Alias of [`Emitter::add_listener`].
    pub fn on<E: Event>(&self, listener: Listener<E::Args>) -> &Self {
        self.add_listener::<E>(listener)
    }

    /// Inserts `listener` before every listener currently registered for `E`.
    pub fn prepend_listener<E: Event>(&self, listener: Listener<E::Args>) -> &Self {
        self.register::<E>(listener, Position::Front)
    }

    /// Appends a wrapper that removes itself on the next emit of `E`, then
    /// invokes `listener`.
    ///
    /// The wrapper, not `listener`, is the stored entry: `listener_count` with
    /// `Some(&listener)` reports 0 and `off(&listener)` does not cancel it. Use
    /// [`Emitter::remove_all_listeners`] or keep the handle from
    /// [`Emitter::listeners`] to drop a pending once-listener.
    pub fn once<E: Event>(&self, listener: Listener<E::Args>) -> &Self {
        self.register_once::<E>(listener, Position::Back)
    }

    /// Same as [`Emitter::once`], but the wrapper goes to the front of the list.
    pub fn prepend_once_listener<E: Event>(&self, listener: Listener<E::Args>) -> &Self {
        self.register_once::<E>(listener, Position::Front)
    }

    fn register<E: Event>(&self, listener: Listener<E::Args>, position: Position) -> &Self {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_entry_id();
        registry.insert::<E>(id, listener, position);
        self
    }

    fn register_once<E: Event>(&self, listener: Listener<E::Args>, position: Position) -> &Self {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_entry_id();
        let wrapper = once::wrap::<E>(Rc::downgrade(&self.registry), id, listener);
        registry.insert::<E>(id, wrapper, position);
        self
    }

    // ---------------------------
    // Dispatch
    // ---------------------------

    /// Invokes every listener of `E`, in order, with `args`.
    ///
    /// Returns `Ok(false)` without invoking anything when `E` has no listeners,
    /// `Ok(true)` once every snapshotted listener ran.
    ///
    /// # Errors
    /// The first fallible listener returning `Err` stops the dispatch; listeners
    /// after it are not invoked in this call.
    pub fn emit<E: Event>(&self, args: &E::Args) -> Result<bool, EmitError> {
        let snapshot = self.registry.borrow().snapshot::<E>();
        let Some(listeners) = snapshot else {
            tracing::trace!(event = E::NAME, "emit without listeners");
            return Ok(false);
        };

        tracing::trace!(event = E::NAME, listeners = listeners.len(), "dispatching");
        for (position, listener) in listeners.iter().enumerate() {
            listener
                .call(args)
                .map_err(|source| EmitError::Listener {
                    event: E::NAME,
                    position,
                    source,
                })?;
        }
        Ok(!listeners.is_empty())
    }

    // ---------------------------
    // Removal
    // ---------------------------

    /// Removes the first entry of `E` identical to `listener`.
    ///
    /// Does nothing if `listener` is not registered for `E`.
    pub fn remove_listener<E: Event>(&self, listener: &Listener<E::Args>) -> &Self {
        self.registry.borrow_mut().remove_listener::<E>(listener);
        self
    }

    /// Alias of [`Emitter::remove_listener`].
    pub fn off<E: Event>(&self, listener: &Listener<E::Args>) -> &Self {
        self.remove_listener::<E>(listener)
    }

    /// Removes every listener of `E`.
    pub fn remove_all_listeners<E: Event>(&self) -> &Self {
        self.registry.borrow_mut().remove_event::<E>();
        self
    }

    /// Removes every listener of every event.
    pub fn clear(&self) -> &Self {
        self.registry.borrow_mut().clear();
        self
    }

    // ---------------------------
    // Introspection
    // ---------------------------

    /// Listeners of `E` in dispatch order (empty if none).
    ///
    /// Once-listeners appear as their wrappers.
    #[must_use]
    pub fn listeners<E: Event>(&self) -> Vec<Listener<E::Args>> {
        self.registry.borrow().snapshot::<E>().unwrap_or_default()
    }

    /// Independent copy of `E`'s list; changing it never affects the emitter.
    #[must_use]
    pub fn raw_listeners<E: Event>(&self) -> Vec<Listener<E::Args>> {
        self.listeners::<E>()
    }

    /// Names of the events that currently have listeners, in the order their
    /// lists were created.
    #[must_use]
    pub fn event_names(&self) -> Vec<&'static str> {
        self.registry.borrow().names()
    }

    /// Number of listeners of `E`, or of entries identical to `listener` when given.
    #[must_use]
    pub fn listener_count<E: Event>(&self, listener: Option<&Listener<E::Args>>) -> usize {
        self.registry.borrow().count::<E>(listener)
    }

    /// True if `E` currently has at least one listener.
    #[must_use]
    pub fn has_event<E: Event>(&self) -> bool {
        self.registry.borrow().contains::<E>()
    }

    /// Number of events that currently have listeners.
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.registry.borrow().len()
    }

    // ---------------------------
    // Max-listeners hint
    // ---------------------------

    /// Current advisory listener limit per event (`0` = unlimited).
    #[must_use]
    pub fn get_max_listeners(&self) -> usize {
        self.registry.borrow().config().max_listeners
    }

    /// Sets the advisory listener limit per event (`0` = unlimited).
    ///
    /// Registered listeners are left untouched.
    pub fn set_max_listeners(&self, n: usize) -> &Self {
        self.registry.borrow_mut().set_max_listeners(n);
        self
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.registry.try_borrow() {
            Ok(registry) => f
                .debug_struct("Emitter")
                .field("events", &registry.names())
                .field("max_listeners", &registry.config().max_listeners)
                .finish(),
            Err(_) => f.debug_struct("Emitter").finish_non_exhaustive(),
        }
    }
}
