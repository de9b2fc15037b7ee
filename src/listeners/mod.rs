//! # Listeners registered on an emitter.
//!
//! A [`Listener`] is the handler value stored in an event's list. It is keyed
//! by identity: the emitter compares handles, never closures.
//!
//! ## Kinds
//! - **Infallible** - [`Listener::new`], a plain `Fn(&A)`
//! - **Fallible** - [`Listener::fallible`], may abort the dispatch with an error
//! - **Once** - built internally by [`Emitter::once`](crate::Emitter::once); the
//!   caller's listener is wrapped and the wrapper is what gets stored
//!
//! ```text
//! Listener<A> ── Rc<dyn Fn(&A) -> Result<(), ListenerError>>
//!     │ clone()  ──► same allocation  ──► same_as() == true
//!     │ new(..)  ──► new allocation   ──► same_as() == false
//! ```

mod listener;

pub use listener::Listener;
