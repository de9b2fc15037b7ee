//! Emitter core: registry and dispatch.
//!
//! This module contains the implementation of the event emitter. The public
//! API from this module is [`Emitter`] and its [`EmitterBuilder`].
//!
//! Internal modules:
//! - [`emitter`]: public operations, snapshot dispatch, failure propagation;
//! - [`registry`]: per-event ordered lists, key order, max-listeners warning;
//! - [`once`]: self-removing wrapper behind `once`/`prepend_once_listener`;
//! - [`builder`]: configuration-first construction.

mod builder;
mod emitter;
mod once;
mod registry;

pub use builder::EmitterBuilder;
pub use emitter::Emitter;
