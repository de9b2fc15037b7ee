//! Event contract: identifiers and their argument types.
//!
//! This module groups the **type-level contract** callers declare for their
//! events. The emitter itself never names a concrete event; it is generic over
//! [`Event`] and keys its registry by the event type.
//!
//! ## Contents
//! - [`Event`] trait tying an identifier to its listener arguments
//! - [`events!`](crate::events!) macro declaring several marker types at once
//!
//! ## Quick reference
//! ```text
//! events! { pub struct Saved: (String, u64); }
//!              │               │
//!              │               └─► Event::Args   (listeners get &(String, u64))
//!              └─► TypeId key + Event::NAME "Saved"
//! ```

mod event;
mod macros;

pub(crate) use event::key_of;
pub use event::Event;
