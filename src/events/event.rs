//! # Event contract declared by the caller.
//!
//! Every event kind is a marker type implementing [`Event`]. The type is the
//! event identifier: two events are the same event iff they are the same type.
//! The associated [`Event::Args`] fixes the argument tuple delivered to every
//! listener registered under it, so a listener with the wrong signature, or an
//! undeclared event, is rejected by the compiler rather than at runtime.
//!
//! ## Example
//! ```rust
//! use typed_emitter::Event;
//!
//! struct Connected;
//!
//! impl Event for Connected {
//!     type Args = (String, u16);
//!     const NAME: &'static str = "connected";
//! }
//!
//! assert_eq!(Connected::NAME, "connected");
//! ```

use std::any::TypeId;

/// Declares one event kind and the arguments its listeners receive.
///
/// Listeners are called with `&Self::Args`. Use `()` for events without
/// arguments and a tuple for several.
pub trait Event: 'static {
    /// Argument tuple delivered to listeners of this event.
    type Args: 'static;

    /// Human-readable identifier, reported by
    /// [`Emitter::event_names`](crate::Emitter::event_names) and in logs.
    const NAME: &'static str;
}

/// Registry key for `E`.
#[inline]
pub(crate) fn key_of<E: Event>() -> TypeId {
    TypeId::of::<E>()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ping;
    impl Event for Ping {
        type Args = ();
        const NAME: &'static str = "ping";
    }

    struct Pong;
    impl Event for Pong {
        type Args = ();
        const NAME: &'static str = "ping";
    }

    #[test]
    fn test_key_is_type_not_name() {
        assert_eq!(key_of::<Ping>(), key_of::<Ping>());
        assert_ne!(key_of::<Ping>(), key_of::<Pong>());
        assert_eq!(Ping::NAME, Pong::NAME);
    }
}
