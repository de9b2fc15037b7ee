//! Error types used by the emitter and its listeners.
//!
//! This module defines:
//!
//! - [`EmitError`] — raised by [`Emitter::emit`](crate::Emitter::emit) when a
//!   listener fails during dispatch.
//! - [`ListenerError`] — the boxed error a fallible listener returns.
//!
//! Registration, removal and introspection never fail: an unknown event is an
//! empty list, removing an absent listener is a no-op. The only runtime
//! failure path is a listener reporting an error while it is being invoked.
//!
//! ## Propagation
//! ```text
//! emit::<E>(&args)
//!   ├─► listener[0] ── Ok
//!   ├─► listener[1] ── Err(source) ──► EmitError::Listener { event, position: 1, source }
//!   └─► listener[2]    (not invoked)
//! ```

use thiserror::Error;

/// Error returned by a fallible listener.
///
/// Any `std::error::Error + Send + Sync` converts into it with `?` or `.into()`,
/// including `anyhow::Error`.
pub type ListenerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// # Errors produced while dispatching an event.
///
/// A failing listener aborts the dispatch it belongs to: listeners positioned
/// after it in the same `emit` call are not invoked.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum EmitError {
    /// A listener returned an error.
    #[error("listener #{position} for event `{event}` failed: {source}")]
    Listener {
        /// Name of the event being dispatched.
        event: &'static str,
        /// Zero-based position of the failing listener in the dispatch snapshot.
        position: usize,
        /// The error reported by the listener.
        #[source]
        source: ListenerError,
    },
}

impl EmitError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use typed_emitter::EmitError;
    ///
    /// let err = EmitError::Listener { event: "ready", position: 0, source: "boom".into() };
    /// assert_eq!(err.as_label(), "listener_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            EmitError::Listener { .. } => "listener_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            EmitError::Listener {
                event,
                position,
                source,
            } => format!("event={event} position={position} error: {source}"),
        }
    }

    /// Name of the event whose dispatch failed.
    pub fn event(&self) -> &'static str {
        match self {
            EmitError::Listener { event, .. } => *event,
        }
    }
}
