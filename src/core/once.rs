//! # Once-wrapper: delegate once, then remove yourself.
//!
//! [`wrap`] builds the listener actually stored by `once` and
//! `prepend_once_listener`. It holds the caller's listener, the id of its own
//! registry entry (allocated before insertion) and a weak handle to the
//! registry.
//!
//! ## Call sequence
//! ```text
//! wrapper(&args)
//!   ├─ fired? ── yes ──► Ok(())            (stale copy in an outer snapshot)
//!   ├─ fired = true
//!   ├─ registry.remove_entry::<E>(own id)
//!   └─ inner.call(&args)  ──► result
//! ```
//!
//! The entry is gone before `inner` runs, so an emit issued from inside `inner`
//! no longer lists it, and a panicking or failing `inner` leaves nothing behind.

use std::cell::{Cell, RefCell};
use std::rc::Weak;

use super::registry::{EntryId, Registry};
use crate::events::Event;
use crate::listeners::Listener;

/// Wraps `inner` so it runs at most once and then unregisters entry `id` of `E`.
pub(crate) fn wrap<E: Event>(
    registry: Weak<RefCell<Registry>>,
    id: EntryId,
    inner: Listener<E::Args>,
) -> Listener<E::Args> {
    let fired = Cell::new(false);

    Listener::fallible(move |args: &E::Args| {
        if fired.replace(true) {
            return Ok(());
        }

        if let Some(registry) = registry.upgrade() {
            registry.borrow_mut().remove_entry::<E>(id);
        }
        inner.call(args)
    })
}
