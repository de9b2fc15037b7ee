//! # Listener registry - per-event ordered lists.
//!
//! The registry owns every listener list and the emitter configuration. It is
//! the only place that mutates them; [`Emitter`](crate::Emitter) borrows it for
//! the duration of one operation and never while a listener runs.
//!
//! ## Architecture
//! ```text
//! Registry
//!   ├─ order: Vec<TypeId>             key insertion order (event_names)
//!   └─ slots: HashMap<TypeId, Slot>
//!                  Slot { name, warned, entries: Box<dyn Any> }
//!                                         └─► Vec<Entry<E::Args>>
//!                                               Entry { id, listener }
//! ```
//!
//! ## Rules
//! - A slot exists iff its list is non-empty: removing the last entry deletes the key.
//! - A deleted key that is inserted again moves to the end of `order`.
//! - Removal of an absent listener or entry id leaves everything untouched.
//! - Entry ids are unique per registry and never reused.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::collections::hash_map;

use crate::config::EmitterConfig;
use crate::events::{Event, key_of};
use crate::listeners::Listener;

/// Unique id of one registered entry, resolved at registration time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct EntryId(u64);

/// Where a new entry goes in its list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Position {
    Back,
    Front,
}

/// One registered listener.
struct Entry<A: 'static> {
    id: EntryId,
    listener: Listener<A>,
}

/// Type-erased list for one event.
struct Slot {
    name: &'static str,
    /// Max-listeners warning already logged for this key.
    warned: bool,
    entries: Box<dyn Any>,
}

impl Slot {
    fn new<E: Event>() -> Self {
        Self {
            name: E::NAME,
            warned: false,
            entries: Box::new(Vec::<Entry<E::Args>>::new()),
        }
    }

    fn entries<E: Event>(&self) -> Option<&Vec<Entry<E::Args>>> {
        self.entries.downcast_ref()
    }

    fn entries_mut<E: Event>(&mut self) -> Option<&mut Vec<Entry<E::Args>>> {
        self.entries.downcast_mut()
    }
}

/// Listener lists of every event plus the emitter configuration.
pub(crate) struct Registry {
    slots: HashMap<TypeId, Slot>,
    order: Vec<TypeId>,
    next_id: u64,
    config: EmitterConfig,
}

impl Registry {
    /// Creates an empty registry.
    pub(crate) fn new(config: EmitterConfig) -> Self {
        Self {
            slots: HashMap::new(),
            order: Vec::new(),
            next_id: 0,
            config,
        }
    }

    pub(crate) fn config(&self) -> &EmitterConfig {
        &self.config
    }

    pub(crate) fn set_max_listeners(&mut self, n: usize) {
        self.config.max_listeners = n;
    }

    /// Allocates the id of the next entry.
    pub(crate) fn next_entry_id(&mut self) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Inserts `listener` for `E` at `position`, creating the list if absent.
    pub(crate) fn insert<E: Event>(
        &mut self,
        id: EntryId,
        listener: Listener<E::Args>,
        position: Position,
    ) {
        let key = key_of::<E>();
        let slot = match self.slots.entry(key) {
            hash_map::Entry::Occupied(o) => o.into_mut(),
            hash_map::Entry::Vacant(v) => {
                tracing::debug!(event = E::NAME, "listener list created");
                self.order.push(key);
                v.insert(Slot::new::<E>())
            }
        };

        // The key is E's TypeId, so the list always holds E::Args.
        let Some(entries) = slot.entries_mut::<E>() else {
            unreachable!("listener list of `{}` holds another argument type", E::NAME);
        };
        let entry = Entry { id, listener };
        match position {
            Position::Back => entries.push(entry),
            Position::Front => entries.insert(0, entry),
        }

        let count = entries.len();
        if !slot.warned && self.config.exceeds_limit(count) {
            slot.warned = true;
            tracing::warn!(
                event = slot.name,
                count,
                max = self.config.max_listeners,
                "possible listener leak: more listeners than max_listeners registered for event"
            );
        }
    }

    /// Removes the first entry whose listener is identical to `listener`.
    ///
    /// Returns false (and changes nothing) when no such entry exists.
    pub(crate) fn remove_listener<E: Event>(&mut self, listener: &Listener<E::Args>) -> bool {
        self.remove_first::<E>(|entry| entry.listener.same_as(listener))
    }

    /// Removes the entry registered under `id`.
    pub(crate) fn remove_entry<E: Event>(&mut self, id: EntryId) -> bool {
        self.remove_first::<E>(|entry| entry.id == id)
    }

    fn remove_first<E: Event>(&mut self, matches: impl Fn(&Entry<E::Args>) -> bool) -> bool {
        let key = key_of::<E>();
        let Some(entries) = self.slots.get_mut(&key).and_then(Slot::entries_mut::<E>) else {
            return false;
        };
        let Some(index) = entries.iter().position(matches) else {
            return false;
        };

        entries.remove(index);
        if entries.is_empty() {
            self.remove_key(key);
        }
        true
    }

    /// Deletes the whole list of `E`.
    pub(crate) fn remove_event<E: Event>(&mut self) -> bool {
        self.remove_key(key_of::<E>())
    }

    fn remove_key(&mut self, key: TypeId) -> bool {
        match self.slots.remove(&key) {
            Some(slot) => {
                self.order.retain(|k| *k != key);
                tracing::debug!(event = slot.name, "listener list removed");
                true
            }
            None => false,
        }
    }

    /// Deletes every list.
    pub(crate) fn clear(&mut self) {
        if !self.slots.is_empty() {
            tracing::debug!(events = self.slots.len(), "all listener lists removed");
        }
        self.slots.clear();
        self.order.clear();
    }

    /// Copies the listeners of `E` in order; `None` if `E` has no list.
    pub(crate) fn snapshot<E: Event>(&self) -> Option<Vec<Listener<E::Args>>> {
        self.entries::<E>()
            .map(|entries| entries.iter().map(|e| e.listener.clone()).collect())
    }

    /// Number of entries for `E`, or of entries identical to `listener`.
    pub(crate) fn count<E: Event>(&self, listener: Option<&Listener<E::Args>>) -> usize {
        let Some(entries) = self.entries::<E>() else {
            return 0;
        };
        match listener {
            Some(l) => entries.iter().filter(|e| e.listener.same_as(l)).count(),
            None => entries.len(),
        }
    }

    pub(crate) fn contains<E: Event>(&self) -> bool {
        self.slots.contains_key(&key_of::<E>())
    }

    /// Event names in key insertion order.
    pub(crate) fn names(&self) -> Vec<&'static str> {
        self.order
            .iter()
            .filter_map(|key| self.slots.get(key).map(|slot| slot.name))
            .collect()
    }

    /// Number of events with a list.
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    fn entries<E: Event>(&self) -> Option<&Vec<Entry<E::Args>>> {
        self.slots.get(&key_of::<E>()).and_then(Slot::entries::<E>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events;

    events! {
        struct Alpha: u8;
        struct Beta: u8;
    }

    fn add<E: Event>(reg: &mut Registry, l: &Listener<E::Args>, position: Position) -> EntryId {
        let id = reg.next_entry_id();
        reg.insert::<E>(id, l.clone(), position);
        id
    }

    #[test]
    fn test_entry_ids_are_unique() {
        let mut reg = Registry::new(EmitterConfig::default());
        let a = reg.next_entry_id();
        let b = reg.next_entry_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_front_and_back_insertion_order() {
        let mut reg = Registry::new(EmitterConfig::default());
        let first = Listener::new(|_: &u8| {});
        let second = Listener::new(|_: &u8| {});
        let front = Listener::new(|_: &u8| {});

        add::<Alpha>(&mut reg, &first, Position::Back);
        add::<Alpha>(&mut reg, &second, Position::Back);
        add::<Alpha>(&mut reg, &front, Position::Front);

        let snap = reg.snapshot::<Alpha>().unwrap();
        assert_eq!(snap, vec![front, first, second]);
    }

    #[test]
    fn test_last_removal_deletes_key() {
        let mut reg = Registry::new(EmitterConfig::default());
        let l = Listener::new(|_: &u8| {});
        add::<Alpha>(&mut reg, &l, Position::Back);
        assert!(reg.contains::<Alpha>());

        assert!(reg.remove_listener::<Alpha>(&l));
        assert!(!reg.contains::<Alpha>());
        assert_eq!(reg.len(), 0);
        assert!(reg.names().is_empty());
        assert!(reg.snapshot::<Alpha>().is_none());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut reg = Registry::new(EmitterConfig::default());
        let kept = Listener::new(|_: &u8| {});
        let stranger = Listener::new(|_: &u8| {});
        add::<Alpha>(&mut reg, &kept, Position::Back);

        assert!(!reg.remove_listener::<Alpha>(&stranger));
        assert!(!reg.remove_listener::<Beta>(&stranger));
        assert!(!reg.remove_entry::<Alpha>(EntryId(999)));
        assert_eq!(reg.snapshot::<Alpha>().unwrap(), vec![kept]);
    }

    #[test]
    fn test_remove_entry_by_id_targets_that_entry() {
        let mut reg = Registry::new(EmitterConfig::default());
        let l = Listener::new(|_: &u8| {});
        let first = add::<Alpha>(&mut reg, &l, Position::Back);
        let _second = add::<Alpha>(&mut reg, &l, Position::Back);

        assert!(reg.remove_entry::<Alpha>(first));
        assert_eq!(reg.count::<Alpha>(Some(&l)), 1);
        assert!(!reg.remove_entry::<Alpha>(first));
    }

    #[test]
    fn test_names_follow_key_insertion_order() {
        let mut reg = Registry::new(EmitterConfig::default());
        let l = Listener::new(|_: &u8| {});
        add::<Beta>(&mut reg, &l, Position::Back);
        add::<Alpha>(&mut reg, &l, Position::Back);
        assert_eq!(reg.names(), vec!["Beta", "Alpha"]);

        reg.remove_event::<Beta>();
        add::<Beta>(&mut reg, &l, Position::Front);
        assert_eq!(reg.names(), vec!["Alpha", "Beta"]);
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut reg = Registry::new(EmitterConfig::default());
        let l = Listener::new(|_: &u8| {});
        add::<Alpha>(&mut reg, &l, Position::Back);
        add::<Beta>(&mut reg, &l, Position::Back);

        reg.clear();
        assert_eq!(reg.len(), 0);
        assert_eq!(reg.count::<Alpha>(None), 0);
        assert!(reg.names().is_empty());
    }
}
