//! # Listener handle (`Listener`)
//!
//! [`Listener`] wraps a closure `F: Fn(&A)` behind a reference-counted pointer.
//! Cloning a listener clones the pointer, not the closure, so every clone is
//! the *same* listener: registering it and later removing it by a clone works,
//! while two listeners built from identical closures stay distinct.
//!
//! ## Identity
//! - [`Listener::same_as`] (and `==`) compare the shared allocation.
//! - Deep equality of closures is never attempted.
//!
//! ## Example
//! ```rust
//! use typed_emitter::Listener;
//!
//! let a = Listener::new(|n: &u32| println!("got {n}"));
//! let b = a.clone();
//! let c = Listener::new(|n: &u32| println!("got {n}"));
//!
//! assert!(a.same_as(&b));
//! assert!(!a.same_as(&c));
//! ```

use std::fmt;
use std::rc::Rc;

use crate::error::ListenerError;

/// Shared callback stored by a [`Listener`].
type Callback<A> = dyn Fn(&A) -> Result<(), ListenerError>;

/// Cheap, cloneable handle to a listener callback taking `&A`.
///
/// Listeners are single-threaded (`!Send`): they may capture `Rc`/`RefCell`
/// state, including a weak handle to the emitter they are registered on.
pub struct Listener<A: 'static> {
    callback: Rc<Callback<A>>,
}

impl<A: 'static> Listener<A> {
    /// Creates an infallible listener.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&A) + 'static,
    {
        Self::fallible(move |args| {
            f(args);
            Ok(())
        })
    }

    /// Creates a listener that may fail.
    ///
    /// An `Err` aborts the dispatch it occurs in and is returned from
    /// [`Emitter::emit`](crate::Emitter::emit) as
    /// [`EmitError::Listener`](crate::EmitError::Listener).
    ///
    /// ## Example
    /// ```rust
    /// use typed_emitter::Listener;
    ///
    /// let parse = Listener::fallible(|raw: &String| {
    ///     raw.parse::<u8>()?;
    ///     Ok(())
    /// });
    /// assert!(parse.call(&"7".to_string()).is_ok());
    /// assert!(parse.call(&"seven".to_string()).is_err());
    /// ```
    pub fn fallible<F>(f: F) -> Self
    where
        F: Fn(&A) -> Result<(), ListenerError> + 'static,
    {
        Self {
            callback: Rc::new(f),
        }
    }

    /// Invokes the callback.
    #[inline]
    pub fn call(&self, args: &A) -> Result<(), ListenerError> {
        (self.callback)(args)
    }

    /// Returns true if both handles point at the same listener.
    #[inline]
    pub fn same_as(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.callback), Rc::as_ptr(&other.callback))
    }
}

impl<A: 'static> Clone for Listener<A> {
    fn clone(&self) -> Self {
        Self {
            callback: Rc::clone(&self.callback),
        }
    }
}

impl<A: 'static> PartialEq for Listener<A> {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl<A: 'static> Eq for Listener<A> {}

impl<A: 'static> fmt::Debug for Listener<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Listener")
            .field(&Rc::as_ptr(&self.callback).cast::<()>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_clone_shares_identity() {
        let a = Listener::new(|_: &()| {});
        let b = a.clone();
        assert!(a.same_as(&b));
        assert_eq!(a, b);
    }

    #[test]
    fn test_identical_closures_are_distinct() {
        let a = Listener::new(|_: &()| {});
        let b = Listener::new(|_: &()| {});
        assert!(!a.same_as(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_call_forwards_args() {
        let seen = Rc::new(Cell::new(0));
        let sink = Rc::clone(&seen);
        let l = Listener::new(move |n: &i32| sink.set(sink.get() + *n));

        l.call(&2).unwrap();
        l.call(&3).unwrap();
        assert_eq!(seen.get(), 5);
    }

    #[test]
    fn test_fallible_reports_error() {
        let l = Listener::fallible(|n: &i32| {
            if *n < 0 {
                return Err("negative".into());
            }
            Ok(())
        });
        assert!(l.call(&1).is_ok());
        assert_eq!(l.call(&-1).unwrap_err().to_string(), "negative");
    }
}
