//! # Emitter configuration.
//!
//! Provides [`EmitterConfig`], the settings an [`Emitter`](crate::Emitter) is
//! created with.
//!
//! Config is used in two ways:
//! 1. **Emitter creation**: `Emitter::with_config(config)` or `Emitter::builder()`
//! 2. **Runtime adjustment**: `Emitter::set_max_listeners(n)` rewrites the hint in place
//!
//! ## Sentinel values
//! - `max_listeners = 0` → unlimited (no warning is ever logged)

/// Default advisory limit of listeners per event.
pub const DEFAULT_MAX_LISTENERS: usize = 25;

/// Configuration for an [`Emitter`](crate::Emitter).
///
/// ## Field semantics
/// - `max_listeners`: advisory per-event listener count (`0` = unlimited)
///
/// The hint never blocks a registration. When a list grows past it, a single
/// `tracing` warning is logged for that event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmitterConfig {
    /// Advisory number of listeners per event.
    ///
    /// - `0` = unlimited
    /// - `n > 0` = warn once when an event holds more than `n` listeners
    pub max_listeners: usize,
}

impl EmitterConfig {
    /// Returns the advisory limit as an `Option`.
    ///
    /// - `None` → unlimited
    /// - `Some(n)` → warn past `n` listeners
    #[inline]
    pub fn listener_limit(&self) -> Option<usize> {
        if self.max_listeners == 0 {
            None
        } else {
            Some(self.max_listeners)
        }
    }

    /// Returns true if `count` listeners exceed the advisory limit.
    #[inline]
    pub fn exceeds_limit(&self, count: usize) -> bool {
        self.listener_limit().is_some_and(|max| count > max)
    }
}

impl Default for EmitterConfig {
    /// Default configuration:
    ///
    /// - `max_listeners = 25`
    fn default() -> Self {
        Self {
            max_listeners: DEFAULT_MAX_LISTENERS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit() {
        let cfg = EmitterConfig::default();
        assert_eq!(cfg.max_listeners, 25);
        assert_eq!(cfg.listener_limit(), Some(25));
        assert!(!cfg.exceeds_limit(25));
        assert!(cfg.exceeds_limit(26));
    }

    #[test]
    fn test_zero_is_unlimited() {
        let cfg = EmitterConfig { max_listeners: 0 };
        assert_eq!(cfg.listener_limit(), None);
        assert!(!cfg.exceeds_limit(usize::MAX));
    }
}
