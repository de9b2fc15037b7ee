use crate::config::EmitterConfig;

use super::emitter::Emitter;

/// Builder for constructing an [`Emitter`] with a non-default configuration.
#[derive(Clone, Debug, Default)]
pub struct EmitterBuilder {
    cfg: EmitterConfig,
}

impl EmitterBuilder {
    /// Creates a new builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, cfg: EmitterConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Sets the advisory listener limit per event (`0` = unlimited).
    pub fn max_listeners(mut self, n: usize) -> Self {
        self.cfg.max_listeners = n;
        self
    }

    /// Builds and returns the emitter.
    pub fn build(self) -> Emitter {
        Emitter::with_config(self.cfg)
    }
}
