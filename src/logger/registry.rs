//! Name-to-logger map with lookup-or-create semantics.
//!
//! An explicit `Registry` keeps tests isolated from each other; `Registry::global` exists
//! for callers that want one process-wide namespace.

use super::Logger;
use crate::internal;
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock, PoisonError};

static GLOBAL: OnceLock<Registry> = OnceLock::new();

#[derive(Default)]
pub struct Registry {
    loggers: Mutex<HashMap<String, Logger>>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry backing `Logger::create`.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::new)
    }

    /// Returns the logger registered under `name`, creating it on first use.
    /// Every handle for a name shares one core, so sinks accumulate across call sites.
    pub fn logger(&self, name: &str) -> Logger {
        let mut loggers = self.loggers.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(logger) = loggers.get(name) {
            internal::debug("REGISTRY", &format!("Reusing logger '{name}'"));
            return logger.clone();
        }

        internal::debug("REGISTRY", &format!("Creating logger '{name}'"));
        let logger = Logger::new(name);
        loggers.insert(name.to_string(), logger.clone());
        logger
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.loggers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.loggers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
