//! Shared holder for the active plugin configuration.
//!
//! Message hooks read an `Arc` snapshot per invocation while configuration
//! change notifications swap in a new one. A snapshot is never mutated after
//! it is installed, so readers always see a complete configuration.

use std::sync::{Arc, PoisonError, RwLock};

use crate::config::PluginConfig;

#[derive(Debug, Default)]
pub struct ConfigStore {
    current: RwLock<Option<Arc<PluginConfig>>>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `config`.
    pub fn with_config(config: PluginConfig) -> Self {
        Self {
            current: RwLock::new(Some(Arc::new(config))),
        }
    }

    /// Current snapshot, or a default configuration if none was ever set.
    pub fn get(&self) -> Arc<PluginConfig> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .unwrap_or_default()
    }

    /// Replace the active snapshot.
    ///
    /// # Panics
    ///
    /// Panics when `config` is the snapshot already installed. Re-installing the
    /// same `Arc` means the caller mutated shared configuration instead of
    /// building a new snapshot.
    pub fn set(&self, config: Arc<PluginConfig>) {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = current.as_ref() {
            if Arc::ptr_eq(existing, &config) {
                panic!("ConfigStore::set called with the existing configuration");
            }
        }
        *current = Some(config);
    }
}
