//! Shared application state for the tally server.
//!
//! The counter store is owned here and handed to handlers through axum's
//! `State` extractor; each `AppState::new` gets its own empty store.

use std::sync::Arc;

use tally_core::CounterStore;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    store: Arc<CounterStore>,
}

impl AppState {
    pub fn new(cfg: ServerConfig) -> Self {
        Self::with_store(cfg, Arc::new(CounterStore::new()))
    }

    /// Build state around an existing store (shared with the caller).
    pub fn with_store(cfg: ServerConfig, store: Arc<CounterStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg, store }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> &CounterStore {
        &self.inner.store
    }
}
