//! Application state for the shift tracker API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::calculation;
use crate::config::{AppContext, ConfigLoader};
use crate::error::TrackerResult;
use crate::storage::SheetStore;

/// Shared application state.
///
/// The store sits behind a single async mutex so at most one read or
/// write reaches the sheet backend at a time. Settings are read far more
/// often than written and sit behind a read-write lock.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<SheetStore>>,
    config: Arc<RwLock<ConfigLoader>>,
}

impl AppState {
    /// Creates a new application state from a store and settings loader.
    pub fn new(store: SheetStore, config: ConfigLoader) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            config: Arc::new(RwLock::new(config)),
        }
    }

    /// Creates a state over an in-memory store and default settings.
    pub fn in_memory() -> Self {
        Self::new(
            SheetStore::in_memory(),
            ConfigLoader::from_context(AppContext::default()),
        )
    }

    /// Returns the shared store.
    pub fn store(&self) -> &Mutex<SheetStore> {
        &self.store
    }

    /// Returns the shared settings loader.
    pub fn config(&self) -> &RwLock<ConfigLoader> {
        &self.config
    }

    /// Returns a snapshot of the current application context.
    pub async fn context(&self) -> AppContext {
        self.config.read().await.context().clone()
    }

    /// Name of the app's user: the configured user if on the roster,
    /// otherwise the coworker flagged as the user.
    ///
    /// Takes the store lock briefly; do not call while holding it.
    pub async fn user_name(&self) -> TrackerResult<Option<String>> {
        let context = self.context().await;
        let roster = self.store.lock().await.list_coworkers()?;
        Ok(calculation::user_name(&roster, &context))
    }
}
