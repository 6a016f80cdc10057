//! State Management Layer
//!
//! The screen state lives behind a [`StoreHandle`]. Controllers never hold
//! the lock across an await point:
//!
//! ```text
//! UI Event → Controller → StoreHandle::update → (await simulated write) → StoreHandle::update → Notification
//! ```

mod record_store;

pub use record_store::*;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared handle to one screen's [`RecordStore`]
#[derive(Clone, Debug, Default)]
pub struct StoreHandle {
    inner: Arc<Mutex<RecordStore>>,
}

impl StoreHandle {
    /// Create a handle around an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, RecordStore> {
        // A panic inside a closure leaves the store itself consistent, so a
        // poisoned lock is still usable.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Read the store
    pub fn read<R>(&self, f: impl FnOnce(&RecordStore) -> R) -> R {
        f(&self.lock())
    }

    /// Mutate the store
    pub fn update<R>(&self, f: impl FnOnce(&mut RecordStore) -> R) -> R {
        f(&mut self.lock())
    }
}
