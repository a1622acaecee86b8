//! Concurrency-safe holder of the current snapshot.

use crate::metrics::data::Snapshot;
use std::sync::{Arc, Mutex, PoisonError};

/// Holds exactly one current [`Snapshot`].
///
/// Cloning the store yields another handle to the same value, so the sampler
/// and every request handler share one instance. Both `publish` and `read`
/// take the same lock and hold it only long enough to swap or clone an `Arc`,
/// which means a reader always sees one whole snapshot.
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    current: Arc<Mutex<Arc<Snapshot>>>,
}

impl SnapshotStore {
    /// Create a store holding the zero-value snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current snapshot.
    pub fn publish(&self, snapshot: Snapshot) {
        let snapshot = Arc::new(snapshot);
        // A panic while holding the lock cannot leave a half-written value
        // behind, so a poisoned lock is still safe to use.
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        *current = snapshot;
    }

    /// The current snapshot.
    pub fn read(&self) -> Arc<Snapshot> {
        let current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&current)
    }
}
