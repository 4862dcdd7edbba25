//! Per-session async locks.
//!
//! Appends to one chat session are serialized from the read to the write.
//! Entries exist only while some request holds or waits for them.

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex, MutexGuard, PoisonError};
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::foundation::ChatSessionId;

type LockMap = HashMap<ChatSessionId, Arc<Mutex<()>>>;

/// Registry of keyed async mutexes.
#[derive(Debug, Clone, Default)]
pub struct SessionLocks {
    locks: Arc<StdMutex<LockMap>>,
}

/// Held for the duration of one append. Releasing the last holder removes
/// the registry entry.
pub struct SessionLockGuard {
    id: ChatSessionId,
    registry: Arc<StdMutex<LockMap>>,
    lock: Arc<Mutex<()>>,
    guard: Option<OwnedMutexGuard<()>>,
}

fn lock_map(map: &StdMutex<LockMap>) -> MutexGuard<'_, LockMap> {
    map.lock().unwrap_or_else(PoisonError::into_inner)
}

impl SessionLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits until no other request holds the lock for `id`.
    pub async fn acquire(&self, id: ChatSessionId) -> SessionLockGuard {
        let lock = lock_map(&self.locks)
            .entry(id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();

        let guard = lock.clone().lock_owned().await;

        SessionLockGuard {
            id,
            registry: Arc::clone(&self.locks),
            lock,
            guard: Some(guard),
        }
    }

    /// Number of sessions currently locked or awaited.
    pub fn len(&self) -> usize {
        lock_map(&self.locks).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Drop for SessionLockGuard {
    fn drop(&mut self) {
        self.guard.take();
        let mut map = lock_map(&self.registry);
        // One reference in the map, one here: nobody else is waiting.
        if Arc::strong_count(&self.lock) == 2 {
            map.remove(&self.id);
        }
    }
}
