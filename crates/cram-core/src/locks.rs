//! Per-user mutual exclusion.
//!
//! Every load-modify-save cycle against a user's documents runs while
//! holding that user's lock, so writers in the same process queue up instead
//! of contending on storage. Different users never contend. Entries live only
//! while some caller holds or waits on them, so the registry stays as small
//! as the set of users currently being served.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};

/// Registry handing out one lock per user identifier.
#[derive(Debug, Default)]
pub struct UserLocks {
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl UserLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` while holding `user`'s lock.
    pub fn with_user<T>(&self, user: &str, f: impl FnOnce() -> T) -> T {
        let lock = self.acquire(user);
        let output = {
            let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
            f()
        };
        self.release(user, lock);
        output
    }

    fn acquire(&self, user: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        locks
            .entry(user.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    // Handles are only cloned under the registry lock, so a count of one
    // here means nobody else holds or waits on this user's lock.
    fn release(&self, user: &str, lock: Arc<Mutex<()>>) {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        drop(lock);
        if locks.get(user).is_some_and(|l| Arc::strong_count(l) == 1) {
            locks.remove(user);
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.locks.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}
