use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

// Interval at which a waiting child re-checks its ancestors.
const PARENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Cooperative cancellation handle shared between the bootstrap and the work it starts.
///
/// Clones share the same cancellation state. A context obtained through [`Context::child`]
/// is cancelled when its parent is, but cancelling the child leaves the parent untouched.
#[derive(Debug, Clone, Default)]
pub struct Context {
    cancelled: Arc<(Mutex<bool>, Condvar)>,
    parent: Option<Box<Context>>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new context that observes the cancellation of `self`.
    pub fn child(&self) -> Self {
        Self {
            cancelled: Arc::default(),
            parent: Some(Box::new(self.clone())),
        }
    }

    /// Sets the cancellation signal. All threads waiting on this context are notified.
    pub fn cancel(&self) {
        let (lck, cvar) = &*self.cancelled;
        *lock(lck) = true;
        cvar.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        let (lck, _) = &*self.cancelled;
        *lock(lck) || self.parent.as_ref().is_some_and(|p| p.is_cancelled())
    }

    /// Blocks until this context or any of its ancestors is cancelled.
    pub fn wait(&self) {
        let (lck, cvar) = &*self.cancelled;
        let mut cancelled = lock(lck);
        loop {
            if *cancelled || self.parent.as_ref().is_some_and(|p| p.is_cancelled()) {
                return;
            }
            cancelled = match self.parent {
                // the root is always notified through its own condvar
                None => cvar.wait(cancelled).unwrap_or_else(PoisonError::into_inner),
                Some(_) => {
                    cvar.wait_timeout(cancelled, PARENT_POLL_INTERVAL)
                        .unwrap_or_else(PoisonError::into_inner)
                        .0
                }
            };
        }
    }
}

// A poisoned flag is still a valid bool, keep using it.
fn lock(lck: &Mutex<bool>) -> MutexGuard<'_, bool> {
    lck.lock().unwrap_or_else(PoisonError::into_inner)
}
