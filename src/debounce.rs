//! Cancelable delayed action.
//!
//! A `Debouncer` owns at most one pending task. Arming it again aborts the
//! previous task first, so only the action scheduled after the last input
//! event ever runs.

use std::future::Future;
use std::time::Duration;
use tokio::task::AbortHandle;

#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Option<AbortHandle>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `action` once `delay` has passed, replacing any pending action.
    pub fn schedule<F>(&mut self, delay: Duration, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        });
        self.pending = Some(handle.abort_handle());
    }

    /// Drop the pending action, if it has not fired yet.
    ///
    /// An action that is already past its delay is aborted at its next await point.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[tokio::test]
    async fn rapid_schedules_run_only_the_last_action() {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let mut debouncer = Debouncer::new();

        for query in ["h", "ha", "had", "hades"] {
            let fired = Arc::clone(&fired);
            debouncer.schedule(Duration::from_millis(50), async move {
                fired.lock().unwrap().push(query);
            });
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(*fired.lock().unwrap(), vec!["hades"]);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test]
    async fn cancel_prevents_the_action() {
        let fired = Arc::new(Mutex::new(false));
        let mut debouncer = Debouncer::new();

        let flag = Arc::clone(&fired);
        debouncer.schedule(Duration::from_millis(30), async move {
            *flag.lock().unwrap() = true;
        });
        assert!(debouncer.is_pending());
        debouncer.cancel();

        tokio::time::sleep(Duration::from_millis(80)).await;
        assert!(!*fired.lock().unwrap());
    }

    #[tokio::test]
    async fn settled_pauses_each_fire_once() {
        let count = Arc::new(Mutex::new(0));
        let mut debouncer = Debouncer::new();

        for _ in 0..2 {
            let count = Arc::clone(&count);
            debouncer.schedule(Duration::from_millis(20), async move {
                *count.lock().unwrap() += 1;
            });
            tokio::time::sleep(Duration::from_millis(80)).await;
        }

        assert_eq!(*count.lock().unwrap(), 2);
    }
}
