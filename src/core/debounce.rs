use std::future::Future;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Trailing-edge debouncer with a single pending slot.
///
/// Scheduling aborts whatever is still waiting in the slot. Only the sleep is
/// owned by the slot: once the delay elapses the action is spawned as its own
/// task, so a later `schedule` can never cancel work that already started.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        // spawn under the lock so the slot always holds the newest timer
        let mut slot = self.slot();
        let delay = self.delay;
        let timer = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tokio::spawn(action);
        });

        if let Some(previous) = slot.replace(timer) {
            previous.abort();
        }
    }

    pub fn cancel(&self) {
        if let Some(previous) = self.slot().take() {
            previous.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.slot().as_ref().is_some_and(|h| !h.is_finished())
    }

    // The slot only holds a handle, so a poisoned lock is still usable.
    fn slot(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        match self.pending.lock() {
            Ok(slot) => slot,
            Err(poisoned) => poisoned.into_inner(),
        }
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
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_only_last_action_runs() {
        let debouncer = Debouncer::new(Duration::from_millis(500));
        let fired = Arc::new(Mutex::new(Vec::new()));

        for i in 0..5 {
            let fired = fired.clone();
            debouncer.schedule(async move {
                fired.lock().unwrap().push(i);
            });
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(*fired.lock().unwrap(), vec![4]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_action_waits_full_delay() {
        let debouncer = Debouncer::new(Duration::from_millis(500));
        let count = Arc::new(AtomicUsize::new(0));

        let c = count.clone();
        debouncer.schedule(async move {
            c.fetch_add(1, Ordering::SeqCst);
        });
        assert!(debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(499)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_started_action_survives_reschedule() {
        let debouncer = Debouncer::new(Duration::from_millis(100));
        let done = Arc::new(AtomicUsize::new(0));

        let d = done.clone();
        debouncer.schedule(async move {
            tokio::time::sleep(Duration::from_millis(1000)).await;
            d.fetch_add(1, Ordering::SeqCst);
        });

        // first action is now running its long body
        tokio::time::sleep(Duration::from_millis(200)).await;
        debouncer.schedule(async {});

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(done.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_schedules_run_one_action() {
        let debouncer = Arc::new(Debouncer::new(Duration::from_millis(50)));
        let count = Arc::new(AtomicUsize::new(0));

        let mut tasks = Vec::new();
        for _ in 0..16 {
            let debouncer = debouncer.clone();
            let count = count.clone();
            tasks.push(tokio::spawn(async move {
                debouncer.schedule(async move {
                    count.fetch_add(1, Ordering::SeqCst);
                });
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_after_poisoned_lock() {
        let debouncer = Debouncer::new(Duration::from_millis(100));
        let count = Arc::new(AtomicUsize::new(0));

        let c = count.clone();
        debouncer.schedule(async move {
            c.fetch_add(1, Ordering::SeqCst);
        });

        let poisoned = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _slot = debouncer.pending.lock().unwrap();
            panic!("poison the slot");
        }));
        assert!(poisoned.is_err());
        assert!(debouncer.pending.is_poisoned());

        assert!(debouncer.is_pending());
        debouncer.cancel();

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel() {
        let debouncer = Debouncer::new(Duration::from_millis(100));
        let count = Arc::new(AtomicUsize::new(0));

        let c = count.clone();
        debouncer.schedule(async move {
            c.fetch_add(1, Ordering::SeqCst);
        });
        debouncer.cancel();

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
