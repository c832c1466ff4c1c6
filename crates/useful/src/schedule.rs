use std::time::Duration;

use tokio::task::JoinHandle;

/// ## Summary
/// Runs `callback` once on the current `tokio` runtime, no earlier than
/// `duration` from now.
///
/// Dropping the returned handle detaches the task; it still runs. Ordering
/// relative to other delayed callbacks is not guaranteed.
///
/// ## Panics
/// Panics if called outside a `tokio` runtime.
pub fn delay<F>(duration: Duration, callback: F) -> JoinHandle<()>
where
    F: FnOnce() + Send + 'static,
{
    tokio::spawn(async move {
        tokio::time::sleep(duration).await;
        tracing::trace!(?duration, "Running delayed callback");
        callback();
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tokio::time::Instant;

    use super::*;

    #[test_log::test(tokio::test)]
    async fn runs_once_after_duration() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let started = Instant::now();

        delay(Duration::from_millis(20), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .await
        .expect("callback task should not panic");

        assert!(started.elapsed() >= Duration::from_millis(20));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test_log::test(tokio::test(start_paused = true))]
    async fn does_not_run_early() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let handle = delay(Duration::from_secs(60), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_secs(59)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        handle.await.expect("callback task should not panic");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
