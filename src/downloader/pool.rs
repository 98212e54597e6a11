//! Bounded-concurrency execution of one future per item.

use futures::stream::{self, StreamExt};
use std::future::Future;

/// Runs `task` for every item with at most `limit` futures in flight.
///
/// Every item is dispatched: a failing task does not stop the others, and
/// nothing is cancelled. Outputs are returned in completion order.
pub async fn run_bounded<I, F, Fut>(items: I, limit: usize, task: F) -> Vec<Fut::Output>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future,
{
    stream::iter(items)
        .map(task)
        .buffer_unordered(limit.max(1))
        .collect()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_runs_every_item() {
        let mut out = run_bounded(0..20, 3, |i| async move { i * 2 }).await;
        out.sort_unstable();
        assert_eq!(out, (0..20).map(|i| i * 2).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_never_exceeds_limit() {
        let in_flight = AtomicUsize::new(0);
        let peak = AtomicUsize::new(0);

        run_bounded(0..16, 3, |i| {
            let in_flight = &in_flight;
            let peak = &peak;
            async move {
                let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                peak.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(5 + (i % 4) * 3)).await;
                in_flight.fetch_sub(1, Ordering::SeqCst);
            }
        })
        .await;

        assert_eq!(peak.load(Ordering::SeqCst), 3);
        assert_eq!(in_flight.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failures_do_not_stop_siblings() {
        let results = run_bounded(0..6, 2, |i| async move {
            if i == 1 {
                Err(i)
            } else {
                Ok(i)
            }
        })
        .await;

        assert_eq!(results.len(), 6);
        assert_eq!(results.iter().filter(|r| r.is_err()).count(), 1);
    }

    #[tokio::test]
    async fn test_zero_limit_still_progresses() {
        let out = run_bounded(vec!["a"], 0, |s| async move { s }).await;
        assert_eq!(out, vec!["a"]);
    }
}
