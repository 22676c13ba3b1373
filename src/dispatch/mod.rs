//! Budget enforcement for callers that drive a profile against a remote model.
//!
//! [`Dispatcher`] runs one async operation per item with bounded concurrency,
//! paced starts and retry with backoff, all taken from a profile's
//! [`RateLimits`]. It performs no I/O of its own.

mod backoff;
mod limits;
mod pacer;

pub use backoff::ExponentialBackoff;
pub use limits::{LimitOverrides, RateLimits};
pub use pacer::RequestPacer;

use std::future::Future;
use std::time::Duration;

use futures::{StreamExt, stream};

/// Classifies operation errors for the retry loop.
pub trait Retryable {
    fn is_retryable(&self) -> bool;

    fn retry_after(&self) -> Option<Duration> {
        None
    }
}

impl Retryable for crate::Error {
    fn is_retryable(&self) -> bool {
        crate::Error::is_retryable(self)
    }

    fn retry_after(&self) -> Option<Duration> {
        crate::Error::retry_after(self)
    }
}

#[derive(Debug)]
pub struct Dispatcher {
    limits: RateLimits,
    backoff: ExponentialBackoff,
    pacer: RequestPacer,
    timeout: Option<Duration>,
}

impl Dispatcher {
    pub fn new(limits: RateLimits) -> crate::Result<Self> {
        limits.validate()?;
        Ok(Self {
            limits,
            backoff: ExponentialBackoff::default(),
            pacer: RequestPacer::for_limits(&limits),
            timeout: None,
        })
    }

    pub fn with_backoff(mut self, backoff: ExponentialBackoff) -> Self {
        self.backoff = backoff;
        self
    }

    /// Bound each attempt; an elapsed attempt counts as a retryable failure.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn limits(&self) -> &RateLimits {
        &self.limits
    }

    /// Run `operation` until it succeeds, fails with a non-retryable error, or
    /// uses up `max_retries`.
    pub async fn call<F, Fut, T, E>(&self, mut operation: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Retryable + From<crate::Error>,
    {
        let mut attempts = 0;
        loop {
            self.pacer.acquire().await;

            let outcome = match self.timeout {
                Some(limit) => match tokio::time::timeout(limit, operation()).await {
                    Ok(result) => result,
                    Err(_elapsed) => Err(E::from(crate::Error::Timeout(limit))),
                },
                None => operation().await,
            };

            let error = match outcome {
                Ok(value) => return Ok(value),
                Err(error) => error,
            };

            attempts += 1;
            if attempts > self.limits.max_retries || !error.is_retryable() {
                return Err(error);
            }

            let delay = self.backoff.delay_for(attempts);
            let wait = error.retry_after().map_or(delay, |after| after.max(delay));
            tracing::warn!(
                attempt = attempts,
                max_retries = self.limits.max_retries,
                wait_ms = wait.as_millis() as u64,
                "retrying after retryable failure"
            );
            tokio::time::sleep(wait).await;
        }
    }

    /// Run `operation` over every item with at most `max_async_workers` in
    /// flight. Results come back in input order.
    pub async fn run<I, F, Fut, T, E>(&self, items: Vec<I>, operation: F) -> Vec<Result<T, E>>
    where
        I: Clone,
        F: Fn(I) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Retryable + From<crate::Error>,
    {
        let total = items.len();
        let operation = &operation;

        tracing::debug!(
            items = total,
            workers = self.limits.max_async_workers,
            requests_per_minute = self.limits.requests_per_minute,
            "dispatching batch"
        );

        stream::iter(items)
            .map(|item| self.call(move || operation(item.clone())))
            .buffered(self.limits.max_async_workers)
            .collect()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

    fn fast_limits(max_retries: u32, workers: usize) -> RateLimits {
        RateLimits::new(60_000, max_retries, workers)
    }

    fn quick_backoff() -> ExponentialBackoff {
        ExponentialBackoff::new(Duration::from_millis(10), Duration::from_millis(100), 2.0)
            .with_jitter(0.0)
    }

    #[test]
    fn test_new_rejects_invalid_limits() {
        assert!(Dispatcher::new(RateLimits::new(0, 1, 1)).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_call_retries_transient_errors() {
        let dispatcher = Dispatcher::new(fast_limits(2, 1))
            .unwrap()
            .with_backoff(quick_backoff());
        let calls = AtomicU32::new(0);

        let result: Result<&str, Error> = dispatcher
            .call(|| {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if n < 2 {
                        Err(Error::RateLimit { retry_after: None })
                    } else {
                        Ok("answer")
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), "answer");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_call_gives_up_after_max_retries() {
        let dispatcher = Dispatcher::new(fast_limits(1, 1))
            .unwrap()
            .with_backoff(quick_backoff());
        let calls = AtomicU32::new(0);

        let result: Result<(), Error> = dispatcher
            .call(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                async {
                    Err(Error::Api {
                        message: "unavailable".into(),
                        status: Some(503),
                    })
                }
            })
            .await;

        assert!(matches!(result, Err(Error::Api { status: Some(503), .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_call_does_not_retry_permanent_errors() {
        let dispatcher = Dispatcher::new(fast_limits(4, 1)).unwrap();
        let calls = AtomicU32::new(0);

        let result: Result<(), Error> = dispatcher
            .call(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(Error::InvalidRequest("bad prompt".into())) }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_call_honours_retry_after() {
        let dispatcher = Dispatcher::new(fast_limits(1, 1))
            .unwrap()
            .with_backoff(quick_backoff());
        let calls = AtomicU32::new(0);
        let start = tokio::time::Instant::now();

        let result: Result<u8, Error> = dispatcher
            .call(|| {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if n == 0 {
                        Err(Error::RateLimit {
                            retry_after: Some(Duration::from_secs(30)),
                        })
                    } else {
                        Ok(1)
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), 1);
        assert!(start.elapsed() >= Duration::from_secs(30));
    }

    #[tokio::test(start_paused = true)]
    async fn test_call_times_out_slow_attempts() {
        let dispatcher = Dispatcher::new(fast_limits(0, 1))
            .unwrap()
            .with_timeout(Duration::from_secs(5));

        let result: Result<(), Error> = dispatcher
            .call(|| async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(())
            })
            .await;

        assert!(matches!(result, Err(Error::Timeout(d)) if d == Duration::from_secs(5)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_spaces_request_starts() {
        let limits = RateLimits::new(30, 0, 4);
        let dispatcher = Dispatcher::new(limits).unwrap();
        let starts = Arc::new(std::sync::Mutex::new(Vec::new()));
        let origin = tokio::time::Instant::now();

        let results = dispatcher
            .run((0..6).collect::<Vec<u32>>(), |n| {
                let starts = Arc::clone(&starts);
                async move {
                    starts.lock().unwrap().push(tokio::time::Instant::now());
                    tokio::time::sleep(Duration::from_millis(500)).await;
                    Ok::<_, Error>(n)
                }
            })
            .await;

        assert!(results.iter().all(Result::is_ok));
        let starts = starts.lock().unwrap().clone();
        assert_eq!(starts.len(), 6);
        assert_eq!(starts[0], origin);
        for pair in starts.windows(2) {
            assert!(pair[1] - pair[0] >= limits.request_interval());
        }
        assert_eq!(limits.request_interval(), Duration::from_secs(2));
        assert!(origin.elapsed() >= Duration::from_secs(10));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_preserves_order_and_bounds_workers() {
        let dispatcher = Dispatcher::new(fast_limits(0, 3)).unwrap();
        let in_flight = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        let items: Vec<u64> = (0..10).collect();
        let results = dispatcher
            .run(items, |n| {
                let in_flight = Arc::clone(&in_flight);
                let peak = Arc::clone(&peak);
                async move {
                    let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(100 - n * 5)).await;
                    in_flight.fetch_sub(1, Ordering::SeqCst);
                    Ok::<_, Error>(n * 2)
                }
            })
            .await;

        let values: Vec<u64> = results.into_iter().map(|r| r.unwrap()).collect();
        assert_eq!(values, (0..10).map(|n| n * 2).collect::<Vec<_>>());
        assert!(peak.load(Ordering::SeqCst) <= 3);
    }
}
