use std::future::Future;
use std::time::{Duration, Instant};

use tokio::time::sleep;

use crate::RetryOptions;

/// Retries an async operation until it succeeds or the default 15 s budget
/// elapses.
///
/// The operation receives the zero-based attempt index (the first call gets
/// `0`), so it can vary its behavior per attempt — logging, jitter, trying an
/// alternate endpoint.
///
/// The deadline is evaluated only after a failed attempt completes, never
/// before or during one. An attempt that outlives the budget is not aborted;
/// if the operation should give up after a certain time, implement that
/// inside the operation itself, e.g. with `tokio::time::timeout`.
///
/// On terminal failure the last attempt's error is returned as-is. There is
/// no separate timeout error: the caller sees whatever the operation failed
/// with, even when the failure had nothing to do with time.
///
/// # Example
///
/// ```no_run
/// use retry_until_timeout::retry_until_timeout;
///
/// # async fn connect() -> Result<(), std::io::Error> { Ok(()) }
/// # async fn run() -> Result<(), std::io::Error> {
/// let conn = retry_until_timeout(|attempt| async move {
///     println!("connecting (attempt {attempt})");
///     connect().await
/// })
/// .await?;
/// # Ok(()) }
/// ```
pub async fn retry_until_timeout<F, Fut, T, E>(op: F) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    retry_with_options(op, RetryOptions::default()).await
}

/// Same as [`retry_until_timeout`], with an explicit time budget.
///
/// A budget of zero still runs the operation once: the first failure's
/// elapsed time exceeds zero, so that error propagates without a retry.
pub async fn retry_with_options<F, Fut, T, E>(mut op: F, options: RetryOptions) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let timeout = Duration::from_millis(options.timeout_ms);
    let start = Instant::now();
    let mut attempt = 0u32;

    loop {
        let result = op(attempt).await;
        attempt += 1;

        match result {
            Ok(value) => return Ok(value),
            Err(error) => {
                // Strict comparison: elapsed exactly equal to the budget
                // still earns one more retry.
                let elapsed = start.elapsed();
                if elapsed > timeout {
                    return Err(error);
                }

                let delay = backoff_delay(elapsed);

                #[cfg(feature = "tracing")]
                tracing::debug!(
                    attempts = attempt,
                    delay_ms = delay.as_millis() as u64,
                    "attempt failed, retrying after backoff"
                );

                sleep(delay).await;
            }
        }
    }
}

/// Pause before the next attempt: a 100 ms floor plus a tenth of the time
/// already spent. Early retries stay quick while later ones slow down,
/// without any per-call tuning.
pub(crate) fn backoff_delay(elapsed: Duration) -> Duration {
    Duration::from_millis(100) + elapsed / 10
}
