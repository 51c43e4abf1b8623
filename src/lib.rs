//! `retry-until-timeout` retries an async operation until it succeeds or a
//! wall-clock budget elapses.
//!
//! One control-flow helper, in two flavors:
//! - [`retry_until_timeout`] — default 15 s budget
//! - [`retry_with_options`] — explicit budget via [`RetryOptions`]
//!
//! Between failed attempts the loop sleeps `100 ms + elapsed / 10`, so the
//! pause grows with the time already spent. The deadline is evaluated only
//! after a failed attempt returns: in-flight attempts are never aborted, and
//! once the budget is spent the last attempt's error is propagated verbatim.

mod options;
mod retry;

pub use options::RetryOptions;
pub use retry::{retry_until_timeout, retry_with_options};

/// Default retry budget in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;
