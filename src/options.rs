use crate::DEFAULT_TIMEOUT_MS;

/// Configures the retry deadline.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RetryOptions {
    /// Total wall-clock budget in milliseconds. A failed attempt is retried
    /// only while the time since the loop started does not exceed this value.
    pub timeout_ms: u64,
}

impl Default for RetryOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl RetryOptions {
    /// Options with an explicit budget in milliseconds.
    pub fn with_timeout_ms(timeout_ms: u64) -> Self {
        Self { timeout_ms }
    }
}
