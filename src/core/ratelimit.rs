use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::utils::error::{Result, XblError};

/// Short window the service uses for burst accounting.
pub const BURST_WINDOW: Duration = Duration::from_secs(15);
/// Long window the service uses for sustained-rate accounting.
pub const SUSTAIN_WINDOW: Duration = Duration::from_secs(300);

/// Per-bucket request limits, one count per window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketLimits {
    pub burst: u32,
    pub sustain: u32,
}

#[derive(Debug)]
struct Window {
    started: Instant,
    count: u32,
}

impl Window {
    fn new() -> Self {
        Self {
            started: Instant::now(),
            count: 0,
        }
    }

    /// Counts one request against this window, resetting it first if the
    /// period has elapsed. Returns the count that broke the limit on failure.
    fn consume(&mut self, period: Duration, limit: u32) -> std::result::Result<(), u32> {
        if self.started.elapsed() >= period {
            self.started = Instant::now();
            self.count = 0;
        }
        if self.count >= limit {
            return Err(self.count);
        }
        self.count += 1;
        Ok(())
    }
}

#[derive(Debug)]
struct Bucket {
    limits: BucketLimits,
    burst: Window,
    sustain: Window,
}

/// Named request-count buckets shared across one client session.
///
/// Exhaustion is an error, not a wait: callers that outrun a window get
/// `XblError::RateLimitExhausted` before any request is sent. Backoff is the
/// caller's concern.
#[derive(Debug, Default)]
pub struct RateLimiter {
    buckets: Mutex<HashMap<String, Bucket>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a bucket if it does not exist yet. Re-registering an
    /// existing bucket keeps its current counters.
    pub fn register(&self, name: &str, limits: BucketLimits) {
        let mut buckets = self.buckets.lock().unwrap_or_else(|e| e.into_inner());
        buckets.entry(name.to_string()).or_insert_with(|| Bucket {
            limits,
            burst: Window::new(),
            sustain: Window::new(),
        });
    }

    /// Counts one request against the named bucket's burst and sustain
    /// windows, failing fast when either is already full.
    pub fn try_consume(&self, name: &str) -> Result<()> {
        let mut buckets = self.buckets.lock().unwrap_or_else(|e| e.into_inner());
        let bucket = buckets.get_mut(name).ok_or_else(|| XblError::Config {
            message: format!("unknown rate limit bucket '{name}'"),
        })?;

        if let Err(requests) = bucket.burst.consume(BURST_WINDOW, bucket.limits.burst) {
            return Err(XblError::RateLimitExhausted {
                bucket: name.to_string(),
                requests,
                limit: bucket.limits.burst,
                window_secs: BURST_WINDOW.as_secs(),
            });
        }
        if let Err(requests) = bucket.sustain.consume(SUSTAIN_WINDOW, bucket.limits.sustain) {
            return Err(XblError::RateLimitExhausted {
                bucket: name.to_string(),
                requests,
                limit: bucket.limits.sustain,
                window_secs: SUSTAIN_WINDOW.as_secs(),
            });
        }
        Ok(())
    }
}
