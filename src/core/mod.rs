pub mod ratelimit;
pub mod session;

pub use ratelimit::{BucketLimits, RateLimiter};
pub use session::SessionClient;

pub use crate::utils::error::Result;
