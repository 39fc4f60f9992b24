pub mod client;
pub mod config;
pub mod core;
pub mod people;
pub mod utils;

pub use client::XblClient;
pub use config::ClientConfig;
pub use crate::core::{BucketLimits, RateLimiter, SessionClient};
pub use people::{PeopleDecoration, PeopleProvider, PeopleResponse, PeopleSummaryResponse};
pub use utils::error::{Result, XblError};
