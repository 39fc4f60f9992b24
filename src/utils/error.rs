use thiserror::Error;

#[derive(Error, Debug)]
pub enum XblError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Response decode failed: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Rate limit exhausted for bucket '{bucket}': {requests} requests in {window_secs}s (limit {limit})")]
    RateLimitExhausted {
        bucket: String,
        requests: u32,
        limit: u32,
        window_secs: u64,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

pub type Result<T> = std::result::Result<T, XblError>;
