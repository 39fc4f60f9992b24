use serde::{Deserialize, Serialize};

pub const SOCIAL_URL: &str = "https://social.xboxlive.com";
pub const PEOPLE_URL: &str = "https://peoplehub.xboxlive.com";
pub const DEFAULT_LOCALE: &str = "en-US";

/// Client-wide settings shared by every provider.
///
/// The host fields exist so tests can point the client at a mock server;
/// production callers keep the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// BCP 47 locale injected into the `Accept-Language` header.
    pub locale: String,

    /// Base URL of the social host (summary endpoints).
    pub social_url: String,

    /// Base URL of the peoplehub host (friends/recommendations endpoints).
    pub people_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            social_url: SOCIAL_URL.to_string(),
            people_url: PEOPLE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_locale(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            ..Self::default()
        }
    }
}
