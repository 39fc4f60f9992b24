use std::sync::Arc;

use crate::config::ClientConfig;
use crate::core::session::SessionClient;
use crate::people::PeopleProvider;

/// Shared client context: one HTTP session plus the configuration every
/// provider reads at construction time.
#[derive(Debug)]
pub struct XblClient {
    session: Arc<SessionClient>,
    config: ClientConfig,
}

impl XblClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            session: Arc::new(SessionClient::new()),
            config,
        }
    }

    pub fn session(&self) -> &Arc<SessionClient> {
        &self.session
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Builds a people/friends provider over this client's session.
    pub fn people(&self) -> PeopleProvider {
        PeopleProvider::new(self)
    }
}

impl Default for XblClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}
