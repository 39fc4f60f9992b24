pub mod models;

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use serde_json::json;

use crate::client::XblClient;
use crate::config::DEFAULT_LOCALE;
use crate::core::ratelimit::BucketLimits;
use crate::core::session::SessionClient;
use crate::utils::error::Result;

pub use models::{PeopleDecoration, PeopleResponse, PeopleSummaryResponse, Person};

const CONTRACT_VERSION_HEADER: &str = "x-xbl-contract-version";
const SEPARATOR: &str = ",";

/// Rate-limit bucket shared by the social-host summary endpoints. The
/// peoplehub host is not throttled by this provider.
pub const READ_BUCKET: &str = "read";
const READ_LIMITS: BucketLimits = BucketLimits {
    burst: 10,
    sustain: 30,
};

const DEFAULT_PEOPLE_DECORATIONS: [PeopleDecoration; 4] = [
    PeopleDecoration::PreferredColor,
    PeopleDecoration::Detail,
    PeopleDecoration::MultiplayerSummary,
    PeopleDecoration::PresenceDetail,
];
const DEFAULT_RECOMMENDATION_DECORATIONS: [PeopleDecoration; 1] = [PeopleDecoration::Detail];

/// Access friend lists and people summaries of the own profile and others.
///
/// Contract v7 provides the full relationship fields (isFriend,
/// canBeFriended, ...) but only works for the caller's own people queries;
/// cross-user queries must use v5 because v7 returns an empty people list for
/// other users. Both header templates are derived once at construction.
#[derive(Debug)]
pub struct PeopleProvider {
    session: Arc<SessionClient>,
    social_url: String,
    people_url: String,
    headers_v7: HeaderMap,
    headers_v5: HeaderMap,
    headers_social: HeaderMap,
}

fn contract_headers(version: &'static str, locale: Option<&HeaderValue>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTRACT_VERSION_HEADER, HeaderValue::from_static(version));
    if let Some(locale) = locale {
        headers.insert(ACCEPT_LANGUAGE, locale.clone());
    }
    headers
}

fn decoration_segment(fields: &[PeopleDecoration], default: &[PeopleDecoration]) -> String {
    let fields = if fields.is_empty() { default } else { fields };
    fields
        .iter()
        .map(PeopleDecoration::as_str)
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

impl PeopleProvider {
    pub fn new(client: &XblClient) -> Self {
        // The locale comes from config, not caller input; a value that is not
        // a valid header falls back to the default locale.
        let locale = HeaderValue::from_str(&client.config().locale)
            .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_LOCALE));

        let session = Arc::clone(client.session());
        session.limiter().register(READ_BUCKET, READ_LIMITS);

        Self {
            session,
            social_url: client.config().social_url.clone(),
            people_url: client.config().people_url.clone(),
            headers_v7: contract_headers("7", Some(&locale)),
            headers_v5: contract_headers("5", Some(&locale)),
            headers_social: contract_headers("2", None),
        }
    }

    async fn get_people(&self, url: &str, headers: &HeaderMap) -> Result<PeopleResponse> {
        let response = self.session.get(url, headers, None).await?;
        let text = response.error_for_status()?.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn get_summary(&self, url: &str) -> Result<PeopleSummaryResponse> {
        let response = self
            .session
            .get(url, &self.headers_social, Some(READ_BUCKET))
            .await?;
        let text = response.error_for_status()?.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Get the friend list of the own profile.
    ///
    /// An empty `decoration_fields` requests preferredColor, detail,
    /// multiplayerSummary and presenceDetail.
    pub async fn get_friends_own(
        &self,
        decoration_fields: &[PeopleDecoration],
    ) -> Result<PeopleResponse> {
        let decoration = decoration_segment(decoration_fields, &DEFAULT_PEOPLE_DECORATIONS);
        let url = format!(
            "{}/users/me/people/friends/decoration/{}",
            self.people_url, decoration
        );
        self.get_people(&url, &self.headers_v7).await
    }

    /// Get the friend list of a user by their XUID.
    pub async fn get_friends_by_xuid(
        &self,
        xuid: &str,
        decoration_fields: &[PeopleDecoration],
    ) -> Result<PeopleResponse> {
        let decoration = decoration_segment(decoration_fields, &DEFAULT_PEOPLE_DECORATIONS);
        let url = format!(
            "{}/users/xuid({})/people/social/decoration/{}",
            self.people_url, xuid, decoration
        );
        // v5 headers here: contract v7 returns an empty people list for
        // users other than the caller.
        self.get_people(&url, &self.headers_v5).await
    }

    /// Get people metadata for a batch of XUIDs. No client-side cap is
    /// applied to the list length; the service enforces its own limits.
    pub async fn get_friends_own_batch(
        &self,
        xuids: &[&str],
        decoration_fields: &[PeopleDecoration],
    ) -> Result<PeopleResponse> {
        let decoration = decoration_segment(decoration_fields, &DEFAULT_PEOPLE_DECORATIONS);
        let url = format!(
            "{}/users/me/people/batch/decoration/{}",
            self.people_url, decoration
        );
        let response = self
            .session
            .post_json(&url, &json!({ "xuids": xuids }), &self.headers_v7)
            .await?;
        let text = response.error_for_status()?.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Get recommended friends. An empty `decoration_fields` requests the
    /// detail decoration only.
    pub async fn get_friend_recommendations(
        &self,
        decoration_fields: &[PeopleDecoration],
    ) -> Result<PeopleResponse> {
        let decoration = decoration_segment(decoration_fields, &DEFAULT_RECOMMENDATION_DECORATIONS);
        let url = format!(
            "{}/users/me/people/recommendations/decoration/{}",
            self.people_url, decoration
        );
        self.get_people(&url, &self.headers_v7).await
    }

    /// Get the friend-list summary of the own profile.
    pub async fn get_friends_summary_own(&self) -> Result<PeopleSummaryResponse> {
        let url = format!("{}/users/me/summary", self.social_url);
        self.get_summary(&url).await
    }

    /// Get the friend-list summary of a user by XUID.
    pub async fn get_friends_summary_by_xuid(&self, xuid: &str) -> Result<PeopleSummaryResponse> {
        let url = format!("{}/users/xuid({})/summary", self.social_url, xuid);
        self.get_summary(&url).await
    }

    /// Get the friend-list summary of a user by gamertag.
    pub async fn get_friends_summary_by_gamertag(
        &self,
        gamertag: &str,
    ) -> Result<PeopleSummaryResponse> {
        let url = format!("{}/users/gt({})/summary", self.social_url, gamertag);
        self.get_summary(&url).await
    }
}
