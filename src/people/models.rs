use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Optional response sections a caller may request by name.
///
/// The wire token is the camelCase form returned by `as_str`; tokens are
/// joined with `,` into the request path in caller-supplied order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeopleDecoration {
    Suggestion,
    RecentPlayer,
    Follower,
    PreferredColor,
    Detail,
    MultiplayerSummary,
    PresenceDetail,
    TitlePresence,
    TitleSummary,
    PresenceTitleIds,
    CommunityManagerTitles,
    SocialManager,
    Broadcast,
    TournamentSummary,
    Avatar,
}

impl PeopleDecoration {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Suggestion => "suggestion",
            Self::RecentPlayer => "recentPlayer",
            Self::Follower => "follower",
            Self::PreferredColor => "preferredColor",
            Self::Detail => "detail",
            Self::MultiplayerSummary => "multiplayerSummary",
            Self::PresenceDetail => "presenceDetail",
            Self::TitlePresence => "titlePresence",
            Self::TitleSummary => "titleSummary",
            Self::PresenceTitleIds => "presenceTitleIds",
            Self::CommunityManagerTitles => "communityManagerTitles",
            Self::SocialManager => "socialManager",
            Self::Broadcast => "broadcast",
            Self::TournamentSummary => "tournamentSummary",
            Self::Avatar => "avatar",
        }
    }
}

impl fmt::Display for PeopleDecoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Follower/following counts and relationship flags for one target/caller
/// pair, served by the social host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeopleSummaryResponse {
    pub target_following_count: i64,
    pub target_follower_count: i64,
    pub is_caller_following_target: bool,
    pub is_target_following_caller: bool,
    pub has_caller_marked_target_as_favorite: bool,
    pub has_caller_marked_target_as_identity_shared: bool,
    pub legacy_friend_status: String,
    pub available_people_slots: Option<i64>,
    pub recent_change_count: Option<i64>,
    pub watermark: Option<String>,
    pub is_friend: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Suggestion {
    #[serde(rename = "Type")]
    pub suggestion_type: Option<String>,
    pub priority: i64,
    pub reasons: Option<String>,
    pub title_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Recommendation {
    #[serde(rename = "Type")]
    pub recommendation_type: String,
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRef {
    pub scid: String,
    pub template_name: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyDetails {
    pub session_ref: SessionRef,
    pub status: String,
    pub visibility: String,
    pub join_restriction: String,
    pub accepted: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiplayerSummary {
    pub in_multiplayer_session: Option<i64>,
    pub in_party: i64,
    #[serde(default)]
    pub joinable_activities: Vec<Value>,
    #[serde(default)]
    pub party_details: Vec<PartyDetails>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentPlayer {
    pub titles: Vec<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Follower {
    pub text: Option<String>,
    pub followed_date_time_utc: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferredColor {
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub tertiary_color: Option<String>,
}

/// Per-device presence entry. This nested object is one of the few the
/// service serves in PascalCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PresenceDetail {
    pub is_broadcasting: bool,
    pub device: String,
    pub device_sub_type: Option<String>,
    pub gameplay_type: Option<String>,
    pub presence_text: String,
    pub state: String,
    pub title_id: String,
    pub title_type: Option<String>,
    pub is_primary: bool,
    pub is_game: bool,
    pub rich_presence_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TitlePresence {
    pub is_currently_playing: bool,
    pub presence_text: Option<String>,
    pub title_name: Option<String>,
    pub title_id: Option<String>,
}

/// Profile detail decoration. Fields past `has_game_pass` only exist under
/// contract v7 and stay `None` on v5 responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Detail {
    pub account_tier: String,
    pub bio: Option<String>,
    pub is_verified: bool,
    pub location: Option<String>,
    pub tenure: Option<String>,
    #[serde(default)]
    pub watermarks: Vec<String>,
    pub blocked: bool,
    pub mute: bool,
    pub follower_count: i64,
    pub following_count: i64,
    pub has_game_pass: bool,
    pub can_be_friended: Option<bool>,
    pub can_be_followed: Option<bool>,
    pub is_friend: Option<bool>,
    pub friend_count: Option<i64>,
    pub is_friend_request_received: Option<bool>,
    pub is_friend_request_sent: Option<bool>,
    pub is_friend_list_shared: Option<bool>,
    pub is_following_caller: Option<bool>,
    pub is_followed_by_caller: Option<bool>,
    pub is_favorite: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialManager {
    pub title_ids: Vec<String>,
    pub pages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Avatar {
    pub update_time_offset: Option<DateTime<Utc>>,
    pub spritesheet_metadata: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedAccount {
    pub network_name: String,
    pub display_name: Option<String>,
    pub show_on_profile: bool,
    pub is_family_friendly: bool,
    pub deeplink: Option<String>,
}

/// One social-graph entry. Identity fields are always present; everything
/// derived from a decoration is optional and absent unless that decoration
/// was requested. `is_friend` and the friend-request flags only exist under
/// contract v7.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub xuid: String,
    pub is_favorite: bool,
    pub is_following_caller: bool,
    pub is_followed_by_caller: bool,
    pub is_identity_shared: bool,
    pub added_date_time_utc: Option<DateTime<Utc>>,
    pub display_name: Option<String>,
    pub real_name: String,
    pub display_pic_raw: String,
    pub show_user_as_avatar: String,
    pub gamertag: String,
    pub gamer_score: String,
    pub modern_gamertag: String,
    pub modern_gamertag_suffix: String,
    pub unique_modern_gamertag: String,
    pub xbox_one_rep: String,
    pub presence_state: String,
    pub presence_text: String,
    pub presence_devices: Option<Value>,
    pub is_broadcasting: bool,
    pub is_cloaked: Option<bool>,
    pub is_quarantined: bool,
    #[serde(rename = "isXbox360Gamerpic")]
    pub is_xbox_360_gamerpic: bool,
    pub last_seen_date_time_utc: Option<DateTime<Utc>>,
    pub suggestion: Option<Suggestion>,
    pub recommendation: Option<Recommendation>,
    pub search: Option<Value>,
    pub title_history: Option<Value>,
    pub multiplayer_summary: Option<MultiplayerSummary>,
    pub recent_player: Option<RecentPlayer>,
    pub follower: Option<Follower>,
    pub preferred_color: Option<PreferredColor>,
    pub presence_details: Option<Vec<PresenceDetail>>,
    pub title_presence: Option<TitlePresence>,
    pub title_summaries: Option<Value>,
    pub presence_title_ids: Option<Vec<String>>,
    pub detail: Option<Detail>,
    pub community_manager_titles: Option<Value>,
    pub social_manager: Option<SocialManager>,
    pub broadcast: Option<Vec<Value>>,
    pub tournament_summary: Option<Value>,
    pub avatar: Option<Avatar>,
    pub linked_accounts: Option<Vec<LinkedAccount>>,
    pub color_theme: String,
    pub preferred_flag: String,
    pub preferred_platforms: Vec<Value>,
    pub friended_date_time_utc: Option<DateTime<Utc>>,
    pub is_friend: Option<bool>,
    pub is_friend_request_received: Option<bool>,
    pub is_friend_request_sent: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSummary {
    pub friend_of_friend: Option<i64>,
    pub facebook_friend: Option<i64>,
    pub phone_contact: Option<i64>,
    pub follower: Option<i64>,
    #[serde(rename = "VIP")]
    pub vip: Option<i64>,
    pub steam_friend: i64,
    pub promote_suggestions: bool,
    pub community_suggestion: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendFinderState {
    pub facebook_opt_in_status: String,
    pub facebook_token_status: String,
    pub phone_opt_in_status: String,
    pub phone_token_status: String,
    pub steam_opt_in_status: String,
    pub steam_token_status: String,
    pub discord_opt_in_status: String,
    pub discord_token_status: String,
    pub instagram_opt_in_status: String,
    pub instagram_token_status: String,
    pub mixer_opt_in_status: String,
    pub mixer_token_status: String,
    pub reddit_opt_in_status: String,
    pub reddit_token_status: String,
    pub twitch_opt_in_status: String,
    pub twitch_token_status: String,
    pub twitter_opt_in_status: String,
    pub twitter_token_status: String,
    pub you_tube_opt_in_status: String,
    pub you_tube_token_status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendRequestSummary {
    pub friend_requests_received_count: i64,
}

/// Peoplehub response: the people list plus whichever aggregate sections the
/// endpoint populates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeopleResponse {
    pub people: Vec<Person>,
    pub recommendation_summary: Option<RecommendationSummary>,
    pub friend_finder_state: Option<FriendFinderState>,
    pub account_link_details: Option<Vec<LinkedAccount>>,
    pub friend_request_summary: Option<FriendRequestSummary>,
}
