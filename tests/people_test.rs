use anyhow::Result;
use httpmock::prelude::*;
use serde_json::{json, Value};
use xbl_client::{ClientConfig, PeopleDecoration, XblClient, XblError};

fn test_client(server: &MockServer) -> XblClient {
    XblClient::new(ClientConfig {
        locale: "en-US".to_string(),
        social_url: server.base_url(),
        people_url: server.base_url(),
    })
}

/// Person entry as contract v7 returns it, relationship fields included.
fn person_json(xuid: &str, gamertag: &str) -> Value {
    json!({
        "xuid": xuid,
        "isFavorite": false,
        "isFollowingCaller": true,
        "isFollowedByCaller": true,
        "isIdentityShared": false,
        "addedDateTimeUtc": "2023-04-25T16:00:00Z",
        "displayName": gamertag,
        "realName": "",
        "displayPicRaw": "https://images-eds-ssl.xboxlive.com/image?url=abc",
        "showUserAsAvatar": "0",
        "gamertag": gamertag,
        "gamerScore": "12345",
        "modernGamertag": gamertag,
        "modernGamertagSuffix": "",
        "uniqueModernGamertag": gamertag,
        "xboxOneRep": "GoodPlayer",
        "presenceState": "Offline",
        "presenceText": "Offline",
        "isBroadcasting": false,
        "isQuarantined": false,
        "isXbox360Gamerpic": false,
        "lastSeenDateTimeUtc": "2023-05-01T08:30:00Z",
        "preferredColor": {
            "primaryColor": "107c10",
            "secondaryColor": "102b14",
            "tertiaryColor": "155715"
        },
        "detail": {
            "accountTier": "Gold",
            "isVerified": false,
            "watermarks": [],
            "blocked": false,
            "mute": false,
            "followerCount": 5,
            "followingCount": 8,
            "hasGamePass": true,
            "isFriend": true
        },
        "multiplayerSummary": {
            "inParty": 0,
            "joinableActivities": [],
            "partyDetails": []
        },
        "colorTheme": "dark",
        "preferredFlag": "",
        "preferredPlatforms": [],
        "friendedDateTimeUtc": "2023-04-25T16:00:00Z",
        "isFriend": true
    })
}

/// Person entry as contract v5 returns it: no isFriend, no friend-request
/// flags, no detail relationship fields.
fn person_json_v5(xuid: &str, gamertag: &str) -> Value {
    json!({
        "xuid": xuid,
        "isFavorite": false,
        "isFollowingCaller": false,
        "isFollowedByCaller": true,
        "isIdentityShared": false,
        "realName": "",
        "displayPicRaw": "https://images-eds-ssl.xboxlive.com/image?url=def",
        "showUserAsAvatar": "0",
        "gamertag": gamertag,
        "gamerScore": "9001",
        "modernGamertag": gamertag,
        "modernGamertagSuffix": "",
        "uniqueModernGamertag": gamertag,
        "xboxOneRep": "GoodPlayer",
        "presenceState": "Offline",
        "presenceText": "Offline",
        "isBroadcasting": false,
        "isQuarantined": false,
        "isXbox360Gamerpic": false,
        "colorTheme": "dark",
        "preferredFlag": "",
        "preferredPlatforms": []
    })
}

fn summary_json() -> Value {
    json!({
        "targetFollowingCount": 87,
        "targetFollowerCount": 19,
        "isCallerFollowingTarget": false,
        "isTargetFollowingCaller": false,
        "hasCallerMarkedTargetAsFavorite": false,
        "hasCallerMarkedTargetAsIdentityShared": false,
        "legacyFriendStatus": "None",
        "availablePeopleSlots": 913,
        "recentChangeCount": 0,
        "watermark": "5248264408914225648",
        "isFriend": false
    })
}

#[tokio::test]
async fn friends_own_uses_v7_and_default_decorations() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/users/me/people/friends/decoration/preferredColor,detail,multiplayerSummary,presenceDetail")
            .header("x-xbl-contract-version", "7")
            .header("accept-language", "en-US");
        then.status(200).json_body(json!({
            "people": [
                person_json("2669321029139235", "VolekTheFNDwarf"),
                person_json("2535428504476914", "e"),
            ]
        }));
    });

    let client = test_client(&server);
    let ret = client.people().get_friends_own(&[]).await?;

    assert_eq!(ret.people.len(), 2);
    assert_eq!(ret.people[0].gamertag, "VolekTheFNDwarf");
    assert_eq!(ret.people[0].is_friend, Some(true));
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn friends_own_preserves_caller_decoration_order() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/users/me/people/friends/decoration/detail,preferredColor")
            .header("x-xbl-contract-version", "7");
        then.status(200).json_body(json!({ "people": [] }));
    });

    let client = test_client(&server);
    let ret = client
        .people()
        .get_friends_own(&[PeopleDecoration::Detail, PeopleDecoration::PreferredColor])
        .await?;

    assert!(ret.people.is_empty());
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn friends_by_xuid_uses_v5_headers() -> Result<()> {
    let server = MockServer::start();
    // Mock matches only on contract v5; a v7 request would not hit it.
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/users/xuid(2669321029139235)/people/social/decoration/preferredColor,detail,multiplayerSummary,presenceDetail")
            .header("x-xbl-contract-version", "5");
        then.status(200).json_body(json!({
            "people": [person_json_v5("2669321029139235", "VolekTheFNDwarf")]
        }));
    });

    let client = test_client(&server);
    let ret = client
        .people()
        .get_friends_by_xuid("2669321029139235", &[])
        .await?;

    assert_eq!(ret.people.len(), 1);
    assert_eq!(ret.people[0].gamertag, "VolekTheFNDwarf");
    // Missing under contract v5, must decode as absent rather than false.
    assert_eq!(ret.people[0].is_friend, None);
    assert_eq!(ret.people[0].is_friend_request_sent, None);
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn batch_posts_the_supplied_xuids() -> Result<()> {
    let server = MockServer::start();
    let xuids = ["271958441785640", "277923030577271", "266932102913935"];
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/users/me/people/batch/decoration/preferredColor,detail,multiplayerSummary,presenceDetail")
            .header("x-xbl-contract-version", "7")
            .json_body(json!({ "xuids": xuids }));
        then.status(200).json_body(json!({
            "people": [
                person_json(xuids[0], "GamerOne"),
                person_json(xuids[1], "GamerTwo"),
                person_json(xuids[2], "GamerThree"),
            ]
        }));
    });

    let client = test_client(&server);
    let ret = client.people().get_friends_own_batch(&xuids, &[]).await?;

    assert_eq!(ret.people.len(), 3);
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn recommendations_default_to_detail_decoration() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/users/me/people/recommendations/decoration/detail")
            .header("x-xbl-contract-version", "7");
        then.status(200).json_body(json!({
            "people": [person_json("2669321029139235", "VolekTheFNDwarf")],
            "recommendationSummary": {
                "friendOfFriend": 20,
                "follower": 3,
                "steamFriend": 0,
                "promoteSuggestions": false,
                "communitySuggestion": 0
            }
        }));
    });

    let client = test_client(&server);
    let ret = client.people().get_friend_recommendations(&[]).await?;

    let summary = ret.recommendation_summary.expect("summary present");
    assert_eq!(summary.friend_of_friend, Some(20));
    assert_eq!(summary.facebook_friend, None);
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn summary_own() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/users/me/summary")
            .header("x-xbl-contract-version", "2");
        then.status(200).json_body(summary_json());
    });

    let client = test_client(&server);
    let ret = client.people().get_friends_summary_own().await?;

    assert_eq!(ret.target_following_count, 87);
    assert_eq!(ret.target_follower_count, 19);
    assert!(!ret.is_friend);
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn summary_by_xuid() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/users/xuid(2669321029139235)/summary");
        then.status(200).json_body(summary_json());
    });

    let client = test_client(&server);
    let ret = client
        .people()
        .get_friends_summary_by_xuid("2669321029139235")
        .await?;

    assert_eq!(ret.legacy_friend_status, "None");
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn summary_by_gamertag() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/users/gt(e)/summary");
        then.status(200).json_body(summary_json());
    });

    let client = test_client(&server);
    let ret = client.people().get_friends_summary_by_gamertag("e").await?;

    assert_eq!(ret.available_people_slots, Some(913));
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn summary_with_absent_optional_fields() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/users/me/summary");
        then.status(200).json_body(json!({
            "targetFollowingCount": 0,
            "targetFollowerCount": 0,
            "isCallerFollowingTarget": false,
            "isTargetFollowingCaller": false,
            "hasCallerMarkedTargetAsFavorite": false,
            "hasCallerMarkedTargetAsIdentityShared": false,
            "legacyFriendStatus": "None",
            "isFriend": false
        }));
    });

    let client = test_client(&server);
    let ret = client.people().get_friends_summary_own().await?;

    assert_eq!(ret.available_people_slots, None);
    assert_eq!(ret.watermark, None);
    Ok(())
}

#[tokio::test]
async fn non_2xx_status_is_a_transport_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path_contains("/users/me/people/friends/");
        then.status(500).body("internal error");
    });

    let client = test_client(&server);
    let err = client.people().get_friends_own(&[]).await.unwrap_err();

    assert!(matches!(err, XblError::Http(_)), "got: {err}");
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path_contains("/users/me/people/friends/");
        // 2xx but the required `people` field is missing.
        then.status(200).json_body(json!({ "unexpected": true }));
    });

    let client = test_client(&server);
    let err = client.people().get_friends_own(&[]).await.unwrap_err();

    assert!(matches!(err, XblError::Decode(_)), "got: {err}");
}

#[tokio::test]
async fn summary_calls_consume_the_read_bucket() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/users/me/summary");
        then.status(200).json_body(summary_json());
    });

    let client = test_client(&server);
    let people = client.people();

    // Burst limit is 10 per window; the 11th call must fail before it
    // reaches the network.
    for _ in 0..10 {
        people.get_friends_summary_own().await?;
    }
    let err = people.get_friends_summary_own().await.unwrap_err();
    assert!(matches!(err, XblError::RateLimitExhausted { .. }), "got: {err}");
    mock.assert_hits(10);
    Ok(())
}

#[tokio::test]
async fn peoplehub_calls_are_not_throttled() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/users/me/people/recommendations/decoration/detail");
        then.status(200).json_body(json!({ "people": [] }));
    });

    let client = test_client(&server);
    let people = client.people();
    for _ in 0..12 {
        people.get_friend_recommendations(&[]).await?;
    }
    mock.assert_hits(12);
    Ok(())
}
