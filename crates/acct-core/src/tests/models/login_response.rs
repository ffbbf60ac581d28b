use crate::{Credential, Game, GamePlatform, GUEST_PROVIDER, LoginResponse, PlayerRecord, User};

use googletest::prelude::*;

fn login(provider: &str) -> LoginResponse {
    LoginResponse {
        access_token: "fresh-token".into(),
        user: User {
            id: "u1".into(),
            is_guest: true,
            ..User::default()
        },
        player: PlayerRecord {
            id: "p1".into(),
            access_token: "stale-token".into(),
            ..PlayerRecord::default()
        },
        credential: Credential {
            id: "c1".into(),
            provider: provider.into(),
            display_text: "Alice".into(),
        },
        game: Game {
            id: "g1".into(),
            bundle_id: "com.studio.game.a".into(),
            name: Some("Game A".into()),
        },
        game_platform: GamePlatform {
            id: "gp1".into(),
            platform: Some("android".into()),
            os: Some("android-14".into()),
        },
    }
}

#[test]
fn given_login_response_when_into_account_then_game_fields_are_flattened() {
    // When
    let account = login("google").into_account();

    // Then
    let player = account.player.as_ref().unwrap();
    assert_that!(player.access_token.as_str(), eq("fresh-token"));
    assert_that!(player.game_id.as_str(), eq("g1"));
    assert_that!(player.bundle_id.as_str(), eq("com.studio.game.a"));
    assert_that!(player.game_platform_id.as_str(), eq("gp1"));
    assert_that!(player.game_platform.as_deref(), some(eq("android")));
    assert_that!(player.game_os.as_deref(), some(eq("android-14")));
    assert_that!(player.user_id.as_str(), eq("u1"));
    assert_that!(account.player_accounts.len(), eq(1));
}

#[test]
fn given_registered_credential_when_into_account_then_guest_flag_recomputed() {
    let account = login("google").into_account();

    assert_that!(account.is_guest, eq(false));
    assert_that!(account.user.is_guest, eq(false));
}

#[test]
fn given_device_credential_when_into_account_then_guest() {
    let account = login(GUEST_PROVIDER).into_account();

    assert_that!(account.is_guest, eq(true));
    assert_that!(account.is_recent, eq(false));
}

#[test]
fn given_backend_json_when_deserialized_then_login_response_reads_nested_objects() {
    let json = r#"{
        "accessToken": "t",
        "user": {"id": "u1", "nickname": "Al"},
        "player": {"id": "p1"},
        "credential": {"provider": "apple"},
        "game": {"id": "g1", "bundleId": "game.a"},
        "gamePlatform": {"id": "gp1", "platform": "ios", "os": "ios-18"},
        "serverTime": 12345
    }"#;

    let response: LoginResponse = serde_json::from_str(json).unwrap();
    let player = response.into_account().player.unwrap();

    assert_that!(player.bundle_id.as_str(), eq("game.a"));
}
