use crate::PlayerRecord;

use googletest::prelude::*;

#[test]
fn given_player_with_token_when_debug_formatted_then_token_is_redacted() {
    let player = PlayerRecord {
        id: "p1".into(),
        access_token: "super-secret-token".into(),
        ..PlayerRecord::default()
    };

    let debug = format!("{player:?}");

    assert_that!(debug, contains_substring("<redacted>"));
    assert!(!debug.contains("super-secret-token"));
}

#[test]
fn given_game_os_field_when_serialized_then_uses_upper_case_os_key() {
    let player = PlayerRecord {
        id: "p1".into(),
        game_os: Some("ios".into()),
        ..PlayerRecord::default()
    };

    let json = serde_json::to_string(&player).unwrap();

    assert_that!(json, contains_substring("\"gameOS\":\"ios\""));
}

#[test]
fn given_lower_case_os_alias_when_deserialized_then_game_os_is_read() {
    let json = r#"{"id":"p1","gameOs":"ios"}"#;

    let player: PlayerRecord = serde_json::from_str(json).unwrap();

    assert_that!(player.game_os.as_deref(), some(eq("ios")));
}
