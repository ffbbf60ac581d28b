use crate::tests::{GAME_A, game_id_for, registered_record};
use crate::{AccountPayload, CoreError, NativeRecord};

use googletest::prelude::*;

fn raw(player_id: &str, game_id: &str, payload: &str) -> NativeRecord {
    NativeRecord {
        player_id: player_id.to_string(),
        game_id: game_id.to_string(),
        raw_payload: payload.to_string(),
        last_updated_at: 1,
    }
}

#[test]
fn given_encoded_payload_when_decoded_then_matches_original_fields() {
    // Given
    let record = registered_record("u1", "p1", GAME_A, 10);

    // When
    let payload = AccountPayload::decode(&record).unwrap();

    // Then
    assert_that!(payload.user.id.as_str(), eq("u1"));
    assert_that!(payload.player.id.as_str(), eq("p1"));
    assert_that!(payload.player.bundle_id.as_str(), eq(GAME_A));
    assert_that!(payload.credential.provider.as_str(), eq("google"));
}

#[test]
fn given_unknown_fields_when_decoded_then_they_are_ignored() {
    // Given
    let json = r#"{
        "user": {"id": "u1", "level": 42, "badges": ["a"]},
        "player": {"id": "p1", "bundleId": "game.a", "gameId": "g1", "extra": {"x": 1}},
        "credential": {"id": "c1", "provider": "google"},
        "apiVersion": 7
    }"#;
    let record = raw("p1", "g1", json);

    // When
    let result = AccountPayload::decode(&record);

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
fn given_invalid_json_when_decoded_then_malformed_error() {
    let record = raw("p1", "g1", "{not json");

    let result = AccountPayload::decode(&record);

    assert!(matches!(result, Err(CoreError::MalformedPayload { .. })));
}

#[test]
fn given_missing_user_id_when_decoded_then_missing_field_error_names_field() {
    // Given
    let json = r#"{"user":{},"player":{"id":"p1","bundleId":"game.a"},"credential":{"provider":"google"}}"#;
    let record = raw("p1", "g1", json);

    // When
    let result = AccountPayload::decode(&record);

    // Then
    match result {
        Err(CoreError::MissingField { field, .. }) => assert_eq!(field, "user.id"),
        other => panic!("Expected MissingField, got {other:?}"),
    }
}

#[test]
fn given_missing_bundle_id_when_decoded_then_missing_field_error() {
    let json = r#"{"user":{"id":"u1"},"player":{"id":"p1"},"credential":{"provider":"google"}}"#;
    let record = raw("p1", "g1", json);

    let result = AccountPayload::decode(&record);

    match result {
        Err(CoreError::MissingField { field, .. }) => assert_eq!(field, "player.bundleId"),
        other => panic!("Expected MissingField, got {other:?}"),
    }
}

#[test]
fn given_player_id_differs_from_record_key_when_decoded_then_key_mismatch() {
    let mut record = registered_record("u1", "p1", GAME_A, 10);
    record.player_id = "p2".to_string();

    let result = AccountPayload::decode(&record);

    assert!(matches!(result, Err(CoreError::KeyMismatch { .. })));
}

#[test]
fn given_game_id_differs_from_record_key_when_decoded_then_key_mismatch() {
    let mut record = registered_record("u1", "p1", GAME_A, 10);
    record.game_id = "some-other-game".to_string();

    let result = AccountPayload::decode(&record);

    assert!(matches!(result, Err(CoreError::KeyMismatch { .. })));
}

#[test]
fn given_empty_player_user_id_when_decoded_then_filled_from_identity() {
    // Given
    let json = r#"{"user":{"id":"u1"},"player":{"id":"p1","bundleId":"game.a"},"credential":{"provider":"google"}}"#;
    let record = raw("p1", &game_id_for("game.a"), json);

    // When
    let payload = AccountPayload::decode(&record).unwrap();

    // Then
    assert_that!(payload.player.user_id.as_str(), eq("u1"));
}

#[test]
fn given_player_owned_by_other_identity_when_decoded_then_key_mismatch() {
    let json = r#"{"user":{"id":"u1"},"player":{"id":"p1","userId":"u2","bundleId":"game.a"},"credential":{"provider":"google"}}"#;
    let record = raw("p1", "g1", json);

    let result = AccountPayload::decode(&record);

    assert!(matches!(result, Err(CoreError::KeyMismatch { .. })));
}
