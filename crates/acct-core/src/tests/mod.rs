mod models;

use crate::{AccountPayload, Credential, GUEST_PROVIDER, NativeRecord, PlayerRecord, User};

pub(crate) const GAME_A: &str = "com.studio.game.a";
pub(crate) const GAME_B: &str = "com.studio.game.b";

pub(crate) fn game_id_for(bundle_id: &str) -> String {
    format!("game-{bundle_id}")
}

pub(crate) fn player(user_id: &str, player_id: &str, bundle_id: &str) -> PlayerRecord {
    PlayerRecord {
        id: player_id.to_string(),
        user_id: user_id.to_string(),
        game_id: game_id_for(bundle_id),
        game_platform_id: "platform-1".to_string(),
        bundle_id: bundle_id.to_string(),
        access_token: format!("token-{player_id}"),
        username: Some(format!("user-{player_id}")),
        game_platform: Some("android".to_string()),
        game_os: Some("android".to_string()),
    }
}

pub(crate) fn credential(provider: &str) -> Credential {
    Credential {
        id: format!("cred-{provider}"),
        provider: provider.to_string(),
        display_text: provider.to_string(),
    }
}

pub(crate) fn user(user_id: &str) -> User {
    User {
        id: user_id.to_string(),
        nickname: Some(format!("nick-{user_id}")),
        ..User::default()
    }
}

pub(crate) fn record(
    user_id: &str,
    player_id: &str,
    bundle_id: &str,
    provider: &str,
    last_updated_at: i64,
) -> NativeRecord {
    let payload = AccountPayload::new(
        user(user_id),
        player(user_id, player_id, bundle_id),
        credential(provider),
    );

    NativeRecord {
        player_id: player_id.to_string(),
        game_id: game_id_for(bundle_id),
        raw_payload: payload.encode().unwrap(),
        last_updated_at,
    }
}

pub(crate) fn guest_record(
    user_id: &str,
    player_id: &str,
    bundle_id: &str,
    last_updated_at: i64,
) -> NativeRecord {
    record(user_id, player_id, bundle_id, GUEST_PROVIDER, last_updated_at)
}

pub(crate) fn registered_record(
    user_id: &str,
    player_id: &str,
    bundle_id: &str,
    last_updated_at: i64,
) -> NativeRecord {
    record(user_id, player_id, bundle_id, "google", last_updated_at)
}
