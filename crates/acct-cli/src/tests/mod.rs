
use crate::Runner;

use acct_config::Config;

use std::path::PathBuf;

use serde_json::json;
use tempfile::TempDir;

pub(crate) const GAME_A: &str = "com.studio.game.a";
pub(crate) const GAME_B: &str = "com.studio.game.b";

pub(crate) fn runner(temp: &TempDir) -> Runner {
    Runner::from_dirs(
        temp.path().join("records"),
        temp.path().join("fallback"),
        &Config::default(),
    )
    .unwrap()
}

/// Writes a backend login response and returns its path.
pub(crate) fn write_login_response(
    temp: &TempDir,
    user_id: &str,
    player_id: &str,
    bundle_id: &str,
    provider: &str,
) -> PathBuf {
    let response = json!({
        "accessToken": format!("secret-{player_id}"),
        "user": { "id": user_id },
        "player": { "id": player_id },
        "credential": { "id": format!("cred-{user_id}"), "provider": provider },
        "game": { "id": format!("game-{bundle_id}"), "bundleId": bundle_id },
        "gamePlatform": { "id": "ios-1", "platform": "ios", "os": "iOS" }
    });
    let path = temp.path().join(format!("{player_id}.json"));
    std::fs::write(&path, response.to_string()).unwrap();
    path
}
