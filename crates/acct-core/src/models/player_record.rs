//! Per-game player record owned by exactly one identity.

use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerRecord {
    pub id: String,
    pub user_id: String,
    pub game_id: String,
    pub game_platform_id: String,
    pub bundle_id: String,
    pub access_token: String,
    pub username: Option<String>,
    pub game_platform: Option<String>,
    #[serde(rename = "gameOS", alias = "gameOs")]
    pub game_os: Option<String>,
}

// Hand-written so access tokens never reach the logs.
impl std::fmt::Debug for PlayerRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerRecord")
            .field("id", &self.id)
            .field("user_id", &self.user_id)
            .field("game_id", &self.game_id)
            .field("game_platform_id", &self.game_platform_id)
            .field("bundle_id", &self.bundle_id)
            .field("access_token", &"<redacted>")
            .field("username", &self.username)
            .field("game_platform", &self.game_platform)
            .field("game_os", &self.game_os)
            .finish()
    }
}
