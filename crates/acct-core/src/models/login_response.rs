//! Token-exchange response from the authentication backend.

use crate::{AccountBundle, Credential, PlayerRecord, User};

use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    pub bundle_id: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GamePlatform {
    pub id: String,
    pub platform: Option<String>,
    pub os: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
    pub player: PlayerRecord,
    pub credential: Credential,
    pub game: Game,
    pub game_platform: GamePlatform,
}

impl LoginResponse {
    /// Flattens the response into a bundle ready to become the recent account.
    ///
    /// Game and platform fields are copied onto the player record; values
    /// already present on the player are kept when the response omits them.
    pub fn into_account(self) -> AccountBundle {
        let LoginResponse {
            access_token,
            mut user,
            mut player,
            credential,
            game,
            game_platform,
        } = self;

        if !access_token.is_empty() {
            player.access_token = access_token;
        }
        if !game.id.is_empty() {
            player.game_id = game.id;
        }
        if !game.bundle_id.is_empty() {
            player.bundle_id = game.bundle_id;
        }
        if !game_platform.id.is_empty() {
            player.game_platform_id = game_platform.id;
        }
        if game_platform.platform.is_some() {
            player.game_platform = game_platform.platform;
        }
        if game_platform.os.is_some() {
            player.game_os = game_platform.os;
        }
        if player.user_id.is_empty() {
            player.user_id = user.id.clone();
        }

        let is_guest = credential.is_guest();
        user.is_guest = is_guest;

        AccountBundle {
            user,
            credential,
            player: Some(player.clone()),
            player_accounts: vec![player],
            last_used: Utc::now().timestamp_millis(),
            is_guest,
            is_recent: false,
        }
    }
}
