#![allow(dead_code)]

use acct_config::ContainerConfig;
use acct_container::AccountContainer;
use acct_core::LoginResponse;
use acct_store::{
    FailoverConfig, FallbackRecordStore, FileMedium, FsStorageBridge, NativeRecordStore,
    RecordStore, ResilientRecordStore,
};

use std::path::Path;
use std::sync::Arc;

pub const GAME_A: &str = "com.studio.game.a";
pub const GAME_B: &str = "com.studio.game.b";

/// Directory-backed primary plus file-backed fallback, as the CLI wires them.
pub fn file_stack(root: &Path) -> Arc<ResilientRecordStore> {
    let bridge = FsStorageBridge::open(root.join("records")).unwrap();
    let medium = FileMedium::open(root.join("fallback")).unwrap();
    Arc::new(ResilientRecordStore::new(
        Box::new(NativeRecordStore::new(bridge)),
        FallbackRecordStore::new(Arc::new(medium)),
        FailoverConfig::default(),
    ))
}

pub fn open_container(store: &Arc<ResilientRecordStore>, bundle_id: &str) -> AccountContainer {
    let store: Arc<dyn RecordStore> = store.clone();
    let mut container = AccountContainer::new(store, bundle_id, &ContainerConfig::default()).unwrap();
    container.load();
    container
}

pub fn login_response(user_id: &str, player_id: &str, bundle_id: &str, provider: &str) -> LoginResponse {
    serde_json::from_value(serde_json::json!({
        "accessToken": format!("token-{player_id}"),
        "user": { "id": user_id, "nickname": format!("nick-{user_id}") },
        "player": { "id": player_id },
        "credential": { "id": format!("cred-{user_id}"), "provider": provider },
        "game": { "id": format!("game-{bundle_id}"), "bundleId": bundle_id },
        "gamePlatform": { "id": "android-1", "platform": "android", "os": "android" }
    }))
    .unwrap()
}
