
use acct_core::NativeRecord;

pub(crate) fn native_record(player_id: &str, game_id: &str, last_updated_at: i64) -> NativeRecord {
    NativeRecord {
        player_id: player_id.to_string(),
        game_id: game_id.to_string(),
        raw_payload: format!(r#"{{"player":{{"id":"{player_id}"}}}}"#),
        last_updated_at,
    }
}
