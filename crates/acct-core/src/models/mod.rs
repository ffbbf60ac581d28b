pub mod account_bundle;
pub mod account_payload;
pub mod credential;
pub mod login_response;
pub mod native_record;
pub mod player_record;
pub mod record_key;
pub mod user;
