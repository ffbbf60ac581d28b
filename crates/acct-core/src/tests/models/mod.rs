mod account_payload;
mod credential;
mod login_response;
mod player_record;
