pub mod error;
pub mod models;
pub mod reconcile;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::account_bundle::{AccountBundle, RecentKey};
pub use models::account_payload::AccountPayload;
pub use models::credential::{Credential, GUEST_PROVIDER};
pub use models::login_response::{Game, GamePlatform, LoginResponse};
pub use models::native_record::NativeRecord;
pub use models::player_record::PlayerRecord;
pub use models::record_key::RecordKey;
pub use models::user::User;
pub use reconcile::dropped_records::DroppedRecords;
pub use reconcile::reconciler::reconcile;
pub use reconcile::reconciliation::Reconciliation;

#[cfg(test)]
mod tests;
