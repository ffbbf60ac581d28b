use serde::{Deserialize, Serialize};

/// Owning identity of one or more player records.
///
/// `is_guest` is carried for the wire format only. Reconciliation overwrites
/// it from the credential provider.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub nickname: Option<String>,
    pub is_guest: bool,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: Option<String>,
}
