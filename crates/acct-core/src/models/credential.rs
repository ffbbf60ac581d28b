use serde::{Deserialize, Serialize};

/// Provider string of the anonymous, device-bound credential.
pub const GUEST_PROVIDER: &str = "device_id";

/// Credential an identity authenticated with.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Credential {
    pub id: String,
    pub provider: String,
    pub display_text: String,
}

impl Credential {
    /// True for the anonymous device credential; any other provider is registered.
    pub fn is_guest(&self) -> bool {
        self.provider == GUEST_PROVIDER
    }
}
