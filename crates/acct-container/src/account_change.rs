use acct_core::{AccountBundle, RecentKey};

/// Published when the recent account of a container changes.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountChange {
    /// New recent account, or `None` when the caller must pick one again
    pub account: Option<AccountBundle>,
    pub previous: Option<RecentKey>,
}

impl AccountChange {
    pub fn identity_id(&self) -> Option<&str> {
        self.account.as_ref().map(AccountBundle::identity_id)
    }

    pub fn player_id(&self) -> Option<&str> {
        self.account.as_ref().and_then(AccountBundle::player_id)
    }
}
