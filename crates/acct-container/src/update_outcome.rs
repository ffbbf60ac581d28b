/// Result of asking a container to make an account the recent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Saved through the store and the account list reloaded
    Applied,
    /// Left the store untouched
    Rejected(RejectReason),
}

impl UpdateOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    NoCurrentPlayer,
    BundleMismatch,
    MissingField(&'static str),
    ForeignOwner,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoCurrentPlayer => write!(f, "account has no player record"),
            Self::BundleMismatch => write!(f, "player belongs to another game"),
            Self::MissingField(field) => write!(f, "missing {field}"),
            Self::ForeignOwner => write!(f, "player is owned by another identity"),
        }
    }
}
