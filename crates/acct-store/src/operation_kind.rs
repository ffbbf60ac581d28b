/// Record store operation, tracked separately for failover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    GetAll,
    GetOne,
    Put,
    Delete,
}

impl OperationKind {
    pub const ALL: [OperationKind; 4] = [Self::GetAll, Self::GetOne, Self::Put, Self::Delete];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetAll => "get_all",
            Self::GetOne => "get_one",
            Self::Put => "put",
            Self::Delete => "delete",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Self::GetAll => 0,
            Self::GetOne => 1,
            Self::Put => 2,
            Self::Delete => 3,
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
