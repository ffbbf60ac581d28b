use serde::Serialize;

/// Records a reconciliation pass skipped, by reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DroppedRecords {
    /// Payload failed to decode or lacked a required field
    pub malformed: usize,
    /// Player id already seen earlier in the batch
    pub duplicate: usize,
    /// Guest record belonging to another game
    pub foreign_guest: usize,
}

impl DroppedRecords {
    pub fn total(&self) -> usize {
        self.malformed + self.duplicate + self.foreign_guest
    }
}
