pub mod dropped_records;
pub mod reconciler;
pub mod reconciliation;
