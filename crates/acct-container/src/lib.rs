mod account_change;
mod account_container;
mod error;
mod update_outcome;

pub use account_change::AccountChange;
pub use account_container::AccountContainer;
pub use error::{AccountError, Result};
pub use update_outcome::{RejectReason, UpdateOutcome};

#[cfg(test)]
mod tests;
