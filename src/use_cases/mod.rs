// Use cases layer: guest ordering, order oversight and catalog management.

pub mod guest_order;
pub mod ingredient_catalog;
pub mod order_admin;

#[cfg(test)]
pub(crate) mod test_support;

use crate::domain::errors::{PartyError, StoreError};

// Storage details stay in the log; callers only see the domain error.
pub(crate) fn storage_failure(err: StoreError) -> PartyError {
    tracing::error!(error = %err, "storage failure");
    PartyError::StorageFailure
}
