//! Storage-specific error type for the in-memory store.

use homecare_domain::error::HomecareError;

/// Errors originating from the in-memory storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A thread panicked while holding a table lock.
    #[error("{table} table lock poisoned")]
    Poisoned { table: &'static str },

    /// A table handed out every id it can represent.
    #[error("{table} table ran out of ids")]
    IdsExhausted { table: &'static str },
}

impl From<StorageError> for HomecareError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
