//! Error types for record storage operations

use thiserror::Error;

/// Errors during record load/save
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to load {record} record")]
    Load {
        record: &'static str,
        #[source]
        source: confy::ConfyError,
    },

    #[error("failed to save {record} record")]
    Save {
        record: &'static str,
        #[source]
        source: confy::ConfyError,
    },
}
