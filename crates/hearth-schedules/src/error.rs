use thiserror::Error;

/// Errors from schedule-store operations.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Reserved for the `item_not_found` wire contract. Unreachable while
    /// [`update`](crate::store::ScheduleStore::update) keeps upsert
    /// semantics.
    #[error("schedule not found: {id}")]
    NotFound { id: String },

    /// The backing file exists but does not parse as a schedule mapping.
    #[error("malformed schedule file {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(serde_json::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
