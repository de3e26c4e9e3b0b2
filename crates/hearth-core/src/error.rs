use thiserror::Error;

/// Kernel-level errors. Domain crates define their own error enums
/// (see `hearth-schedules`); this one only covers config resolution.
#[derive(Debug, Error)]
pub enum HearthError {
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, HearthError>;
