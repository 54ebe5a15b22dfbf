//! Error types for hardware orders.

use thiserror::Error;

use crate::clients::ServiceError;
use crate::error::ConfigError;

/// Error type for building, verifying and placing hardware orders.
#[derive(Debug, Error)]
pub enum OrderError {
    /// A fixed configuration preset was combined with explicit cores or memory.
    #[error("If a fixed config key is used then the cores and memory order parameters should not be specified")]
    FixedConfigConflict,

    /// The hardware service could not be configured.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The API call failed.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// `getCreateObjectOptions` returned data of an unexpected shape.
    #[error("Unexpected create object options: {reason}")]
    UnexpectedOptions {
        /// Why the options could not be read.
        reason: String,
    },
}
