//! Error taxonomy for the sandbox core.
//!
//! Only construction and configuration I/O can fail. Everything that runs
//! inside a tick is total: out-of-bounds reads degrade to Air and
//! out-of-bounds writes are ignored.

use std::path::PathBuf;

/// Errors raised while building a simulation or handling its configuration.
#[derive(Debug, thiserror::Error)]
pub enum SandboxError {
    #[error("invalid world dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("invalid cell size {0}: must be a positive, finite number")]
    InvalidCellSize(f32),

    #[error("failed to load config file {path:?}: {message}")]
    ConfigLoad { path: PathBuf, message: String },

    #[error("failed to save config file {path:?}: {source}")]
    ConfigSave {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid value for [{section}] {key}: {message}")]
    ConfigValue {
        section: String,
        key: String,
        message: String,
    },
}

/// Result alias used by fallible constructors and config I/O.
pub type SandboxResult<T> = Result<T, SandboxError>;
