//! Error types for the lvm2 client.

use cmd_runner::RunError;
use thiserror::Error;

/// Errors returned by [`Client`](crate::Client) calls.
#[derive(Debug, Error)]
pub enum Lvm2Error {
    /// The lvm binary could not be run or exited unsuccessfully. A failed
    /// run carries lvm's standard error.
    #[error(transparent)]
    Command(#[from] RunError),

    /// The JSON report printed by lvm did not decode.
    #[error("failed to parse lvm output: {0}")]
    Report(#[from] serde_json::Error),
}

impl Lvm2Error {
    /// lvm's standard error, when the command ran and failed.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Lvm2Error::Command(err) => err.stderr(),
            Lvm2Error::Report(_) => None,
        }
    }
}

/// Result type for lvm2 operations.
pub type Result<T> = std::result::Result<T, Lvm2Error>;
