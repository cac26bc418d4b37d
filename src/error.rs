//! Error types for the Meridian client.
//!
//! Errors are specific and actionable: each variant carries the path or
//! operation that failed plus the underlying cause, so the CLI can print
//! a single useful line. Nothing is retried here; key generation and
//! artifact writes are cheap to rerun as a whole command.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Meridian client operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The operating system's secure random source could not supply bytes.
    /// Fatal; never retried.
    #[error("secure random source unavailable: {0}")]
    EntropyUnavailable(String),

    /// Key encoding or decoding failed (PEM import/export, bad key bytes).
    #[error("cryptographic error: {0}")]
    Crypto(String),

    /// The target is not an existing, writable directory. Checked before
    /// any artifact is written so a bad target never leaves partial output.
    #[error("{}: not a writable directory: {source}", path.display())]
    InvalidDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An artifact could not be written or moved into place. Artifacts
    /// committed earlier in the same invocation are left as-is; rerunning
    /// the command regenerates everything.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
