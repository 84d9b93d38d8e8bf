// File: crates/gnuplot-core/src/error.rs
// Summary: Error type for session transport failures and caller contract violations.

use thiserror::Error;

/// Everything that can go wrong while building or sending a plot.
///
/// Transport problems (`Spawn`, `ConnectionClosed`, `Io`) mean the command
/// never reached gnuplot; the remaining variants reject bad caller input
/// before anything is written to the pipe.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to spawn '{executable}': {source}")]
    Spawn {
        executable: String,
        source: std::io::Error,
    },

    #[error("the gnuplot connection is closed")]
    ConnectionClosed,

    #[error("i/o error on the gnuplot pipe: {0}")]
    Io(#[from] std::io::Error),

    #[error("column length mismatch: expected {expected} rows, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("cannot mix 2D and 3D series in one plot; call reset() first")]
    ModeMismatch,

    #[error("a histogram needs at least one bin")]
    InvalidBinCount,
}

pub type Result<T> = std::result::Result<T, Error>;
