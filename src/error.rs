//! Error types for the non-engine surfaces.
//!
//! The engine itself is total over its inputs. Errors only arise when
//! building boards from untrusted data, resolving names from the command
//! line, or doing console I/O.

/// Library error.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid board: {0}")]
    InvalidBoard(String),
    #[error("unknown player '{0}' (expected one of: console, random, greedy)")]
    UnknownPlayer(String),
    #[error("unknown runner '{0}' (expected one of: single, untilwin, multiwin, parallel)")]
    UnknownRunner(String),
    #[error("unsupported combination: {0}")]
    Unsupported(String),
}

pub type Result<T> = std::result::Result<T, Error>;
