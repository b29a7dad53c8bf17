use rustyline::error::ReadlineError;
use std::io::Error as IOError;
use thiserror::Error;

pub type Result<T> = ::std::result::Result<T, Error>;

/// Everything that can end one calculation cycle early, except division by
/// zero, which is reported on its own.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IOError(#[from] IOError),
    #[error("readline error: {0}")]
    RlError(#[from] ReadlineError),
    #[error("unexpected end of input")]
    Eof,
    #[error("input interrupted")]
    Interrupted,
    #[error("no numeric value after {0} attempts")]
    TooManyAttempts(usize),
}
