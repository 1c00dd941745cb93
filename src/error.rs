use std::error;
use std::fmt;
use std::result;

/// Errors surfaced by lookups that have no value to fall back on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The requested key does not exist in the map.
    OutOfRange,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::OutOfRange => write!(f, "key does not exist"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
