use std::fmt::{Display, Formatter, Result as FmtResult};
use std::io::{Error as IoError, ErrorKind};

use super::InvalidHandle;
use crate::util::Handle;

/// An error occurring while reading from a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadError {
    /// The handle does not reference an open file.
    InvalidHandle(Handle),
    /// The file was not opened for reading.
    NotReadable(Handle),
    /// The operating system failed to read.
    Io(ErrorKind),
}

impl super::Error for ReadError {}

impl From<IoError> for ReadError {
    fn from(error: IoError) -> Self {
        ReadError::Io(error.kind())
    }
}

impl From<InvalidHandle> for ReadError {
    fn from(error: InvalidHandle) -> Self {
        ReadError::InvalidHandle(error.0)
    }
}

impl Display for ReadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("Error during file reading: ")?;
        match self {
            ReadError::InvalidHandle(handle) => {
                write!(f, "The handle '{}' does not reference an open file", handle)
            }
            ReadError::NotReadable(handle) => {
                write!(f, "The file behind '{}' is not opened for reading", handle)
            }
            ReadError::Io(error) => write!(f, "The data source failed ('{:?}')", error),
        }
    }
}
