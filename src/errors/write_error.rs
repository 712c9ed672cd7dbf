use std::fmt::{Display, Formatter, Result as FmtResult};
use std::io::{Error as IoError, ErrorKind};

use super::InvalidHandle;
use crate::util::Handle;

/// An error occurring while writing to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteError {
    /// The handle does not reference an open file.
    InvalidHandle(Handle),
    /// The file was not opened for writing.
    NotWritable(Handle),
    /// The operating system failed to write.
    Io(ErrorKind),
}

impl super::Error for WriteError {}

impl From<IoError> for WriteError {
    fn from(error: IoError) -> Self {
        WriteError::Io(error.kind())
    }
}

impl From<InvalidHandle> for WriteError {
    fn from(error: InvalidHandle) -> Self {
        WriteError::InvalidHandle(error.0)
    }
}

impl Display for WriteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("Error during file writing: ")?;
        match self {
            WriteError::InvalidHandle(handle) => {
                write!(f, "The handle '{}' does not reference an open file", handle)
            }
            WriteError::NotWritable(handle) => {
                write!(f, "The file behind '{}' is not opened for writing", handle)
            }
            WriteError::Io(error) => write!(f, "The operating system failed ('{:?}')", error),
        }
    }
}
