use std::fmt::{Display, Formatter, Result as FmtResult};
use std::io::{Error as IoError, ErrorKind};

/// An error occurring while opening a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenError {
    /// The path is empty.
    EmptyPath,
    /// The mask contains bits which are no known flag.
    UnknownFlags(u32),
    /// The configured number of simultaneously open files is reached.
    TooManyOpenFiles(usize),
    /// No further handle could be allocated.
    HandlesExhausted,
    /// The operating system refused to open the file.
    Io(ErrorKind),
}

impl super::Error for OpenError {}

impl From<IoError> for OpenError {
    fn from(error: IoError) -> Self {
        OpenError::Io(error.kind())
    }
}

impl Display for OpenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("Error during file opening: ")?;
        match self {
            OpenError::EmptyPath => write!(f, "The path is empty"),
            OpenError::UnknownFlags(bits) => {
                write!(f, "The flags contain unknown bits ({:#x})", bits)
            }
            OpenError::TooManyOpenFiles(limit) => {
                write!(f, "No more than {} files may be open at once", limit)
            }
            OpenError::HandlesExhausted => write!(f, "No further handle is available"),
            OpenError::Io(error) => {
                write!(f, "The operating system failed ('{:?}')", error)
            }
        }
    }
}
