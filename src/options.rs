//! Configuration of the file gateway.
use crate::errors::OpenError;
use crate::util::OpenFlags;

mod constants {
    /// `rw-r--r--`
    pub const DEFAULT_CREATION_MODE: u32 = 0o644;
    pub const DEFAULT_MAX_OPEN_FILES: usize = 1024;
}

/// The treatment of mask bits which do not belong to any flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownFlags {
    /// Refuse to open the file.
    Reject,
    /// Strip the unknown bits and open the file with the remaining flags.
    Ignore,
}

impl UnknownFlags {
    /// Turns a raw mask into flags according to the policy.
    pub fn apply(self, mask: u32) -> Result<OpenFlags, OpenError> {
        match (self, OpenFlags::from_bits(mask)) {
            (_, Some(flags)) => Ok(flags),
            (UnknownFlags::Ignore, None) => Ok(OpenFlags::from_bits_truncate(mask)),
            (UnknownFlags::Reject, None) => {
                Err(OpenError::UnknownFlags(mask & !OpenFlags::all().bits()))
            }
        }
    }
}

/// Options of the file gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Permission bits of newly created files. Only honoured on Unix.
    pub creation_mode: u32,
    /// The treatment of unknown bits in the flag mask.
    pub unknown_flags: UnknownFlags,
    /// The maximal number of simultaneously open files.
    pub max_open_files: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            creation_mode: constants::DEFAULT_CREATION_MODE,
            unknown_flags: UnknownFlags::Reject,
            max_open_files: constants::DEFAULT_MAX_OPEN_FILES,
        }
    }
}
