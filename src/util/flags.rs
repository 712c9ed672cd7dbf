use std::fs::{File, OpenOptions};
use std::io::Result as IoResult;
use std::path::Path;
use std::str::FromStr;

use bitflags::bitflags;
use const_format::concatcp;
use regex::Regex;

use crate::errors::FlagError;

/// The prefix shared by all symbolic flag constants.
pub const FLAG_PREFIX: &str = "FILE_";

bitflags! {
    /// The symbolic flags accepted when opening a file.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OpenFlags: u32 {
        /// Grant read access.
        const READ_ONLY = 1 << 0;
        /// Grant write access.
        const WRITE_ONLY = 1 << 1;
        /// Grant read and write access.
        const READ_WRITE = Self::READ_ONLY.bits() | Self::WRITE_ONLY.bits();
        /// Create the file if it does not exist.
        const CREATE = 1 << 2;
        /// Discard the existing content of the file.
        const TRUNCATE = 1 << 3;
        /// Position every write at the end of the file.
        const APPEND = 1 << 4;
    }
}

/// Mask value of `FILE_READ_ONLY`.
pub const FILE_READ_ONLY: u32 = OpenFlags::READ_ONLY.bits();
/// Mask value of `FILE_WRITE_ONLY`.
pub const FILE_WRITE_ONLY: u32 = OpenFlags::WRITE_ONLY.bits();
/// Mask value of `FILE_READ_WRITE`.
pub const FILE_READ_WRITE: u32 = OpenFlags::READ_WRITE.bits();
/// Mask value of `FILE_CREATE`.
pub const FILE_CREATE: u32 = OpenFlags::CREATE.bits();
/// Mask value of `FILE_TRUNCATE`.
pub const FILE_TRUNCATE: u32 = OpenFlags::TRUNCATE.bits();
/// Mask value of `FILE_APPEND`.
pub const FILE_APPEND: u32 = OpenFlags::APPEND.bits();

/// All flag constants by their symbolic name.
pub const FLAG_CONSTANTS: [(&str, u32); 6] = [
    (concatcp!(FLAG_PREFIX, "READ_ONLY"), FILE_READ_ONLY),
    (concatcp!(FLAG_PREFIX, "WRITE_ONLY"), FILE_WRITE_ONLY),
    (concatcp!(FLAG_PREFIX, "READ_WRITE"), FILE_READ_WRITE),
    (concatcp!(FLAG_PREFIX, "CREATE"), FILE_CREATE),
    (concatcp!(FLAG_PREFIX, "TRUNCATE"), FILE_TRUNCATE),
    (concatcp!(FLAG_PREFIX, "APPEND"), FILE_APPEND),
];

impl OpenFlags {
    /// Checks whether the flags grant write access.
    pub fn is_writable(&self) -> bool {
        self.intersects(OpenFlags::WRITE_ONLY | OpenFlags::APPEND)
    }

    /// Checks whether the flags grant read access. Without any access flag, a file is opened for reading.
    pub fn is_readable(&self) -> bool {
        self.contains(OpenFlags::READ_ONLY) || !self.is_writable()
    }

    /// Translates the flags into the options of the operating system.
    ///
    /// `APPEND` together with `TRUNCATE` is not expressible as options, the truncation is left
    /// to [`OpenFlags::open`].
    fn open_options(&self, creation_mode: u32) -> OpenOptions {
        let mut options = OpenOptions::new();
        options
            .read(self.is_readable())
            .write(self.contains(OpenFlags::WRITE_ONLY))
            .append(self.contains(OpenFlags::APPEND))
            .create(self.contains(OpenFlags::CREATE))
            .truncate(self.contains(OpenFlags::TRUNCATE) && !self.truncates_after_open());

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(creation_mode);
        }
        #[cfg(not(unix))]
        let _ = creation_mode;

        options
    }

    /// Opens a file with these flags.
    pub fn open<P: AsRef<Path>>(&self, path: P, creation_mode: u32) -> IoResult<File> {
        let file = self.open_options(creation_mode).open(path)?;
        if self.truncates_after_open() {
            file.set_len(0)?;
        }
        Ok(file)
    }

    fn truncates_after_open(&self) -> bool {
        self.contains(OpenFlags::APPEND | OpenFlags::TRUNCATE)
    }
}

impl FromStr for OpenFlags {
    type Err = FlagError;

    /// Parses an expression like `FILE_WRITE_ONLY | FILE_CREATE`. The prefix is optional.
    fn from_str(expression: &str) -> Result<Self, Self::Err> {
        let extractor = FlagExtractor::default();
        let mut flags = OpenFlags::empty();
        for token in expression.split('|') {
            let name = extractor
                .extract(token.trim())
                .ok_or_else(|| FlagError::Malformed(expression.to_string()))?;
            flags |= OpenFlags::from_name(name)
                .ok_or_else(|| FlagError::UnknownName(token.trim().to_string()))?;
        }
        Ok(flags)
    }
}

#[derive(Debug, Clone)]
/// An internal extractor for the name of a single flag.
struct FlagExtractor(Regex);

impl Default for FlagExtractor {
    fn default() -> Self {
        FlagExtractor(
            Regex::new(concatcp!("^(?:", FLAG_PREFIX, ")?([A-Z][A-Z_]*)$"))
                .expect("Encounter invalid flag RegEx"),
        )
    }
}

impl FlagExtractor {
    pub fn extract<'a>(&self, value: &'a str) -> Option<&'a str> {
        self.0
            .captures(value)
            .and_then(|captures| captures.get(1))
            .map(|name| name.as_str())
    }
}
