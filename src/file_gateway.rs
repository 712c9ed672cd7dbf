//! Handle based access to files of the operating system.
use std::collections::HashMap;
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use std::convert::TryFrom;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, warn};

use super::errors::{InvalidHandle, OpenError, ReadError, WriteError};
use super::options::Options;
use super::util::{Handle, OpenFlags};

/// The value returned by `write` and `read_into` on failure.
pub const SENTINEL: i64 = -1;

/// A file opened through the gateway.
#[derive(Debug)]
struct OpenFile {
    file: File,
    flags: OpenFlags,
    path: PathBuf,
}

/// An open file shared between the table and the operations currently using it.
type SharedFile = Arc<Mutex<OpenFile>>;

/// The table mapping handles to open files. Handles are never reused.
#[derive(Debug)]
struct HandleTable {
    next: Option<Handle>,
    files: HashMap<Handle, SharedFile>,
}

impl Default for HandleTable {
    fn default() -> Self {
        HandleTable {
            next: Some(Handle::FIRST),
            files: HashMap::new(),
        }
    }
}

impl HandleTable {
    fn check_capacity(&self, max_open_files: usize) -> Result<(), OpenError> {
        if self.files.len() >= max_open_files {
            return Err(OpenError::TooManyOpenFiles(max_open_files));
        }
        if self.next.is_none() {
            return Err(OpenError::HandlesExhausted);
        }
        Ok(())
    }

    fn insert(&mut self, file: OpenFile) -> Result<Handle, OpenError> {
        let handle = self.next.ok_or(OpenError::HandlesExhausted)?;
        self.next = handle.successor();
        self.files.insert(handle, Arc::new(Mutex::new(file)));
        Ok(handle)
    }

    fn get(&self, handle: Handle) -> Result<SharedFile, InvalidHandle> {
        self.files.get(&handle).cloned().ok_or(InvalidHandle(handle))
    }

    fn remove(&mut self, handle: Handle) -> Result<SharedFile, InvalidHandle> {
        self.files.remove(&handle).ok_or(InvalidHandle(handle))
    }

    fn len(&self) -> usize {
        self.files.len()
    }
}

/// Opens, writes, reads and closes files of the operating system on behalf of a caller.
///
/// The table lock is only held while handles are looked up, inserted or removed. The system
/// calls of `open` run without any lock, those of `write` and `read` under the lock of the
/// single file they use.
#[derive(Debug, Default)]
pub struct FileGateway {
    table: Mutex<HandleTable>,
    options: Options,
}

// Every mutation behind these locks is a single statement, a poisoned lock leaves the data intact.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl FileGateway {
    /// Create a gateway with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gateway with specific options.
    pub fn with_options(options: Options) -> Self {
        FileGateway {
            table: Mutex::default(),
            options,
        }
    }

    /// The options of the gateway.
    pub fn options(&self) -> &Options {
        &self.options
    }

    fn table(&self) -> MutexGuard<'_, HandleTable> {
        lock(&self.table)
    }

    fn entry(&self, handle: Handle) -> Result<SharedFile, InvalidHandle> {
        self.table().get(handle)
    }

    /// Open a file with a raw mask of flags.
    pub fn open<P: AsRef<Path>>(&self, path: P, mask: u32) -> Result<Handle, OpenError> {
        let flags = self.options.unknown_flags.apply(mask)?;
        self.open_with(path, flags)
    }

    /// Open a file with typed flags.
    pub fn open_with<P: AsRef<Path>>(&self, path: P, flags: OpenFlags) -> Result<Handle, OpenError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(OpenError::EmptyPath);
        }

        // Limits are checked before the file system is touched...
        self.table().check_capacity(self.options.max_open_files)?;

        let file = flags
            .open(path, self.options.creation_mode)
            .map_err(|error| {
                warn!("Opening '{}' failed: {}", path.display(), error);
                OpenError::from(error)
            })?;

        // ... and again before the handle is inserted.
        let mut table = self.table();
        if let Err(error) = table.check_capacity(self.options.max_open_files) {
            debug!("Dropping '{}': {}", path.display(), error);
            return Err(error);
        }
        let handle = table.insert(OpenFile {
            file,
            flags,
            path: path.to_path_buf(),
        })?;
        drop(table);

        debug!("Opened '{}' as {} ({:?})", path.display(), handle, flags);
        Ok(handle)
    }

    /// Write data to a file, returning the number of bytes written.
    ///
    /// A single write is issued; fewer bytes than offered may be written.
    pub fn try_write<D: AsRef<[u8]>>(&self, handle: Handle, data: D) -> Result<usize, WriteError> {
        let shared = self.entry(handle)?;
        let mut entry = lock(&shared);
        if !entry.flags.is_writable() {
            return Err(WriteError::NotWritable(handle));
        }

        let data = data.as_ref();
        loop {
            match entry.file.write(data) {
                Ok(size) => return Ok(size),
                Err(error) if error.kind() == ErrorKind::Interrupted => {
                    // Just try again...
                }
                Err(error) => {
                    warn!("Writing to '{}' failed: {}", entry.path.display(), error);
                    return Err(error.into());
                }
            }
        }
    }

    /// Write data to a file, returning the number of bytes written or [`SENTINEL`] on failure.
    pub fn write<D: AsRef<[u8]>>(&self, handle: Handle, data: D) -> i64 {
        match self.try_write(handle, data) {
            Ok(size) => size as i64,
            Err(error) => {
                debug!("{}", error);
                SENTINEL
            }
        }
    }

    /// Read up to `buffer.len()` bytes from a file.
    pub fn try_read_into(&self, handle: Handle, buffer: &mut [u8]) -> Result<usize, ReadError> {
        let shared = self.entry(handle)?;
        let mut entry = lock(&shared);
        if !entry.flags.is_readable() {
            return Err(ReadError::NotReadable(handle));
        }

        loop {
            match entry.file.read(buffer) {
                Ok(size) => return Ok(size),
                Err(error) if error.kind() == ErrorKind::Interrupted => {}
                Err(error) => return Err(error.into()),
            }
        }
    }

    /// Read up to `buffer.len()` bytes from a file, returning their number or [`SENTINEL`] on failure.
    pub fn read_into(&self, handle: Handle, buffer: &mut [u8]) -> i64 {
        match self.try_read_into(handle, buffer) {
            Ok(size) => size as i64,
            Err(error) => {
                debug!("{}", error);
                SENTINEL
            }
        }
    }

    /// Read up to `max_length` bytes from a file. An empty result marks the end of the file.
    ///
    /// The buffer grows with the data actually read, not with `max_length`.
    pub fn read(&self, handle: Handle, max_length: usize) -> Result<Vec<u8>, ReadError> {
        let shared = self.entry(handle)?;
        let mut entry = lock(&shared);
        if !entry.flags.is_readable() {
            return Err(ReadError::NotReadable(handle));
        }

        let limit = u64::try_from(max_length).unwrap_or(u64::MAX);
        let mut buffer = Vec::new();
        (&mut entry.file).take(limit).read_to_end(&mut buffer)?;
        Ok(buffer)
    }

    /// Close a file. The handle must not be used afterwards.
    ///
    /// The descriptor is released as soon as a write or read still running on it has finished.
    pub fn close(&self, handle: Handle) -> Result<(), InvalidHandle> {
        self.table().remove(handle)?;
        debug!("Closed {}", handle);
        Ok(())
    }

    /// Checks whether the handle references an open file.
    pub fn is_open(&self, handle: Handle) -> bool {
        self.table().files.contains_key(&handle)
    }

    /// The number of open files.
    pub fn open_count(&self) -> usize {
        self.table().len()
    }
}
