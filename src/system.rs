//! The `system` object exposed to scripts.
use std::io::{Stdout, Write};
use std::path::Path;

use super::console::Console;
use super::errors::{InvalidHandle, OpenError};
use super::file_gateway::FileGateway;
use super::options::Options;
use super::util::{Handle, Value, FLAG_CONSTANTS};

/// The name under which the module is registered.
pub const PACKAGE_NAME: &str = "system";

/// A console and a file gateway bundled together with the flag constants.
#[derive(Debug)]
pub struct System<W = Stdout> {
    console: Console<W>,
    files: FileGateway,
}

impl System<Stdout> {
    /// The module printing to the standard output, with default options.
    pub fn new() -> Self {
        System::with_console(Console::stdout(), Options::default())
    }
}

impl Default for System<Stdout> {
    fn default() -> Self {
        System::new()
    }
}

impl<W: Write> System<W> {
    /// The module printing to a specific console.
    pub fn with_console(console: Console<W>, options: Options) -> Self {
        System {
            console,
            files: FileGateway::with_options(options),
        }
    }

    /// The name under which the module is registered.
    pub fn package_name(&self) -> &'static str {
        PACKAGE_NAME
    }

    /// The read-only constants of the module.
    pub fn constants(&self) -> &'static [(&'static str, u32)] {
        &FLAG_CONSTANTS
    }

    /// Look up a constant by its name.
    pub fn constant<T: AsRef<str>>(&self, name: T) -> Option<u32> {
        FLAG_CONSTANTS
            .iter()
            .find(|(constant, _)| *constant == name.as_ref())
            .map(|(_, value)| *value)
    }

    /// The console of the module.
    pub fn console(&self) -> &Console<W> {
        &self.console
    }

    /// The file gateway of the module.
    pub fn files(&self) -> &FileGateway {
        &self.files
    }

    /// See [`Console::print`].
    pub fn print(&self, values: &[Value]) {
        self.console.print(values)
    }

    /// See [`Console::println`].
    pub fn println(&self, values: &[Value]) {
        self.console.println(values)
    }

    /// See [`FileGateway::open`].
    pub fn open<P: AsRef<Path>>(&self, path: P, mask: u32) -> Result<Handle, OpenError> {
        self.files.open(path, mask)
    }

    /// See [`FileGateway::write`].
    pub fn write<D: AsRef<[u8]>>(&self, handle: Handle, data: D) -> i64 {
        self.files.write(handle, data)
    }

    /// See [`FileGateway::close`].
    pub fn close(&self, handle: Handle) -> Result<(), InvalidHandle> {
        self.files.close(handle)
    }

    /// Consumes the module and returns the sink of its console.
    pub fn into_console(self) -> W {
        self.console.into_inner()
    }
}
