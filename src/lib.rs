//! This crate provides the `system` module of a script host: console output and handle based file access.
#![deny(missing_docs)]

pub mod console;
pub mod errors;
pub mod file_gateway;
pub mod options;
pub mod system;
mod util;

pub use self::console::Console;
pub use self::file_gateway::{FileGateway, SENTINEL};
pub use self::options::{Options, UnknownFlags};
pub use self::system::System;
pub use self::util::{
    Handle, OpenFlags, Properties, Value, FILE_APPEND, FILE_CREATE, FILE_READ_ONLY,
    FILE_READ_WRITE, FILE_TRUNCATE, FILE_WRITE_ONLY, FLAG_CONSTANTS, FLAG_PREFIX,
};
