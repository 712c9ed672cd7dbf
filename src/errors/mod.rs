//! Various errors occurring during access of the system module.

use std::fmt::{Debug, Display};

mod flag_error;
mod invalid_handle;
mod open_error;
mod read_error;
mod write_error;

pub use self::flag_error::FlagError;
pub use self::invalid_handle::InvalidHandle;
pub use self::open_error::OpenError;
pub use self::read_error::ReadError;
pub use self::write_error::WriteError;

/// An error occurring while accessing the system module.
pub trait Error: PartialEq + Debug + Display {
    /// Generate a human-readable version of the error.
    fn error_message(&self) -> String {
        format!("{}", &self)
    }
}
