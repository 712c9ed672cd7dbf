mod flags;
mod handle;
mod value;

pub use self::flags::{
    OpenFlags, FILE_APPEND, FILE_CREATE, FILE_READ_ONLY, FILE_READ_WRITE, FILE_TRUNCATE,
    FILE_WRITE_ONLY, FLAG_CONSTANTS, FLAG_PREFIX,
};
pub use self::handle::Handle;
pub use self::value::{Properties, Value};
