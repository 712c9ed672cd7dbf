#![allow(clippy::missing_safety_doc)] // Well, using C-pointers *is* unsafe...

extern crate static_vcruntime;

use std::convert::TryFrom;
use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int};
use std::ptr::null;
use std::slice;

use system_io::{errors::Error, Console, FileGateway, Handle, OpenFlags, Value};

/// Open the file for reading.
pub const FILE_READ_ONLY: c_int = 1;
/// Open the file for writing.
pub const FILE_WRITE_ONLY: c_int = 2;
/// Open the file for reading and writing.
pub const FILE_READ_WRITE: c_int = 3;
/// Create the file if it does not exist.
pub const FILE_CREATE: c_int = 4;
/// Discard the content of an existing file.
pub const FILE_TRUNCATE: c_int = 8;
/// Position every write at the end of the file.
pub const FILE_APPEND: c_int = 16;

/// The value returned by the functions of this library on failure.
pub const SYSIO_FAILURE: c_int = -1;

struct Environment(*mut *mut Status);

impl From<*mut *mut Status> for Environment {
    fn from(value: *mut *mut Status) -> Self {
        Self(value)
    }
}

impl Environment {
    pub fn execute<T, C: FnOnce() -> Result<T, String>>(self, fallback: T, body: C) -> T {
        match body() {
            Ok(value) => value,
            Err(error) => {
                if !self.0.is_null() {
                    let status = Environment::create_status(&error);
                    unsafe {
                        std::ptr::write(self.0, status);
                    }
                }
                fallback
            }
        }
    }

    pub fn create_status<T: AsRef<str>>(description: T) -> *mut Status {
        let message = CString::new(description.as_ref().replace('\0', "")).unwrap_or_default();
        Box::into_raw(Box::new(Status(message)))
    }

    pub fn parse_str<'a>(c_string: *const c_char) -> Result<&'a str, String> {
        (!c_string.is_null())
            .then(|| unsafe { CStr::from_ptr(c_string) })
            .ok_or_else(|| String::from("Path not specified"))
            .and_then(|raw_str| {
                raw_str
                    .to_str()
                    .map_err(|_| String::from("Path contains invalid UTF8"))
            })
    }

    pub fn parse_values(values: *const *const c_char, count: c_int) -> Vec<Value> {
        let count = match usize::try_from(count) {
            Ok(count) if !values.is_null() => count,
            _ => {
                return Vec::new();
            }
        };

        unsafe { slice::from_raw_parts(values, count) }
            .iter()
            .map(|value| match value.is_null() {
                true => Value::Null,
                false => Value::from(
                    unsafe { CStr::from_ptr(*value) }
                        .to_string_lossy()
                        .into_owned(),
                ),
            })
            .collect()
    }

    pub fn destroy<T>(pointer: *mut T) {
        if pointer.is_null() {
            return;
        }
        unsafe {
            drop(Box::from_raw(pointer));
        }
    }
}

/// The gateway to the files of the operating system.
pub struct Gateway(FileGateway);

/// The status of the operation.
pub struct Status(CString);

/// Create a gateway to the files of the operating system.
///
/// @return A pointer to the gateway. It must be freed with DestroyGateway.
#[no_mangle]
pub extern "C" fn CreateGateway() -> *mut Gateway {
    Box::into_raw(Box::new(Gateway(FileGateway::new())))
}

/// Destroy a gateway, closing all files still open.
///
/// @param gateway The gateway. Passing nullptr is a safe no-op.
#[no_mangle]
pub unsafe extern "C" fn DestroyGateway(gateway: *mut Gateway) {
    Environment::destroy(gateway)
}

/// Destroy a status.
///
/// @param status The status. Passing nullptr is a safe no-op.
#[no_mangle]
pub unsafe extern "C" fn DestroyStatus(status: *mut Status) {
    Environment::destroy(status)
}

/// Return the error message associated with a status.
///
/// @param status The status of interest.
///
/// @return A human-readable description of the failure.
#[no_mangle]
pub unsafe extern "C" fn GetMessage(status: *const Status) -> *const c_char {
    match status.as_ref() {
        Some(value) => value.0.as_ptr(),
        None => null(),
    }
}

/// Open a file.
///
/// @param gateway A pointer to the gateway.
///
/// @param path The path of the file.
///
/// @param flags The flags combined by bitwise OR, i.e. FILE_WRITE_ONLY | FILE_CREATE.
///
/// @param status Contains the error code of the failure if and only if the return value is -1. Setting this value to nullptr is safe and will not save the error code.
///
/// @return A handle to the file or -1 on failure.
#[no_mangle]
pub unsafe extern "C" fn Open(
    gateway: *mut Gateway,
    path: *const c_char,
    flags: c_int,
    status: *mut *mut Status,
) -> c_int {
    Environment::from(status).execute(SYSIO_FAILURE, || {
        let gateway = gateway
            .as_ref()
            .ok_or_else(|| String::from("Gateway not specified"))?;
        let path = Environment::parse_str(path)?;
        let mask = u32::try_from(flags).map_err(|_| format!("Invalid flags ({})", flags))?;
        gateway
            .0
            .open(path, mask)
            .map(Handle::raw)
            .map_err(|error| error.error_message())
    })
}

/// Write bytes to a file.
///
/// @param gateway A pointer to the gateway.
///
/// @param handle The handle returned by Open.
///
/// @param data The bytes to write.
///
/// @param length The number of bytes in data.
///
/// @return The number of bytes written or -1 on failure.
#[no_mangle]
pub unsafe extern "C" fn Write(
    gateway: *mut Gateway,
    handle: c_int,
    data: *const u8,
    length: usize,
) -> c_int {
    let gateway = match gateway.as_ref() {
        Some(gateway) => gateway,
        None => {
            return SYSIO_FAILURE;
        }
    };

    let data: &[u8] = match (data.is_null(), length) {
        (_, 0) => &[],
        (true, _) => {
            return SYSIO_FAILURE;
        }
        (false, length) => slice::from_raw_parts(data, std::cmp::min(length, c_int::MAX as usize)),
    };

    gateway.0.write(Handle(handle), data) as c_int
}

/// Write a string to a file, excluding its terminating null.
///
/// @param gateway A pointer to the gateway.
///
/// @param handle The handle returned by Open.
///
/// @param text The null-terminated string.
///
/// @return The number of bytes written or -1 on failure.
#[no_mangle]
pub unsafe extern "C" fn WriteString(
    gateway: *mut Gateway,
    handle: c_int,
    text: *const c_char,
) -> c_int {
    if text.is_null() {
        return SYSIO_FAILURE;
    }
    let text = CStr::from_ptr(text).to_bytes();
    Write(gateway, handle, text.as_ptr(), text.len())
}

/// Read bytes from a file.
///
/// @param gateway A pointer to the gateway.
///
/// @param handle The handle returned by Open.
///
/// @param buffer The destination of the bytes.
///
/// @param capacity The size of the buffer.
///
/// @return The number of bytes read, 0 at the end of the file, or -1 on failure.
#[no_mangle]
pub unsafe extern "C" fn Read(
    gateway: *mut Gateway,
    handle: c_int,
    buffer: *mut u8,
    capacity: usize,
) -> c_int {
    let gateway = match gateway.as_ref() {
        Some(gateway) => gateway,
        None => {
            return SYSIO_FAILURE;
        }
    };

    let buffer: &mut [u8] = match (buffer.is_null(), capacity) {
        (_, 0) => &mut [],
        (true, _) => {
            return SYSIO_FAILURE;
        }
        (false, capacity) => {
            slice::from_raw_parts_mut(buffer, std::cmp::min(capacity, c_int::MAX as usize))
        }
    };

    gateway.0.read_into(Handle(handle), buffer) as c_int
}

/// Close a file. The handle must not be used after the call.
///
/// @param gateway A pointer to the gateway.
///
/// @param handle The handle returned by Open.
///
/// @return 1 if operation was successful, 0 otherwise.
#[no_mangle]
pub unsafe extern "C" fn Close(gateway: *mut Gateway, handle: c_int) -> c_int {
    let gateway = match gateway.as_ref() {
        Some(gateway) => gateway,
        None => {
            return 0;
        }
    };

    match gateway.0.close(Handle(handle)) {
        Ok(()) => 1,
        Err(_) => 0,
    }
}

/// Parse a symbolic flag expression.
///
/// @param expression The expression, i.e. "FILE_WRITE_ONLY | FILE_CREATE".
///
/// @return The flags combined by bitwise OR or -1 if the expression is invalid.
#[no_mangle]
pub unsafe extern "C" fn ParseFlags(expression: *const c_char) -> c_int {
    let expression = match Environment::parse_str(expression) {
        Ok(expression) => expression,
        _ => {
            return SYSIO_FAILURE;
        }
    };

    match expression.parse::<OpenFlags>() {
        Ok(flags) => flags.bits() as c_int,
        Err(_) => SYSIO_FAILURE,
    }
}

/// Print strings to the standard output, separated by a single space.
///
/// @param values The strings. A nullptr entry is printed as "null".
///
/// @param count The number of strings.
#[no_mangle]
pub unsafe extern "C" fn Print(values: *const *const c_char, count: c_int) {
    Console::stdout().print(&Environment::parse_values(values, count))
}

/// Print strings to the standard output, separated by a single space and followed by a newline.
///
/// @param values The strings. A nullptr entry is printed as "null".
///
/// @param count The number of strings. With 0, only the newline is printed.
#[no_mangle]
pub unsafe extern "C" fn PrintLine(values: *const *const c_char, count: c_int) {
    Console::stdout().println(&Environment::parse_values(values, count))
}
