//! Ordered textual output of values.
use std::fmt::Write as FmtWrite;
use std::io::{Stdout, Write};
use std::sync::{Mutex, PoisonError};

use log::error;

use super::util::Value;

/// The separator placed between values if the caller does not supply one.
pub const DEFAULT_SEPARATOR: &str = " ";

/// A sink printing values in their canonical textual form.
///
/// Every call is rendered completely before it is written with a single write and flushed
/// immediately, so the output of two calls never interleaves.
#[derive(Debug)]
pub struct Console<W> {
    sink: Mutex<W>,
}

impl Console<Stdout> {
    /// A console printing to the standard output of the process.
    pub fn stdout() -> Self {
        Console::new(std::io::stdout())
    }
}

impl<W: Write> Console<W> {
    /// A console printing to an arbitrary sink.
    pub fn new(sink: W) -> Self {
        Console {
            sink: Mutex::new(sink),
        }
    }

    /// Print the values separated by a single space.
    pub fn print(&self, values: &[Value]) {
        self.print_separated(values, DEFAULT_SEPARATOR)
    }

    /// Print the values followed by a newline. Without values, only the newline is printed.
    pub fn println(&self, values: &[Value]) {
        self.println_separated(values, DEFAULT_SEPARATOR)
    }

    /// Print the values separated by `separator`.
    pub fn print_separated<S: AsRef<str>>(&self, values: &[Value], separator: S) {
        self.emit(render(values, separator.as_ref(), false))
    }

    /// Print the values separated by `separator` followed by a newline.
    pub fn println_separated<S: AsRef<str>>(&self, values: &[Value], separator: S) {
        self.emit(render(values, separator.as_ref(), true))
    }

    /// Consumes the console and returns its sink.
    pub fn into_inner(self) -> W {
        self.sink.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, text: String) {
        if text.is_empty() {
            return;
        }

        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        let result = match sink.write_all(text.as_bytes()) {
            Ok(()) => sink.flush(),
            Err(err) => Err(err),
        };
        if let Err(err) = result {
            error!("Writing to the console failed: {}", err);
        }
    }
}

fn render(values: &[Value], separator: &str, newline: bool) -> String {
    let mut line = String::new();
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            line.push_str(separator);
        }
        // Writing into a String never fails.
        let _ = write!(line, "{}", value);
    }
    if newline {
        line.push('\n');
    }
    line
}
