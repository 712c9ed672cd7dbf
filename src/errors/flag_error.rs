use std::fmt::{Display, Formatter, Result as FmtResult};

/// An error occurring while parsing a symbolic flag expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagError {
    /// The expression is not a `|`-separated list of flag names.
    Malformed(String),
    /// A flag name is not known.
    UnknownName(String),
}

impl super::Error for FlagError {}

impl Display for FlagError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("Error during flag parsing: ")?;
        match self {
            FlagError::Malformed(expression) => {
                write!(f, "The expression '{}' is malformed", expression)
            }
            FlagError::UnknownName(name) => write!(f, "The flag '{}' is unknown", name),
        }
    }
}
