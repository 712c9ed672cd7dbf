use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::util::Handle;

/// An operation referenced a handle which is closed or was never opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidHandle(pub Handle);

impl super::Error for InvalidHandle {}

impl Display for InvalidHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "The handle '{}' does not reference an open file", self.0)
    }
}
