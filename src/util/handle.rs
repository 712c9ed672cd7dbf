use std::fmt::{Display, Formatter, Result as FmtResult};

/// A raw handle to a file opened through the gateway.
#[derive(Clone, Copy, Debug, Hash, PartialOrd, PartialEq, Eq, Ord)]
pub struct Handle(pub i32);

impl Handle {
    /// The first handle ever handed out. Lower values belong to the standard streams.
    pub const FIRST: Handle = Handle(3);

    /// Returns the raw integer value of the handle.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// The handle following this one, if the integer range is not exhausted.
    pub(crate) fn successor(self) -> Option<Handle> {
        self.0.checked_add(1).map(Handle)
    }
}

impl From<i32> for Handle {
    fn from(raw_value: i32) -> Self {
        Handle(raw_value)
    }
}

impl From<Handle> for i32 {
    fn from(handle: Handle) -> Self {
        handle.0
    }
}

impl Display for Handle {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Handle;

    #[test]
    fn test_successor() {
        assert_eq!(Handle::FIRST.successor(), Some(Handle(4)));
        assert_eq!(Handle(i32::MAX).successor(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Handle(42)), "42");
        assert_eq!(i32::from(Handle::from(7)), 7);
    }
}
