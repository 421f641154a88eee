//! Error types for skip list operations.

use std::fmt;

/// Errors raised by [`SkipList`](crate::SkipList) operations.
///
/// Reads report a missing key as `Ok(None)` / `Ok(false)` rather than an
/// error; only removal treats absence as a failure, since a removal implies
/// the caller believed the key existed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipListError {
    /// A key-taking operation received the reserved key `0`, or a
    /// constructor received a probability outside the open interval (0, 1).
    InvalidArgument(&'static str),
    /// A removal was requested for a key that is not present.
    NotFound(i32),
}

impl fmt::Display for SkipListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipListError::InvalidArgument(reason) => write!(f, "invalid argument: {reason}"),
            SkipListError::NotFound(key) => write!(f, "key {key} not found"),
        }
    }
}

impl std::error::Error for SkipListError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            SkipListError::InvalidArgument("key 0 is reserved").to_string(),
            "invalid argument: key 0 is reserved"
        );
        assert_eq!(SkipListError::NotFound(42).to_string(), "key 42 not found");
    }
}
