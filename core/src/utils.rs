//! Utility functions and types.

use std::fmt::Debug;

/// Redacts a secret for `Debug` output.
///
/// - Empty input prints `EMPTY`.
/// - Input shorter than 12 bytes is replaced by `***` entirely.
/// - Longer input keeps the first and last three characters so that different
///   keys can still be told apart in logs.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.0;
        if s.is_empty() {
            return f.write_str("EMPTY");
        }

        let (Some(head), Some(tail)) = (s.get(..3), s.get(s.len().saturating_sub(3)..)) else {
            return f.write_str("***");
        };
        if s.len() < 12 {
            return f.write_str("***");
        }

        write!(f, "{head}***{tail}")
    }
}
