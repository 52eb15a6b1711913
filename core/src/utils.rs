//! Utility functions and types.

use std::fmt::Debug;

/// Redacts a secret so it can be logged.
///
/// - Secrets shorter than 12 characters are entirely redacted.
/// - Longer secrets keep their first three and last three characters.
///
/// Characters are counted as `char`, so multi-byte input never gets split.
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
        let count = self.0.chars().count();
        match count {
            0 => f.write_str("EMPTY"),
            1..=11 => f.write_str("***"),
            _ => {
                let head: String = self.0.chars().take(3).collect();
                let tail: String = self.0.chars().skip(count - 3).collect();
                write!(f, "{head}***{tail}")
            }
        }
    }
}
