//! Utility functions and types.

use std::fmt::Debug;

use crate::ParameterSet;

/// Redacts a secret for `Debug` output.
///
/// - Empty strings print as `EMPTY`.
/// - Strings shorter than 12 characters are entirely redacted.
/// - Longer strings keep only their first and last three characters.
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

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        Redact(value.as_deref().unwrap_or_default())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let length = self.0.len();
        if length == 0 {
            f.write_str("EMPTY")
        } else if length < 12 || !self.0.is_char_boundary(3) || !self.0.is_char_boundary(length - 3)
        {
            f.write_str("***")
        } else {
            f.write_str(&self.0[..3])?;
            f.write_str("***")?;
            f.write_str(&self.0[length - 3..])
        }
    }
}

/// Render parameters as a query string that is safe to log.
///
/// Values of the keys in `sensitive` are replaced by their redacted form.
pub fn redact_query(params: &ParameterSet, sensitive: &[&str]) -> String {
    params
        .iter()
        .map(|(k, v)| {
            if sensitive.contains(&k) {
                format!("{k}={:?}", Redact(v))
            } else {
                format!("{k}={v}")
            }
        })
        .collect::<Vec<_>>()
        .join("&")
}
