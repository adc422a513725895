use regex::Regex;

use crate::error::{ReleaseError, Result};

/// Matches the "Created version N" line clasp prints after `clasp version`.
///
/// Case folding and digits are ASCII-only: `ſ` does not fold to `s` and a
/// digit run stops at the first non-ASCII digit.
const VERSION_PATTERN: &str = r"(?i-u:version)\s+([0-9]+)";

/// A version number as reported by clasp.
///
/// Kept as the digit string clasp printed, so it is passed to
/// `clasp deploy --versionNumber` unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionNumber(String);

impl VersionNumber {
    /// Create a version number from a digit string.
    ///
    /// Returns `None` if the input is empty or contains anything but ASCII digits.
    pub fn new(digits: impl Into<String>) -> Option<Self> {
        let digits = digits.into();
        if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
            Some(VersionNumber(digits))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Finds every `version <digits>` occurrence in the output, in order.
pub fn find_version_numbers(output: &str) -> Vec<VersionNumber> {
    let mut found = Vec::new();

    if let Ok(re) = Regex::new(VERSION_PATTERN) {
        for captures in re.captures_iter(output) {
            if let Some(number) = captures.get(1).and_then(|m| VersionNumber::new(m.as_str())) {
                found.push(number);
            }
        }
    }

    found
}

/// Extracts the version number from `clasp version` output.
///
/// The first `version <digits>` match wins (case-insensitive, any surrounding text).
///
/// # Returns
/// * `Ok(VersionNumber)` - The first digit run following "version"
/// * `Err(ReleaseError::VersionParse)` - No match; the error carries the raw output
pub fn parse_version_number(output: &str) -> Result<VersionNumber> {
    find_version_numbers(output)
        .into_iter()
        .next()
        .ok_or_else(|| ReleaseError::version_parse(output))
}
