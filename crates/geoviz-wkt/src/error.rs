// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for WKT parsing

use thiserror::Error;

/// WKT parsing result type
pub type Result<T> = std::result::Result<T, WktError>;

/// WKT parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WktError {
    /// Input does not start with a recognizable geometry
    #[error("Malformed WKT near: {0}")]
    Malformed(String),

    /// A geometry parsed but unconsumed text followed it
    #[error("Trailing input after geometry: {0}")]
    TrailingInput(String),
}

impl WktError {
    /// Create a malformed error from the offending input
    pub fn malformed(rest: &str) -> Self {
        WktError::Malformed(snippet(rest))
    }

    /// Create a trailing-input error from the unconsumed input
    pub fn trailing_input(rest: &str) -> Self {
        WktError::TrailingInput(snippet(rest))
    }
}

/// First characters of the input, enough to locate the problem
fn snippet(input: &str) -> String {
    const MAX_CHARS: usize = 40;
    let head: String = input.chars().take(MAX_CHARS).collect();
    if head.len() < input.len() {
        format!("{}...", head)
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_input_kept_verbatim() {
        let error = WktError::malformed("POIN (1 1)");
        assert_eq!(error, WktError::Malformed("POIN (1 1)".to_string()));
    }

    #[test]
    fn test_long_input_truncated() {
        let long = "X".repeat(100);
        if let WktError::Malformed(text) = WktError::malformed(&long) {
            assert_eq!(text.len(), 43);
            assert!(text.ends_with("..."));
        } else {
            panic!("Expected malformed error");
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            WktError::malformed("junk").to_string(),
            "Malformed WKT near: junk"
        );
        assert_eq!(
            WktError::trailing_input("extra").to_string(),
            "Trailing input after geometry: extra"
        );
    }
}
