//! Utility functions and types.

use std::fmt::{self, Debug, Formatter};

/// Formats a secret for log output.
///
/// Values of twelve characters or more keep their first and last three
/// characters; anything shorter is masked entirely. The kept affixes let
/// two different keys be told apart in a log line without exposing
/// anything useful.
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
        Redact(value.as_deref().unwrap_or(""))
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0.len() {
            0 => f.write_str("EMPTY"),
            1..=11 => f.write_str("***"),
            n => write!(f, "{}***{}", &self.0[..3], &self.0[n - 3..]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact() {
        let cases = [
            ("", "EMPTY"),
            ("secret", "***"),
            ("elevenchars", "***"),
            ("twelve-chars", "twe***ars"),
            ("LTAIZBLddGWi57kW", "LTA***7kW"),
        ];

        for (input, expected) in cases {
            assert_eq!(format!("{:?}", Redact(input)), expected, "input: {input}");
        }

        assert_eq!(format!("{:?}", Redact::from(&None::<String>)), "EMPTY");
    }
}
