//! Regex-backed matcher

use super::Matcher;
use anyhow::Result;
use regex::{Regex, RegexBuilder};
use std::ops::Range;

/// Name of the optional capture group that narrows a match to the secret itself
pub const SECRET_GROUP: &str = "secret";

/// Regex-based matcher
///
/// Uses the `regex` crate's finite-automaton engine, so matching time is linear
/// in the input. When the expression defines a `(?P<secret>...)` group, only that
/// group becomes a span and the surrounding context (`password=`, `Bearer `)
/// stays in the text.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
    has_secret_group: bool,
}

impl RegexMatcher {
    /// Compile a matcher
    ///
    /// Expressions are compiled in multi-line mode. Expressions that can match the
    /// empty string are rejected since they would produce zero-length spans.
    pub fn new(pattern: &str, case_insensitive: bool) -> std::result::Result<Self, String> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(case_insensitive)
            .multi_line(true)
            .build()
            .map_err(|e| e.to_string())?;

        if regex.is_match("") {
            return Err("expression matches the empty string".to_string());
        }

        let has_secret_group = regex
            .capture_names()
            .any(|name| name == Some(SECRET_GROUP));

        Ok(Self {
            regex,
            has_secret_group,
        })
    }

    /// The source expression
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether the expression narrows matches with a `secret` group
    pub fn has_secret_group(&self) -> bool {
        self.has_secret_group
    }
}

impl Matcher for RegexMatcher {
    fn find(&self, text: &str) -> Result<Vec<Range<usize>>> {
        let ranges = if self.has_secret_group {
            self.regex
                .captures_iter(text)
                .filter_map(|caps| caps.name(SECRET_GROUP))
                .map(|m| m.range())
                .filter(|range| !range.is_empty())
                .collect()
        } else {
            self.regex
                .find_iter(text)
                .map(|m| m.range())
                .filter(|range| !range.is_empty())
                .collect()
        };
        Ok(ranges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_match() {
        let matcher = RegexMatcher::new(r"AKIA[0-9A-Z]{16}", false).unwrap();
        let text = "key AKIA1234567890ABCDEF end";
        let ranges = matcher.find(text).unwrap();
        assert_eq!(ranges, vec![4..24]);
        assert_eq!(&text[ranges[0].clone()], "AKIA1234567890ABCDEF");
    }

    #[test]
    fn test_secret_group_narrows_span() {
        let matcher =
            RegexMatcher::new(r"(?i)bearer\s+(?P<secret>[A-Za-z0-9._~+/-]{8,}=*)", false).unwrap();
        assert!(matcher.has_secret_group());

        let text = "Authorization: Bearer abcdefgh12345678";
        let ranges = matcher.find(text).unwrap();
        assert_eq!(ranges.len(), 1);
        assert_eq!(&text[ranges[0].clone()], "abcdefgh12345678");
    }

    #[test]
    fn test_case_insensitive_flag() {
        let matcher = RegexMatcher::new(r"password", true).unwrap();
        assert_eq!(matcher.find("PassWord").unwrap(), vec![0..8]);

        let matcher = RegexMatcher::new(r"password", false).unwrap();
        assert!(matcher.find("PassWord").unwrap().is_empty());
    }

    #[test]
    fn test_rejects_empty_matching_expression() {
        assert!(RegexMatcher::new(r"a*", false).is_err());
        assert!(RegexMatcher::new(r"(unclosed", false).is_err());
    }
}
