//! Redaction reporting
//!
//! Summarizes what a redaction replaced: counts per pattern, one row per span
//! and any pattern warnings. Rows carry offsets and placeholders only, never the
//! matched text.

use crate::cloaking::models::Redaction;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Report of one redaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionReport {
    /// Session the report describes
    pub session_id: String,

    /// Total spans replaced
    pub total_redactions: usize,

    /// Replaced spans by pattern name
    pub redactions_by_pattern: BTreeMap<String, usize>,

    /// One row per replaced span, in text order
    pub details: Vec<RedactionDetail>,

    /// Pattern failures reported during the scan
    pub warnings: Vec<String>,
}

/// A single replaced span
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionDetail {
    pub pattern: String,
    pub start: usize,
    pub end: usize,
    pub placeholder: String,
}

impl RedactionReport {
    /// Build the report for a redaction
    pub fn from_redaction(redaction: &Redaction) -> Self {
        Self {
            session_id: redaction.session_id.to_string(),
            total_redactions: redaction.total_redactions(),
            redactions_by_pattern: redaction.counts_by_pattern(),
            details: redaction
                .spans
                .iter()
                .map(|span| RedactionDetail {
                    pattern: span.pattern_name.clone(),
                    start: span.start,
                    end: span.end,
                    placeholder: span.placeholder.clone(),
                })
                .collect(),
            warnings: redaction.warnings.iter().map(ToString::to_string).collect(),
        }
    }

    /// Format report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push_str("                       REDACTION REPORT                        \n");
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output.push_str("📊 SUMMARY\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!("  Session:            {}\n", self.session_id));
        output.push_str(&format!("  Total Redactions:   {}\n", self.total_redactions));
        output.push('\n');

        if !self.redactions_by_pattern.is_empty() {
            output.push_str("🔍 REDACTIONS BY PATTERN\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");

            let mut patterns: Vec<_> = self.redactions_by_pattern.iter().collect();
            patterns.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

            for (pattern, count) in patterns {
                output.push_str(&format!("  {pattern:30} {count:>5}\n"));
            }
            output.push('\n');
        }

        if !self.details.is_empty() {
            output.push_str("📝 DETAILS\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for detail in &self.details {
                output.push_str(&format!(
                    "  {:>6}..{:<6} {:24} -> {}\n",
                    detail.start, detail.end, detail.pattern, detail.placeholder
                ));
            }
            output.push('\n');
        }

        if !self.warnings.is_empty() {
            output.push_str("⚠️  WARNINGS\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for warning in &self.warnings {
                output.push_str(&format!("  • {warning}\n"));
            }
            output.push('\n');
        }

        output.push_str("═══════════════════════════════════════════════════════════════\n");

        output
    }

    /// Format report as JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&Redaction> for RedactionReport {
    fn from(redaction: &Redaction) -> Self {
        Self::from_redaction(redaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloaking::mapping::Mapping;
    use crate::cloaking::models::AcceptedSpan;
    use crate::domain::PatternExecutionWarning;
    use chrono::Utc;
    use uuid::Uuid;

    fn span(pattern: &str, start: usize, end: usize, placeholder: &str) -> AcceptedSpan {
        AcceptedSpan {
            start,
            end,
            pattern_name: pattern.to_string(),
            priority: 0,
            matched_text: "s3cr3t-value".to_string(),
            placeholder: placeholder.to_string(),
        }
    }

    fn redaction(spans: Vec<AcceptedSpan>) -> Redaction {
        Redaction {
            session_id: Uuid::new_v4(),
            redacted_at: Utc::now(),
            cloaked_text: String::new(),
            mapping: Mapping::new(),
            spans,
            warnings: vec![PatternExecutionWarning::new("custom", "boom")],
        }
    }

    #[test]
    fn test_report_counts() {
        let report = RedactionReport::from_redaction(&redaction(vec![
            span("email", 0, 10, "[EMAIL_1]"),
            span("email", 20, 30, "[EMAIL_2]"),
            span("aws-access-key", 40, 60, "[AWS_ACCESS_KEY_1]"),
        ]));

        assert_eq!(report.total_redactions, 3);
        assert_eq!(report.redactions_by_pattern["email"], 2);
        assert_eq!(report.redactions_by_pattern["aws-access-key"], 1);
        assert_eq!(report.details[2].placeholder, "[AWS_ACCESS_KEY_1]");
        assert_eq!(report.warnings, vec!["pattern 'custom' failed: boom"]);
    }

    #[test]
    fn test_format_console() {
        let report = RedactionReport::from(&redaction(vec![span("email", 3, 13, "[EMAIL_1]")]));
        let output = report.format_console();

        assert!(output.contains("REDACTION REPORT"));
        assert!(output.contains("Total Redactions:   1"));
        assert!(output.contains("[EMAIL_1]"));
        assert!(output.contains("WARNINGS"));
        assert!(!output.contains("s3cr3t-value"));
    }

    #[test]
    fn test_empty_report_has_no_sections() {
        let mut empty = redaction(Vec::new());
        empty.warnings.clear();
        let output = RedactionReport::from_redaction(&empty).format_console();
        assert!(!output.contains("DETAILS"));
        assert!(!output.contains("WARNINGS"));
    }
}
