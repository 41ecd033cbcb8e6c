//! Common type definitions used across the codebase

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Structural and integration metrics for a single Apex class.
///
/// All counts are textual heuristics: `loc` ignores block comments and
/// `methods` misses signatures wrapped across lines. That tolerance is
/// intentional; the numbers feed a priority ranking, not a compiler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    /// Non-blank, non-`//` lines.
    pub loc: usize,
    /// Matches of the method-signature pattern.
    pub methods: usize,
    /// `@future`, `HttpRequest`, or `HttpResponse` present.
    pub has_callout: bool,
    /// `Database.` namespace call or a DML `insert `/`update ` keyword.
    pub has_database_ops: bool,
    /// Inline SOQL (`[SELECT ...]`) present.
    pub has_soql: bool,
}

/// Business criticality tiers, ordered by descending importance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Criticality {
    Critical,
    High,
    Medium,
    Low,
}

impl Criticality {
    /// Display name as it appears in reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            Criticality::Critical => "CRITICAL",
            Criticality::High => "HIGH",
            Criticality::Medium => "MEDIUM",
            Criticality::Low => "LOW",
        }
    }
}

impl std::fmt::Display for Criticality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Analysis result for one production class. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    #[serde(rename = "class")]
    pub name: String,
    pub has_test: bool,
    pub criticality: Criticality,
    #[serde(flatten)]
    pub metrics: Metrics,
    pub priority_score: u32,
}

/// The full ranked result set for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis_date: NaiveDate,
    pub total_classes: usize,
    pub classes_without_tests: usize,
    #[serde(rename = "results")]
    pub records: Vec<ClassRecord>,
}

impl AnalysisReport {
    /// Rank records by priority score descending and assemble the report.
    ///
    /// The sort is stable, so records with equal scores keep their
    /// discovery order.
    pub fn from_records(analysis_date: NaiveDate, mut records: Vec<ClassRecord>) -> Self {
        records.sort_by(|a, b| b.priority_score.cmp(&a.priority_score));

        let total_classes = records.len();
        let classes_without_tests = records.iter().filter(|r| !r.has_test).count();

        Self {
            analysis_date,
            total_classes,
            classes_without_tests,
            records,
        }
    }

    /// Untested records, in rank order.
    pub fn untested(&self) -> impl Iterator<Item = &ClassRecord> {
        self.records.iter().filter(|r| !r.has_test)
    }

    /// Tested-class count.
    pub fn classes_with_tests(&self) -> usize {
        self.total_classes - self.classes_without_tests
    }

    /// Share of classes without tests, as a percentage.
    pub fn coverage_gap_percent(&self) -> f64 {
        if self.total_classes == 0 {
            return 0.0;
        }
        self.classes_without_tests as f64 / self.total_classes as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, score: u32, has_test: bool) -> ClassRecord {
        ClassRecord {
            name: name.to_string(),
            has_test,
            criticality: Criticality::Low,
            metrics: Metrics::default(),
            priority_score: score,
        }
    }

    #[test]
    fn ranking_is_descending_by_score() {
        let report = AnalysisReport::from_records(
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            vec![
                record("Low", 100, true),
                record("High", 6000, false),
                record("Mid", 700, true),
            ],
        );

        let names: Vec<_> = report.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["High", "Mid", "Low"]);
    }

    #[test]
    fn equal_scores_preserve_discovery_order() {
        let report = AnalysisReport::from_records(
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            vec![
                record("First", 500, true),
                record("Second", 500, true),
                record("Third", 500, true),
            ],
        );

        let names: Vec<_> = report.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn summary_counts_match_records() {
        let report = AnalysisReport::from_records(
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            vec![
                record("A", 6000, false),
                record("B", 700, true),
                record("C", 5100, false),
            ],
        );

        assert_eq!(report.total_classes, 3);
        assert_eq!(report.classes_without_tests, 2);
        assert_eq!(report.classes_with_tests(), 1);
        assert!((report.coverage_gap_percent() - 66.666).abs() < 0.01);
    }

    #[test]
    fn gap_percent_is_zero_for_empty_report() {
        let report =
            AnalysisReport::from_records(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(), vec![]);
        assert_eq!(report.coverage_gap_percent(), 0.0);
    }

    #[test]
    fn record_serializes_with_report_field_names() {
        let rec = ClassRecord {
            name: "ComplianceScorer".to_string(),
            has_test: false,
            criticality: Criticality::Critical,
            metrics: Metrics {
                loc: 120,
                methods: 3,
                ..Metrics::default()
            },
            priority_score: 6042,
        };

        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["class"], "ComplianceScorer");
        assert_eq!(json["criticality"], "CRITICAL");
        assert_eq!(json["loc"], 120);
        assert_eq!(json["priority_score"], 6042);
    }
}
