//! Run configuration.
//!
//! The pipeline takes everything it needs as an explicit `AnalysisConfig`
//! value: directories, file extension, the fixed run date, and the ordered
//! tier table. No ambient module state, so tests can run fully isolated
//! pipelines side by side.

use crate::core::Criticality;
use crate::priority::TierRule;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Report file names, fixed per run.
pub const JSON_REPORT_FILE: &str = "coverage-analysis-data.json";
pub const MARKDOWN_REPORT_FILE: &str = "coverage-analysis-report.md";
pub const TASK_LIST_FILE: &str = "TEST-GENERATION-TASKS.md";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Directory holding the `.cls` sources, scanned non-recursively.
    pub classes_dir: PathBuf,
    /// Directory the three reports are written into.
    pub output_dir: PathBuf,
    /// Source file extension, without the dot.
    pub extension: String,
    /// Date stamped into the reports. Fixed per run so re-running on
    /// unchanged input reproduces the output byte for byte.
    pub analysis_date: NaiveDate,
    /// Ordered tier table, most critical group first.
    pub tiers: Vec<TierRule>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            classes_dir: PathBuf::from("force-app/main/default/classes"),
            output_dir: PathBuf::from("reports"),
            extension: "cls".to_string(),
            analysis_date: NaiveDate::from_ymd_opt(2026, 1, 15).expect("valid date"),
            tiers: default_tier_rules(),
        }
    }
}

/// Default business-criticality tiers for a compliance-oriented org.
/// Order is significant: evaluated first-match-wins.
pub fn default_tier_rules() -> Vec<TierRule> {
    vec![
        TierRule::new(
            Criticality::Critical,
            &[
                "Compliance",
                "Scorer",
                "Framework",
                "Evidence",
                "Security",
                "Audit",
            ],
        ),
        TierRule::new(
            Criticality::High,
            &["Controller", "Service", "Scheduler", "Batch", "Queueable"],
        ),
        TierRule::new(
            Criticality::Medium,
            &["Util", "Helper", "Factory", "Builder", "Manager"],
        ),
    ]
}
