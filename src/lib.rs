// Export modules for library usage
pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod priority;

// Re-export commonly used types
pub use crate::core::{AnalysisReport, ClassRecord, Criticality, Metrics};

pub use crate::analyzers::extract_metrics;

pub use crate::priority::{calculate_priority, classify, TierRule};

pub use crate::config::{default_tier_rules, AnalysisConfig};

pub use crate::errors::{TestgapError, TestgapResult};

pub use crate::io::{write_reports, JsonWriter, MarkdownWriter, ReportWriter, TaskListWriter};

pub use crate::commands::{handle_analyze, run_analysis};
