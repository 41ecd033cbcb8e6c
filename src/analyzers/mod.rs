//! Metric extraction from raw Apex source text.
//!
//! Everything here is shallow textual pattern matching. The line count skips
//! blank lines and `//` comments but not `/* */` blocks, and the method
//! pattern misses signatures wrapped across lines. Those approximations are
//! accepted: the metrics drive a priority ranking, and an exact parser would
//! not change the ordering enough to matter.

use crate::core::Metrics;
use once_cell::sync::Lazy;
use regex::Regex;

/// Access modifier, optional static, return type, identifier, open paren.
static METHOD_SIGNATURE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(public|private|protected|global)\s+(static\s+)?\w+\s+\w+\s*\(")
        .expect("method signature pattern is valid")
});

/// Extract structural and integration metrics from one class body.
///
/// Total over arbitrary input: malformed or partial source yields zero
/// counts and false flags rather than an error.
pub fn extract_metrics(content: &str) -> Metrics {
    Metrics {
        loc: count_logical_lines(content),
        methods: METHOD_SIGNATURE.find_iter(content).count(),
        has_callout: has_callout_markers(content),
        has_database_ops: has_database_markers(content),
        has_soql: content.to_uppercase().contains("[SELECT"),
    }
}

fn count_logical_lines(content: &str) -> usize {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("//"))
        .count()
}

fn has_callout_markers(content: &str) -> bool {
    content.contains("@future")
        || content.contains("HttpRequest")
        || content.contains("HttpResponse")
}

fn has_database_markers(content: &str) -> bool {
    content.contains("Database.") || content.contains("insert ") || content.contains("update ")
}
