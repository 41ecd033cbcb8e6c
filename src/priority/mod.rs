//! Business-criticality classification and test-priority scoring.
//!
//! Both functions are pure and total so they can be unit-tested without any
//! file I/O. Classification is ordered-rule dispatch: the tier table is an
//! ordered list evaluated first-match-wins, which is what makes a name
//! matching both a CRITICAL and a MEDIUM pattern come out CRITICAL.

use crate::core::{Criticality, Metrics};
use serde::{Deserialize, Serialize};

/// One ordered entry of the tier table: a tier and the name substrings that
/// select it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierRule {
    pub tier: Criticality,
    pub patterns: Vec<String>,
}

impl TierRule {
    pub fn new(tier: Criticality, patterns: &[&str]) -> Self {
        Self {
            tier,
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn matches(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.patterns
            .iter()
            .any(|p| name.contains(&p.to_lowercase()))
    }
}

/// Classify a class name against the ordered tier table.
///
/// Matching is case-insensitive substring containment; the first rule with
/// any matching pattern wins. Names matching no rule are LOW.
pub fn classify(name: &str, rules: &[TierRule]) -> Criticality {
    rules
        .iter()
        .find(|rule| rule.matches(name))
        .map(|rule| rule.tier)
        .unwrap_or(Criticality::Low)
}

fn tier_weight(tier: Criticality) -> u32 {
    match tier {
        Criticality::Critical => 1000,
        Criticality::High => 500,
        Criticality::Medium => 200,
        Criticality::Low => 100,
    }
}

/// Missing-test bonus. Dominates every other term so that any untested class
/// outranks any tested one.
const NO_TEST_BONUS: u32 = 5000;

/// Compute the testing-priority score for one class.
pub fn calculate_priority(metrics: &Metrics, has_test: bool, tier: Criticality) -> u32 {
    let mut score = tier_weight(tier);

    if !has_test {
        score += NO_TEST_BONUS;
    }

    // Complexity: 1 point per 10 LOC, 10 points per method.
    score += (metrics.loc / 10) as u32;
    score += (metrics.methods * 10) as u32;

    // Integration surface, independent additive bonuses.
    if metrics.has_callout {
        score += 200;
    }
    if metrics.has_database_ops {
        score += 100;
    }
    if metrics.has_soql {
        score += 50;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_tier_rules;

    #[test]
    fn classify_matches_tiers_case_insensitively() {
        let rules = default_tier_rules();
        assert_eq!(classify("ComplianceScorer", &rules), Criticality::Critical);
        assert_eq!(classify("accountCONTROLLER", &rules), Criticality::High);
        assert_eq!(classify("DataUtilHelper", &rules), Criticality::Medium);
        assert_eq!(classify("Widget", &rules), Criticality::Low);
    }

    #[test]
    fn classify_prefers_earlier_rules() {
        // "Audit" (CRITICAL) and "Util" (MEDIUM) both match; first wins.
        let rules = default_tier_rules();
        assert_eq!(classify("AuditUtil", &rules), Criticality::Critical);
    }

    #[test]
    fn classify_is_low_for_empty_rule_table() {
        assert_eq!(classify("ComplianceScorer", &[]), Criticality::Low);
    }

    #[test]
    fn score_matches_worked_example() {
        // 120 LOC, 3 methods, no integration markers, no test, CRITICAL:
        // 1000 + 5000 + 12 + 30 = 6042.
        let metrics = Metrics {
            loc: 120,
            methods: 3,
            ..Metrics::default()
        };
        assert_eq!(
            calculate_priority(&metrics, false, Criticality::Critical),
            6042
        );
    }

    #[test]
    fn missing_test_bonus_dominates() {
        let metrics = Metrics {
            loc: 999,
            methods: 40,
            has_callout: true,
            has_database_ops: true,
            has_soql: true,
        };
        let tested_max = calculate_priority(&metrics, true, Criticality::Critical);
        let untested_min = calculate_priority(&Metrics::default(), false, Criticality::Low);
        assert!(untested_min > tested_max);
    }

    #[test]
    fn integration_bonuses_are_independent() {
        let base = calculate_priority(&Metrics::default(), true, Criticality::Low);
        let all = calculate_priority(
            &Metrics {
                has_callout: true,
                has_database_ops: true,
                has_soql: true,
                ..Metrics::default()
            },
            true,
            Criticality::Low,
        );
        assert_eq!(all, base + 200 + 100 + 50);
    }

    #[test]
    fn score_is_monotone_in_each_input() {
        let base = Metrics {
            loc: 50,
            methods: 2,
            ..Metrics::default()
        };
        let score = calculate_priority(&base, true, Criticality::Medium);

        let more_loc = Metrics { loc: 60, ..base };
        assert!(calculate_priority(&more_loc, true, Criticality::Medium) >= score);

        let more_methods = Metrics { methods: 3, ..base };
        assert!(calculate_priority(&more_methods, true, Criticality::Medium) > score);

        let with_callout = Metrics {
            has_callout: true,
            ..base
        };
        assert!(calculate_priority(&with_callout, true, Criticality::Medium) > score);
    }

    #[test]
    fn loc_contribution_floors_division() {
        let a = calculate_priority(
            &Metrics {
                loc: 19,
                ..Metrics::default()
            },
            true,
            Criticality::Low,
        );
        let b = calculate_priority(
            &Metrics {
                loc: 10,
                ..Metrics::default()
            },
            true,
            Criticality::Low,
        );
        assert_eq!(a, b);
    }
}
