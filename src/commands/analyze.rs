//! The analyze command: discover classes, score them, emit the reports.

use crate::analyzers::extract_metrics;
use crate::config::AnalysisConfig;
use crate::core::{AnalysisReport, ClassRecord};
use crate::errors::TestgapError;
use crate::io::{write_reports, ClassWalker};
use crate::priority::{calculate_priority, classify};
use anyhow::Result;
use colored::*;

/// Run the full analysis pipeline and return the ranked report.
///
/// Runs sequentially: each record depends only on its own class, but the run
/// must either produce a complete, internally consistent record set or fail
/// outright. A production class whose file cannot be read aborts the run
/// rather than being skipped, so the summary counts always match the list.
pub fn run_analysis(config: &AnalysisConfig) -> Result<AnalysisReport> {
    let discovered = ClassWalker::new(config.classes_dir.clone())
        .with_extension(config.extension.clone())
        .discover()?;

    log::info!(
        "found {} production classes, {} test classes",
        discovered.production.len(),
        discovered.test_bases.len()
    );

    let mut records = Vec::with_capacity(discovered.production.len());
    for class in &discovered.production {
        let content =
            std::fs::read_to_string(&class.path).map_err(|source| TestgapError::ClassRead {
                path: class.path.clone(),
                source,
            })?;

        let metrics = extract_metrics(&content);
        let has_test = discovered.has_test_for(&class.name);
        let criticality = classify(&class.name, &config.tiers);
        let priority_score = calculate_priority(&metrics, has_test, criticality);

        records.push(ClassRecord {
            name: class.name.clone(),
            has_test,
            criticality,
            metrics,
            priority_score,
        });
    }

    Ok(AnalysisReport::from_records(config.analysis_date, records))
}

/// Run the pipeline, write all three reports, print the terminal summary.
pub fn handle_analyze(config: AnalysisConfig) -> Result<()> {
    let report = run_analysis(&config)?;
    write_reports(&report, &config.output_dir)?;
    print_summary(&report);
    Ok(())
}

fn print_summary(report: &AnalysisReport) {
    println!("{}", "Coverage Gap Analysis".bold().blue());
    println!("{}", "=====================".blue());
    println!();
    println!("  Production classes: {}", report.total_classes);
    println!("  With tests:         {}", report.classes_with_tests());
    println!("  Without tests:      {}", report.classes_without_tests);

    let gap = report.coverage_gap_percent();
    let gap_display = if gap > 50.0 {
        format!("{gap:.1}%").red()
    } else if gap > 20.0 {
        format!("{gap:.1}%").yellow()
    } else {
        format!("{gap:.1}%").green()
    };
    println!("  Coverage gap:       {gap_display}");
    println!();

    let top: Vec<_> = report.untested().take(5).collect();
    if !top.is_empty() {
        println!("{} Top untested classes:", "!".yellow());
        for (i, record) in top.iter().enumerate() {
            println!(
                "  {}. {} [{}] - priority {}",
                i + 1,
                record.name.yellow(),
                record.criticality,
                record.priority_score
            );
        }
        println!();
    }
}
