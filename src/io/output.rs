//! Report emitters.
//!
//! Three independent consumers of the same ranked report: machine-readable
//! JSON, a human-readable markdown summary, and a task list handed to a
//! code-generation assistant. Pure string templating over `std::io::Write`;
//! none of them mutates the record set.

use crate::config::{JSON_REPORT_FILE, MARKDOWN_REPORT_FILE, TASK_LIST_FILE};
use crate::core::{AnalysisReport, ClassRecord};
use crate::errors::{TestgapError, TestgapResult};
use std::io::Write;
use std::path::Path;

/// Untested-class rows shown in the markdown table before truncation.
const MAX_TABLE_ROWS: usize = 50;

pub trait ReportWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_summary(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Coverage Analysis Report")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "**Generated:** {}", report.analysis_date)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "## Summary Statistics")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "- Total Production Classes: {}",
            report.total_classes
        )?;
        writeln!(
            self.writer,
            "- Classes Without Tests: {}",
            report.classes_without_tests
        )?;
        writeln!(
            self.writer,
            "- Classes With Tests: {}",
            report.classes_with_tests()
        )?;
        writeln!(
            self.writer,
            "- Estimated Coverage Gap: {:.1}%",
            report.coverage_gap_percent()
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_untested_table(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "## Classes Without Test Coverage (Priority Order)"
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Class | Criticality | LOC | Methods | Callouts | DB Ops | Priority |"
        )?;
        writeln!(
            self.writer,
            "|-------|-------------|-----|---------|----------|--------|----------|"
        )?;

        let untested: Vec<&ClassRecord> = report.untested().collect();
        for record in untested.iter().take(MAX_TABLE_ROWS) {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} | {} |",
                record.name,
                record.criticality,
                record.metrics.loc,
                record.metrics.methods,
                flag(record.metrics.has_callout),
                flag(record.metrics.has_database_ops),
                record.priority_score
            )?;
        }

        if untested.len() > MAX_TABLE_ROWS {
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "*...and {} more classes*",
                untested.len() - MAX_TABLE_ROWS
            )?;
        }
        Ok(())
    }
}

impl<W: Write> ReportWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.write_summary(report)?;
        self.write_untested_table(report)?;
        Ok(())
    }
}

pub struct TaskListWriter<W: Write> {
    writer: W,
}

impl<W: Write> TaskListWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_instructions(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "# TASK LIST - Test Class Generation")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "**Work Type:** Mechanical test class generation")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "## Instructions")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "For each class below, generate a comprehensive test class following this template:"
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "```apex")?;
        writeln!(self.writer, "@isTest")?;
        writeln!(self.writer, "private class <ClassName>Test {{")?;
        writeln!(self.writer, "    @TestSetup")?;
        writeln!(self.writer, "    static void setup() {{")?;
        writeln!(self.writer, "        // Shared test data")?;
        writeln!(self.writer, "    }}")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "    @isTest static void testPositiveScenario() {{ /* 200+ records */ }}"
        )?;
        writeln!(
            self.writer,
            "    @isTest static void testNegativeScenario() {{ /* Error handling */ }}"
        )?;
        writeln!(
            self.writer,
            "    @isTest static void testBulkScenario() {{ /* Governor limits */ }}"
        )?;
        writeln!(
            self.writer,
            "    @isTest static void testEdgeCases() {{ /* Boundary conditions */ }}"
        )?;
        writeln!(self.writer, "}}")?;
        writeln!(self.writer, "```")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_task(&mut self, index: usize, record: &ClassRecord) -> anyhow::Result<()> {
        writeln!(self.writer, "### {}. {}", index, record.name)?;
        writeln!(self.writer, "- **Criticality:** {}", record.criticality)?;
        writeln!(
            self.writer,
            "- **Complexity:** {} LOC, {} methods",
            record.metrics.loc, record.metrics.methods
        )?;
        if record.metrics.has_callout {
            writeln!(
                self.writer,
                "- **⚠️ Requires Mock:** HTTP callouts detected"
            )?;
        }
        if record.metrics.has_database_ops {
            writeln!(
                self.writer,
                "- **Database Operations:** Test data setup required"
            )?;
        }
        writeln!(self.writer, "- **Priority Score:** {}", record.priority_score)?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> ReportWriter for TaskListWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.write_instructions()?;

        let untested: Vec<&ClassRecord> = report.untested().collect();
        writeln!(
            self.writer,
            "## Classes Requiring Test Generation ({} total)",
            untested.len()
        )?;
        writeln!(self.writer)?;

        for (idx, record) in untested.iter().enumerate() {
            self.write_task(idx + 1, record)?;
        }
        Ok(())
    }
}

fn flag(set: bool) -> &'static str {
    if set {
        "✓"
    } else {
        ""
    }
}

fn render<F>(build: F) -> anyhow::Result<Vec<u8>>
where
    F: FnOnce(&mut Vec<u8>) -> anyhow::Result<()>,
{
    let mut buffer = Vec::new();
    build(&mut buffer)?;
    Ok(buffer)
}

/// Write all three reports into `output_dir`.
///
/// Each report is rendered fully in memory and written in one shot, so a
/// failing run never leaves a partially written report behind.
pub fn write_reports(report: &AnalysisReport, output_dir: &Path) -> TestgapResult<()> {
    std::fs::create_dir_all(output_dir).map_err(|source| TestgapError::OutputWrite {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let outputs = [
        (
            JSON_REPORT_FILE,
            render(|buf| JsonWriter::new(buf).write_report(report)),
        ),
        (
            MARKDOWN_REPORT_FILE,
            render(|buf| MarkdownWriter::new(buf).write_report(report)),
        ),
        (
            TASK_LIST_FILE,
            render(|buf| TaskListWriter::new(buf).write_report(report)),
        ),
    ];

    for (filename, rendered) in outputs {
        let path = output_dir.join(filename);
        let bytes = rendered.map_err(|err| TestgapError::OutputWrite {
            path: path.clone(),
            source: std::io::Error::other(err),
        })?;
        std::fs::write(&path, bytes).map_err(|source| TestgapError::OutputWrite {
            path: path.clone(),
            source,
        })?;
        log::info!("wrote {}", path.display());
    }

    Ok(())
}
