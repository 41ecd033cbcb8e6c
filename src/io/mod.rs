pub mod output;
pub mod walker;

pub use output::{write_reports, JsonWriter, MarkdownWriter, ReportWriter, TaskListWriter};
pub use walker::{ClassWalker, DiscoveredClasses, ProductionClass};
