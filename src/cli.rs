use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "testgap")]
#[command(about = "Test coverage gap analyzer for Salesforce Apex codebases", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a classes directory and emit prioritized coverage reports
    Analyze {
        /// Directory containing the Apex class files
        path: PathBuf,

        /// Directory to write the three reports into
        #[arg(short, long, default_value = "reports")]
        output_dir: PathBuf,

        /// Source file extension to scan for
        #[arg(long, default_value = "cls")]
        extension: String,

        /// Analysis date stamped into the reports (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}
