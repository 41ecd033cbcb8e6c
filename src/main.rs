use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use testgap::cli::{Cli, Commands};
use testgap::config::AnalysisConfig;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            output_dir,
            extension,
            date,
        } => {
            let config = AnalysisConfig {
                classes_dir: path,
                output_dir,
                extension,
                analysis_date: date.unwrap_or_else(|| Utc::now().date_naive()),
                ..AnalysisConfig::default()
            };
            testgap::commands::handle_analyze(config)
        }
    }
}
