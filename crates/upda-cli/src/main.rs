use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use eyre::{Result, WrapErr};
use upda_core::models::score::PatientScore;
use upda_export::config::ReportConfig;
use upda_export::reporter::Reporter;

#[derive(Parser)]
#[command(name = "upda")]
#[command(about = "Render UPDA score sheets and merge them onto the report template")]
struct Cli {
    /// JSON config file (template_path, data_root)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write score.pdf and the merged report for a patient
    Report(ScoreArgs),
    /// Write score.pdf only
    Score(ScoreArgs),
    /// Merge an existing score.pdf onto the template
    Merge {
        /// Patient data directory, e.g. ./data/patient-1
        patient_dir: PathBuf,
    },
}

#[derive(Args)]
struct ScoreArgs {
    /// Patient data directory, e.g. ./data/patient-1
    patient_dir: PathBuf,
    /// Score table as JSON: {"name": ..., "ftap": [percent, raw], ...}
    #[arg(long)]
    scores: Option<PathBuf>,
    /// Patient name for a blank table (defaults to the directory name)
    #[arg(long)]
    name: Option<String>,
}

impl ScoreArgs {
    fn table(&self) -> Result<PatientScore> {
        match &self.scores {
            Some(path) => {
                let contents = std::fs::read_to_string(path)
                    .wrap_err_with(|| format!("failed to read scores at {}", path.display()))?;
                let mut table = PatientScore::from_json(&contents)
                    .wrap_err_with(|| format!("invalid score table in {}", path.display()))?;
                if let Some(name) = &self.name {
                    table.name = name.clone();
                }
                Ok(table)
            }
            None => Ok(PatientScore::blank(
                self.name
                    .clone()
                    .unwrap_or_else(|| default_name(&self.patient_dir)),
            )),
        }
    }
}

fn default_name(patient_dir: &Path) -> String {
    patient_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| patient_dir.display().to_string())
}

fn load_config(path: Option<&Path>) -> Result<ReportConfig> {
    let config = match path {
        Some(path) => ReportConfig::load(path)?,
        None => ReportConfig::default(),
    };
    Ok(config.with_env_overrides())
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let reporter = Reporter::new(load_config(cli.config.as_deref())?);
    tracing::debug!(config = ?reporter.config(), "reporter configured");

    match cli.command {
        Commands::Report(args) => {
            let table = args.table()?;
            let artifacts = reporter.generate_report(&args.patient_dir, &table)?;
            println!("Score sheet: {}", artifacts.score_path.display());
            println!("Report: {}", artifacts.report_path.display());
        }
        Commands::Score(args) => {
            let table = args.table()?;
            let path = reporter.generate_score(&args.patient_dir, &table)?;
            println!("Score sheet: {}", path.display());
        }
        Commands::Merge { patient_dir } => {
            let path = reporter.merge(&patient_dir)?;
            println!("Report: {}", path.display());
        }
    }

    Ok(())
}
