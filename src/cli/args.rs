use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "zip-weather-enricher")]
#[command(about = "Enrich user records with city and temperature by postal code, with per-city reports")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Also log to this file")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Enrich a user CSV via the weather service and write all reports
    Enrich {
        #[arg(help = "Input CSV with a postal_code column and optional gender column")]
        input: PathBuf,

        #[arg(short, long, default_value = ".", help = "Directory for the five output CSVs")]
        output_dir: PathBuf,

        #[arg(
            long,
            help = "Seconds to pause before retrying a transient lookup failure [default: from settings]"
        )]
        retry_delay_secs: Option<u64>,

        #[arg(
            long,
            help = "Give up after this many transient failures per postal code [default: retry forever]"
        )]
        max_attempts: Option<u32>,

        #[arg(long, default_value = "false", help = "Suppress the progress bar")]
        silent: bool,
    },

    /// Re-derive the four aggregate reports from an already-enriched CSV
    Report {
        #[arg(help = "Enriched CSV from a previous run (output.csv)")]
        input: PathBuf,

        #[arg(short, long, default_value = ".", help = "Directory for the output CSVs")]
        output_dir: PathBuf,
    },
}
