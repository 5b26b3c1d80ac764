use std::path::Path;

use tracing::info;

use crate::analyzers::{
    AvgTempAnalyzer, GenderCountAnalyzer, GenderDistributionAnalyzer, TopCitiesRanker,
};
use crate::cli::args::{Cli, Commands};
use crate::config::Settings;
use crate::error::Result;
use crate::lookup::OpenWeatherClient;
use crate::models::UserRecord;
use crate::processors::Enricher;
use crate::readers::UserReader;
use crate::utils::progress::ProgressReporter;
use crate::writers::ReportWriter;

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Enrich {
            input,
            output_dir,
            retry_delay_secs,
            max_attempts,
            silent,
        } => {
            let mut settings = Settings::load()?;
            if let Some(delay) = retry_delay_secs {
                settings.retry_delay_secs = delay;
            }
            if let Some(max) = max_attempts {
                settings.max_attempts = Some(max);
            }
            settings.require_api_key()?;

            info!(
                input = %input.display(),
                output_dir = %output_dir.display(),
                retry_delay_secs = settings.retry_delay_secs,
                max_attempts = ?settings.max_attempts,
                "Starting enrichment run"
            );

            let users = UserReader::new().read_users(&input)?;
            println!("Read {} user records from {}", users.len(), input.display());

            let progress =
                ProgressReporter::new(users.len() as u64, "Enriching records...", silent);

            let client = OpenWeatherClient::new(&settings)?;
            let enricher = Enricher::new(client).with_retry_policy(settings.retry_policy());
            let enriched = enricher.enrich_records(users, Some(&progress)).await?;

            progress.finish_with_message(&format!("Enriched {} records", enriched.len()));

            write_reports(&enriched, &output_dir)?;
            println!("Processing complete!");
        }

        Commands::Report { input, output_dir } => {
            info!(input = %input.display(), "Rebuilding reports from enriched file");

            let records = UserReader::new().read_users(&input)?;
            println!(
                "Read {} enriched records from {}",
                records.len(),
                input.display()
            );

            write_reports(&records, &output_dir)?;
            println!("Reports complete!");
        }
    }

    Ok(())
}

/// Derives all four aggregate tables, then writes the five output files.
/// Aggregation finishes before the first file is created, so a failed run
/// leaves no partial output behind.
fn write_reports(records: &[UserRecord], output_dir: &Path) -> Result<()> {
    let counts = GenderCountAnalyzer::new().count(records);
    let distributions = GenderDistributionAnalyzer::new().distribute(&counts);
    let averages = AvgTempAnalyzer::new().average(records);
    let top_cities = TopCitiesRanker::new().rank(records);

    let writer = ReportWriter::new(output_dir);
    writer.write_enriched(records)?;
    writer.write_gender_counts(&counts)?;
    writer.write_gender_distributions(&distributions)?;
    writer.write_avg_temps(&averages)?;
    writer.write_top_cities(&top_cities)?;

    println!(
        "Wrote {} city/gender counts, {} distributions, {} city averages, {} top cities to {}",
        counts.len(),
        distributions.len(),
        averages.len(),
        top_cities.len(),
        output_dir.display()
    );

    Ok(())
}
