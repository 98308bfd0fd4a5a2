use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use banda_scoring::utils::logging::{create_main_progress_bar, finish_progress_bar};
use banda_scoring::{
    ItemCount, ItemLevel, ScoringConfig, ensure_unique_keys, read_table, score_questionnaire,
    write_table,
};
use clap::Parser;
use log::info;

/// Score BANDA questionnaires in a Parquet table
#[derive(Debug, Parser)]
#[command(name = "banda-score", version, about)]
struct Cli {
    /// Parquet file with the key columns and prefixed item columns
    #[arg(short, long)]
    input: PathBuf,

    /// Where to write the scored table
    #[arg(short, long)]
    output: PathBuf,

    /// JSON scoring configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Score only these questionnaires, in this order
    #[arg(long, value_delimiter = ',')]
    only: Vec<String>,

    /// Remove item columns once they are scored
    #[arg(long)]
    drop_items: bool,

    /// Attach _nmissing and _nexpected columns
    #[arg(long)]
    item_counts: bool,
}

impl Cli {
    fn scoring_config(&self) -> anyhow::Result<ScoringConfig> {
        let mut config = match &self.config {
            Some(path) => ScoringConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => ScoringConfig::default(),
        };
        if !self.only.is_empty() {
            config.questionnaires = self.only.clone();
        }
        if self.drop_items {
            config.options.item_level = ItemLevel::Drop;
        }
        if self.item_counts {
            config.options.item_count = ItemCount::Compute;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.scoring_config()?;
    info!("{config}");

    let start = Instant::now();
    let mut table = read_table(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;
    info!(
        "Loaded {} rows and {} columns from {}",
        table.num_rows(),
        table.num_columns(),
        cli.input.display()
    );

    if config.check_unique_keys {
        ensure_unique_keys(&table).context("Respondent-visit keys are not unique")?;
    }

    let pb = create_main_progress_bar(config.questionnaires.len() as u64, Some("Scoring"));
    for name in &config.questionnaires {
        pb.set_message(name.clone());
        table = score_questionnaire(table, name, &config.options)
            .with_context(|| format!("Failed to score {name}"))?;
        pb.inc(1);
    }
    finish_progress_bar(&pb, Some("Scoring complete"));

    write_table(&cli.output, &table)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;
    info!(
        "Wrote {} columns to {} in {:?}",
        table.num_columns(),
        cli.output.display(),
        start.elapsed()
    );
    Ok(())
}
