mod batch;
mod display;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use bghinsights_core::{Analyzer, AnalyzerOptions, CorpusSummary, DateParsing, SenatSpacing};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bghinsights", version, about = "Extract structured metadata from BGH decision texts")]
struct Cli {
    /// How matched decision dates are parsed.
    #[arg(long, global = true, env = "BGH_DATE_PARSING", value_enum, default_value_t = DateMode::Lenient)]
    date_parsing: DateMode,

    /// How whitespace inside senate names is normalized.
    #[arg(long, global = true, env = "BGH_SENAT_SPACING", value_enum, default_value_t = SpacingMode::Compatible)]
    senat_spacing: SpacingMode,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze one text document (`-` reads stdin) and print its record.
    Analyze {
        input: PathBuf,
        /// Print a human-readable card instead of JSON.
        #[arg(long)]
        card: bool,
    },
    /// Analyze every `*.txt` file in a directory.
    Batch {
        input_dir: PathBuf,
        /// Aggregate JSON output file.
        #[arg(long, env = "BGH_OUTPUT")]
        out: PathBuf,
        /// Also write one JSON file per document into this directory.
        #[arg(long)]
        per_document: Option<PathBuf>,
        /// Also write all records to this Parquet file.
        #[arg(long)]
        parquet: Option<PathBuf>,
    },
    /// Print stored records from a Parquet file as cards.
    Show { parquet: PathBuf },
    /// Print corpus statistics for an aggregate JSON file.
    Stats { aggregate: PathBuf },
}

#[derive(Clone, Copy, ValueEnum)]
enum DateMode {
    Lenient,
    Strict,
}

#[derive(Clone, Copy, ValueEnum)]
enum SpacingMode {
    Compatible,
    Collapse,
}

impl Cli {
    fn analyzer_options(&self) -> AnalyzerOptions {
        AnalyzerOptions {
            date_parsing: match self.date_parsing {
                DateMode::Lenient => DateParsing::Lenient,
                DateMode::Strict => DateParsing::Strict,
            },
            senat_spacing: match self.senat_spacing {
                SpacingMode::Compatible => SenatSpacing::Compatible,
                SpacingMode::Collapse => SenatSpacing::Collapse,
            },
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    tracing::info!("bghinsights v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let analyzer = Analyzer::new(cli.analyzer_options());

    match &cli.command {
        Command::Analyze { input, card } => analyze(&analyzer, input, *card),
        Command::Batch {
            input_dir,
            out,
            per_document,
            parquet,
        } => {
            let outputs = batch::BatchOutputs {
                aggregate: out,
                per_document: per_document.as_deref(),
                parquet: parquet.as_deref(),
            };
            let (stats, elapsed) = batch::run_batch(&analyzer, input_dir, &outputs)?;
            eprintln!(
                "  {} documents, {} records written, {} skipped ({elapsed:.1}s)",
                stats.documents, stats.records, stats.skipped
            );
            Ok(())
        }
        Command::Show { parquet } => {
            let batches = bghinsights_store::read_parquet(parquet)
                .with_context(|| format!("reading {}", parquet.display()))?;
            display::print_record_cards(&batches);
            Ok(())
        }
        Command::Stats { aggregate } => {
            let records = bghinsights_store::read_aggregate(aggregate)
                .with_context(|| format!("reading {}", aggregate.display()))?;
            print_summary(&CorpusSummary::from_records(&records));
            Ok(())
        }
    }
}

fn analyze(analyzer: &Analyzer, input: &Path, card: bool) -> anyhow::Result<()> {
    let (text, filename) = if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading stdin")?;
        (text, None)
    } else {
        let text = std::fs::read_to_string(input)
            .with_context(|| format!("reading {}", input.display()))?;
        (text, input.to_str())
    };

    let Some(record) = analyzer.analyze(&text, filename) else {
        eprintln!("  {} contains no usable text", input.display());
        return Ok(());
    };

    if card {
        let batch = bghinsights_store::records_to_batch(std::slice::from_ref(&record))?;
        display::print_record_card(&batch, 0);
    } else {
        println!("{}", serde_json::to_string_pretty(&record)?);
    }
    Ok(())
}

fn print_summary(summary: &CorpusSummary) {
    println!("Records                {}", summary.total);
    println!("  with filename        {}", summary.with_filename);
    println!("  with case number     {}", summary.with_case_number);
    println!("  with decision date   {}", summary.with_decision_date);
    println!("  with motion category {}", summary.with_motion_category);
    println!("  with senat           {}", summary.with_senat);
    println!("  guiding principles   {}", summary.with_guiding_principles);
    println!();
    println!("Outcome");
    println!("  Gewonnen             {}", summary.won);
    println!("  Verloren             {}", summary.lost);
    println!("  undecided            {}", summary.undecided);
    if let Some(rate) = summary.win_rate() {
        println!("  win rate             {:.1}%", rate * 100.0);
    }

    if !summary.motion_categories.is_empty() {
        println!();
        println!("Motion categories");
        for (category, count) in &summary.motion_categories {
            println!("  {:<26} {}", category.as_str(), count);
        }
    }

    if !summary.senates.is_empty() {
        println!();
        println!("Senates");
        for (senat, count) in &summary.senates {
            println!("  {:<26} {}", senat, count);
        }
    }
}
