//! Batch entry point: read a review table, run the preprocessing
//! pipeline, write the annotated table back out.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use review_prep::dataset::ReviewTable;
use review_prep::lexicon::LexiconSources;
use review_prep::pipeline::runner::Pipeline;
use review_prep::types::PrepConfig;
use review_prep::PrepError;

#[derive(Debug, Parser)]
#[command(
    name = "review-prep",
    version,
    about = "Clean and filter an app-review table ahead of topic modeling"
)]
struct Cli {
    /// Input review table (CSV with app, content, score and date columns).
    #[arg(long, value_name = "PATH")]
    input: PathBuf,

    /// Lexicon definitions: a line with one token adds a stopword, a
    /// line with several maps the first token to the rest.
    #[arg(long, value_name = "PATH")]
    lexicon: Option<PathBuf>,

    /// Base stopword list replacing the built-in English one.
    #[arg(long, value_name = "PATH")]
    stopwords: Option<PathBuf>,

    /// Pipeline configuration as JSON; omitted fields use defaults.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output CSV: the input columns plus eligible and normalized_tokens.
    #[arg(long, value_name = "PATH")]
    output: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("review-prep: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), PrepError> {
    let config = match &cli.config {
        Some(path) => PrepConfig::from_json_file(path)?,
        None => PrepConfig::default(),
    };
    let sources = LexiconSources {
        base_stopwords: cli.stopwords,
        grammar_fixes: cli.lexicon,
    };

    let table = ReviewTable::from_csv_path(&cli.input)?;
    let pipeline = Pipeline::prepare(config, &sources, table.records())?;
    let output = pipeline.run(table.records());
    table.write_annotated_csv(&cli.output, &output.annotations)?;

    let summary = output.summary;
    println!(
        "{} records, {} eligible ({} demoted, {} failed) -> {}",
        summary.total,
        summary.eligible(),
        summary.demoted,
        summary.failed,
        cli.output.display()
    );
    Ok(())
}
