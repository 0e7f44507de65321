use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use summer::config::{SummaryConfig, DEFAULT_NUM_SENTENCES};
use summer::input::{read_source, STDIN_PATH};
use summer::selection::Summarizer;
use summer::text::Stopwords;
use summer::types::SummaryResult;

/// Summarize text by picking its highest scoring TF-IDF sentences.
#[derive(Parser, Debug)]
#[command(name = "summer", version, about = "Summarize text.")]
struct Args {
    /// A file to read text from (`-` reads standard input)
    #[arg(value_name = "FILENAME", default_value = STDIN_PATH)]
    filename: PathBuf,

    /// The number of sentences to print (0 or less prints all of them)
    #[arg(short, long, default_value_t = DEFAULT_NUM_SENTENCES as i64, allow_negative_numbers = true)]
    num: i64,

    /// A file with whitespace-separated stopwords to load
    #[arg(short, long, value_name = "PATH", env = "SUMMER_STOPWORDS")]
    stop: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One sentence per line
    Text,
    /// The full summary with scores and metadata
    Json,
}

impl Args {
    fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn init_logging(level: &str) {
    // RUST_LOG wins over the flags when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let text = read_source(&args.filename).context("could not read input text")?;
    let stopwords = args
        .stop
        .as_deref()
        .map(Stopwords::load)
        .transpose()
        .context("could not read stopword list")?;

    let summarizer = Summarizer::new(SummaryConfig::from_count(args.num));
    tracing::debug!(
        num_sentences = summarizer.config().num_sentences,
        stopwords = stopwords.as_ref().map_or(0, Stopwords::len),
        "summarizer configured"
    );
    let result = summarizer.summarize(&text, stopwords);

    tracing::info!(
        source = %result.summary.source_version.as_str(),
        considered = result.summary.sentences_considered,
        selected = result.summary.sentences_selected,
        "summarized"
    );

    write_result(&result, args.format, args.pretty)
}

fn write_result(result: &SummaryResult, format: OutputFormat, pretty: bool) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => out.write_all(result.to_text().as_bytes())?,
        OutputFormat::Json => {
            if pretty {
                serde_json::to_writer_pretty(&mut out, result)?;
            } else {
                serde_json::to_writer(&mut out, result)?;
            }
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.log_level());

    if let Err(e) = run(args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
