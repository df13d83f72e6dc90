use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use snipmap::core::config::{DEFAULT_COMMENT_LEADER, DEFAULT_EXTENSION, DEFAULT_TAG_NAME};
use snipmap::core::{ExtractorConfig, SnippetMapBuilder};
use snipmap::formatters::{JsonFormatter, MarkdownFormatter};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "snipmap",
    version,
    author = "snipmap developers",
    about = "Collects tagged snippets from source files into one table"
)]
struct Cli {
    /// Input directory to scan
    #[arg(short, long, value_name = "PATH")]
    input: PathBuf,

    /// Output file path
    #[arg(short, long, value_name = "FILE", default_value = "snippets.json")]
    output: PathBuf,

    /// Output format: json, markdown
    #[arg(short, long, value_name = "FORMAT", value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Name of the delimiting tag
    #[arg(long, value_name = "NAME", default_value = DEFAULT_TAG_NAME)]
    tag: String,

    /// Single-line comment leader of the scanned language
    #[arg(long, value_name = "LEADER", default_value = DEFAULT_COMMENT_LEADER)]
    comment_leader: String,

    /// Extension of the files to scan
    #[arg(short, long, value_name = "EXT", default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// Write JSON on a single line
    #[arg(long)]
    compact: bool,

    /// Log per-file details
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum OutputFormat {
    Json,
    Markdown,
}

impl OutputFormat {
    fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli)
}

fn init_tracing(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        input,
        output,
        format,
        tag,
        comment_leader,
        extension,
        compact,
        verbose: _,
    } = cli;

    let start_time = Instant::now();

    let config = ExtractorConfig::new()
        .with_tag_name(tag)
        .with_comment_leader(comment_leader)
        .with_extension(extension);

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        format = format.as_str(),
        tag = %config.tag_name,
        extension = %config.extension,
        "collecting snippets"
    );

    let builder = SnippetMapBuilder::new(config)?;
    let snippets = builder.collect_from_directory(&input)?;

    match format {
        OutputFormat::Json => {
            JsonFormatter::new()
                .with_pretty(!compact)
                .with_root(&input)
                .format_to_file(&snippets, &output)?;
        }
        OutputFormat::Markdown => {
            MarkdownFormatter::for_extension(&builder.config().extension)
                .with_root(&input)
                .format_to_file(&snippets, &output)?;
        }
    }

    println!(
        "Collected {} snippets into {} in {:.2}s",
        snippets.len(),
        output.display(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
