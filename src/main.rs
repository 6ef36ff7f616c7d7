//! PDF Page Extractor - entry point
//!
//! Thin CLI over the library: reading the input file stands in for the
//! upload, writing the output file stands in for the download.

use anyhow::Context;
use clap::{ArgGroup, Parser};
use pdf_page_extractor::{Session, PDF_MIME_TYPE};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pdf-page-extractor")]
#[command(about = "Extract individual pages from a PDF document")]
#[command(version)]
#[command(group(ArgGroup::new("selection").required(true).args(["pages", "first", "last"])))]
struct Cli {
    /// PDF file to extract from
    input: PathBuf,

    /// Pages to extract (e.g., "1,3,5-7")
    #[arg(short, long)]
    pages: Option<String>,

    /// Extract only the first page
    #[arg(long)]
    first: bool,

    /// Extract only the last page
    #[arg(long)]
    last: bool,

    /// Output file (defaults to <input-stem>_extracted.pdf)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pdf_page_extractor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let file_name = cli
        .input
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("document.pdf")
        .to_string();

    // The declared type comes from the file extension here, the same way a
    // browser derives it for a picked file.
    let content_type = if cli
        .input
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
    {
        PDF_MIME_TYPE
    } else {
        "application/octet-stream"
    };

    let data = std::fs::read(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let mut session = Session::new();
    session.load_file(&file_name, content_type, data)?;

    if let Some(name) = cli
        .output
        .as_ref()
        .and_then(|p| p.file_name())
        .and_then(|s| s.to_str())
    {
        session.set_output_name(name);
    }

    let extracted = if cli.first {
        session.extract_first().await?
    } else if cli.last {
        session.extract_last().await?
    } else {
        session.extract_spec(cli.pages.as_deref().unwrap_or_default()).await?
    };

    let output_path = cli
        .output
        .unwrap_or_else(|| PathBuf::from(&extracted.file_name));

    std::fs::write(&output_path, &extracted.data)
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    println!(
        "Extracted {} page(s) to {}",
        extracted.pages.len(),
        output_path.display()
    );

    Ok(())
}
