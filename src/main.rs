use anyhow::{Context, Result};
use clap::Parser;
use smart_chunker::{ChunkError, ChunkResponse, Chunker, respond};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Split a JSON request document into overlapping, boundary-aware chunks
#[derive(Parser, Debug)]
#[command(name = "smart-chunker", version, about)]
struct Cli {
    /// Read the request document from a file instead of stdin
    #[arg(long, short, env = "SMART_CHUNKER_INPUT")]
    input: Option<PathBuf>,

    /// Content type hint, used when the document declares none
    #[arg(long, env = "SMART_CHUNKER_CONTENT_TYPE")]
    content_type: Option<String>,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,
}

fn main() -> ExitCode {
    // Logs go to stderr, stdout carries only the envelope
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("SMART_CHUNKER_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let response = match read_input(cli.input.as_deref()) {
        Ok(input) => respond(&input, &Chunker::new(), cli.content_type.as_deref()),
        Err(e) => {
            let message = format!("{:#}", e);
            error!(error = %message, "could not read request");
            ChunkResponse::from(ChunkError::ProcessingFailed(message))
        }
    };

    if let ChunkResponse::Success(success) = &response {
        info!(
            content_type = %success.content_type,
            chunk_count = success.chunk_count,
            total_chars = success.total_chars,
            "chunked document"
        );
    }

    // Failures stay on one line
    let pretty = response.is_success() && !cli.compact;
    match response.to_json(pretty) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!(error = %e, "could not serialize response");
            let fallback = serde_json::json!({
                "success": false,
                "error": format!("Chunking failed: {}", e),
                "chunks": [],
            });
            println!("{}", fallback);
            return ExitCode::FAILURE;
        }
    }

    if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .context(format!("Failed to read input file: {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}
