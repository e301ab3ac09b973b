//! `graphnav-tokens` — Dumps the token stream of a graph document.
//!
//! **Usage:**
//! ```
//! graphnav-tokens <doc.ttl>
//! ```
//!
//! Prints one `kind<TAB>text` line per significant token followed by a
//! count line. Exits non-zero when the document fails to lex; the error
//! names the byte offset and a snippet of the unmatched input.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use graphnav_syntax::tokenize;

/// Dump the significant tokens of a graph document.
#[derive(Parser)]
#[command(
    name = "graphnav-tokens",
    about = "Dump the significant tokens of a graph document"
)]
struct Args {
    /// Graph document to tokenize.
    source: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let text = fs::read_to_string(&args.source)
        .with_context(|| format!("Failed to read {}", args.source.display()))?;
    let stream = tokenize(&text)
        .with_context(|| format!("Failed to lex {}", args.source.display()))?;

    for token in stream.significant() {
        println!("{}\t{}", token.kind.label(), token.text);
    }
    println!("{} tokens", stream.len());

    Ok(())
}
