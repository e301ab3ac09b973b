//! `graphnav-render` — Renders an embedded graph document into the HTML
//! region files the viewer shell injects.
//!
//! **Outputs (`<out>/`):**
//! - `header.html` — namespace declarations
//! - `navigation.html` — API affordances
//! - `content.html` — entity listings
//! - `details.html` — per-entity annotations (populated by `--split-graphs`)
//!
//! **Usage:**
//! ```
//! graphnav-render --source <doc.ttl> --prefixes <prefixes.json> [--split-graphs] [--out <path>]
//! ```
//!
//! Without `--split-graphs` the source is rendered as a single Turtle
//! document. With it, the source is read as TriG, demultiplexed into the
//! navigation, data, and details views, and each view is rendered into its
//! own region.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use graphnav_demux::{demux_document, DemuxOutput};
use graphnav_render::{render_document, route_document, PrefixTable, Region, RegionMap};

/// Render a graph document into HTML region files.
#[derive(Parser)]
#[command(
    name = "graphnav-render",
    about = "Render a graph document into HTML region files"
)]
struct Args {
    /// Graph document to render (Turtle, or TriG with --split-graphs).
    #[arg(long)]
    source: PathBuf,

    /// Prefix table JSON mapping labels to namespace entries.
    #[arg(long)]
    prefixes: PathBuf,

    /// Demultiplex the document into per-graph views before rendering.
    #[arg(long)]
    split_graphs: bool,

    /// Output directory for the region files.
    #[arg(long, default_value = "public")]
    out: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let source = fs::read_to_string(&args.source)
        .with_context(|| format!("Failed to read {}", args.source.display()))?;
    let prefix_json = fs::read_to_string(&args.prefixes)
        .with_context(|| format!("Failed to read {}", args.prefixes.display()))?;
    let prefixes = PrefixTable::from_json(&prefix_json)
        .with_context(|| format!("Invalid prefix table in {}", args.prefixes.display()))?;

    let regions = if args.split_graphs {
        let output = demux_document(&source)?;
        render_graph_views(&output, &prefixes)?
    } else {
        render_document(&source, &prefixes)?
    };

    write_regions(&args.out, &regions)?;

    println!("Rendered {}.", args.source.display());
    println!("  Output: {}", args.out.display());

    Ok(())
}

/// Renders each demultiplexed view into its own region: navigation →
/// Navigation, data → Content, details → Details. Every fragment of a
/// view lands in that view's region, namespace headers included, so each
/// region is self-contained.
fn render_graph_views(output: &DemuxOutput, prefixes: &PrefixTable) -> Result<RegionMap> {
    let mut regions = RegionMap::default();
    for (view, region) in [
        (&output.navigation, Region::Navigation),
        (&output.data, Region::Content),
        (&output.details, Region::Details),
    ] {
        if view.is_empty() {
            continue;
        }
        for fragment in route_document(view, prefixes)? {
            regions.append(region, &fragment.html);
        }
    }
    Ok(regions)
}

/// Writes the four region files under `out`, creating the directory
/// first.
fn write_regions(out: &Path, regions: &RegionMap) -> Result<()> {
    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;

    for (region, name) in [
        (Region::Header, "header.html"),
        (Region::Navigation, "navigation.html"),
        (Region::Content, "content.html"),
        (Region::Details, "details.html"),
    ] {
        let path = out.join(name);
        fs::write(&path, regions.get(region))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("  Written: {}", path.display());
    }
    Ok(())
}
