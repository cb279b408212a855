//! `sparta-update` — regenerate the SPARTA subtree of a D3FEND ontology.
//!
//! Resolves a dataset version token to a snapshot file by the fixed
//! naming convention (`<data-dir>/sparta_data_v<VERSION>.json`), runs the
//! full translate-and-merge pipeline, and rewrites the ontology file in
//! place. Any fatal translation error aborts before the ontology is
//! touched and exits non-zero.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sparta_graph::{IdFilter, RunConfig, UriScheme};
use tracing_subscriber::EnvFilter;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "sparta-update", version, about)]
struct Args {
    /// Dataset version token, e.g. `1.6` or `2.0`.
    version: String,

    /// Directory containing dataset snapshots.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Ontology file to merge into and rewrite.
    #[arg(long, default_value = "src/ontology/d3fend-protege.sparta.ttl")]
    ontology: PathBuf,

    /// Override the identifier-to-URI scheme derived from the version.
    #[arg(long, value_parser = parse_scheme)]
    uri_scheme: Option<UriScheme>,

    /// Exclude D3FEND back-reference ids during identifier resolution,
    /// regardless of the version-derived default.
    #[arg(long)]
    exclude_d3fend_ids: bool,
}

fn parse_scheme(value: &str) -> Result<UriScheme, String> {
    match value {
        "prefixed" => Ok(UriScheme::Prefixed),
        "bare" => Ok(UriScheme::Bare),
        other => Err(format!("unknown URI scheme {other:?} (expected `prefixed` or `bare`)")),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut cfg = RunConfig::for_version(&args.version);
    if let Some(scheme) = args.uri_scheme {
        cfg.scheme = scheme;
    }
    if args.exclude_d3fend_ids {
        cfg.id_filter = IdFilter::ExcludeD3fendIds;
    }

    let dataset = args
        .data_dir
        .join(format!("sparta_data_v{}.json", args.version));

    let summary = sparta_graph::run(&dataset, &args.ontology, &cfg).with_context(|| {
        format!(
            "failed to merge SPARTA v{} into {}",
            args.version,
            args.ontology.display()
        )
    })?;

    tracing::info!(
        techniques = summary.techniques,
        threats = summary.threats,
        countermeasures = summary.countermeasures,
        triples = summary.triples,
        "merge complete"
    );
    Ok(())
}
