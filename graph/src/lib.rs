//! SPARTA → D3FEND ontology translation.
//!
//! Converts the SPARTA space-cybersecurity knowledge base (techniques,
//! threats, and countermeasures published as a STIX 2.1 bundle) into
//! D3FEND ontology nodes — typed classes and individuals with labels,
//! citations, definitions, subclass hierarchy, and cross-domain relation
//! edges — and merges them into an existing D3FEND Turtle file without
//! disturbing anything else in it.
//!
//! # Pipeline
//!
//! [`merge::run`] sequences the whole run: parse the ontology, load the
//! dataset ([`sparta_store::MemoryStore`]), carve out the three record
//! subsets ([`select`]), translate each record ([`translate`]), union the
//! fresh graph into the ontology, and rewrite the file.
//!
//! Identifier handling is deliberately explicit: [`ident`] resolves
//! SPARTA identifiers (with a configurable back-reference filter),
//! [`uri`] maps identifiers to node URIs under exactly one scheme per
//! run, and [`hierarchy`] infers technique parents from identifier
//! punctuation or kill-chain phases. The switches live in [`RunConfig`]
//! and are chosen once per run from the dataset version.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod error;
pub mod hierarchy;
pub mod ident;
pub mod merge;
pub mod select;
pub mod translate;
pub mod uri;
pub mod vocab;

pub use config::RunConfig;
pub use error::GraphError;
pub use ident::IdFilter;
pub use merge::{build_graph, run, RunSummary};
pub use uri::UriScheme;
