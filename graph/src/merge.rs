//! The merge driver: load → select → translate → union → persist.
//!
//! The fresh per-run graph is built completely before the ontology file
//! is opened for writing, so a fatal translation error can never leave a
//! partially rewritten ontology behind. Union is plain triple-set
//! insertion into the store's default graph: re-running on unchanged
//! input is idempotent, and nothing clears triples from earlier runs —
//! callers regenerating a changed dataset must prune old domain triples
//! themselves first.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use oxigraph::io::RdfFormat;
use oxigraph::model::{Graph, GraphNameRef};
use oxigraph::store::Store;
use sparta_store::MemoryStore;
use tracing::info;

use crate::config::RunConfig;
use crate::error::GraphError;
use crate::select;
use crate::translate::{countermeasure, technique, threat};

/// Counts reported by a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Technique records translated (records without identifiers excluded).
    pub techniques: usize,
    /// Threat records translated.
    pub threats: usize,
    /// Countermeasure records translated.
    pub countermeasures: usize,
    /// Distinct triples in the fresh graph.
    pub triples: usize,
}

/// Builds the fresh SPARTA graph from a loaded record store.
///
/// # Errors
///
/// Propagates any fatal translation error ([`GraphError`]); skip-record
/// and skip-edge cases are handled inside the translators.
pub fn build_graph(
    store: &MemoryStore,
    cfg: &RunConfig,
) -> Result<(Graph, RunSummary), GraphError> {
    let mut graph = Graph::default();
    let mut summary = RunSummary {
        techniques: 0,
        threats: 0,
        countermeasures: 0,
        triples: 0,
    };

    for record in select::techniques(store) {
        if let Some(triples) = technique::translate(record, cfg)? {
            summary.techniques += 1;
            for triple in &triples {
                graph.insert(triple);
            }
        }
    }
    for record in select::threats(store) {
        if let Some(triples) = threat::translate(record, store, cfg)? {
            summary.threats += 1;
            for triple in &triples {
                graph.insert(triple);
            }
        }
    }
    for record in select::countermeasures(store) {
        if let Some(triples) = countermeasure::translate(record, store, cfg)? {
            summary.countermeasures += 1;
            for triple in &triples {
                graph.insert(triple);
            }
        }
    }

    summary.triples = graph.len();
    Ok((graph, summary))
}

/// Runs the full merge: loads the ontology and the dataset, builds the
/// fresh graph, unions it into the ontology, and rewrites the ontology
/// file in place.
///
/// # Errors
///
/// Returns [`GraphError`] if either input cannot be loaded, a fatal
/// translation error occurs, or the merged graph cannot be written back.
pub fn run(dataset: &Path, ontology: &Path, cfg: &RunConfig) -> Result<RunSummary, GraphError> {
    let ontology_file = File::open(ontology).map_err(|source| GraphError::OntologyIo {
        path: ontology.to_path_buf(),
        source,
    })?;
    let graph_store = Store::new()?;
    graph_store
        .load_from_reader(RdfFormat::Turtle, BufReader::new(ontology_file))
        .map_err(|source| GraphError::OntologyParse {
            path: ontology.to_path_buf(),
            source,
        })?;

    let records = MemoryStore::load(dataset)?;
    let (fresh, summary) = build_graph(&records, cfg)?;
    info!(
        techniques = summary.techniques,
        threats = summary.threats,
        countermeasures = summary.countermeasures,
        triples = summary.triples,
        "translated SPARTA dataset"
    );

    for triple in fresh.iter() {
        graph_store.insert(triple.in_graph(GraphNameRef::DefaultGraph))?;
    }

    let out = File::create(ontology).map_err(|source| GraphError::OntologyIo {
        path: ontology.to_path_buf(),
        source,
    })?;
    graph_store
        .dump_graph_to_writer(GraphNameRef::DefaultGraph, RdfFormat::Turtle, BufWriter::new(out))
        .map_err(|source| GraphError::OntologySerialize {
            path: ontology.to_path_buf(),
            source,
        })?;
    info!(ontology = %ontology.display(), "ontology rewritten");

    Ok(summary)
}
