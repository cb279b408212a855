//! Technique translator.

use oxigraph::model::vocab::rdfs;
use oxigraph::model::Triple;
use sparta_store::Record;
use tracing::debug;

use crate::config::RunConfig;
use crate::error::GraphError;
use crate::hierarchy::technique_parents;
use crate::ident::{sparta_id, sparta_url};
use crate::vocab::d3f;

use super::base_triples;

/// Translates one technique record into its node's triples.
///
/// The label is the trimmed name with the ` - SPARTA` suffix. Subclass
/// edges follow [`technique_parents`]: the dotted parent when the
/// identifier is dotted, otherwise one edge per sparta-tagged kill-chain
/// phase. Returns `Ok(None)` when the record has no resolvable
/// identifier.
///
/// # Errors
///
/// Returns [`GraphError::InvalidIri`] if the node or a parent IRI is
/// invalid.
pub fn translate(record: &Record, cfg: &RunConfig) -> Result<Option<Vec<Triple>>, GraphError> {
    let Some(id) = sparta_id(record, cfg.id_filter) else {
        debug!(record = %record.id, "technique without sparta identifier, skipping");
        return Ok(None);
    };
    let node = cfg.scheme.node(id)?;

    let mut triples = base_triples(
        &node,
        d3f::SPARTA_TECHNIQUE,
        true,
        format!("{} - SPARTA", record.name.trim()),
        sparta_url(record),
        &record.description,
        id,
    );
    for parent in technique_parents(record, id, cfg.scheme)? {
        triples.push(Triple::new(node.clone(), rdfs::SUB_CLASS_OF, parent));
    }
    Ok(Some(triples))
}
