//! Threat translator.

use oxigraph::model::vocab::rdfs;
use oxigraph::model::Triple;
use sparta_store::{MemoryStore, Record};
use tracing::{debug, warn};

use crate::config::RunConfig;
use crate::error::GraphError;
use crate::ident::{sparta_id, sparta_url};
use crate::uri::class_node;
use crate::vocab::d3f;

use super::base_triples;

/// Maps a defense-in-depth layer label to its parent threat class name.
///
/// The table is deliberately closed: production data drift in layer
/// spelling must fail loudly, not land threats under a default parent.
fn defense_layer_parent(layer: &str) -> Option<&'static str> {
    match layer {
        "Prevention" => Some("SPARTAPreventionThreat"),
        "Network Security" => Some("SPARTANetworkSecurityThreat"),
        "Endpoint Security" => Some("SPARTAEndpointSecurityThreat"),
        "Application Security" => Some("SPARTAApplicationSecurityThreat"),
        "Data Security" => Some("SPARTADataSecurityThreat"),
        "Perimeter Security" => Some("SPARTAPerimeterSecurityThreat"),
        "Mission Assurance" => Some("SPARTAMissionAssuranceThreat"),
        _ => None,
    }
}

/// Strips the `['…']` wrapper some dataset versions leak around threat
/// descriptions when a list-valued description is serialized as text.
fn strip_list_artifact(raw: &str) -> &str {
    let trimmed = raw.trim();
    for (prefix, suffix) in [("['", "']"), ("[\"", "\"]")] {
        if let Some(inner) = trimmed
            .strip_prefix(prefix)
            .and_then(|s| s.strip_suffix(suffix))
        {
            return inner;
        }
    }
    trimmed
}

/// Translates one threat record into its node's triples.
///
/// The subclass edge comes from the fixed defense-in-depth layer table;
/// a missing or unknown layer aborts the run naming the threat. One
/// `d3f:related` edge is emitted per store relationship, targeting the
/// URI derived from the target record's first external reference — a
/// target with no references loses that one edge only. Returns
/// `Ok(None)` when the record has no resolvable identifier.
///
/// # Errors
///
/// Returns [`GraphError::MissingDefenseLayer`] or
/// [`GraphError::UnknownDefenseLayer`] on a layer lookup failure, and
/// [`GraphError::InvalidIri`] if a derived IRI is invalid.
pub fn translate(
    record: &Record,
    store: &MemoryStore,
    cfg: &RunConfig,
) -> Result<Option<Vec<Triple>>, GraphError> {
    let Some(id) = sparta_id(record, cfg.id_filter) else {
        debug!(record = %record.id, "threat without sparta identifier, skipping");
        return Ok(None);
    };
    let node = cfg.scheme.node(id)?;

    let mut triples = base_triples(
        &node,
        d3f::SPARTA_THREAT,
        true,
        record.name.clone(),
        sparta_url(record),
        strip_list_artifact(&record.description),
        id,
    );

    let layer = record
        .defense_in_depth
        .as_deref()
        .ok_or_else(|| GraphError::MissingDefenseLayer { id: id.to_owned() })?;
    let parent = defense_layer_parent(layer).ok_or_else(|| GraphError::UnknownDefenseLayer {
        id: id.to_owned(),
        layer: layer.to_owned(),
    })?;
    triples.push(Triple::new(
        node.clone(),
        rdfs::SUB_CLASS_OF,
        class_node(parent)?,
    ));

    for rel in store.relationships(record) {
        let Some(target) = store.get(&rel.target_ref) else {
            warn!(threat = id, target = %rel.target_ref, "relationship target not in store, dropping edge");
            continue;
        };
        let Some(target_id) = target
            .external_references
            .first()
            .and_then(|r| r.external_id.as_deref())
        else {
            warn!(threat = id, target = %target.id, "relationship target has no external reference, dropping edge");
            continue;
        };
        triples.push(Triple::new(
            node.clone(),
            d3f::RELATED,
            cfg.scheme.node(target_id)?,
        ));
    }

    Ok(Some(triples))
}
