//! Technique hierarchy inference.
//!
//! The upstream `x_sparta_is_subtechnique` flag is `false` on every record
//! of every published dataset, so the identifier's own punctuation is the
//! ground truth for sub-technique structure: `TEC-0001.01` is a child of
//! `TEC-0001`. Top-level techniques instead hang under per-tactic classes
//! synthesized from their kill-chain phase names; those classes pre-exist
//! in the external ontology and are not created here.

use oxigraph::model::NamedNode;
use sparta_store::Record;

use crate::error::GraphError;
use crate::uri::{class_node, UriScheme};

/// Kill-chain name tagging SPARTA phases.
pub const SPARTA_KILL_CHAIN: &str = "sparta";

/// Separator character of dotted sub-technique identifiers.
pub const SUBTECHNIQUE_SEPARATOR: char = '.';

/// Returns the parent URIs of a technique.
///
/// A dotted identifier yields exactly one parent — the scheme-mapped URI
/// of the text before the first separator — regardless of the record's
/// kill-chain phases. A plain identifier yields one parent per
/// sparta-tagged kill-chain phase: the class named
/// `"SPARTA<phase> Technique"` with all whitespace removed.
///
/// # Errors
///
/// Returns [`GraphError::InvalidIri`] if a derived parent IRI is invalid.
pub fn technique_parents(
    record: &Record,
    id: &str,
    scheme: UriScheme,
) -> Result<Vec<NamedNode>, GraphError> {
    if let Some((parent_id, _)) = id.split_once(SUBTECHNIQUE_SEPARATOR) {
        return Ok(vec![scheme.node(parent_id)?]);
    }

    let mut parents = Vec::new();
    for phase in &record.kill_chain_phases {
        if phase.kill_chain_name != SPARTA_KILL_CHAIN {
            continue;
        }
        let class_name = format!("SPARTA{} Technique", phase.phase_name).replace(' ', "");
        parents.push(class_node(&class_name)?);
    }
    Ok(parents)
}
