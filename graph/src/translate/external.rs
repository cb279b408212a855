//! Classification of relationship targets against the external ontology.
//!
//! Countermeasure edges are partitioned by what their target is: a node
//! the D3FEND ontology already owns, a same-domain technique, or neither.
//! The countermeasure translator consumes only the classification results
//! from this module — it never touches the external graph's internal
//! representation.

use oxigraph::model::NamedNode;
use sparta_store::{ExternalReference, Record};

use crate::error::GraphError;
use crate::uri::class_node;

/// `source_name` token of references into the D3FEND ontology.
pub const D3FEND_SOURCE: &str = "d3fend";

/// URL prefix of D3FEND technique pages.
pub const D3FEND_TECHNIQUE_URL_PREFIX: &str = "https://d3fend.mitre.org/technique/";

/// URL prefix of SPARTA's control-catalog reference pages.
pub const CONTROL_REFERENCE_URL_PREFIX: &str =
    "https://sparta.aerospace.org/countermeasures/references/";

/// Local-name prefix of synthesized control-catalog URIs.
pub const CONTROL_CLASS_PREFIX: &str = "NIST_SP_800-53_R5_";

/// What a relationship target resolves to.
#[derive(Debug)]
pub enum TargetKind<'a> {
    /// The target carries a reference into the D3FEND ontology; the edge
    /// should point at that pre-existing node.
    D3fend(&'a ExternalReference),
    /// The target is a same-domain technique record.
    SpartaTechnique,
    /// Anything else; no edge is emitted.
    Other,
}

/// Classifies a relationship target record.
#[must_use]
pub fn classify_target(target: &Record) -> TargetKind<'_> {
    if let Some(reference) = target.reference_from(D3FEND_SOURCE) {
        return TargetKind::D3fend(reference);
    }
    if target.object_type == "attack-pattern" {
        return TargetKind::SpartaTechnique;
    }
    TargetKind::Other
}

/// Extracts the D3FEND local name from a technique page URL.
///
/// `https://d3fend.mitre.org/technique/d3f:Multi-factorAuthentication/`
/// → `Multi-factorAuthentication`. Returns `None` when the URL does not
/// carry the technique prefix — the caller drops that one edge.
#[must_use]
pub fn d3fend_local_from_url(url: &str) -> Option<&str> {
    let local = url
        .strip_prefix(D3FEND_TECHNIQUE_URL_PREFIX)?
        .trim_end_matches('/');
    Some(local.strip_prefix("d3f:").unwrap_or(local))
}

/// Synthesizes the control-catalog URI for a control reference id,
/// rewriting parenthesized enhancement numbers to underscores:
/// `AC-4(1)` → `d3f:NIST_SP_800-53_R5_AC-4_1_`.
///
/// # Errors
///
/// Returns [`GraphError::InvalidIri`] if the rewritten id still produces
/// an invalid IRI.
pub fn control_node(external_id: &str) -> Result<NamedNode, GraphError> {
    let local = format!(
        "{CONTROL_CLASS_PREFIX}{}",
        external_id.replace(['(', ')'], "_")
    );
    class_node(&local)
}
