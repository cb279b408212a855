//! Identifier → URI mapping.
//!
//! Two schemes coexist across dataset versions: `Prefixed` mints
//! `d3f:SPARTA-<id>` node URIs, `Bare` mints `d3f:<id>`. One scheme is
//! chosen per run and applied to every node and every edge target; mixing
//! schemes within a run is a correctness bug, so the scheme is threaded
//! through [`RunConfig`](crate::RunConfig) rather than decided per record.

use oxigraph::model::NamedNode;

use crate::error::GraphError;
use crate::vocab::d3fend_iri;

/// Prefix applied to node local names under [`UriScheme::Prefixed`].
pub const SPARTA_URI_PREFIX: &str = "SPARTA-";

/// The identifier-to-URI scheme of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UriScheme {
    /// `d3f:SPARTA-<id>` — dataset versions before 2.0.
    Prefixed,
    /// `d3f:<id>` — dataset versions 2.0 and later.
    Bare,
}

impl UriScheme {
    /// Maps a SPARTA identifier to its node URI under this scheme.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidIri`] if the identifier produces a
    /// syntactically invalid IRI.
    pub fn node(self, id: &str) -> Result<NamedNode, GraphError> {
        let local = match self {
            UriScheme::Prefixed => format!("{SPARTA_URI_PREFIX}{id}"),
            UriScheme::Bare => id.to_owned(),
        };
        d3fend_iri(&local).map_err(|source| GraphError::InvalidIri {
            id: id.to_owned(),
            iri: format!("{}{local}", crate::vocab::D3FEND_NS),
            source,
        })
    }
}

/// Maps a literal class name to its scheme-independent D3FEND URI.
///
/// Used for targets assumed to pre-exist in the external ontology (tactic
/// classes, threat parent classes, control-catalog entries); those are
/// named the same way under either scheme.
///
/// # Errors
///
/// Returns [`GraphError::InvalidIri`] if the class name produces a
/// syntactically invalid IRI.
pub fn class_node(name: &str) -> Result<NamedNode, GraphError> {
    d3fend_iri(name).map_err(|source| GraphError::InvalidIri {
        id: name.to_owned(),
        iri: format!("{}{name}", crate::vocab::D3FEND_NS),
        source,
    })
}
