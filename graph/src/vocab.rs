//! IRI constants for the D3FEND ontology and the OWL vocabulary.
//!
//! RDF and RDFS terms come from `oxigraph::model::vocab`; OWL and the
//! D3FEND-specific terms used by the SPARTA translation are declared here
//! in the same style.

use oxigraph::model::{IriParseError, NamedNode, NamedNodeRef};

/// Base IRI of the D3FEND ontology namespace.
pub const D3FEND_NS: &str = "http://d3fend.mitre.org/ontologies/d3fend.owl#";

/// Builds a [`NamedNode`] in the D3FEND namespace from a local name.
///
/// # Errors
///
/// Returns [`IriParseError`] if the local name produces an invalid IRI.
pub fn d3fend_iri(local: &str) -> Result<NamedNode, IriParseError> {
    NamedNode::new(format!("{D3FEND_NS}{local}"))
}

/// OWL vocabulary terms.
pub mod owl {
    use super::NamedNodeRef;

    /// `owl:Class`.
    pub const CLASS: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Class");
    /// `owl:NamedIndividual`.
    pub const NAMED_INDIVIDUAL: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#NamedIndividual");
}

/// D3FEND vocabulary terms used by the SPARTA translation.
pub mod d3f {
    use super::NamedNodeRef;

    /// Class of SPARTA technique nodes.
    pub const SPARTA_TECHNIQUE: NamedNodeRef<'static> = NamedNodeRef::new_unchecked(
        "http://d3fend.mitre.org/ontologies/d3fend.owl#SPARTATechnique",
    );
    /// Class of SPARTA threat nodes.
    pub const SPARTA_THREAT: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://d3fend.mitre.org/ontologies/d3fend.owl#SPARTAThreat");
    /// Class of SPARTA countermeasure nodes.
    pub const SPARTA_COUNTERMEASURE: NamedNodeRef<'static> = NamedNodeRef::new_unchecked(
        "http://d3fend.mitre.org/ontologies/d3fend.owl#SPARTACountermeasure",
    );
    /// `d3f:definition` — free-text definition of a node.
    pub const DEFINITION: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://d3fend.mitre.org/ontologies/d3fend.owl#definition");
    /// `d3f:sparta-id` — literal copy of the SPARTA identifier.
    pub const SPARTA_ID: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://d3fend.mitre.org/ontologies/d3fend.owl#sparta-id");
    /// `d3f:related` — generic typed relation between nodes.
    pub const RELATED: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://d3fend.mitre.org/ontologies/d3fend.owl#related");
    /// `d3f:counters` — countermeasure-to-technique relation.
    pub const COUNTERS: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://d3fend.mitre.org/ontologies/d3fend.owl#counters");
    /// `d3f:enabled-by` — relation into the pre-existing D3FEND technique tree.
    pub const ENABLED_BY: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://d3fend.mitre.org/ontologies/d3fend.owl#enabled-by");
}
