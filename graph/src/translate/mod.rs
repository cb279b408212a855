//! Record translators: one record in, one ontology node's triples out.
//!
//! All three translators share the same node skeleton (type assertions,
//! label, see-also, definition, identifier literal) and differ in their
//! labels, class declarations, and relationship edges. A translator
//! returns `Ok(None)` for a record without a resolvable SPARTA identifier
//! — such records are skipped, never errors.

pub mod countermeasure;
pub mod external;
pub mod technique;
pub mod threat;

use oxigraph::model::vocab::{rdf, rdfs};
use oxigraph::model::{Literal, NamedNode, NamedNodeRef, Triple};
use tracing::warn;

use crate::vocab::{d3f, owl};

/// Emits the skeleton shared by every node kind.
///
/// `declare_class` controls the generic `owl:Class` assertion: techniques
/// and threats are classes as well as individuals, countermeasures are
/// individuals only. A missing or syntactically invalid see-also URL
/// drops that one triple and nothing else.
fn base_triples(
    node: &NamedNode,
    kind: NamedNodeRef<'_>,
    declare_class: bool,
    label: String,
    see_also: Option<&str>,
    definition: &str,
    id: &str,
) -> Vec<Triple> {
    let mut triples = vec![Triple::new(node.clone(), rdf::TYPE, NamedNode::from(kind))];
    if declare_class {
        triples.push(Triple::new(node.clone(), rdf::TYPE, NamedNode::from(owl::CLASS)));
    }
    triples.push(Triple::new(
        node.clone(),
        rdf::TYPE,
        NamedNode::from(owl::NAMED_INDIVIDUAL),
    ));
    triples.push(Triple::new(
        node.clone(),
        rdfs::LABEL,
        Literal::new_simple_literal(label),
    ));
    if let Some(url) = see_also {
        match NamedNode::new(url) {
            Ok(target) => triples.push(Triple::new(node.clone(), rdfs::SEE_ALSO, target)),
            Err(_) => warn!(id, url, "see-also URL is not a valid IRI, omitting triple"),
        }
    }
    triples.push(Triple::new(
        node.clone(),
        d3f::DEFINITION,
        Literal::new_simple_literal(definition),
    ));
    triples.push(Triple::new(
        node.clone(),
        d3f::SPARTA_ID,
        Literal::new_simple_literal(id),
    ));
    triples
}
