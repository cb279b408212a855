//! Countermeasure translator.

use oxigraph::model::Triple;
use sparta_store::{MemoryStore, Record};
use tracing::{debug, warn};

use crate::config::RunConfig;
use crate::error::GraphError;
use crate::ident::{sparta_id, sparta_url};
use crate::uri::class_node;
use crate::vocab::d3f;

use super::base_triples;
use super::external::{
    classify_target, control_node, d3fend_local_from_url, TargetKind,
    CONTROL_REFERENCE_URL_PREFIX,
};

/// Reserved catch-all countermeasure id; emits no `counters` edges.
pub const SENTINEL_ID: &str = "CM0000";

/// Translates one countermeasure record into its node's triples.
///
/// Countermeasures are individuals only — no generic `owl:Class`
/// assertion. Relationship edges are partitioned by target kind: targets
/// already owned by D3FEND get `d3f:enabled-by`, same-domain techniques
/// get `d3f:counters` (unless this countermeasure is the [`SENTINEL_ID`]),
/// and control-catalog references on the countermeasure itself each get a
/// `d3f:related` edge to a synthesized control URI. Returns `Ok(None)`
/// when the record has no resolvable identifier.
///
/// # Errors
///
/// Returns [`GraphError::InvalidIri`] if a derived IRI is invalid.
pub fn translate(
    record: &Record,
    store: &MemoryStore,
    cfg: &RunConfig,
) -> Result<Option<Vec<Triple>>, GraphError> {
    let Some(id) = sparta_id(record, cfg.id_filter) else {
        debug!(record = %record.id, "countermeasure without sparta identifier, skipping");
        return Ok(None);
    };
    let node = cfg.scheme.node(id)?;

    let mut triples = base_triples(
        &node,
        d3f::SPARTA_COUNTERMEASURE,
        false,
        record.name.clone(),
        sparta_url(record),
        &record.description,
        id,
    );

    for rel in store.relationships(record) {
        let Some(target) = store.get(&rel.target_ref) else {
            warn!(countermeasure = id, target = %rel.target_ref, "relationship target not in store, dropping edge");
            continue;
        };
        match classify_target(target) {
            TargetKind::D3fend(reference) => {
                let Some(local) = reference.url.as_deref().and_then(d3fend_local_from_url)
                else {
                    warn!(countermeasure = id, target = %target.id, "d3fend reference without technique URL, dropping edge");
                    continue;
                };
                triples.push(Triple::new(node.clone(), d3f::ENABLED_BY, class_node(local)?));
            }
            TargetKind::SpartaTechnique => {
                if id == SENTINEL_ID {
                    continue;
                }
                let Some(target_id) = target
                    .external_references
                    .first()
                    .and_then(|r| r.external_id.as_deref())
                else {
                    warn!(countermeasure = id, target = %target.id, "technique target has no external reference, dropping edge");
                    continue;
                };
                triples.push(Triple::new(
                    node.clone(),
                    d3f::COUNTERS,
                    cfg.scheme.node(target_id)?,
                ));
            }
            TargetKind::Other => {
                debug!(countermeasure = id, target = %target.id, "relationship target is neither d3fend nor technique, no edge");
            }
        }
    }

    for reference in &record.external_references {
        let is_control = reference
            .url
            .as_deref()
            .is_some_and(|url| url.starts_with(CONTROL_REFERENCE_URL_PREFIX));
        if !is_control {
            continue;
        }
        let Some(control_id) = reference.external_id.as_deref() else {
            warn!(countermeasure = id, "control reference without external id, dropping edge");
            continue;
        };
        triples.push(Triple::new(node.clone(), d3f::RELATED, control_node(control_id)?));
    }

    Ok(Some(triples))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::test_support::{store_json, triple_strings};

    const CM_BUNDLE: &str = r#"{
        "objects": [
            {
                "type": "course-of-action",
                "id": "course-of-action--cm",
                "name": "Segment Flight Software",
                "description": "Separate critical functions.",
                "external_references": [
                    {"source_name": "sparta", "external_id": "CM0012",
                     "url": "https://sparta.aerospace.org/countermeasures/CM0012"},
                    {"source_name": "nist", "external_id": "AC-4(1)",
                     "url": "https://sparta.aerospace.org/countermeasures/references/AC-4(1)"}
                ]
            },
            {
                "type": "course-of-action",
                "id": "course-of-action--sentinel",
                "name": "General Hygiene",
                "description": "Catch-all guidance.",
                "external_references": [
                    {"source_name": "sparta", "external_id": "CM0000",
                     "url": "https://sparta.aerospace.org/countermeasures/CM0000"}
                ]
            },
            {
                "type": "attack-pattern",
                "id": "attack-pattern--tech",
                "name": "Spoof Commands",
                "description": "d",
                "external_references": [
                    {"source_name": "sparta", "external_id": "TEC-0008",
                     "url": "https://sparta.aerospace.org/technique/TEC-0008"}
                ],
                "kill_chain_phases": [
                    {"kill_chain_name": "sparta", "phase_name": "Execution"}
                ]
            },
            {
                "type": "attack-pattern",
                "id": "attack-pattern--d3fend",
                "name": "Multi-factor Authentication",
                "description": "d",
                "external_references": [
                    {"source_name": "d3fend", "external_id": "D3-MFA",
                     "url": "https://d3fend.mitre.org/technique/d3f:Multi-factorAuthentication/"}
                ]
            },
            {
                "type": "relationship",
                "id": "relationship--1",
                "relationship_type": "mitigates",
                "source_ref": "course-of-action--cm",
                "target_ref": "attack-pattern--tech"
            },
            {
                "type": "relationship",
                "id": "relationship--2",
                "relationship_type": "mitigates",
                "source_ref": "course-of-action--cm",
                "target_ref": "attack-pattern--d3fend"
            },
            {
                "type": "relationship",
                "id": "relationship--3",
                "relationship_type": "mitigates",
                "source_ref": "course-of-action--sentinel",
                "target_ref": "attack-pattern--tech"
            }
        ]
    }"#;

    #[test]
    fn countermeasures_are_individuals_not_classes() {
        let store = store_json(CM_BUNDLE);
        let cm = store.get("course-of-action--cm").unwrap();
        let triples = translate(cm, &store, &RunConfig::default()).unwrap().unwrap();
        let rendered = triple_strings(&triples);
        assert!(rendered.iter().any(|t| t.contains("#SPARTACountermeasure")));
        assert!(rendered.iter().any(|t| t.contains("owl#NamedIndividual")));
        assert!(!rendered.iter().any(|t| t.contains("owl#Class>")));
    }

    #[test]
    fn technique_target_yields_a_counters_edge() {
        let store = store_json(CM_BUNDLE);
        let cm = store.get("course-of-action--cm").unwrap();
        let triples = translate(cm, &store, &RunConfig::default()).unwrap().unwrap();
        let counters: Vec<_> = triple_strings(&triples)
            .into_iter()
            .filter(|t| t.contains("#counters>"))
            .collect();
        assert_eq!(counters.len(), 1);
        assert!(counters[0].contains("#SPARTA-TEC-0008"));
    }

    #[test]
    fn d3fend_target_yields_an_enabled_by_edge() {
        let store = store_json(CM_BUNDLE);
        let cm = store.get("course-of-action--cm").unwrap();
        let triples = translate(cm, &store, &RunConfig::default()).unwrap().unwrap();
        let enabled: Vec<_> = triple_strings(&triples)
            .into_iter()
            .filter(|t| t.contains("#enabled-by>"))
            .collect();
        assert_eq!(enabled.len(), 1);
        assert!(enabled[0].contains("#Multi-factorAuthentication"));
    }

    #[test]
    fn sentinel_emits_no_counters_edge() {
        let store = store_json(CM_BUNDLE);
        let sentinel = store.get("course-of-action--sentinel").unwrap();
        let triples = translate(sentinel, &store, &RunConfig::default())
            .unwrap()
            .unwrap();
        assert!(!triple_strings(&triples)
            .iter()
            .any(|t| t.contains("#counters>")));
    }

    #[test]
    fn control_reference_yields_a_related_edge_with_rewritten_id() {
        let store = store_json(CM_BUNDLE);
        let cm = store.get("course-of-action--cm").unwrap();
        let triples = translate(cm, &store, &RunConfig::default()).unwrap().unwrap();
        let related: Vec<_> = triple_strings(&triples)
            .into_iter()
            .filter(|t| t.contains("#related>"))
            .collect();
        assert_eq!(related.len(), 1);
        assert!(related[0].contains("#NIST_SP_800-53_R5_AC-4_1_"));
    }
}
