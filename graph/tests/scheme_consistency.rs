//! Property test: one URI scheme per run, applied everywhere.
//!
//! Generates bundles mixing dotted and plain technique identifiers,
//! threats, and countermeasures (sentinel included) and asserts that
//! every node URI and every identifier-mapped edge target in the built
//! graph follows the single configured scheme.

use oxigraph::model::vocab::rdf;
use proptest::prelude::*;
use sparta_graph::{build_graph, IdFilter, RunConfig, UriScheme};
use sparta_store::MemoryStore;

const D3F: &str = "http://d3fend.mitre.org/ontologies/d3fend.owl#";

fn technique_id() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{4}".prop_map(|n| format!("TEC-{n}")),
        ("[0-9]{4}", "[0-9]{2}").prop_map(|(a, b)| format!("TEC-{a}.{b}")),
    ]
}

fn threat_id() -> impl Strategy<Value = String> {
    "[0-9]{4}".prop_map(|n| format!("THR-{n}"))
}

fn countermeasure_id() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("CM0000".to_owned()),
        "[0-9]{4}".prop_map(|n| format!("CM{n}")),
    ]
}

/// Assembles a STIX bundle from the generated identifier lists. Every
/// threat and countermeasure is related to the first technique so edge
/// targets get exercised too.
fn bundle(techniques: &[String], threats: &[String], cms: &[String]) -> String {
    let mut objects = Vec::new();
    for (i, id) in techniques.iter().enumerate() {
        objects.push(serde_json::json!({
            "type": "attack-pattern",
            "id": format!("attack-pattern--t{i}"),
            "name": format!("Technique {id}"),
            "description": "d",
            "external_references": [{
                "source_name": "sparta",
                "external_id": id,
                "url": format!("https://sparta.aerospace.org/technique/{id}")
            }],
            "kill_chain_phases": [
                {"kill_chain_name": "sparta", "phase_name": "Reconnaissance"}
            ]
        }));
    }
    for (i, id) in threats.iter().enumerate() {
        objects.push(serde_json::json!({
            "type": "attack-pattern",
            "id": format!("attack-pattern--th{i}"),
            "name": format!("Threat {id}"),
            "description": "d",
            "external_references": [{
                "source_name": "sparta",
                "external_id": id,
                "url": format!("https://sparta.aerospace.org/threat/{id}")
            }],
            "x_sparta_defense_in_depth": "Prevention"
        }));
        if !techniques.is_empty() {
            objects.push(serde_json::json!({
                "type": "relationship",
                "id": format!("relationship--th{i}"),
                "relationship_type": "related-to",
                "source_ref": format!("attack-pattern--th{i}"),
                "target_ref": "attack-pattern--t0"
            }));
        }
    }
    for (i, id) in cms.iter().enumerate() {
        objects.push(serde_json::json!({
            "type": "course-of-action",
            "id": format!("course-of-action--c{i}"),
            "name": format!("Countermeasure {id}"),
            "description": "d",
            "external_references": [{
                "source_name": "sparta",
                "external_id": id,
                "url": format!("https://sparta.aerospace.org/countermeasures/{id}")
            }]
        }));
        if !techniques.is_empty() {
            objects.push(serde_json::json!({
                "type": "relationship",
                "id": format!("relationship--c{i}"),
                "relationship_type": "mitigates",
                "source_ref": format!("course-of-action--c{i}"),
                "target_ref": "attack-pattern--t0"
            }));
        }
    }
    serde_json::json!({"type": "bundle", "id": "bundle--gen", "objects": objects}).to_string()
}

/// A node-space local name follows the scheme iff its `SPARTA-` prefix
/// presence matches `Prefixed`.
fn follows_scheme(local: &str, scheme: UriScheme) -> bool {
    match scheme {
        UriScheme::Prefixed => local.starts_with("SPARTA-"),
        UriScheme::Bare => !local.starts_with("SPARTA-"),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_uri_in_a_run_follows_the_configured_scheme(
        techniques in prop::collection::vec(technique_id(), 1..4),
        threats in prop::collection::vec(threat_id(), 0..3),
        cms in prop::collection::vec(countermeasure_id(), 0..3),
        prefixed in any::<bool>(),
    ) {
        let scheme = if prefixed { UriScheme::Prefixed } else { UriScheme::Bare };
        let cfg = RunConfig { scheme, id_filter: IdFilter::Permissive };
        let store = MemoryStore::from_json_str(&bundle(&techniques, &threats, &cms)).unwrap();
        let (graph, summary) = build_graph(&store, &cfg).unwrap();
        prop_assert!(summary.triples > 0);

        for triple in graph.iter() {
            // Every subject is a minted node URI and must follow the scheme.
            let subject = triple.subject.to_string();
            let local = subject
                .trim_start_matches(&format!("<{D3F}"))
                .trim_end_matches('>');
            prop_assert!(
                follows_scheme(local, scheme),
                "subject {subject} violates {scheme:?}"
            );

            // Identifier-mapped edge targets (counters/related) must too.
            let predicate = triple.predicate.to_string();
            if predicate.contains("#counters>") || predicate.contains("#related>") {
                let object = triple.object.to_string();
                if let Some(target) = object
                    .strip_prefix(&format!("<{D3F}"))
                    .map(|s| s.trim_end_matches('>'))
                {
                    // Control-catalog URIs are scheme-independent.
                    if !target.starts_with("NIST_SP_800-53_R5_") {
                        prop_assert!(
                            follows_scheme(target, scheme),
                            "edge target {object} violates {scheme:?}"
                        );
                    }
                }
            }
        }

        // rdf:type subjects give one node per resolved identifier; the
        // id → URI mapping must be a bijection within the run.
        let mut nodes = std::collections::BTreeSet::new();
        for triple in graph.iter() {
            if triple.predicate == rdf::TYPE {
                nodes.insert(triple.subject.to_string());
            }
        }
        let mut unique_ids: std::collections::BTreeSet<&String> =
            techniques.iter().collect();
        unique_ids.extend(threats.iter());
        unique_ids.extend(cms.iter());
        prop_assert_eq!(nodes.len(), unique_ids.len());
    }
}
