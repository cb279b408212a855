//! Selection queries carving the three record subsets out of the store.
//!
//! This module is the only place that decides what counts as a technique
//! versus a threat: both arrive as `attack-pattern` objects and differ
//! only in their citation path and kill-chain tagging. The equality
//! clauses run as store filters; the url-substring and kill-chain clauses
//! are refinement predicates over the first sparta reference — the same
//! reference identifier resolution reads.

use sparta_store::{Filter, FilterOp, MemoryStore, Record};

use crate::hierarchy::SPARTA_KILL_CHAIN;
use crate::ident::SPARTA_SOURCE;

/// Substring of canonical technique citation URLs.
pub const TECHNIQUE_PATH: &str = "/technique/";

/// Substring of canonical threat citation URLs.
pub const THREAT_PATH: &str = "/threat/";

fn sparta_attack_patterns(store: &MemoryStore) -> Vec<&Record> {
    store.query(&[
        Filter::new("type", FilterOp::Eq, "attack-pattern"),
        Filter::new("external_references.source_name", FilterOp::Eq, SPARTA_SOURCE),
    ])
}

fn canonical_url_contains(record: &Record, needle: &str) -> bool {
    record
        .reference_from(SPARTA_SOURCE)
        .and_then(|r| r.url.as_deref())
        .is_some_and(|url| url.contains(needle))
}

/// Selects technique records: sparta attack patterns cited under the
/// technique path with at least one sparta-tagged kill-chain phase.
#[must_use]
pub fn techniques(store: &MemoryStore) -> Vec<&Record> {
    sparta_attack_patterns(store)
        .into_iter()
        .filter(|r| canonical_url_contains(r, TECHNIQUE_PATH))
        .filter(|r| {
            r.kill_chain_phases
                .iter()
                .any(|p| p.kill_chain_name == SPARTA_KILL_CHAIN)
        })
        .collect()
}

/// Selects threat records: sparta attack patterns cited under the threat
/// path with no kill-chain phases at all — the absence of phases is the
/// discriminator separating threats from techniques upstream.
#[must_use]
pub fn threats(store: &MemoryStore) -> Vec<&Record> {
    sparta_attack_patterns(store)
        .into_iter()
        .filter(|r| canonical_url_contains(r, THREAT_PATH))
        .filter(|r| r.kill_chain_phases.is_empty())
        .collect()
}

/// Selects countermeasure records: sparta-referenced courses of action.
#[must_use]
pub fn countermeasures(store: &MemoryStore) -> Vec<&Record> {
    store.query(&[
        Filter::new("type", FilterOp::Eq, "course-of-action"),
        Filter::new("external_references.source_name", FilterOp::Eq, SPARTA_SOURCE),
    ])
}
