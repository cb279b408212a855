//! STIX 2.1 data model for the SPARTA dataset.
//!
//! Only the fields the translation pipeline reads are modeled; everything
//! else in the upstream bundle is ignored during deserialization. Records
//! are immutable once loaded and are only ever handed out by reference.

use serde::Deserialize;

/// A citation from a STIX object to an external knowledge base.
#[derive(Debug, Clone, Deserialize)]
pub struct ExternalReference {
    /// Name of the referenced source (e.g. `"sparta"`, `"d3fend"`).
    pub source_name: String,
    /// Identifier of the referenced item within that source.
    #[serde(default)]
    pub external_id: Option<String>,
    /// URL of the referenced item.
    #[serde(default)]
    pub url: Option<String>,
}

/// A kill-chain phase tag on an attack-pattern record.
#[derive(Debug, Clone, Deserialize)]
pub struct KillChainPhase {
    /// Name of the kill chain the phase belongs to (e.g. `"sparta"`).
    pub kill_chain_name: String,
    /// Name of the phase within that kill chain (e.g. `"Reconnaissance"`).
    pub phase_name: String,
}

/// A STIX domain object from the SPARTA bundle.
///
/// Attack patterns (techniques and threats) and courses of action
/// (countermeasures) share this shape; kind-specific fields are simply
/// absent on records of the other kinds. Objects of unrecognized types are
/// kept as records too — the selection predicates never match them.
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    /// STIX object type (`"attack-pattern"`, `"course-of-action"`, …).
    #[serde(rename = "type")]
    pub object_type: String,
    /// STIX internal identifier (`"attack-pattern--<uuid>"`).
    pub id: String,
    /// Primary name.
    #[serde(default)]
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Ordered external references; index 0 is the canonical citation.
    #[serde(default)]
    pub external_references: Vec<ExternalReference>,
    /// Kill-chain phase tags. Empty on threats and countermeasures.
    #[serde(default)]
    pub kill_chain_phases: Vec<KillChainPhase>,
    /// Defense-in-depth layer label. Present on threat records only.
    #[serde(default, rename = "x_sparta_defense_in_depth")]
    pub defense_in_depth: Option<String>,
    /// Upstream sub-technique flag. Known to be `false` for every record
    /// in every published dataset version; consumers must derive sub-item
    /// structure from identifier punctuation instead.
    #[serde(default, rename = "x_sparta_is_subtechnique")]
    pub is_subtechnique: Option<bool>,
}

/// A STIX relationship object (`source_ref —relationship_type→ target_ref`).
#[derive(Debug, Clone, Deserialize)]
pub struct Relationship {
    /// STIX internal identifier (`"relationship--<uuid>"`).
    pub id: String,
    /// Relationship kind (`"mitigates"`, `"related-to"`, …).
    pub relationship_type: String,
    /// STIX id of the source record.
    pub source_ref: String,
    /// STIX id of the target record.
    pub target_ref: String,
}

impl Record {
    /// Returns the first external reference whose `source_name` matches,
    /// preserving bundle order.
    #[must_use]
    pub fn reference_from(&self, source_name: &str) -> Option<&ExternalReference> {
        self.external_references
            .iter()
            .find(|r| r.source_name == source_name)
    }
}
