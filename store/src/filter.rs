//! Field-path filters over records.
//!
//! A [`Filter`] is one `(field, operator, value)` predicate; a query is a
//! conjunction of filters. Field paths that traverse a list field
//! (`external_references.source_name`) match when *any* element matches.

use crate::model::Record;

/// Comparison operator of a [`Filter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// Field value equals the filter value exactly.
    Eq,
    /// Field value contains the filter value as a substring.
    Contains,
}

/// A single `(field, operator, value)` predicate over a [`Record`].
#[derive(Debug, Clone)]
pub struct Filter {
    /// Dotted field path (see [`Filter::matches`] for the supported paths).
    pub field: &'static str,
    /// Comparison operator.
    pub op: FilterOp,
    /// Value to compare against.
    pub value: String,
}

impl Filter {
    /// Creates a filter from a field path, operator, and value.
    pub fn new(field: &'static str, op: FilterOp, value: impl Into<String>) -> Self {
        Self {
            field,
            op,
            value: value.into(),
        }
    }

    /// Evaluates this filter against a record.
    ///
    /// Supported field paths:
    /// - `type`
    /// - `id`
    /// - `name`
    /// - `external_references.source_name`
    /// - `external_references.external_id`
    /// - `external_references.url`
    /// - `kill_chain_phases.kill_chain_name`
    /// - `kill_chain_phases.phase_name`
    ///
    /// An unknown field path matches nothing.
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        match self.field {
            "type" => self.cmp(&record.object_type),
            "id" => self.cmp(&record.id),
            "name" => self.cmp(&record.name),
            "external_references.source_name" => record
                .external_references
                .iter()
                .any(|r| self.cmp(&r.source_name)),
            "external_references.external_id" => record
                .external_references
                .iter()
                .any(|r| r.external_id.as_deref().is_some_and(|v| self.cmp(v))),
            "external_references.url" => record
                .external_references
                .iter()
                .any(|r| r.url.as_deref().is_some_and(|v| self.cmp(v))),
            "kill_chain_phases.kill_chain_name" => record
                .kill_chain_phases
                .iter()
                .any(|p| self.cmp(&p.kill_chain_name)),
            "kill_chain_phases.phase_name" => record
                .kill_chain_phases
                .iter()
                .any(|p| self.cmp(&p.phase_name)),
            _ => false,
        }
    }

    fn cmp(&self, field_value: &str) -> bool {
        match self.op {
            FilterOp::Eq => field_value == self.value,
            FilterOp::Contains => field_value.contains(&self.value),
        }
    }
}
