//! SPARTA identifier resolution.
//!
//! A record's SPARTA identifier is the `external_id` of its first external
//! reference with `source_name == "sparta"`. Records without one are not
//! errors — the caller skips them.
//!
//! Dataset versions that contain back-references into D3FEND list ids like
//! `D3-DE` under the sparta source name; resolving those would re-absorb
//! nodes the external ontology already owns. [`IdFilter::ExcludeD3fendIds`]
//! passes such references over during the scan.

use sparta_store::Record;

/// `source_name` token of canonical SPARTA references.
pub const SPARTA_SOURCE: &str = "sparta";

/// Reserved identifier prefix of the external ontology's own id space.
pub const D3FEND_ID_PREFIX: &str = "D3-";

/// Which external references count during identifier resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdFilter {
    /// Accept any sparta-sourced external id. The default.
    Permissive,
    /// Pass over sparta-sourced ids carrying the [`D3FEND_ID_PREFIX`];
    /// the scan continues, so a later clean reference still resolves.
    ExcludeD3fendIds,
}

/// Resolves a record's SPARTA identifier, or `None` if it has none.
#[must_use]
pub fn sparta_id(record: &Record, filter: IdFilter) -> Option<&str> {
    record
        .external_references
        .iter()
        .filter(|r| r.source_name == SPARTA_SOURCE)
        .filter_map(|r| r.external_id.as_deref())
        .find(|id| match filter {
            IdFilter::Permissive => true,
            IdFilter::ExcludeD3fendIds => !id.starts_with(D3FEND_ID_PREFIX),
        })
}

/// Returns the canonical SPARTA citation URL of a record, if any.
///
/// This is the url of the first sparta-sourced reference — the same
/// reference the selection predicates test, so a selected record's
/// see-also link can never point at a different source than the one that
/// selected it.
#[must_use]
pub fn sparta_url(record: &Record) -> Option<&str> {
    record
        .reference_from(SPARTA_SOURCE)
        .and_then(|r| r.url.as_deref())
}
