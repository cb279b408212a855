//! Per-run translation configuration.
//!
//! Both switches are decided once per run from the dataset version and
//! never vary per record. The version boundaries encode the history of
//! the published datasets: v1.x uses prefixed URIs and contains no
//! back-references; v2+ switched to bare URIs and began listing D3FEND
//! ids under the sparta source name.

use crate::ident::IdFilter;
use crate::uri::UriScheme;

/// Configuration of one translation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Identifier-to-URI scheme, applied to every node and edge target.
    pub scheme: UriScheme,
    /// External-reference filter used during identifier resolution.
    pub id_filter: IdFilter,
}

impl RunConfig {
    /// Derives the configuration for a dataset version token (`"1.6"`,
    /// `"2.0"`, …). Versions before 2.0 get the prefixed scheme and the
    /// permissive filter; 2.0 and later get the bare scheme and the
    /// D3FEND-id exclusion. Unparseable tokens fall back to the
    /// permissive v1 defaults.
    #[must_use]
    pub fn for_version(version: &str) -> Self {
        let major: u32 = version
            .split('.')
            .next()
            .and_then(|s| s.parse().ok())
            .unwrap_or(1);
        if major >= 2 {
            Self {
                scheme: UriScheme::Bare,
                id_filter: IdFilter::ExcludeD3fendIds,
            }
        } else {
            Self {
                scheme: UriScheme::Prefixed,
                id_filter: IdFilter::Permissive,
            }
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            scheme: UriScheme::Prefixed,
            id_filter: IdFilter::Permissive,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn v1_versions_use_prefixed_permissive() {
        let cfg = RunConfig::for_version("1.6");
        assert_eq!(cfg.scheme, UriScheme::Prefixed);
        assert_eq!(cfg.id_filter, IdFilter::Permissive);
    }

    #[test]
    fn v2_versions_use_bare_and_exclude_backrefs() {
        let cfg = RunConfig::for_version("2.0");
        assert_eq!(cfg.scheme, UriScheme::Bare);
        assert_eq!(cfg.id_filter, IdFilter::ExcludeD3fendIds);

        let cfg = RunConfig::for_version("3.1");
        assert_eq!(cfg.scheme, UriScheme::Bare);
    }

    #[test]
    fn unparseable_version_falls_back_to_v1_defaults() {
        assert_eq!(RunConfig::for_version("latest"), RunConfig::default());
    }
}
