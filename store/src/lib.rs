//! In-memory record store for SPARTA STIX 2.1 bundles.
//!
//! The SPARTA knowledge base ships as a STIX 2.1 bundle: a JSON document
//! whose `objects` array mixes attack patterns, courses of action, and the
//! relationship objects linking them. This crate loads one bundle into
//! memory and exposes the three lookups the translation pipeline needs:
//!
//! - [`MemoryStore::query`] — conjunction of [`Filter`] predicates,
//!   results in bundle order;
//! - [`MemoryStore::relationships`] — outgoing relationship edges of a
//!   record;
//! - [`MemoryStore::get`] — record by STIX internal id.
//!
//! # Entry Point
//!
//! ```no_run
//! use sparta_store::{Filter, FilterOp, MemoryStore};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), sparta_store::StoreError> {
//! let store = MemoryStore::load(Path::new("data/sparta_data_v1.6.json"))?;
//! let techniques = store.query(&[
//!     Filter::new("type", FilterOp::Eq, "attack-pattern"),
//!     Filter::new("external_references.source_name", FilterOp::Eq, "sparta"),
//! ]);
//! # let _ = techniques;
//! # Ok(())
//! # }
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod filter;
pub mod model;
mod store;

pub use filter::{Filter, FilterOp};
pub use model::{ExternalReference, KillChainPhase, Record, Relationship};
pub use store::{MemoryStore, StoreError};
