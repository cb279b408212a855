//! The in-memory record store.
//!
//! [`MemoryStore::load`] parses a STIX 2.1 bundle file once; queries and
//! relationship lookups then run against the in-memory structures without
//! touching the file again. Bundle order is preserved everywhere: query
//! results and relationship lists come back in the order the objects
//! appear in the dataset.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::filter::Filter;
use crate::model::{Record, Relationship};

/// Errors raised while loading a dataset.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The dataset file could not be read.
    #[error("failed to read dataset {path}: {source}")]
    Io {
        /// Path of the dataset file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The dataset file is not valid JSON or not a STIX bundle.
    #[error("malformed STIX bundle: {0}")]
    Bundle(#[source] serde_json::Error),
    /// One object inside the bundle does not match its declared type.
    #[error("malformed STIX object {id}: {source}")]
    Object {
        /// STIX id of the offending object (or its index if the id is missing).
        id: String,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
struct Bundle {
    #[serde(default)]
    objects: Vec<serde_json::Value>,
}

/// An in-memory SPARTA dataset: records, relationships, and an id index.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<Record>,
    relationships: Vec<Relationship>,
    by_id: HashMap<String, usize>,
}

impl MemoryStore {
    /// Loads a STIX bundle from a file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be read, is not a JSON
    /// bundle, or contains an object that fails to deserialize.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Parses a STIX bundle from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the string is not a JSON bundle or
    /// contains an object that fails to deserialize.
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let bundle: Bundle = serde_json::from_str(json).map_err(StoreError::Bundle)?;

        let mut store = Self::default();
        for (index, object) in bundle.objects.into_iter().enumerate() {
            let object_id = object
                .get("id")
                .and_then(|v| v.as_str())
                .map_or_else(|| format!("objects[{index}]"), str::to_owned);
            let is_relationship =
                object.get("type").and_then(|v| v.as_str()) == Some("relationship");

            if is_relationship {
                let rel: Relationship = serde_json::from_value(object)
                    .map_err(|source| StoreError::Object {
                        id: object_id,
                        source,
                    })?;
                store.relationships.push(rel);
            } else {
                let record: Record = serde_json::from_value(object)
                    .map_err(|source| StoreError::Object {
                        id: object_id,
                        source,
                    })?;
                store.by_id.insert(record.id.clone(), store.records.len());
                store.records.push(record);
            }
        }
        Ok(store)
    }

    /// Returns every record matching all of the given filters, in bundle
    /// order. An empty filter list matches every record.
    #[must_use]
    pub fn query(&self, filters: &[Filter]) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|r| filters.iter().all(|f| f.matches(r)))
            .collect()
    }

    /// Returns every relationship whose source is the given record, in
    /// bundle order.
    #[must_use]
    pub fn relationships(&self, record: &Record) -> Vec<&Relationship> {
        self.relationships
            .iter()
            .filter(|rel| rel.source_ref == record.id)
            .collect()
    }

    /// Looks up a record by its STIX internal id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Record> {
        self.by_id.get(id).map(|&index| &self.records[index])
    }

    /// Number of records (relationships excluded).
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Number of relationship objects.
    #[must_use]
    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }
}
