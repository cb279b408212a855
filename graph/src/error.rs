//! Error types for the translation pipeline.

use std::path::PathBuf;

use oxigraph::model::IriParseError;
use oxigraph::store::{LoaderError, SerializerError, StorageError};

/// Errors raised while building or merging the SPARTA graph.
///
/// Variants carrying a record identifier correspond to the fatal
/// abort-the-run cases; the recoverable skip-record and skip-edge cases
/// never surface here, they are logged and swallowed at the point of
/// translation.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// The dataset could not be loaded.
    #[error(transparent)]
    Store(#[from] sparta_store::StoreError),

    /// The external ontology file could not be read or written.
    #[error("failed to access ontology {path}: {source}")]
    OntologyIo {
        /// Path of the ontology file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The external ontology file is not valid Turtle.
    #[error("failed to parse ontology {path}: {source}")]
    OntologyParse {
        /// Path of the ontology file.
        path: PathBuf,
        /// Underlying parser error.
        #[source]
        source: LoaderError,
    },

    /// The merged ontology could not be serialized back to disk.
    #[error("failed to serialize ontology {path}: {source}")]
    OntologySerialize {
        /// Path of the ontology file.
        path: PathBuf,
        /// Underlying serializer error.
        #[source]
        source: SerializerError,
    },

    /// The in-memory triple store failed.
    #[error("graph storage error: {0}")]
    Storage(#[from] StorageError),

    /// A derived IRI is syntactically invalid.
    #[error("record {id}: derived invalid IRI {iri:?}: {source}")]
    InvalidIri {
        /// SPARTA identifier of the record being translated.
        id: String,
        /// The offending IRI text.
        iri: String,
        /// Underlying parse error.
        #[source]
        source: IriParseError,
    },

    /// A threat record has no defense-in-depth layer at all.
    #[error("threat {id}: missing defense-in-depth layer")]
    MissingDefenseLayer {
        /// SPARTA identifier of the threat.
        id: String,
    },

    /// A threat record's defense-in-depth layer is not in the fixed table.
    #[error("threat {id}: unknown defense-in-depth layer {layer:?}")]
    UnknownDefenseLayer {
        /// SPARTA identifier of the threat.
        id: String,
        /// The unrecognized layer label.
        layer: String,
    },
}
