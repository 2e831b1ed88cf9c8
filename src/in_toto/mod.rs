//! # in-toto Statement v0.1
//!
//! The outer layer of a provenance document: a list of subjects (artifact
//! names and digests) bound to a typed predicate.
//!
//! Field declaration order is the wire order. Consumers of the v0.1 schema
//! expect `_type`, `subject`, `predicateType`, `predicate` in that order, so
//! these structs are serialized directly rather than through a map.
//!
//! ## Examples
//!
//! ```
//! use gha_provenance::in_toto::make_minimal_subject;
//!
//! let subject = make_minimal_subject("app.tar.gz", "sha256", "abc123");
//! assert_eq!(subject.name, "app.tar.gz");
//! assert!(subject.digest.contains_key("sha256"));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::slsa::Predicate;

/// The in-toto Statement v0.1 type URI.
pub const STATEMENT_TYPE_V01: &str = "https://in-toto.io/Statement/v0.1";

/// Algorithm name to lowercase hex digest.
pub type DigestSet = BTreeMap<String, String>;

/// An artifact covered by the statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Slash-separated path relative to the enumeration root.
    pub name: String,
    pub digest: DigestSet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    #[serde(rename = "_type")]
    pub statement_type: String,
    pub subject: Vec<Subject>,
    #[serde(rename = "predicateType")]
    pub predicate_type: String,
    pub predicate: Predicate,
}

/// Creates a subject with a single digest entry.
pub fn make_minimal_subject(name: &str, alg: &str, digest: &str) -> Subject {
    Subject {
        name: name.to_string(),
        digest: DigestSet::from([(alg.to_string(), digest.to_string())]),
    }
}

/// Wraps `predicate` in a v0.1 statement covering `subject`.
pub fn generate_statement_v01(
    subject: Vec<Subject>,
    predicate_type: &str,
    predicate: Predicate,
) -> Statement {
    Statement {
        statement_type: STATEMENT_TYPE_V01.to_string(),
        subject,
        predicate_type: predicate_type.to_string(),
        predicate,
    }
}
