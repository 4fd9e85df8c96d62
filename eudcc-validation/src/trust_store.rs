// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The registry of trusted document-signer keys.
//!
//! The store is materialized by the caller (from a bundled file or a network
//! fetch; that concern lives outside this crate) and read-only afterwards, so
//! concurrent decode calls can share one store without synchronization.

use std::collections::HashMap;

use serde::Deserialize;

/// One trusted public key record for a document signer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrustedKey {
    /// SubjectPublicKeyInfo DER as standard base64, with or without PEM armor
    /// lines and embedded line breaks.
    #[serde(rename = "subjectPk")]
    pub subject_pk: String,

    /// Usage hints carried by the registry document. Not interpreted here.
    #[serde(rename = "keyUsage", default)]
    pub key_usage: Vec<String>,
}

impl TrustedKey {
    pub fn new(subject_pk: impl Into<String>) -> Self {
        Self {
            subject_pk: subject_pk.into(),
            key_usage: Vec::new(),
        }
    }
}

/// Immutable mapping from base64 key identifier to the ordered key records
/// registered for it. Multiple records per identifier exist under key
/// rotation; verification tries them in registration order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrustedKeyStore {
    #[serde(rename = "eu_keys")]
    keys: HashMap<String, Vec<TrustedKey>>,
}

impl TrustedKeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deserialize the registry document shape
    /// `{ "eu_keys": { <kid-base64>: [ { "subjectPk": ... }, ... ] } }`.
    /// Unknown record fields are ignored.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Register a key record for a key identifier, after any existing records.
    pub fn insert(&mut self, kid_base64: impl Into<String>, key: TrustedKey) {
        self.keys.entry(kid_base64.into()).or_default().push(key);
    }

    /// The candidate key records for a key identifier, in registration order.
    /// Unknown identifiers yield an empty slice.
    pub fn candidates(&self, kid_base64: &str) -> &[TrustedKey] {
        self.keys.get(kid_base64).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of key identifiers (not key records) in the store.
    pub fn len(&self) -> usize {
        self.keys.len()
    }
}
