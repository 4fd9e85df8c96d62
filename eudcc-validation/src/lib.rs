// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Signature verification for EU Digital COVID Certificates.
//!
//! Verification is a verdict, not a fallible operation: [`verify_signature`]
//! returns `false` for every failure mode (unknown key id, malformed key
//! material, cryptographic mismatch) so that an inability to validate can
//! never crash the decode pipeline or be confused with a decode error.

pub mod trust_store;
pub mod verifier;

pub use trust_store::{TrustedKey, TrustedKeyStore};
pub use verifier::verify_signature;
