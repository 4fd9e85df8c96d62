// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Decode and authenticate EU Digital COVID Certificates.
//!
//! This crate is the primary entry point: [`decode_certificate`] takes the
//! text produced by a QR scanner plus a caller-supplied [`TrustedKeyStore`]
//! and returns a [`DecodedCertificate`] or a typed [`DecodeError`].
//!
//! Design note: to keep the public API simple, the lower pipeline stages
//! (transport, envelope parsing, verification) are re-exported at the crate
//! root, so callers need only this crate.

// Internal implementation modules.
mod api;
mod certificate;
mod claims;
mod valuesets;

pub use api::{decode_certificate, DecodeError};
pub use certificate::{
    map_claims, DecodedCertificate, RecoveryDetails, TestDetails, VaccinationDetails,
};
pub use claims::{
    decode_claims, CwtClaims, HealthCertificate, MappingError, PersonName, RecoveryEntry,
    TestEntry, VaccinationEntry,
};

pub use eudcc_common::{
    decode_transport, parse_envelope, ParseError, SignedEnvelope, TransportError,
};
pub use eudcc_validation::{verify_signature, TrustedKey, TrustedKeyStore};
