// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The decode-and-verify pipeline entry point.

use eudcc_common::{decode_transport, parse_envelope, ParseError, TransportError};
use eudcc_validation::{verify_signature, TrustedKeyStore};

use crate::certificate::{map_claims, DecodedCertificate};
use crate::claims::MappingError;

/// Any fatal error of the decode pipeline. Signature-verification failure is
/// not an error; it surfaces as `valid = false` on the result.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Mapping(#[from] MappingError),
}

/// Decode and authenticate one scanned certificate.
///
/// Runs the strict forward pipeline: transport decoding, envelope parsing,
/// signature verification against `store`, then claims mapping. The payload
/// is only decoded after verification, and an envelope that fails to
/// authenticate still maps its claims, so the caller always sees the
/// certificate contents alongside the verdict.
///
/// Each call is independent pure computation; concurrent calls may share one
/// `store` with no synchronization.
pub fn decode_certificate(
    raw: &str,
    store: &TrustedKeyStore,
) -> Result<DecodedCertificate, DecodeError> {
    let envelope_bytes = decode_transport(raw)?;
    let envelope = parse_envelope(&envelope_bytes)?;
    let valid = verify_signature(&envelope, store);
    let certificate = map_claims(&envelope.payload, valid)?;
    Ok(certificate)
}
