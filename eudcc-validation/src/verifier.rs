// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! ES256 envelope verification against the trusted-key store.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::pkcs8::DecodePublicKey as _;
use signature::Verifier as _;

use eudcc_common::{encode_signature1_sig_structure, SignedEnvelope};

use crate::trust_store::{TrustedKey, TrustedKeyStore};

/// Verify the envelope signature against the trusted keys for its key id.
///
/// Total: never panics and never returns an error. An unknown key id, a key
/// record that fails to parse, or a signature mismatch all degrade to
/// `false`; a malformed record does not stop later records for the same key
/// id from being tried.
pub fn verify_signature(envelope: &SignedEnvelope, store: &TrustedKeyStore) -> bool {
    let kid = match envelope.key_id() {
        Some(kid) => kid,
        None => return false,
    };
    let kid_base64 = STANDARD.encode(kid);

    let sig_structure = match encode_signature1_sig_structure(envelope) {
        Ok(bytes) => bytes,
        Err(_) => return false,
    };

    store
        .candidates(&kid_base64)
        .iter()
        .any(|key| verify_with_key(key, &sig_structure, &envelope.signature))
}

fn verify_with_key(key: &TrustedKey, sig_structure: &[u8], signature: &[u8]) -> bool {
    let spki_der = match decode_subject_pk(&key.subject_pk) {
        Some(der) => der,
        None => return false,
    };

    let public_key = match p256::PublicKey::from_public_key_der(&spki_der) {
        Ok(pk) => pk,
        Err(_) => return false,
    };

    // Normalize through the uncompressed SEC1 point (0x04 prefix byte, then
    // the 32-byte X and Y coordinates) expected by the verifying key.
    let point = public_key.to_encoded_point(false);
    let verifying_key = match p256::ecdsa::VerifyingKey::from_sec1_bytes(point.as_bytes()) {
        Ok(vk) => vk,
        Err(_) => return false,
    };

    // COSE carries ECDSA signatures as the raw `r || s` concatenation.
    let signature = match p256::ecdsa::Signature::from_slice(signature) {
        Ok(sig) => sig,
        Err(_) => return false,
    };

    verifying_key.verify(sig_structure, &signature).is_ok()
}

/// Decode a `subjectPk` value into SubjectPublicKeyInfo DER.
///
/// The registry document carries the bare base64 body; PEM armor lines and
/// embedded whitespace are tolerated.
fn decode_subject_pk(subject_pk: &str) -> Option<Vec<u8>> {
    let body: String = subject_pk
        .lines()
        .filter(|line| !line.starts_with("-----"))
        .flat_map(str::split_whitespace)
        .collect();
    STANDARD.decode(body).ok()
}
