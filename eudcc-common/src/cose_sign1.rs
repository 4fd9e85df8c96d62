// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! COSE_Sign1 envelope parsing and `Sig_structure` encoding.
//!
//! The payload byte string is deliberately kept raw here: it is only decoded
//! into claims after signature verification, so a malformed payload can never
//! short-circuit the verification stage.

use minicbor::data::{Tag, Type};
use minicbor::{Decoder, Encoder};

use crate::cbor_map::CborMap;

pub const COSE_SIGN1_TAG: u64 = 18;
pub const SIG_STRUCTURE_CONTEXT_SIGNATURE1: &str = "Signature1";

/// COSE header label carrying the key identifier.
pub const HEADER_LABEL_KID: i64 = 4;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("malformed COSE_Sign1 envelope: {0}")]
    MalformedEnvelope(String),

    #[error("no key identifier (label 4) in protected or unprotected header")]
    MissingKeyId,
}

impl ParseError {
    fn malformed<E: std::fmt::Display>(e: E) -> Self {
        Self::MalformedEnvelope(e.to_string())
    }
}

/// A parsed COSE_Sign1 signed message.
///
/// `protected_raw` is the protected-header byte string exactly as received;
/// the `Sig_structure` must be built over these bytes, not a re-encoding of
/// the decoded map.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedEnvelope {
    pub protected_raw: Vec<u8>,
    pub protected: CborMap,
    pub unprotected: CborMap,
    pub payload: Vec<u8>,
    pub signature: Vec<u8>,
}

impl SignedEnvelope {
    /// The key identifier bytes, read from the protected header first and
    /// falling back to the unprotected header.
    ///
    /// Guaranteed present on envelopes produced by [`parse_envelope`].
    pub fn key_id(&self) -> Option<&[u8]> {
        self.protected
            .get_bytes(HEADER_LABEL_KID)
            .or_else(|| self.unprotected.get_bytes(HEADER_LABEL_KID))
    }
}

/// Parse raw envelope bytes into a [`SignedEnvelope`].
///
/// Accepts (and strips) an optional leading CBOR tag 18, which some producers
/// wrap around the COSE_Sign1 array; any other tag is malformed. The outer
/// value must be a definite-length array of exactly four elements.
pub fn parse_envelope(bytes: &[u8]) -> Result<SignedEnvelope, ParseError> {
    if bytes.is_empty() {
        return Err(ParseError::MalformedEnvelope("empty input".to_string()));
    }

    let mut dec = Decoder::new(bytes);

    if matches!(dec.datatype().map_err(ParseError::malformed)?, Type::Tag) {
        let tag = dec.tag().map_err(ParseError::malformed)?;
        if tag != Tag::new(COSE_SIGN1_TAG) {
            return Err(ParseError::MalformedEnvelope(format!(
                "unexpected CBOR tag (expected COSE_Sign1 tag {COSE_SIGN1_TAG} or no tag)"
            )));
        }
    }

    let len = dec
        .array()
        .map_err(|e| ParseError::MalformedEnvelope(format!("top-level item is not an array: {e}")))?
        .ok_or_else(|| {
            ParseError::MalformedEnvelope("indefinite-length arrays are not supported".to_string())
        })?;

    if len != 4 {
        return Err(ParseError::MalformedEnvelope(format!(
            "COSE_Sign1 must be an array of 4 elements, got {len}"
        )));
    }

    // protected header (bstr wrapping a CBOR map)
    let protected_raw = dec
        .bytes()
        .map_err(|e| ParseError::MalformedEnvelope(format!("failed to read protected header (bstr): {e}")))?
        .to_vec();
    let protected = CborMap::from_cbor(&protected_raw).map_err(ParseError::MalformedEnvelope)?;

    // unprotected header (map)
    if !matches!(dec.datatype().map_err(ParseError::malformed)?, Type::Map) {
        return Err(ParseError::MalformedEnvelope(
            "unprotected header is not a map".to_string(),
        ));
    }
    let unprotected = CborMap::from_decoder(&mut dec).map_err(ParseError::MalformedEnvelope)?;

    // payload (bstr), kept raw for signature computation
    let payload = dec
        .bytes()
        .map_err(|e| ParseError::MalformedEnvelope(format!("failed to read payload (bstr): {e}")))?
        .to_vec();

    // signature (bstr)
    let signature = dec
        .bytes()
        .map_err(|e| ParseError::MalformedEnvelope(format!("failed to read signature (bstr): {e}")))?
        .to_vec();

    if dec.position() != bytes.len() {
        return Err(ParseError::MalformedEnvelope(
            "trailing bytes after COSE_Sign1".to_string(),
        ));
    }

    let envelope = SignedEnvelope {
        protected_raw,
        protected,
        unprotected,
        payload,
        signature,
    };

    if envelope.key_id().is_none() {
        return Err(ParseError::MissingKeyId);
    }

    Ok(envelope)
}

/// Encode the COSE `Sig_structure` the envelope signature is computed over:
/// `["Signature1", protected-as-received, empty external AAD, payload]`.
pub fn encode_signature1_sig_structure(envelope: &SignedEnvelope) -> Result<Vec<u8>, String> {
    let mut out =
        Vec::with_capacity(32 + envelope.protected_raw.len() + envelope.payload.len());
    {
        let mut enc = Encoder::new(&mut out);
        enc.array(4).map_err(|e| e.to_string())?;
        enc.str(SIG_STRUCTURE_CONTEXT_SIGNATURE1)
            .map_err(|e| e.to_string())?;
        enc.bytes(&envelope.protected_raw).map_err(|e| e.to_string())?;
        enc.bytes(&[]).map_err(|e| e.to_string())?; // external_aad empty bstr
        enc.bytes(&envelope.payload).map_err(|e| e.to_string())?;
    }
    Ok(out)
}
