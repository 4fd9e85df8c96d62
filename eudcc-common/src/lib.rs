// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Shared decoding layers for EU Digital COVID Certificates.
//!
//! This crate owns the two front stages of the decode pipeline:
//! - [`transport`]: scanned text -> raw envelope bytes (`HC1` prefix, base45,
//!   optional zlib inflation).
//! - [`cose_sign1`]: raw envelope bytes -> [`SignedEnvelope`] plus the COSE
//!   `Sig_structure` encoding that signature verification is computed over.
//!
//! No cryptography and no trust decisions happen here; those live in
//! `eudcc-validation`.

pub mod cbor_map;
pub mod cose_sign1;
pub mod transport;

pub use cbor_map::{CborMap, CborValue, MapKey};
pub use cose_sign1::{encode_signature1_sig_structure, parse_envelope, ParseError, SignedEnvelope};
pub use transport::{decode_transport, TransportError};
