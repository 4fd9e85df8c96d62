// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Shared fixture builders for the end-to-end decode tests.
//!
//! These produce real scannable payloads: a CWT claims map signed into a
//! COSE_Sign1 envelope with a fresh P-256 key, zlib-compressed, base45
//! encoded, and `HC1:` prefixed, together with a trust store that recognizes
//! the signing key.

#![allow(dead_code)]

use std::io::Write;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use minicbor::data::Tag;
use minicbor::Encoder;
use p256::ecdsa::signature::Signer;
use p256::ecdsa::SigningKey;
use p256::pkcs8::EncodePublicKey;

use eudcc::{TrustedKey, TrustedKeyStore};

pub const KID: &[u8] = &[0x53, 0x9b, 0x0a, 0x4c, 0x1f, 0x82, 0xd1, 0x00];
pub const ISSUED_AT: i64 = 1_622_000_000;
pub const EXPIRES_AT: i64 = 1_625_000_000;

/// Event groups a fixture payload can carry.
pub enum Event<'a> {
    Vaccination { product: &'a str },
    Test,
    Recovery,
}

/// Encode a CWT claims payload for the given issuer and event groups.
pub fn build_payload(issuer: &str, events: &[Event<'_>]) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut enc = Encoder::new(&mut buf);

    enc.map(4).unwrap();
    enc.i64(1).unwrap();
    enc.str(issuer).unwrap();
    enc.i64(4).unwrap();
    enc.i64(EXPIRES_AT).unwrap();
    enc.i64(6).unwrap();
    enc.i64(ISSUED_AT).unwrap();
    enc.i64(-260).unwrap();
    enc.map(1).unwrap();
    enc.i64(1).unwrap();

    enc.map(3 + events.len() as u64).unwrap();
    enc.str("ver").unwrap();
    enc.str("1.3.0").unwrap();
    enc.str("nam").unwrap();
    enc.map(2).unwrap();
    enc.str("fn").unwrap();
    enc.str("van der Berg").unwrap();
    enc.str("gn").unwrap();
    enc.str("Maria").unwrap();
    enc.str("dob").unwrap();
    enc.str("1990-01-01").unwrap();

    for event in events {
        match event {
            Event::Vaccination { product } => encode_vaccination(&mut enc, product),
            Event::Test => encode_test(&mut enc),
            Event::Recovery => encode_recovery(&mut enc),
        }
    }

    buf
}

/// A claims payload whose certificate lacks the mandatory `dob` field.
pub fn build_payload_without_dob() -> Vec<u8> {
    let mut buf = Vec::new();
    let mut enc = Encoder::new(&mut buf);

    enc.map(4).unwrap();
    enc.i64(1).unwrap();
    enc.str("NL").unwrap();
    enc.i64(4).unwrap();
    enc.i64(EXPIRES_AT).unwrap();
    enc.i64(6).unwrap();
    enc.i64(ISSUED_AT).unwrap();
    enc.i64(-260).unwrap();
    enc.map(1).unwrap();
    enc.i64(1).unwrap();

    enc.map(2).unwrap();
    enc.str("ver").unwrap();
    enc.str("1.3.0").unwrap();
    enc.str("nam").unwrap();
    enc.map(2).unwrap();
    enc.str("fn").unwrap();
    enc.str("van der Berg").unwrap();
    enc.str("gn").unwrap();
    enc.str("Maria").unwrap();

    buf
}

fn encode_vaccination(enc: &mut Encoder<&mut Vec<u8>>, product: &str) {
    enc.str("v").unwrap();
    enc.array(1).unwrap();
    enc.map(10).unwrap();
    enc.str("tg").unwrap();
    enc.str("840539006").unwrap();
    enc.str("vp").unwrap();
    enc.str("1119349007").unwrap();
    enc.str("mp").unwrap();
    enc.str(product).unwrap();
    enc.str("ma").unwrap();
    enc.str("ORG-100030215").unwrap();
    enc.str("dn").unwrap();
    enc.i64(2).unwrap();
    enc.str("sd").unwrap();
    enc.i64(2).unwrap();
    enc.str("dt").unwrap();
    enc.str("2021-06-11T00:00:00").unwrap();
    enc.str("co").unwrap();
    enc.str("NL").unwrap();
    enc.str("is").unwrap();
    enc.str("Ministry of Health Welfare and Sport").unwrap();
    enc.str("ci").unwrap();
    enc.str("URN:UCI:01:NL:DADFCC47C7334E45A906DB12FD859FB7#1").unwrap();
}

fn encode_test(enc: &mut Encoder<&mut Vec<u8>>) {
    enc.str("t").unwrap();
    enc.array(1).unwrap();
    enc.map(10).unwrap();
    enc.str("tg").unwrap();
    enc.str("840539006").unwrap();
    enc.str("tt").unwrap();
    enc.str("LP217198-3").unwrap();
    enc.str("nm").unwrap();
    enc.str("").unwrap();
    enc.str("ma").unwrap();
    enc.str("1232").unwrap();
    enc.str("sc").unwrap();
    enc.str("2021-05-30T10:30:00Z").unwrap();
    enc.str("tr").unwrap();
    enc.str("260415000").unwrap();
    enc.str("tc").unwrap();
    enc.str("Facility approved by the State of The Netherlands").unwrap();
    enc.str("co").unwrap();
    enc.str("NL").unwrap();
    enc.str("is").unwrap();
    enc.str("Ministry of Health Welfare and Sport").unwrap();
    enc.str("ci").unwrap();
    enc.str("URN:UCI:01:NL:GGD/81AAH16AZ#B").unwrap();
}

fn encode_recovery(enc: &mut Encoder<&mut Vec<u8>>) {
    enc.str("r").unwrap();
    enc.array(1).unwrap();
    enc.map(7).unwrap();
    enc.str("tg").unwrap();
    enc.str("840539006").unwrap();
    enc.str("fr").unwrap();
    enc.str("2021-01-10T00:00:00").unwrap();
    enc.str("co").unwrap();
    enc.str("NL").unwrap();
    enc.str("is").unwrap();
    enc.str("Ministry of Health Welfare and Sport").unwrap();
    enc.str("df").unwrap();
    enc.str("2021-01-25").unwrap();
    enc.str("du").unwrap();
    enc.str("2021-07-10").unwrap();
    enc.str("ci").unwrap();
    enc.str("URN:UCI:01:NL:LSP/REC/1289821#D").unwrap();
}

/// Sign a claims payload into a tagged COSE_Sign1 envelope.
pub fn sign_envelope(payload: &[u8], sk: &SigningKey) -> Vec<u8> {
    let protected = {
        let mut buf = Vec::new();
        let mut enc = Encoder::new(&mut buf);
        enc.map(2).unwrap();
        enc.i64(1).unwrap();
        enc.i64(-7).unwrap();
        enc.i64(4).unwrap();
        enc.bytes(KID).unwrap();
        buf
    };

    let sig_structure = {
        let mut out = Vec::new();
        let mut enc = Encoder::new(&mut out);
        enc.array(4).unwrap();
        enc.str("Signature1").unwrap();
        enc.bytes(&protected).unwrap();
        enc.bytes(&[]).unwrap();
        enc.bytes(payload).unwrap();
        out
    };
    let sig: p256::ecdsa::Signature = sk.sign(&sig_structure);

    let mut out = Vec::new();
    let mut enc = Encoder::new(&mut out);
    enc.tag(Tag::new(18)).unwrap();
    enc.array(4).unwrap();
    enc.bytes(&protected).unwrap();
    enc.map(0).unwrap();
    enc.bytes(payload).unwrap();
    enc.bytes(sig.to_bytes().as_slice()).unwrap();
    out
}

/// Compress, base45-encode, and prefix an envelope into scanner output.
pub fn to_scan_string(envelope: &[u8]) -> String {
    let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
    enc.write_all(envelope).expect("compress");
    let compressed = enc.finish().expect("finish");
    format!("HC1:{}", eudcc_common::transport::base45_encode(&compressed))
}

/// Base45-encode and prefix an envelope without the zlib layer.
pub fn to_scan_string_uncompressed(envelope: &[u8]) -> String {
    format!("HC1:{}", eudcc_common::transport::base45_encode(envelope))
}

/// A trust store that recognizes `sk` under [`KID`].
pub fn store_for(sk: &SigningKey) -> TrustedKeyStore {
    let spki_der = sk
        .verifying_key()
        .to_public_key_der()
        .expect("SPKI DER")
        .as_bytes()
        .to_vec();

    let mut store = TrustedKeyStore::new();
    store.insert(STANDARD.encode(KID), TrustedKey::new(STANDARD.encode(spki_der)));
    store
}

pub fn random_signing_key() -> SigningKey {
    SigningKey::random(&mut p256::elliptic_curve::rand_core::OsRng)
}
