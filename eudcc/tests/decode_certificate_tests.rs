// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! End-to-end decode pipeline tests over real signed payloads.

mod common;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use common::{
    build_payload, build_payload_without_dob, random_signing_key, sign_envelope, store_for,
    to_scan_string, to_scan_string_uncompressed, Event, EXPIRES_AT, ISSUED_AT, KID,
};
use eudcc::{decode_certificate, DecodeError, TrustedKeyStore};
use p256::pkcs8::EncodePublicKey;

#[test]
fn decodes_and_validates_a_vaccination_certificate() {
    let sk = random_signing_key();
    let payload = build_payload("NL", &[Event::Vaccination { product: "EU/1/20/1528" }]);
    let scan = to_scan_string(&sign_envelope(&payload, &sk));

    let cert = decode_certificate(&scan, &store_for(&sk)).expect("decode");

    assert!(cert.valid);
    assert_eq!(cert.issuer, "Netherlands");
    assert_eq!(cert.issued_at, ISSUED_AT);
    assert_eq!(cert.expires_at, EXPIRES_AT);
    assert_eq!(cert.version, "1.3.0");
    assert_eq!(cert.given_name, "Maria");
    assert_eq!(cert.family_name, "van der Berg");
    assert_eq!(cert.date_of_birth, "1990-01-01");

    let vaccination = cert.vaccination.expect("vaccination group");
    assert_eq!(vaccination.disease, "COVID-19");
    assert_eq!(vaccination.vaccine_type, "SARS-CoV-2 mRNA vaccine");
    assert_eq!(vaccination.vaccine_product, "Comirnaty");
    assert_eq!(vaccination.vaccine_manufacturer, "Biontech Manufacturing GmbH");
    assert_eq!(vaccination.doses, "2 of 2");
    assert_eq!(vaccination.date, "2021-06-11");
    assert_eq!(vaccination.country, "Netherlands");
    assert!(cert.test.is_none());
    assert!(cert.recovery.is_none());
}

#[test]
fn empty_trust_store_yields_invalid_with_full_claims() {
    let sk = random_signing_key();
    let payload = build_payload("NL", &[Event::Vaccination { product: "EU/1/20/1528" }]);
    let scan = to_scan_string(&sign_envelope(&payload, &sk));

    let cert = decode_certificate(&scan, &TrustedKeyStore::new()).expect("decode");

    assert!(!cert.valid);
    assert_eq!(cert.given_name, "Maria");
    assert_eq!(
        cert.vaccination.expect("vaccination group").vaccine_product,
        "Comirnaty"
    );
}

#[test]
fn unknown_vaccine_product_code_passes_through() {
    let sk = random_signing_key();
    let payload = build_payload("NL", &[Event::Vaccination { product: "XYZ-999" }]);
    let scan = to_scan_string(&sign_envelope(&payload, &sk));

    let cert = decode_certificate(&scan, &store_for(&sk)).expect("decode");
    assert_eq!(cert.vaccination.expect("vaccination group").vaccine_product, "XYZ-999");
}

#[test]
fn unknown_issuer_country_code_passes_through() {
    let sk = random_signing_key();
    let payload = build_payload("XX", &[]);
    let scan = to_scan_string(&sign_envelope(&payload, &sk));

    let cert = decode_certificate(&scan, &store_for(&sk)).expect("decode");
    assert_eq!(cert.issuer, "XX");
}

#[test]
fn tampered_payload_invalidates_but_still_maps_claims() {
    let sk = random_signing_key();
    let payload = build_payload("NL", &[Event::Vaccination { product: "EU/1/20/1528" }]);
    let mut envelope = sign_envelope(&payload, &sk);

    // Flip a byte inside the embedded given name, keeping the CBOR valid.
    let at = envelope
        .windows(5)
        .position(|w| w == b"Maria")
        .expect("name bytes");
    envelope[at] = b'N';

    let cert = decode_certificate(&to_scan_string(&envelope), &store_for(&sk)).expect("decode");
    assert!(!cert.valid);
    assert_eq!(cert.given_name, "Naria");
    assert_eq!(cert.family_name, "van der Berg");
}

#[test]
fn uncompressed_envelope_decodes_without_inflation() {
    let sk = random_signing_key();
    let payload = build_payload("NL", &[Event::Vaccination { product: "EU/1/20/1528" }]);
    let scan = to_scan_string_uncompressed(&sign_envelope(&payload, &sk));

    let cert = decode_certificate(&scan, &store_for(&sk)).expect("decode");
    assert!(cert.valid);
    assert_eq!(cert.given_name, "Maria");
}

#[test]
fn decoding_is_idempotent() {
    let sk = random_signing_key();
    let payload = build_payload("NL", &[Event::Test]);
    let scan = to_scan_string(&sign_envelope(&payload, &sk));
    let store = store_for(&sk);

    let first = decode_certificate(&scan, &store).expect("decode");
    let second = decode_certificate(&scan, &store).expect("decode");
    assert_eq!(first, second);
}

#[test]
fn decodes_a_test_certificate() {
    let sk = random_signing_key();
    let payload = build_payload("NL", &[Event::Test]);
    let scan = to_scan_string(&sign_envelope(&payload, &sk));

    let cert = decode_certificate(&scan, &store_for(&sk)).expect("decode");
    let test = cert.test.expect("test group");

    assert_eq!(test.disease, "COVID-19");
    assert_eq!(test.test_type, "Rapid immunoassay");
    assert_eq!(test.test_name, "");
    assert_eq!(
        test.test_manufacturer,
        "Abbott Rapid Diagnostics, Panbio COVID-19 Ag Rapid Test"
    );
    assert_eq!(test.test_date, "2021-05-30 10:30:00+00");
    assert_eq!(test.test_result, "Not detected");
    assert_eq!(test.country, "Netherlands");
}

#[test]
fn decodes_a_recovery_certificate() {
    let sk = random_signing_key();
    let payload = build_payload("NL", &[Event::Recovery]);
    let scan = to_scan_string(&sign_envelope(&payload, &sk));

    let cert = decode_certificate(&scan, &store_for(&sk)).expect("decode");
    let recovery = cert.recovery.expect("recovery group");

    assert_eq!(recovery.disease, "COVID-19");
    assert_eq!(recovery.first_positive_test, "2021-01-10");
    assert_eq!(recovery.valid_from, "2021-01-25");
    assert_eq!(recovery.valid_until, "2021-07-10");
    assert_eq!(recovery.country, "Netherlands");
}

#[test]
fn multiple_event_groups_map_independently() {
    let sk = random_signing_key();
    let payload = build_payload(
        "NL",
        &[Event::Vaccination { product: "EU/1/20/1507" }, Event::Test],
    );
    let scan = to_scan_string(&sign_envelope(&payload, &sk));

    let cert = decode_certificate(&scan, &store_for(&sk)).expect("decode");
    assert_eq!(
        cert.vaccination.expect("vaccination group").vaccine_product,
        "COVID-19 Vaccine Moderna"
    );
    assert!(cert.test.is_some());
    assert!(cert.recovery.is_none());
}

#[test]
fn expiry_is_a_display_attribute_independent_of_validity() {
    let sk = random_signing_key();
    let payload = build_payload("NL", &[]);
    let scan = to_scan_string(&sign_envelope(&payload, &sk));

    let cert = decode_certificate(&scan, &store_for(&sk)).expect("decode");
    assert!(cert.valid);
    assert!(!cert.is_expired_at(EXPIRES_AT - 1));
    assert!(cert.is_expired_at(EXPIRES_AT + 1));
}

#[test]
fn malformed_base45_is_a_transport_error() {
    let err = decode_certificate("HC1:~~~", &TrustedKeyStore::new()).unwrap_err();
    assert!(matches!(err, DecodeError::Transport(_)), "{err}");
}

#[test]
fn missing_mandatory_field_is_a_mapping_error() {
    let sk = random_signing_key();
    let scan = to_scan_string(&sign_envelope(&build_payload_without_dob(), &sk));

    let err = decode_certificate(&scan, &store_for(&sk)).unwrap_err();
    assert!(matches!(err, DecodeError::Mapping(_)), "{err}");
    assert!(err.to_string().contains("dob"), "{err}");
}

#[test]
fn trust_store_loads_from_registry_document() {
    let sk = random_signing_key();
    let spki_b64 = STANDARD.encode(
        sk.verifying_key()
            .to_public_key_der()
            .expect("SPKI DER")
            .as_bytes(),
    );
    let document = format!(
        r#"{{ "eu_keys": {{ "{}": [ {{ "subjectPk": "{}", "keyUsage": ["v", "t", "r"] }} ] }} }}"#,
        STANDARD.encode(KID),
        spki_b64
    );
    let store = TrustedKeyStore::from_json_str(&document).expect("parse document");

    let payload = build_payload("NL", &[Event::Vaccination { product: "EU/1/20/1528" }]);
    let scan = to_scan_string(&sign_envelope(&payload, &sk));

    let cert = decode_certificate(&scan, &store).expect("decode");
    assert!(cert.valid);
}

#[test]
fn result_serializes_with_upstream_field_names() {
    let sk = random_signing_key();
    let payload = build_payload("NL", &[Event::Vaccination { product: "EU/1/20/1528" }]);
    let scan = to_scan_string(&sign_envelope(&payload, &sk));

    let cert = decode_certificate(&scan, &store_for(&sk)).expect("decode");
    let json = serde_json::to_value(&cert).expect("serialize");

    assert_eq!(json["givenName"], "Maria");
    assert_eq!(json["issuedAt"], ISSUED_AT);
    assert_eq!(json["vaccination"]["vaccineProduct"], "Comirnaty");
    assert!(json.get("test").is_none());
}
