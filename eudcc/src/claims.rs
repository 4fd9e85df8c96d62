// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Typed decoding of the CWT claims payload.
//!
//! The payload is a CWT claims map keyed by small integers, with the health
//! certificate itself nested under claim -260 / key 1 as a text-keyed map.
//! This module replaces dynamic map lookups with typed structures whose
//! optional/required status is explicit; translation of coded values into
//! display names happens later, in [`crate::certificate`].

use eudcc_common::{CborMap, CborValue};

pub const CWT_CLAIM_ISSUER: i64 = 1;
pub const CWT_CLAIM_EXPIRES_AT: i64 = 4;
pub const CWT_CLAIM_ISSUED_AT: i64 = 6;
pub const CWT_CLAIM_HCERT: i64 = -260;

/// Key of the EU DCC schema inside the -260 health-certificate container.
pub const HCERT_KEY_EUDCC: i64 = 1;

#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error("payload is not a well-formed claims map: {0}")]
    MalformedPayload(String),

    #[error("missing mandatory field: {0}")]
    MissingMandatoryField(&'static str),
}

/// The decoded CWT claims of one certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CwtClaims {
    /// ISO 3166-1 alpha-2 code of the issuing country (claim 1).
    pub issuer_country: String,
    /// Seconds since epoch (claim 6).
    pub issued_at: i64,
    /// Seconds since epoch (claim 4).
    pub expires_at: i64,
    pub certificate: HealthCertificate,
}

/// The health certificate nested under claim -260 / key 1.
///
/// A well-formed certificate carries at most one of the three event groups,
/// but the decoder does not enforce exclusivity; each present group is
/// decoded independently. Only the first entry of a group's list is
/// consulted, and additional entries are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthCertificate {
    pub version: String,
    pub name: PersonName,
    /// Date portion only; a time component in the encoded value is discarded.
    pub date_of_birth: String,
    pub vaccination: Option<VaccinationEntry>,
    pub test: Option<TestEntry>,
    pub recovery: Option<RecoveryEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    pub family_name: String,
    pub given_name: String,
}

/// One vaccination event, fields still as coded values.
///
/// Code fields absent from the entry decode as empty strings; the dose
/// counters default to zero. Only the event date is mandatory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaccinationEntry {
    pub disease: String,
    pub vaccine_type: String,
    pub product: String,
    pub manufacturer: String,
    pub dose_number: i64,
    pub total_doses: i64,
    pub date: String,
    pub country: String,
    pub issuer: String,
    pub certificate_id: String,
}

/// One test event, fields still as coded values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestEntry {
    pub disease: String,
    pub test_type: String,
    pub name: String,
    pub manufacturer: String,
    pub sample_collected_at: String,
    pub result: String,
    pub test_center: String,
    pub country: String,
    pub issuer: String,
    pub certificate_id: String,
}

/// One recovery event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveryEntry {
    pub disease: String,
    pub first_positive_test: String,
    pub country: String,
    pub issuer: String,
    pub valid_from: String,
    pub valid_until: String,
    pub certificate_id: String,
}

/// Decode raw payload bytes into typed claims.
///
/// Fails only on a structurally unusable payload: not a CBOR claims map, or
/// a mandatory identity/date field absent. Missing optional groups and
/// unknown extra fields are not errors.
pub fn decode_claims(payload: &[u8]) -> Result<CwtClaims, MappingError> {
    let claims = CborMap::from_cbor(payload).map_err(MappingError::MalformedPayload)?;

    let issuer_country = claims
        .get_str(CWT_CLAIM_ISSUER)
        .ok_or(MappingError::MissingMandatoryField("issuer country (claim 1)"))?
        .to_string();
    let expires_at = claims
        .get_i64(CWT_CLAIM_EXPIRES_AT)
        .ok_or(MappingError::MissingMandatoryField("expiration (claim 4)"))?;
    let issued_at = claims
        .get_i64(CWT_CLAIM_ISSUED_AT)
        .ok_or(MappingError::MissingMandatoryField("issued-at (claim 6)"))?;

    let container = claims
        .get_map(CWT_CLAIM_HCERT)
        .ok_or(MappingError::MissingMandatoryField("health certificate (claim -260)"))?;
    let certificate = container
        .get_map(HCERT_KEY_EUDCC)
        .ok_or(MappingError::MissingMandatoryField("EU DCC (claim -260, key 1)"))?;

    Ok(CwtClaims {
        issuer_country,
        issued_at,
        expires_at,
        certificate: decode_certificate_map(certificate)?,
    })
}

fn decode_certificate_map(cert: &CborMap) -> Result<HealthCertificate, MappingError> {
    let version = cert
        .field_str("ver")
        .ok_or(MappingError::MissingMandatoryField("ver"))?
        .to_string();

    let name = cert
        .field_map("nam")
        .ok_or(MappingError::MissingMandatoryField("nam"))?;
    let family_name = name
        .field_str("fn")
        .ok_or(MappingError::MissingMandatoryField("nam.fn"))?
        .to_string();
    let given_name = name
        .field_str("gn")
        .ok_or(MappingError::MissingMandatoryField("nam.gn"))?
        .to_string();

    let date_of_birth = cert
        .field_str("dob")
        .ok_or(MappingError::MissingMandatoryField("dob"))?
        .to_string();

    Ok(HealthCertificate {
        version,
        name: PersonName {
            family_name,
            given_name,
        },
        date_of_birth,
        vaccination: first_entry(cert, "v")?.map(decode_vaccination).transpose()?,
        test: first_entry(cert, "t")?.map(decode_test).transpose()?,
        recovery: first_entry(cert, "r")?.map(decode_recovery).transpose()?,
    })
}

/// The first entry of an event group, if the group is present as a non-empty
/// array. A group present under a non-array shape is treated as absent; an
/// array entry that is not a map is malformed.
fn first_entry<'a>(cert: &'a CborMap, group: &'static str) -> Result<Option<&'a CborMap>, MappingError> {
    let Some(entries) = cert.field_array(group) else {
        return Ok(None);
    };
    match entries.first() {
        None => Ok(None),
        Some(CborValue::Map(entry)) => Ok(Some(entry)),
        Some(_) => Err(MappingError::MalformedPayload(format!(
            "first entry of group {group:?} is not a map"
        ))),
    }
}

fn text_or_default(entry: &CborMap, field: &str) -> String {
    entry.field_str(field).unwrap_or_default().to_string()
}

fn required_text(
    entry: &CborMap,
    field: &str,
    label: &'static str,
) -> Result<String, MappingError> {
    entry
        .field_str(field)
        .map(str::to_string)
        .ok_or(MappingError::MissingMandatoryField(label))
}

fn decode_vaccination(entry: &CborMap) -> Result<VaccinationEntry, MappingError> {
    Ok(VaccinationEntry {
        disease: text_or_default(entry, "tg"),
        vaccine_type: text_or_default(entry, "vp"),
        product: text_or_default(entry, "mp"),
        manufacturer: text_or_default(entry, "ma"),
        dose_number: entry.field_i64("dn").unwrap_or(0),
        total_doses: entry.field_i64("sd").unwrap_or(0),
        date: required_text(entry, "dt", "v[0].dt")?,
        country: text_or_default(entry, "co"),
        issuer: text_or_default(entry, "is"),
        certificate_id: text_or_default(entry, "ci"),
    })
}

fn decode_test(entry: &CborMap) -> Result<TestEntry, MappingError> {
    Ok(TestEntry {
        disease: text_or_default(entry, "tg"),
        test_type: text_or_default(entry, "tt"),
        name: text_or_default(entry, "nm"),
        manufacturer: text_or_default(entry, "ma"),
        sample_collected_at: required_text(entry, "sc", "t[0].sc")?,
        result: text_or_default(entry, "tr"),
        test_center: text_or_default(entry, "tc"),
        country: text_or_default(entry, "co"),
        issuer: text_or_default(entry, "is"),
        certificate_id: text_or_default(entry, "ci"),
    })
}

fn decode_recovery(entry: &CborMap) -> Result<RecoveryEntry, MappingError> {
    Ok(RecoveryEntry {
        disease: text_or_default(entry, "tg"),
        first_positive_test: required_text(entry, "fr", "r[0].fr")?,
        country: text_or_default(entry, "co"),
        issuer: text_or_default(entry, "is"),
        valid_from: required_text(entry, "df", "r[0].df")?,
        valid_until: required_text(entry, "du", "r[0].du")?,
        certificate_id: text_or_default(entry, "ci"),
    })
}
