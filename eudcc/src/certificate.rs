// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The public certificate result and the claims-to-display mapping.

use serde::Serialize;

use crate::claims::{
    decode_claims, CwtClaims, MappingError, RecoveryEntry, TestEntry, VaccinationEntry,
};
use crate::valuesets;

/// The decoded, display-ready certificate.
///
/// `valid` reflects signature authenticity only. Expiration is a separate
/// display attribute (see [`DecodedCertificate::is_expired_at`]) and never
/// folds into `valid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedCertificate {
    pub valid: bool,
    pub issuer: String,
    /// Seconds since epoch.
    pub issued_at: i64,
    /// Seconds since epoch.
    pub expires_at: i64,
    pub version: String,
    pub given_name: String,
    pub family_name: String,
    pub date_of_birth: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vaccination: Option<VaccinationDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<TestDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery: Option<RecoveryDetails>,
}

impl DecodedCertificate {
    /// Whether the certificate is past its expiration at the given time
    /// (seconds since epoch). Independent of `valid`.
    pub fn is_expired_at(&self, unix_secs: i64) -> bool {
        self.expires_at < unix_secs
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccinationDetails {
    pub disease: String,
    pub vaccine_type: String,
    pub vaccine_product: String,
    pub vaccine_manufacturer: String,
    /// Rendered as `"{dose} of {total}"`.
    pub doses: String,
    pub date: String,
    pub country: String,
    pub issuer: String,
    pub certificate_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestDetails {
    pub disease: String,
    pub test_type: String,
    pub test_name: String,
    pub test_manufacturer: String,
    pub test_date: String,
    pub test_result: String,
    pub test_center: String,
    pub country: String,
    pub issuer: String,
    pub certificate_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryDetails {
    pub disease: String,
    pub first_positive_test: String,
    pub country: String,
    pub issuer: String,
    pub valid_from: String,
    pub valid_until: String,
    pub certificate_id: String,
}

/// Decode payload bytes and translate coded values into display names.
///
/// `valid` is the verdict already computed by signature verification; it is
/// carried into the result unchanged, so claims still map for an envelope
/// that failed to authenticate.
pub fn map_claims(payload: &[u8], valid: bool) -> Result<DecodedCertificate, MappingError> {
    let claims = decode_claims(payload)?;
    Ok(from_claims(claims, valid))
}

fn from_claims(claims: CwtClaims, valid: bool) -> DecodedCertificate {
    let certificate = claims.certificate;
    DecodedCertificate {
        valid,
        issuer: display(claims.issuer_country, valuesets::country_name),
        issued_at: claims.issued_at,
        expires_at: claims.expires_at,
        version: certificate.version,
        given_name: certificate.name.given_name,
        family_name: certificate.name.family_name,
        date_of_birth: date_only(certificate.date_of_birth),
        vaccination: certificate.vaccination.map(map_vaccination),
        test: certificate.test.map(map_test),
        recovery: certificate.recovery.map(map_recovery),
    }
}

fn map_vaccination(entry: VaccinationEntry) -> VaccinationDetails {
    VaccinationDetails {
        disease: display(entry.disease, valuesets::disease_name),
        vaccine_type: display(entry.vaccine_type, valuesets::vaccine_type_name),
        vaccine_product: display(entry.product, valuesets::vaccine_product_name),
        vaccine_manufacturer: display(entry.manufacturer, valuesets::vaccine_manufacturer_name),
        doses: format!("{} of {}", entry.dose_number, entry.total_doses),
        date: date_only(entry.date),
        country: display(entry.country, valuesets::country_name),
        issuer: entry.issuer,
        certificate_id: entry.certificate_id,
    }
}

fn map_test(entry: TestEntry) -> TestDetails {
    TestDetails {
        disease: display(entry.disease, valuesets::disease_name),
        test_type: display(entry.test_type, valuesets::test_type_name),
        test_name: entry.name,
        test_manufacturer: display(entry.manufacturer, valuesets::test_device_name),
        test_date: test_timestamp(&entry.sample_collected_at),
        test_result: display(entry.result, valuesets::test_result_name),
        test_center: entry.test_center,
        country: display(entry.country, valuesets::country_name),
        issuer: entry.issuer,
        certificate_id: entry.certificate_id,
    }
}

fn map_recovery(entry: RecoveryEntry) -> RecoveryDetails {
    RecoveryDetails {
        disease: display(entry.disease, valuesets::disease_name),
        first_positive_test: date_only(entry.first_positive_test),
        country: display(entry.country, valuesets::country_name),
        issuer: entry.issuer,
        valid_from: date_only(entry.valid_from),
        valid_until: date_only(entry.valid_until),
        certificate_id: entry.certificate_id,
    }
}

/// Translate a code through a vocabulary table; unknown codes pass through.
fn display(code: String, lookup: fn(&str) -> Option<&'static str>) -> String {
    match lookup(&code) {
        Some(name) => name.to_string(),
        None => code,
    }
}

/// Keep the date portion of an ISO 8601 value, discarding any time component.
fn date_only(value: String) -> String {
    match value.split_once('T') {
        Some((date, _)) => date.to_string(),
        None => value,
    }
}

/// Keep the full timestamp of a test sample, in the display form used
/// upstream: `T` becomes a space and a literal `Z` suffix becomes `+00`.
fn test_timestamp(value: &str) -> String {
    value.replacen('T', " ", 1).replacen('Z', "+00", 1)
}
