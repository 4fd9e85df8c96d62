// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Transport decoding for scanned certificate text.
//!
//! A scanned QR payload is `"HC1"` (optionally followed by `":"`), then the
//! base45 encoding (RFC 9285) of a COSE_Sign1 byte string that producers
//! usually, but not always, wrap in a zlib deflate stream.

use std::io::Read;

use flate2::read::ZlibDecoder;

/// Context marker prepended by certificate producers.
const HC1_PREFIX: &str = "HC1";

/// First byte of a zlib stream header; anything else is passed through raw.
const ZLIB_HEADER_BYTE: u8 = 0x78;

/// The 45-symbol alphabet of RFC 9285, indexed by digit value.
const BASE45_ALPHABET: &[u8; 45] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid base45: {0}")]
    InvalidBase45(String),

    #[error("inflate failed: {0}")]
    InflateFailed(String),
}

/// Turn scanned text into raw COSE_Sign1 envelope bytes.
///
/// Accepts `HC1:` and `HC1` prefixed input as well as bare base45 text; both
/// prefixed forms occur in the wild. The zlib layer is detected from the first
/// decoded byte, so uncompressed producers are handled transparently.
pub fn decode_transport(raw: &str) -> Result<Vec<u8>, TransportError> {
    let mut data = raw;
    if let Some(rest) = data.strip_prefix(HC1_PREFIX) {
        data = rest.strip_prefix(':').unwrap_or(rest);
    }

    let decoded = base45_decode(data)?;

    if decoded.first() == Some(&ZLIB_HEADER_BYTE) {
        let mut inflated = Vec::new();
        ZlibDecoder::new(decoded.as_slice())
            .read_to_end(&mut inflated)
            .map_err(|e| TransportError::InflateFailed(e.to_string()))?;
        Ok(inflated)
    } else {
        Ok(decoded)
    }
}

/// Decode base45 text (RFC 9285).
///
/// Three symbols decode to two bytes, a trailing pair decodes to one byte, and
/// a trailing single symbol is malformed.
pub fn base45_decode(input: &str) -> Result<Vec<u8>, TransportError> {
    let symbols = input.as_bytes();
    if symbols.len() % 3 == 1 {
        return Err(TransportError::InvalidBase45(
            "trailing single symbol".to_string(),
        ));
    }

    let mut out = Vec::with_capacity(symbols.len() / 3 * 2 + 1);
    for group in symbols.chunks(3) {
        let mut digits = [0u32; 3];
        for (i, &symbol) in group.iter().enumerate() {
            digits[i] = digit_value(symbol).ok_or_else(|| {
                TransportError::InvalidBase45(format!(
                    "symbol {:?} is not in the base45 alphabet",
                    symbol as char
                ))
            })?;
        }

        if group.len() == 3 {
            let n = digits[0] + digits[1] * 45 + digits[2] * 45 * 45;
            if n > u32::from(u16::MAX) {
                return Err(TransportError::InvalidBase45(
                    "three-symbol group exceeds two bytes".to_string(),
                ));
            }
            out.push((n >> 8) as u8);
            out.push((n & 0xff) as u8);
        } else {
            let n = digits[0] + digits[1] * 45;
            if n > u32::from(u8::MAX) {
                return Err(TransportError::InvalidBase45(
                    "two-symbol group exceeds one byte".to_string(),
                ));
            }
            out.push(n as u8);
        }
    }

    Ok(out)
}

/// Encode bytes as base45 text (RFC 9285).
///
/// The inverse of [`base45_decode`]; used to build scannable payloads and test
/// fixtures.
pub fn base45_encode(input: &[u8]) -> String {
    let mut out = String::with_capacity(input.len() / 2 * 3 + 2);
    for pair in input.chunks(2) {
        if pair.len() == 2 {
            let n = u32::from(pair[0]) << 8 | u32::from(pair[1]);
            out.push(BASE45_ALPHABET[(n % 45) as usize] as char);
            out.push(BASE45_ALPHABET[(n / 45 % 45) as usize] as char);
            out.push(BASE45_ALPHABET[(n / (45 * 45)) as usize] as char);
        } else {
            let n = u32::from(pair[0]);
            out.push(BASE45_ALPHABET[(n % 45) as usize] as char);
            out.push(BASE45_ALPHABET[(n / 45) as usize] as char);
        }
    }
    out
}

fn digit_value(symbol: u8) -> Option<u32> {
    BASE45_ALPHABET
        .iter()
        .position(|&c| c == symbol)
        .map(|i| i as u32)
}
