// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Decode a scanned certificate string against a trust-store document.
//!
//! Usage: decode_qr <public_keys.json> <scanned-text>
//!
//! The first argument is a registry document of the shape
//! `{ "eu_keys": { <kid-base64>: [ { "subjectPk": ... } ] } }`; the second is
//! the text a QR scanner produced (`HC1:...`).

use std::{env, fs, process};

use eudcc::{decode_certificate, TrustedKeyStore};

fn main() {
    let mut args = env::args().skip(1);
    let (Some(store_path), Some(scanned)) = (args.next(), args.next()) else {
        eprintln!("usage: decode_qr <public_keys.json> <scanned-text>");
        process::exit(2);
    };

    let document = fs::read_to_string(&store_path).unwrap_or_else(|e| {
        eprintln!("cannot read {store_path}: {e}");
        process::exit(2);
    });
    let store = TrustedKeyStore::from_json_str(&document).unwrap_or_else(|e| {
        eprintln!("malformed trust store document: {e}");
        process::exit(2);
    });

    match decode_certificate(&scanned, &store) {
        Ok(certificate) => {
            let json = serde_json::to_string_pretty(&certificate).expect("serializable result");
            println!("{json}");
        }
        Err(e) => {
            eprintln!("could not read code: {e}");
            process::exit(1);
        }
    }
}
