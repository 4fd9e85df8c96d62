use std::collections::BTreeMap;

use minicbor::data::Type;
use minicbor::Decoder;

/// CBOR map key. COSE headers use integer labels; the health-certificate
/// container nested in the CWT payload uses text keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum MapKey {
    Int(i64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CborValue {
    Int(i64),
    Bytes(Vec<u8>),
    Text(String),
    Array(Vec<CborValue>),
    Map(CborMap),
    Bool(bool),
    Null,
}

/// A decoded CBOR map with typed accessors for the handful of shapes the
/// certificate pipeline reads: integer-labelled COSE header maps and CWT
/// claims, and the text-keyed health-certificate entries nested inside them.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CborMap {
    entries: BTreeMap<MapKey, CborValue>,
}

impl CborMap {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get_i64(&self, label: i64) -> Option<i64> {
        match self.entries.get(&MapKey::Int(label)) {
            Some(CborValue::Int(i)) => Some(*i),
            _ => None,
        }
    }

    pub fn get_bytes(&self, label: i64) -> Option<&[u8]> {
        match self.entries.get(&MapKey::Int(label)) {
            Some(CborValue::Bytes(b)) => Some(b.as_slice()),
            _ => None,
        }
    }

    pub fn get_str(&self, label: i64) -> Option<&str> {
        match self.entries.get(&MapKey::Int(label)) {
            Some(CborValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn get_map(&self, label: i64) -> Option<&CborMap> {
        match self.entries.get(&MapKey::Int(label)) {
            Some(CborValue::Map(m)) => Some(m),
            _ => None,
        }
    }

    pub fn field_str(&self, name: &str) -> Option<&str> {
        match self.entries.get(&MapKey::Text(name.to_string())) {
            Some(CborValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn field_i64(&self, name: &str) -> Option<i64> {
        match self.entries.get(&MapKey::Text(name.to_string())) {
            Some(CborValue::Int(i)) => Some(*i),
            _ => None,
        }
    }

    pub fn field_map(&self, name: &str) -> Option<&CborMap> {
        match self.entries.get(&MapKey::Text(name.to_string())) {
            Some(CborValue::Map(m)) => Some(m),
            _ => None,
        }
    }

    pub fn field_array(&self, name: &str) -> Option<&[CborValue]> {
        match self.entries.get(&MapKey::Text(name.to_string())) {
            Some(CborValue::Array(a)) => Some(a.as_slice()),
            _ => None,
        }
    }

    /// Decode a complete CBOR item as a map.
    ///
    /// An empty byte string decodes to an empty map, matching the COSE
    /// convention for empty protected headers. Trailing bytes are rejected.
    pub fn from_cbor(bytes: &[u8]) -> Result<Self, String> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }

        let mut dec = Decoder::new(bytes);
        let map = Self::from_decoder(&mut dec)?;

        if dec.position() != bytes.len() {
            return Err("trailing bytes after map".to_string());
        }

        Ok(map)
    }

    /// Decode a map at the decoder's current position.
    pub fn from_decoder(dec: &mut Decoder<'_>) -> Result<Self, String> {
        let len = dec
            .map()
            .map_err(|e| format!("failed to read map: {e}"))?
            .ok_or_else(|| "indefinite-length maps are not supported".to_string())?;

        let mut entries = BTreeMap::new();
        for _ in 0..len {
            let key = decode_key(dec)?;
            let value = decode_value(dec)?;
            entries.insert(key, value);
        }

        Ok(Self { entries })
    }
}

fn decode_key(dec: &mut Decoder<'_>) -> Result<MapKey, String> {
    match dec.datatype().map_err(|e| e.to_string())? {
        Type::I8
        | Type::I16
        | Type::I32
        | Type::I64
        | Type::Int
        | Type::U8
        | Type::U16
        | Type::U32
        | Type::U64 => {
            let i = dec
                .i64()
                .map_err(|e| format!("failed to decode int map key: {e}"))?;
            Ok(MapKey::Int(i))
        }
        Type::String => {
            let s = dec
                .str()
                .map_err(|e| format!("failed to decode text map key: {e}"))?;
            Ok(MapKey::Text(s.to_string()))
        }
        other => Err(format!("unsupported map key type: {other:?}")),
    }
}

fn decode_value(dec: &mut Decoder<'_>) -> Result<CborValue, String> {
    match dec.datatype().map_err(|e| e.to_string())? {
        Type::Null => {
            dec.null().map_err(|e| e.to_string())?;
            Ok(CborValue::Null)
        }
        Type::Bool => {
            let b = dec.bool().map_err(|e| e.to_string())?;
            Ok(CborValue::Bool(b))
        }
        Type::Bytes => {
            let b = dec.bytes().map_err(|e| e.to_string())?;
            Ok(CborValue::Bytes(b.to_vec()))
        }
        Type::String => {
            let s = dec.str().map_err(|e| e.to_string())?;
            Ok(CborValue::Text(s.to_string()))
        }
        Type::I8
        | Type::I16
        | Type::I32
        | Type::I64
        | Type::Int
        | Type::U8
        | Type::U16
        | Type::U32
        | Type::U64 => {
            let i = dec.i64().map_err(|e| e.to_string())?;
            Ok(CborValue::Int(i))
        }
        Type::Array => {
            let len = dec
                .array()
                .map_err(|e| format!("failed to read array: {e}"))?
                .ok_or_else(|| "indefinite-length arrays are not supported".to_string())?;
            let mut out = Vec::with_capacity(len as usize);
            for _ in 0..len {
                out.push(decode_value(dec)?);
            }
            Ok(CborValue::Array(out))
        }
        Type::Map => {
            let map = CborMap::from_decoder(dec)?;
            Ok(CborValue::Map(map))
        }
        other => Err(format!("unsupported map value type: {other:?}")),
    }
}
