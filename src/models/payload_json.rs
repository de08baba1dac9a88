//! Serde adapter encoding payload bytes as base64 strings, the JSON
//! representation of protobuf `bytes` fields.
//!
//! Encoding always uses padded standard base64. Decoding also accepts the
//! URL-safe alphabet and unpadded input.

use base64::{
    engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD},
    Engine as _,
};
use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

use crate::cache::Payload;

pub fn serialize<S>(payload: &Payload, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&STANDARD.encode(payload))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Payload, D::Error>
where
    D: Deserializer<'de>,
{
    let encoded = String::deserialize(deserializer)?;
    decode(&encoded)
        .map(Payload::from)
        .map_err(|e| D::Error::custom(format!("invalid base64 value: {}", e)))
}

fn decode(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(encoded).or_else(|err| {
        [URL_SAFE, STANDARD_NO_PAD, URL_SAFE_NO_PAD]
            .iter()
            .find_map(|engine| engine.decode(encoded).ok())
            .ok_or(err)
    })
}
