//! Variable-length binary data as `0x`-prefixed hex.

use std::fmt;

use ckb_wallet_types::Bytes;
use faster_hex::{hex_decode, hex_encode};

/// Variable-length binary data serialized as a `0x`-prefixed hex string.
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct JsonBytes(Bytes);

impl JsonBytes {
    /// Wraps owned bytes.
    pub fn from_bytes(bytes: Bytes) -> Self {
        JsonBytes(bytes)
    }

    /// Wraps a plain vector.
    pub fn from_vec(vec: Vec<u8>) -> Self {
        JsonBytes(Bytes::from(vec))
    }

    /// Unwraps to owned bytes.
    pub fn into_bytes(self) -> Bytes {
        self.0
    }

    /// The byte length.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are zero bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A view of the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Bytes> for JsonBytes {
    fn from(bytes: Bytes) -> Self {
        JsonBytes::from_bytes(bytes)
    }
}

impl From<JsonBytes> for Bytes {
    fn from(json: JsonBytes) -> Self {
        json.into_bytes()
    }
}

struct BytesVisitor;

impl serde::de::Visitor<'_> for BytesVisitor {
    type Value = JsonBytes;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a 0x-prefixed hex string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        if v.len() < 2 || &v[0..2] != "0x" || v.len() & 1 != 0 {
            return Err(E::invalid_value(serde::de::Unexpected::Str(v), &self));
        }
        let bytes = &v.as_bytes()[2..];
        if bytes.is_empty() {
            return Ok(JsonBytes::default());
        }
        let mut buffer = vec![0; bytes.len() / 2]; // length checked above
        hex_decode(bytes, &mut buffer)
            .map_err(|e| E::custom(format_args!("{e:?}")))?;
        Ok(JsonBytes::from_vec(buffer))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        self.visit_str(&v)
    }
}

impl serde::Serialize for JsonBytes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut buffer = vec![0u8; self.len() * 2 + 2];
        buffer[0] = b'0';
        buffer[1] = b'x';
        hex_encode(self.as_bytes(), &mut buffer[2..])
            .map_err(|e| serde::ser::Error::custom(format!("{e}")))?;
        serializer
            .serialize_str(std::str::from_utf8(&buffer).expect("hex is always valid utf-8"))
    }
}

impl<'de> serde::Deserialize<'de> for JsonBytes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(BytesVisitor)
    }
}
