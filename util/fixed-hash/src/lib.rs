//! Fixed-size byte-array types used across the wallet engine.
//!
//! `H160` carries blake160 lock arguments, `H256` carries hashes and private
//! key material. Both parse from and format as lowercase hexadecimal, and
//! serialize through serde as `0x`-prefixed hex strings to match the ledger's
//! RPC conventions.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

pub mod error;

pub use error::{FromSliceError, FromStrError};

/// The 20-byte fixed-length binary data, typically a blake160 digest.
#[derive(Clone, Copy)]
pub struct H160(pub [u8; 20]);

/// The 32-byte fixed-length binary data, typically a blake2b-256 digest.
#[derive(Clone, Copy)]
pub struct H256(pub [u8; 32]);

macro_rules! impl_fixed_hash {
    ($name:ident, $bytes_size:expr) => {
        impl $name {
            /// Converts `Self` to a byte slice.
            #[inline]
            pub fn as_bytes(&self) -> &[u8] {
                &self.0[..]
            }

            /// Converts a byte slice back into `Self`.
            #[inline]
            pub fn from_slice(input: &[u8]) -> Result<Self, FromSliceError> {
                if input.len() != $bytes_size {
                    Err(FromSliceError::InvalidLength(input.len()))
                } else {
                    let mut ret = Self::default();
                    ret.0[..].copy_from_slice(input);
                    Ok(ret)
                }
            }

            /// The all-zeros value.
            #[inline]
            pub const fn zero() -> Self {
                $name([0u8; $bytes_size])
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.0[..] == other.0[..]
            }
        }

        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0[..].cmp(&other.0[..])
            }
        }

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                state.write(&self.0[..])
            }
        }

        impl From<[u8; $bytes_size]> for $name {
            fn from(bytes: [u8; $bytes_size]) -> Self {
                $name(bytes)
            }
        }

        impl fmt::LowerHex for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                if f.alternate() {
                    write!(f, "0x")?;
                }
                let mut buffer = [0u8; $bytes_size * 2];
                faster_hex::hex_encode(&self.0, &mut buffer).map_err(|_| fmt::Error)?;
                let hex = std::str::from_utf8(&buffer).map_err(|_| fmt::Error)?;
                write!(f, "{hex}")
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{:x}", self)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}({:#x})", stringify!($name), self)
            }
        }

        impl FromStr for $name {
            type Err = FromStrError;

            fn from_str(input: &str) -> Result<Self, Self::Err> {
                if input.len() != $bytes_size * 2 {
                    return Err(FromStrError::InvalidLength(input.len()));
                }
                let mut ret = Self::default();
                faster_hex::hex_decode(input.as_bytes(), &mut ret.0)
                    .map_err(|_| FromStrError::InvalidCharacter)?;
                Ok(ret)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(&format_args!("{:#x}", self))
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct Visitor;

                impl serde::de::Visitor<'_> for Visitor {
                    type Value = $name;

                    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                        write!(
                            formatter,
                            "a 0x-prefixed hex string with {} digits",
                            $bytes_size * 2
                        )
                    }

                    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        let hex = v.strip_prefix("0x").ok_or_else(|| {
                            E::invalid_value(serde::de::Unexpected::Str(v), &self)
                        })?;
                        hex.parse().map_err(|_| {
                            E::invalid_value(serde::de::Unexpected::Str(v), &self)
                        })
                    }
                }

                deserializer.deserialize_str(Visitor)
            }
        }
    };
}

impl_fixed_hash!(H160, 20);
impl_fixed_hash!(H256, 32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_format_round_trip() {
        let text = "9bd7e06f3ecf4be0f2fcd2188b23f1b9fcc88e5d4b65a8637b17723bbda3cce8";
        let hash: H256 = text.parse().unwrap();
        assert_eq!(format!("{hash:x}"), text);
        assert_eq!(format!("{hash:#x}"), format!("0x{text}"));
    }

    #[test]
    fn reject_bad_input() {
        assert_eq!(
            "ab".parse::<H256>(),
            Err(FromStrError::InvalidLength(2)),
        );
        let odd = "zz".repeat(32);
        assert_eq!(odd.parse::<H256>(), Err(FromStrError::InvalidCharacter));
        assert_eq!(
            H160::from_slice(&[0u8; 21]),
            Err(FromSliceError::InvalidLength(21)),
        );
    }

    #[test]
    fn ordering_is_lexicographic() {
        let mut a = H256::zero();
        let mut b = H256::zero();
        a.0[0] = 1;
        b.0[31] = 0xff;
        assert!(a > b);
        assert_eq!(H160::zero().cmp(&H160::zero()), Ordering::Equal);
    }
}
