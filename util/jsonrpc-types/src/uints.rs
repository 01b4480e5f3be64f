//! Integer wrappers that cross the text boundary as lowercase `0x` hex.

use std::fmt;

use serde::de::{Error, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! def_json_uint {
    ($name:ident, $inner:ident, $bits:expr) => {
        #[doc = concat!(
            "A `",
            stringify!($inner),
            "` serialized as a lowercase `0x`-prefixed hexadecimal string."
        )]
        #[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
        pub struct $name($inner);

        impl $name {
            /// The wrapped value.
            pub fn value(self) -> $inner {
                self.0
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                $name(value)
            }
        }

        impl From<$name> for $inner {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "0x{:x}", self.0)
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'a> Deserialize<'a> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'a>,
            {
                struct UintVisitor;

                impl Visitor<'_> for UintVisitor {
                    type Value = $name;

                    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                        write!(formatter, "a 0x-prefixed hex string within {} bits", $bits)
                    }

                    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
                    where
                        E: Error,
                    {
                        let hex = value.strip_prefix("0x").ok_or_else(|| {
                            E::custom(format!("invalid format: [{value}], expected 0x-prefix"))
                        })?;
                        if hex.is_empty() {
                            return Err(E::custom(format!(
                                "invalid format: [{value}], expected at least one digit"
                            )));
                        }
                        if hex.len() > 1 && hex.starts_with('0') {
                            return Err(E::custom(format!(
                                "invalid format: [{value}], redundant leading zeros"
                            )));
                        }
                        $inner::from_str_radix(hex, 16)
                            .map($name)
                            .map_err(|e| E::custom(format!("invalid number: [{value}], {e}")))
                    }
                }

                deserializer.deserialize_str(UintVisitor)
            }
        }
    };
}

def_json_uint!(Uint32, u32, 32);
def_json_uint!(Uint64, u64, 64);
