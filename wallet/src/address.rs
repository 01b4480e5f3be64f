//! The checksummed address codec.
//!
//! An address is a bech32-family encoding of a lock script under a network
//! prefix. Two payload formats exist:
//!
//! - **short**: `0x01 ‖ code-hash-index ‖ args(20)`, Bech32 checksum — only
//!   for the canonical default-signature lock with a 20-byte blake160 arg;
//! - **full**: `0x00 ‖ code_hash(32) ‖ hash_type ‖ args`, Bech32m checksum —
//!   every other script.
//!
//! The two checksum constants are part of the format: a short payload under
//! Bech32m (or vice versa) is rejected, not coerced.

use std::fmt;
use std::str::FromStr;

use bech32::{FromBase32, ToBase32, Variant};
use ckb_wallet_crypto::Pubkey;
use ckb_wallet_hash::blake2b_256;
use ckb_wallet_types::constants::SIGHASH_ALL_CODE_HASH;
use ckb_wallet_types::core::{Script, ScriptHashType};
use ckb_wallet_types::{Bytes, H160, H256};
use thiserror::Error;

const PREFIX_MAINNET: &str = "ckb";
const PREFIX_TESTNET: &str = "ckt";

const FORMAT_TYPE_FULL: u8 = 0x00;
const FORMAT_TYPE_SHORT: u8 = 0x01;
const CODE_HASH_INDEX_SIGHASH: u8 = 0x00;

/// The network an address (and its protocol parameters) belongs to.
#[derive(Hash, Eq, PartialEq, Debug, Clone, Copy)]
pub enum NetworkType {
    /// The main network, prefix `ckb`.
    Mainnet,
    /// The test network, prefix `ckt`.
    Testnet,
}

impl NetworkType {
    /// Maps a human-readable prefix back to its network.
    pub fn from_prefix(value: &str) -> Option<NetworkType> {
        match value {
            PREFIX_MAINNET => Some(NetworkType::Mainnet),
            PREFIX_TESTNET => Some(NetworkType::Testnet),
            _ => None,
        }
    }

    /// The human-readable prefix of this network.
    pub fn to_prefix(self) -> &'static str {
        match self {
            NetworkType::Mainnet => PREFIX_MAINNET,
            NetworkType::Testnet => PREFIX_TESTNET,
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.to_prefix())
    }
}

/// Address decoding errors.
#[derive(Error, Debug, PartialEq)]
pub enum AddressError {
    /// The human-readable prefix names no known network.
    #[error("invalid network prefix: {0}")]
    InvalidPrefix(String),
    /// The checksum is wrong, or the checksum variant does not match the
    /// payload format.
    #[error("invalid checksum")]
    InvalidChecksum,
    /// The format byte is unknown, or the payload does not fit its format.
    #[error("unsupported address format: {0}")]
    UnsupportedFormat(String),
    /// The string is not bech32 at all.
    #[error("not a bech32 string: {0}")]
    Encoding(bech32::Error),
}

impl From<bech32::Error> for AddressError {
    fn from(e: bech32::Error) -> Self {
        match e {
            bech32::Error::InvalidChecksum => AddressError::InvalidChecksum,
            other => AddressError::Encoding(other),
        }
    }
}

/// A lock script bound to a network, as its human-readable address.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Address {
    network: NetworkType,
    script: Script,
}

impl Address {
    /// Binds `script` to `network`.
    pub fn new(network: NetworkType, script: Script) -> Self {
        Address { network, script }
    }

    /// The default-signature-lock address of a public key: its lock arg is
    /// the blake160 of the 33-byte compressed key.
    pub fn from_pubkey(network: NetworkType, pubkey: &Pubkey) -> Self {
        let hash = blake160(&pubkey.serialize());
        let script = Script::sighash_all(Bytes::copy_from_slice(hash.as_bytes()));
        Address { network, script }
    }

    /// The network this address belongs to.
    pub fn network(&self) -> NetworkType {
        self.network
    }

    /// The lock script this address encodes.
    pub fn script(&self) -> &Script {
        &self.script
    }

    /// Unwraps into the lock script.
    pub fn into_script(self) -> Script {
        self.script
    }

    fn is_short_form(&self) -> bool {
        self.script.code_hash == SIGHASH_ALL_CODE_HASH
            && self.script.hash_type == ScriptHashType::Type
            && self.script.args.len() == 20
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let (payload, variant) = if self.is_short_form() {
            let mut payload = Vec::with_capacity(22);
            payload.push(FORMAT_TYPE_SHORT);
            payload.push(CODE_HASH_INDEX_SIGHASH);
            payload.extend_from_slice(&self.script.args);
            (payload, Variant::Bech32)
        } else {
            let mut payload = Vec::with_capacity(34 + self.script.args.len());
            payload.push(FORMAT_TYPE_FULL);
            payload.extend_from_slice(self.script.code_hash.as_bytes());
            payload.push(u8::from(self.script.hash_type));
            payload.extend_from_slice(&self.script.args);
            (payload, Variant::Bech32m)
        };
        let encoded = bech32::encode(self.network.to_prefix(), payload.to_base32(), variant)
            .expect("fixed prefixes are valid bech32 hrps");
        write!(f, "{encoded}")
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (hrp, data, variant) = bech32::decode(input)?;
        let network = NetworkType::from_prefix(&hrp)
            .ok_or_else(|| AddressError::InvalidPrefix(hrp.clone()))?;
        let payload = Vec::<u8>::from_base32(&data)?;
        let script = match payload.split_first() {
            Some((&FORMAT_TYPE_SHORT, rest)) => {
                if variant != Variant::Bech32 {
                    return Err(AddressError::InvalidChecksum);
                }
                if rest.len() != 21 {
                    return Err(AddressError::UnsupportedFormat(format!(
                        "short payload must carry 20 args bytes, got {}",
                        rest.len().saturating_sub(1)
                    )));
                }
                if rest[0] != CODE_HASH_INDEX_SIGHASH {
                    return Err(AddressError::UnsupportedFormat(format!(
                        "unknown code hash index {:#04x}",
                        rest[0]
                    )));
                }
                Script::sighash_all(Bytes::copy_from_slice(&rest[1..]))
            }
            Some((&FORMAT_TYPE_FULL, rest)) => {
                if variant != Variant::Bech32m {
                    return Err(AddressError::InvalidChecksum);
                }
                if rest.len() < 33 {
                    return Err(AddressError::UnsupportedFormat(format!(
                        "full payload too short: {} bytes",
                        rest.len()
                    )));
                }
                let code_hash = H256::from_slice(&rest[..32]).expect("length checked");
                let hash_type = ScriptHashType::try_from(rest[32]).map_err(|e| {
                    AddressError::UnsupportedFormat(e.to_string())
                })?;
                Script {
                    code_hash,
                    hash_type,
                    args: Bytes::copy_from_slice(&rest[33..]),
                }
            }
            Some((&format_type, _)) => {
                return Err(AddressError::UnsupportedFormat(format!(
                    "unknown format type {format_type:#04x}"
                )));
            }
            None => {
                return Err(AddressError::UnsupportedFormat(
                    "empty payload".to_string(),
                ));
            }
        };
        Ok(Address { network, script })
    }
}

/// The truncated personalized digest lock args are built from.
pub fn blake160(data: &[u8]) -> H160 {
    H160::from_slice(&blake2b_256(data)[..20]).expect("blake160 truncates to 20 bytes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ckb_wallet_crypto::Generator;
    use proptest::prelude::*;

    // a pre-recorded 20-byte lock arg used as the reference fixture
    const REFERENCE_ARGS: [u8; 20] = [
        0xb3, 0x9b, 0xbc, 0x0b, 0x36, 0x73, 0xc7, 0xd3, 0x64, 0x50, 0xbc, 0x14, 0xcf, 0xcd,
        0xad, 0x2d, 0x55, 0x9c, 0x6c, 0x64,
    ];

    fn reference_script() -> Script {
        Script::sighash_all(Bytes::copy_from_slice(&REFERENCE_ARGS))
    }

    #[test]
    fn short_form_round_trip_reproduces_reference_args() {
        let address = Address::new(NetworkType::Mainnet, reference_script());
        let encoded = address.to_string();
        assert!(encoded.starts_with("ckb1"));
        let decoded: Address = encoded.parse().unwrap();
        assert_eq!(decoded.network(), NetworkType::Mainnet);
        assert_eq!(decoded.script().args.as_ref(), REFERENCE_ARGS);
        assert_eq!(decoded, address);
    }

    #[test]
    fn default_lock_uses_the_short_form() {
        let short = Address::new(NetworkType::Testnet, reference_script());
        assert!(short.is_short_form());

        // 21-byte args cannot use the short form
        let full = Address::new(
            NetworkType::Testnet,
            Script::sighash_all(Bytes::from(vec![1u8; 21])),
        );
        assert!(!full.is_short_form());

        // a data lock cannot either, even with 20-byte args
        let mut script = reference_script();
        script.hash_type = ScriptHashType::Data;
        assert!(!Address::new(NetworkType::Testnet, script).is_short_form());
    }

    #[test]
    fn full_form_round_trip() {
        let script = Script {
            code_hash: H256([0xa5; 32]),
            hash_type: ScriptHashType::Data1,
            args: Bytes::from_static(b"arbitrary args"),
        };
        let address = Address::new(NetworkType::Testnet, script.clone());
        let encoded = address.to_string();
        assert!(encoded.starts_with("ckt1"));
        let decoded: Address = encoded.parse().unwrap();
        assert_eq!(decoded.script(), &script);
    }

    #[test]
    fn wrong_prefix_is_rejected() {
        let encoded = bech32::encode(
            "xyz",
            [FORMAT_TYPE_SHORT, 0].to_base32(),
            Variant::Bech32,
        )
        .unwrap();
        assert_eq!(
            encoded.parse::<Address>(),
            Err(AddressError::InvalidPrefix("xyz".to_string()))
        );
    }

    #[test]
    fn corrupted_checksum_is_rejected() {
        let mut encoded = Address::new(NetworkType::Mainnet, reference_script()).to_string();
        let last = encoded.pop().unwrap();
        encoded.push(if last == 'q' { 'p' } else { 'q' });
        assert!(matches!(
            encoded.parse::<Address>(),
            Err(AddressError::InvalidChecksum) | Err(AddressError::Encoding(_))
        ));
    }

    #[test]
    fn mismatched_checksum_variant_is_rejected() {
        // a short payload under the full form's checksum constant
        let mut payload = vec![FORMAT_TYPE_SHORT, CODE_HASH_INDEX_SIGHASH];
        payload.extend_from_slice(&REFERENCE_ARGS);
        let encoded =
            bech32::encode(PREFIX_MAINNET, payload.to_base32(), Variant::Bech32m).unwrap();
        assert_eq!(
            encoded.parse::<Address>(),
            Err(AddressError::InvalidChecksum)
        );
    }

    #[test]
    fn unknown_format_tag_is_rejected() {
        let mut payload = vec![0x07u8];
        payload.extend_from_slice(&REFERENCE_ARGS);
        let encoded =
            bech32::encode(PREFIX_MAINNET, payload.to_base32(), Variant::Bech32m).unwrap();
        assert!(matches!(
            encoded.parse::<Address>(),
            Err(AddressError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn short_payload_with_wrong_length_is_rejected() {
        let mut payload = vec![FORMAT_TYPE_SHORT, CODE_HASH_INDEX_SIGHASH];
        payload.extend_from_slice(&REFERENCE_ARGS[..19]);
        let encoded =
            bech32::encode(PREFIX_MAINNET, payload.to_base32(), Variant::Bech32).unwrap();
        assert!(matches!(
            encoded.parse::<Address>(),
            Err(AddressError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn pubkey_derivation_produces_a_short_address() {
        let (_, pubkey) = Generator::random_keypair();
        let address = Address::from_pubkey(NetworkType::Mainnet, &pubkey);
        assert!(address.is_short_form());
        assert_eq!(address.script().args.len(), 20);
        assert_eq!(
            address.script().args.as_ref(),
            blake160(&pubkey.serialize()).as_bytes()
        );
    }

    fn arb_hash_type() -> impl Strategy<Value = ScriptHashType> {
        prop_oneof![
            Just(ScriptHashType::Data),
            Just(ScriptHashType::Type),
            Just(ScriptHashType::Data1),
            Just(ScriptHashType::Data2),
        ]
    }

    proptest! {
        #[test]
        fn round_trip_over_arbitrary_scripts(
            code_hash in proptest::array::uniform32(any::<u8>()),
            hash_type in arb_hash_type(),
            args in proptest::collection::vec(any::<u8>(), 0..48),
            mainnet in any::<bool>(),
        ) {
            let network = if mainnet {
                NetworkType::Mainnet
            } else {
                NetworkType::Testnet
            };
            let script = Script {
                code_hash: H256(code_hash),
                hash_type,
                args: Bytes::from(args),
            };
            let address = Address::new(network, script.clone());
            let decoded: Address = address.to_string().parse().unwrap();
            prop_assert_eq!(decoded.network(), network);
            prop_assert_eq!(decoded.into_script(), script);
        }
    }
}
