//! Fixed protocol parameters.
//!
//! These values are part of the external protocol contract and must be
//! bit-exact; none of them is configurable at runtime beyond the
//! mainnet/testnet selection made by the caller.

use ckb_wallet_fixed_hash::H256;

use crate::capacity::Capacity;

/// Current transaction version.
pub const TX_VERSION: u32 = 0;

/// The minimum capacity of a cell carrying no data under the default lock:
/// 61 storage bytes.
pub const MIN_CELL_CAPACITY: Capacity = Capacity::shannons(6_100_000_000);

/// Byte length of a recoverable secp256k1 signature (`r ‖ s ‖ v`).
pub const SECP_SIGNATURE_SIZE: usize = 65;

/// Code hash of the canonical default-signature lock script
/// (`secp256k1_blake160_sighash_all`), matched by type hash on every network.
pub const SIGHASH_ALL_CODE_HASH: H256 = H256([
    0x9b, 0xd7, 0xe0, 0x6f, 0x3e, 0xcf, 0x4b, 0xe0, 0xf2, 0xfc, 0xd2, 0x18, 0x8b, 0x23, 0xf1,
    0xb9, 0xfc, 0xc8, 0x8e, 0x5d, 0x4b, 0x65, 0xa8, 0x63, 0x7b, 0x17, 0x72, 0x3b, 0xbd, 0xa3,
    0xcc, 0xe8,
]);

/// Genesis transaction carrying the mainnet dep group for the default lock.
pub const MAINNET_SIGHASH_DEP_GROUP_TX_HASH: H256 = H256([
    0x71, 0xa7, 0xba, 0x8f, 0xc9, 0x63, 0x49, 0xfe, 0xa0, 0xed, 0x3a, 0x5c, 0x47, 0x99, 0x2e,
    0x3b, 0x40, 0x84, 0xb0, 0x31, 0xa4, 0x22, 0x64, 0xa0, 0x18, 0xe0, 0x07, 0x2e, 0x81, 0x72,
    0xe4, 0x6c,
]);

/// Genesis transaction carrying the testnet dep group for the default lock.
pub const TESTNET_SIGHASH_DEP_GROUP_TX_HASH: H256 = H256([
    0xf8, 0xde, 0x3b, 0xb4, 0x7d, 0x05, 0x5c, 0xdf, 0x46, 0x0d, 0x93, 0xa2, 0xa6, 0xe1, 0xb0,
    0x5f, 0x74, 0x32, 0xf9, 0x77, 0x7c, 0x8c, 0x47, 0x4a, 0xbf, 0x4e, 0xec, 0x1d, 0x4a, 0xee,
    0x5d, 0x37,
]);

/// Output index of the default-lock dep group within its genesis transaction.
pub const SIGHASH_DEP_GROUP_INDEX: u32 = 0;
