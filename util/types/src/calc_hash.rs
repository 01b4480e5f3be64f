//! Hash entry points for the core types.
//!
//! Every digest here is the personalized blake2b-256 of a Molecule encoding.

use bytes::Bytes;
use ckb_wallet_fixed_hash::H256;
use ckb_wallet_hash::blake2b_256;

use crate::core::{CellOutput, Script, Transaction};

impl Script {
    /// The script hash: identifies this script (and its lock group) on chain.
    pub fn calc_script_hash(&self) -> H256 {
        H256(blake2b_256(self.serialize()))
    }
}

impl CellOutput {
    /// The data hash committed for a cell payload; the zero hash for empty
    /// data.
    pub fn calc_data_hash(data: &Bytes) -> H256 {
        if data.is_empty() {
            H256::zero()
        } else {
            H256(blake2b_256(data))
        }
    }
}

impl Transaction {
    /// The transaction hash: personalized blake2b-256 of the raw (witness-free)
    /// encoding. This is what inputs reference and what gets signed over.
    pub fn hash(&self) -> H256 {
        H256(blake2b_256(self.serialize_raw()))
    }

    /// The witness hash: personalized blake2b-256 of the full encoding,
    /// witnesses included.
    pub fn witness_hash(&self) -> H256 {
        H256(blake2b_256(self.serialize()))
    }
}
