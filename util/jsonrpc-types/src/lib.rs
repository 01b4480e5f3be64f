//! JSON types matching the target ledger's RPC conventions.
//!
//! Wherever a value crosses the text boundary, integers become lowercase
//! `0x`-prefixed hexadecimal strings and binary data becomes `0x`-prefixed
//! hex — exactly the representation the broadcast collaborator submits.

mod blockchain;
mod bytes;
mod uints;

pub use blockchain::{
    CellDep, CellInput, CellOutput, DepType, OutPoint, Script, ScriptHashType, Transaction,
    TransactionView,
};
pub use bytes::JsonBytes;
pub use ckb_wallet_fixed_hash::H256;
pub use uints::{Uint32, Uint64};
