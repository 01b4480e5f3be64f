//! Data model and canonical serialization for the wallet engine.
//!
//! - [`core`] holds the value types: scripts, out-points, cells, transactions.
//! - [`molecule`] implements the compact binary layout family every
//!   structured value is encoded with.
//! - [`capacity`] provides checked arithmetic on the native value unit.
//! - [`constants`] pins the fixed protocol parameters.
//!
//! Serialization is defined on the types themselves (`serialize`,
//! `calc_script_hash`, `Transaction::hash`, …) and is deterministic:
//! encoding equal values always yields byte-identical output.

pub mod capacity;
pub mod constants;
pub mod core;
pub mod molecule;

mod calc_hash;
mod serialize;

pub use bytes;
pub use bytes::Bytes;
pub use capacity::Capacity;
pub use ckb_wallet_fixed_hash::{H160, H256};
