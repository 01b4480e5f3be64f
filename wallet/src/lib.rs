//! Transaction construction and signing for a cell-model ledger.
//!
//! Given a private key, a snapshot of spendable cells, and a destination
//! address, this crate selects inputs, builds outputs with change, attaches
//! the network's protocol dependencies, and produces a fully signed
//! transaction ready for broadcast:
//!
//! ```no_run
//! use ckb_wallet::{build_transfer, Address, NetworkType};
//! use ckb_wallet_crypto::Privkey;
//! use ckb_wallet_types::capacity::Capacity;
//!
//! # fn run(privkey: Privkey, live_cells: Vec<ckb_wallet_types::core::LiveCell>)
//! #     -> Result<(), ckb_wallet::Error> {
//! let from = Address::from_pubkey(NetworkType::Mainnet, &privkey.pubkey()?);
//! let tx = build_transfer(
//!     from.script(),
//!     "ckb1qyq...",
//!     Capacity::shannons(6_100_000_000),
//!     Capacity::shannons(100_000),
//!     &live_cells,
//!     &privkey,
//!     NetworkType::Mainnet,
//! )?;
//! # Ok(())
//! # }
//! ```
//!
//! The whole crate is a pure, synchronous computation: no I/O, no retained
//! state, nothing shared between calls. The caller owns the cell snapshot's
//! freshness and any serialization of access to key material.

pub mod address;
pub mod builder;
pub mod error;
pub mod selector;
pub mod signer;

pub use address::{Address, AddressError, NetworkType};
pub use builder::build_transfer;
pub use error::Error;

#[cfg(test)]
mod tests;
