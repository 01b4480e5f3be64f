//! Transfer construction errors.

use ckb_wallet_types::capacity::{self, Capacity};
use thiserror::Error;

use crate::address::AddressError;

/// Every way a transfer build can fail.
///
/// Each failure is returned to the caller as-is; nothing is retried or
/// defaulted, since an incorrect automatic choice risks an unintended fund
/// movement. Retry policy (e.g. re-fetching a fresher cell snapshot) belongs
/// to the caller.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// The destination address failed to decode or targets another network.
    #[error("invalid address: {0}")]
    InvalidAddress(#[from] AddressError),
    /// The requested amount cannot form a valid cell.
    #[error("transfer amount {amount} is below the minimum cell capacity {minimum}")]
    AmountBelowMinimum {
        /// Requested amount, in shannons.
        amount: Capacity,
        /// The protocol minimum, in shannons.
        minimum: Capacity,
    },
    /// The spendable cells do not cover amount plus fee.
    #[error("insufficient balance: required {required}, spendable {available}")]
    InsufficientBalance {
        /// Amount plus fee, in shannons.
        required: Capacity,
        /// Sum of all spendable cells, in shannons.
        available: Capacity,
    },
    /// Filtering left no spendable cell at all.
    #[error("no spendable cells after excluding non-plain-capacity cells")]
    NoSpendableCells,
    /// Capacity arithmetic overflowed.
    #[error(transparent)]
    Capacity(#[from] capacity::Error),
    /// The signing primitive rejected the key or failed to sign.
    #[error(transparent)]
    Crypto(#[from] ckb_wallet_crypto::Error),
}
