//! Top-level transfer assembly.

use ckb_wallet_crypto::Privkey;
use ckb_wallet_types::capacity::Capacity;
use ckb_wallet_types::constants::{
    MAINNET_SIGHASH_DEP_GROUP_TX_HASH, MIN_CELL_CAPACITY, SIGHASH_DEP_GROUP_INDEX,
    TESTNET_SIGHASH_DEP_GROUP_TX_HASH,
};
use ckb_wallet_types::core::{
    CellDep, CellInput, CellOutput, DepType, LiveCell, OutPoint, Script, Transaction,
};
use ckb_wallet_types::Bytes;
use log::debug;

use crate::address::{Address, AddressError, NetworkType};
use crate::error::Error;
use crate::selector::select_live_cells;
use crate::signer::sign_transaction;

/// The dep group resolving the default-signature lock's code on `network`.
pub fn sighash_dep(network: NetworkType) -> CellDep {
    let tx_hash = match network {
        NetworkType::Mainnet => MAINNET_SIGHASH_DEP_GROUP_TX_HASH,
        NetworkType::Testnet => TESTNET_SIGHASH_DEP_GROUP_TX_HASH,
    };
    CellDep {
        out_point: OutPoint::new(tx_hash, SIGHASH_DEP_GROUP_INDEX),
        dep_type: DepType::DepGroup,
    }
}

/// Builds and signs a plain capacity transfer.
///
/// Decodes `to_address`, selects inputs from `live_cells` covering
/// `amount + fee`, pays `amount` to the recipient, returns the remainder to
/// `from_script` as change — unless that change would be below the minimum
/// cell capacity, in which case it is absorbed into the fee actually paid —
/// and signs the result with `privkey`.
///
/// The cell snapshot is trusted as-is; keeping concurrent builds from
/// spending the same cell is the caller's bookkeeping, not done here.
#[allow(clippy::too_many_arguments)]
pub fn build_transfer(
    from_script: &Script,
    to_address: &str,
    amount: Capacity,
    fee: Capacity,
    live_cells: &[LiveCell],
    privkey: &Privkey,
    network: NetworkType,
) -> Result<Transaction, Error> {
    let address: Address = to_address.parse()?;
    if address.network() != network {
        return Err(Error::InvalidAddress(AddressError::InvalidPrefix(
            address.network().to_prefix().to_string(),
        )));
    }
    let to_script = address.into_script();

    if amount < MIN_CELL_CAPACITY {
        return Err(Error::AmountBelowMinimum {
            amount,
            minimum: MIN_CELL_CAPACITY,
        });
    }

    let required = amount.safe_add(fee)?;
    let (cells, total) = select_live_cells(live_cells, required)?;

    let mut outputs = vec![CellOutput::new(amount, to_script)];
    let mut outputs_data = vec![Bytes::new()];

    let change = total.safe_sub(required)?;
    if change >= MIN_CELL_CAPACITY {
        outputs.push(CellOutput::new(change, from_script.clone()));
        outputs_data.push(Bytes::new());
    } else if change > Capacity::zero() {
        // sub-minimum change cannot form a cell; it goes to the miner
        let effective_fee = fee.safe_add(change)?;
        debug!(
            "absorbing {change} shannons of dust change into the fee (effective fee {effective_fee})"
        );
    }

    let inputs: Vec<CellInput> = cells
        .iter()
        .map(|cell| CellInput::new(cell.out_point.clone()))
        .collect();
    let witnesses = vec![Bytes::new(); inputs.len()];

    let tx = Transaction::builder()
        .cell_dep(sighash_dep(network))
        .inputs(inputs)
        .outputs(outputs)
        .outputs_data(outputs_data)
        .set_witnesses(witnesses)
        .build();

    sign_transaction(tx, privkey)
}
