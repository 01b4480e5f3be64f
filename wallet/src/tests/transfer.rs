//! End-to-end transfer scenarios.

use ckb_wallet_crypto::{Generator, Privkey, Signature};
use ckb_wallet_types::capacity::Capacity;
use ckb_wallet_types::constants::MIN_CELL_CAPACITY;
use ckb_wallet_types::core::{
    CellOutput, DepType, LiveCell, OutPoint, Script, Transaction, WitnessArgs,
};
use ckb_wallet_types::{Bytes, H256};

use crate::address::{Address, NetworkType};
use crate::builder::{build_transfer, sighash_dep};
use crate::error::Error;
use crate::signer::signing_message;

fn sender() -> (Privkey, Script) {
    let privkey = Privkey::from_slice(&[0x02; 32]);
    let pubkey = privkey.pubkey().unwrap();
    let script = Address::from_pubkey(NetworkType::Mainnet, &pubkey).into_script();
    (privkey, script)
}

fn recipient() -> (String, Script) {
    let (_, pubkey) = Generator::random_keypair();
    let address = Address::from_pubkey(NetworkType::Mainnet, &pubkey);
    (address.to_string(), address.into_script())
}

fn live_cell(lock: &Script, seed: u8, capacity: u64) -> LiveCell {
    LiveCell {
        out_point: OutPoint::new(H256([seed; 32]), 0),
        cell_output: CellOutput::new(Capacity::shannons(capacity), lock.clone()),
        data: Bytes::new(),
    }
}

fn input_total(cells: &[LiveCell], tx: &Transaction) -> u64 {
    tx.inputs
        .iter()
        .map(|input| {
            cells
                .iter()
                .find(|cell| cell.out_point == input.previous_output)
                .expect("every input spends a snapshot cell")
                .capacity()
                .as_u64()
        })
        .sum()
}

fn output_total(tx: &Transaction) -> u64 {
    tx.outputs.iter().map(|o| o.capacity.as_u64()).sum()
}

#[test]
fn transfer_with_change() {
    let (privkey, from_script) = sender();
    let (to_address, to_script) = recipient();
    let cells = vec![live_cell(&from_script, 1, 10_000_000_000)];

    let tx = build_transfer(
        &from_script,
        &to_address,
        Capacity::shannons(5_000_000_000),
        Capacity::shannons(100_000),
        &cells,
        &privkey,
        NetworkType::Mainnet,
    )
    .unwrap();

    assert_eq!(tx.outputs.len(), 2);
    assert_eq!(tx.outputs[0].capacity, Capacity::shannons(5_000_000_000));
    assert_eq!(tx.outputs[0].lock, to_script);
    assert_eq!(tx.outputs[0].type_, None);
    assert_eq!(tx.outputs[1].capacity, Capacity::shannons(4_899_900_000));
    assert_eq!(tx.outputs[1].lock, from_script);
    assert_eq!(tx.outputs_data.len(), 2);
    assert!(tx.outputs_data.iter().all(Bytes::is_empty));

    // the implicit fee is exactly the requested fee
    assert_eq!(input_total(&cells, &tx) - output_total(&tx), 100_000);

    // protocol plumbing
    assert_eq!(tx.cell_deps, vec![sighash_dep(NetworkType::Mainnet)]);
    assert_eq!(tx.cell_deps[0].dep_type, DepType::DepGroup);
    assert!(tx.header_deps.is_empty());
    assert_eq!(tx.inputs.len(), 1);
    assert_eq!(tx.inputs[0].since, 0);

    // the witness holds a 65-byte recoverable signature in its lock field
    let witness = WitnessArgs::from_slice(&tx.witnesses[0]).unwrap();
    assert_eq!(witness.lock.unwrap().len(), 65);
}

#[test]
fn sub_minimum_change_is_absorbed_into_the_fee() {
    let (privkey, from_script) = sender();
    let (to_address, _) = recipient();
    let cells = vec![live_cell(&from_script, 1, 6_150_000_000)];

    let tx = build_transfer(
        &from_script,
        &to_address,
        Capacity::shannons(6_049_900_000),
        Capacity::shannons(100_000),
        &cells,
        &privkey,
        NetworkType::Mainnet,
    )
    .unwrap();

    assert_eq!(tx.outputs.len(), 1);
    assert_eq!(tx.outputs[0].capacity, Capacity::shannons(6_049_900_000));
    // the 100,000,000-shannon leftover became part of the fee actually paid
    assert_eq!(input_total(&cells, &tx) - output_total(&tx), 100_100_000);
}

#[test]
fn multi_input_transfer_signs_the_whole_group() {
    let (privkey, from_script) = sender();
    let (to_address, _) = recipient();
    let cells = vec![
        live_cell(&from_script, 1, 10_000_000_000),
        live_cell(&from_script, 2, 10_000_000_000),
    ];

    let tx = build_transfer(
        &from_script,
        &to_address,
        Capacity::shannons(12_000_000_000),
        Capacity::shannons(100_000),
        &cells,
        &privkey,
        NetworkType::Mainnet,
    )
    .unwrap();

    assert_eq!(tx.inputs.len(), 2);
    assert_eq!(tx.outputs.len(), 2);
    assert_eq!(tx.outputs[1].capacity, Capacity::shannons(7_999_900_000));
    assert_eq!(input_total(&cells, &tx) - output_total(&tx), 100_000);

    // only the first witness carries the signature; the second stays empty
    assert_eq!(tx.witnesses.len(), 2);
    assert!(tx.witnesses[1].is_empty());
    let witness = WitnessArgs::from_slice(&tx.witnesses[0]).unwrap();
    let signature = Signature::from_slice(&witness.lock.unwrap()).unwrap();
    let message = signing_message(&tx);
    assert_eq!(
        signature.recover(&message).unwrap(),
        privkey.pubkey().unwrap()
    );
}

#[test]
fn amount_below_minimum_fails_before_looking_at_cells() {
    let (privkey, from_script) = sender();
    let (to_address, _) = recipient();

    // an empty snapshot still reports the amount error, not a cell error
    let result = build_transfer(
        &from_script,
        &to_address,
        Capacity::shannons(6_099_999_999),
        Capacity::shannons(100_000),
        &[],
        &privkey,
        NetworkType::Mainnet,
    );
    assert_eq!(
        result,
        Err(Error::AmountBelowMinimum {
            amount: Capacity::shannons(6_099_999_999),
            minimum: MIN_CELL_CAPACITY,
        })
    );
}

#[test]
fn insufficient_balance_reports_required_and_available() {
    let (privkey, from_script) = sender();
    let (to_address, _) = recipient();
    let cells = vec![live_cell(&from_script, 1, 6_100_000_000)];

    let result = build_transfer(
        &from_script,
        &to_address,
        Capacity::shannons(6_100_000_000),
        Capacity::shannons(100_000),
        &cells,
        &privkey,
        NetworkType::Mainnet,
    );
    assert_eq!(
        result,
        Err(Error::InsufficientBalance {
            required: Capacity::shannons(6_100_100_000),
            available: Capacity::shannons(6_100_000_000),
        })
    );
}

#[test]
fn type_script_cells_never_fund_a_transfer() {
    let (privkey, from_script) = sender();
    let (to_address, _) = recipient();
    let mut exotic = live_cell(&from_script, 1, 100_000_000_000);
    exotic.cell_output.type_ = Some(Script::default());
    let cells = vec![exotic, live_cell(&from_script, 2, 7_000_000_000)];

    let tx = build_transfer(
        &from_script,
        &to_address,
        Capacity::shannons(6_100_000_000),
        Capacity::shannons(100_000),
        &cells,
        &privkey,
        NetworkType::Mainnet,
    )
    .unwrap();
    assert_eq!(tx.inputs.len(), 1);
    assert_eq!(tx.inputs[0].previous_output, OutPoint::new(H256([2; 32]), 0));

    let starved = build_transfer(
        &from_script,
        &to_address,
        Capacity::shannons(50_000_000_000),
        Capacity::shannons(100_000),
        &cells,
        &privkey,
        NetworkType::Mainnet,
    );
    assert!(matches!(
        starved,
        Err(Error::InsufficientBalance { .. })
    ));
}

#[test]
fn wrong_network_address_is_invalid() {
    let (privkey, from_script) = sender();
    let (_, pubkey) = Generator::random_keypair();
    let testnet_address = Address::from_pubkey(NetworkType::Testnet, &pubkey).to_string();
    let cells = vec![live_cell(&from_script, 1, 10_000_000_000)];

    let result = build_transfer(
        &from_script,
        &testnet_address,
        Capacity::shannons(6_100_000_000),
        Capacity::shannons(100_000),
        &cells,
        &privkey,
        NetworkType::Mainnet,
    );
    assert!(matches!(result, Err(Error::InvalidAddress(_))));

    let garbled = build_transfer(
        &from_script,
        "not-an-address",
        Capacity::shannons(6_100_000_000),
        Capacity::shannons(100_000),
        &cells,
        &privkey,
        NetworkType::Mainnet,
    );
    assert!(matches!(garbled, Err(Error::InvalidAddress(_))));
}

#[test]
fn identical_builds_sign_identically() {
    let (privkey, from_script) = sender();
    let (to_address, _) = recipient();
    let cells = vec![live_cell(&from_script, 1, 10_000_000_000)];

    let build = || {
        build_transfer(
            &from_script,
            &to_address,
            Capacity::shannons(6_100_000_000),
            Capacity::shannons(100_000),
            &cells,
            &privkey,
            NetworkType::Mainnet,
        )
        .unwrap()
    };
    let first = build();
    let second = build();
    assert_eq!(first, second);
    assert_eq!(first.serialize(), second.serialize());
}

#[test]
fn signed_transfer_crosses_the_json_boundary_as_hex() {
    let (privkey, from_script) = sender();
    let (to_address, _) = recipient();
    let cells = vec![live_cell(&from_script, 1, 10_000_000_000)];

    let tx = build_transfer(
        &from_script,
        &to_address,
        Capacity::shannons(6_100_000_000),
        Capacity::shannons(100_000),
        &cells,
        &privkey,
        NetworkType::Mainnet,
    )
    .unwrap();

    let json: ckb_wallet_jsonrpc_types::Transaction = tx.into();
    let text = serde_json::to_string(&json).unwrap();
    assert!(text.contains(r#""version":"0x0""#));
    assert!(text.contains(r#""capacity":"0x16b969d00""#));
    assert!(text.contains(r#""dep_type":"dep_group""#));
    // the signature witness: 85 molecule bytes, hex-encoded with 0x
    assert!(text.contains(r#""witnesses":["0x55000000"#));
}
