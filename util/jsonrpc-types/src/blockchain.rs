//! JSON mirrors of the core chain types.
//!
//! Field names, tag strings, and hex conventions follow the target ledger's
//! RPC interface; conversions to and from the core model are loss-free.

use ckb_wallet_fixed_hash::H256;
use ckb_wallet_types::{core, Capacity};
use serde::{Deserialize, Serialize};

use crate::bytes::JsonBytes;
use crate::uints::{Uint32, Uint64};

/// How a script's `code_hash` matches the script code.
#[derive(Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
#[serde(rename_all = "snake_case")]
pub enum ScriptHashType {
    /// Match via cell data hash, v0 VM.
    #[default]
    Data,
    /// Match via cell type script hash.
    Type,
    /// Match via cell data hash, v1 VM.
    Data1,
    /// Match via cell data hash, v2 VM.
    Data2,
}

impl From<core::ScriptHashType> for ScriptHashType {
    fn from(core: core::ScriptHashType) -> Self {
        match core {
            core::ScriptHashType::Data => ScriptHashType::Data,
            core::ScriptHashType::Type => ScriptHashType::Type,
            core::ScriptHashType::Data1 => ScriptHashType::Data1,
            core::ScriptHashType::Data2 => ScriptHashType::Data2,
        }
    }
}

impl From<ScriptHashType> for core::ScriptHashType {
    fn from(json: ScriptHashType) -> Self {
        match json {
            ScriptHashType::Data => core::ScriptHashType::Data,
            ScriptHashType::Type => core::ScriptHashType::Type,
            ScriptHashType::Data1 => core::ScriptHashType::Data1,
            ScriptHashType::Data2 => core::ScriptHashType::Data2,
        }
    }
}

/// How a dep cell provides code.
#[derive(Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
#[serde(rename_all = "snake_case")]
pub enum DepType {
    /// The dep cell carries the code itself.
    #[default]
    Code,
    /// The dep cell carries a vector of out-points to expand.
    DepGroup,
}

impl From<core::DepType> for DepType {
    fn from(core: core::DepType) -> Self {
        match core {
            core::DepType::Code => DepType::Code,
            core::DepType::DepGroup => DepType::DepGroup,
        }
    }
}

impl From<DepType> for core::DepType {
    fn from(json: DepType) -> Self {
        match json {
            DepType::Code => core::DepType::Code,
            DepType::DepGroup => core::DepType::DepGroup,
        }
    }
}

/// Describes the lock script or type script of a cell.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
#[serde(deny_unknown_fields)]
pub struct Script {
    /// The hash used to match the script code.
    pub code_hash: H256,
    /// How `code_hash` is interpreted.
    pub hash_type: ScriptHashType,
    /// Arguments for the script.
    pub args: JsonBytes,
}

impl From<core::Script> for Script {
    fn from(core: core::Script) -> Self {
        Script {
            code_hash: core.code_hash,
            hash_type: core.hash_type.into(),
            args: JsonBytes::from_bytes(core.args),
        }
    }
}

impl From<Script> for core::Script {
    fn from(json: Script) -> Self {
        core::Script {
            code_hash: json.code_hash,
            hash_type: json.hash_type.into(),
            args: json.args.into_bytes(),
        }
    }
}

/// Reference to one output of one transaction.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
#[serde(deny_unknown_fields)]
pub struct OutPoint {
    /// Hash of the producing transaction.
    pub tx_hash: H256,
    /// Output index within it.
    pub index: Uint32,
}

impl From<core::OutPoint> for OutPoint {
    fn from(core: core::OutPoint) -> Self {
        OutPoint {
            tx_hash: core.tx_hash,
            index: core.index.into(),
        }
    }
}

impl From<OutPoint> for core::OutPoint {
    fn from(json: OutPoint) -> Self {
        core::OutPoint {
            tx_hash: json.tx_hash,
            index: json.index.into(),
        }
    }
}

/// An input cell reference.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
#[serde(deny_unknown_fields)]
pub struct CellInput {
    /// Optional lock condition; `0x0` for plain transfers.
    pub since: Uint64,
    /// The cell being spent.
    pub previous_output: OutPoint,
}

impl From<core::CellInput> for CellInput {
    fn from(core: core::CellInput) -> Self {
        CellInput {
            since: core.since.into(),
            previous_output: core.previous_output.into(),
        }
    }
}

impl From<CellInput> for core::CellInput {
    fn from(json: CellInput) -> Self {
        core::CellInput {
            since: json.since.into(),
            previous_output: json.previous_output.into(),
        }
    }
}

/// A code dependency.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
#[serde(deny_unknown_fields)]
pub struct CellDep {
    /// The dep cell.
    pub out_point: OutPoint,
    /// How it provides code.
    pub dep_type: DepType,
}

impl From<core::CellDep> for CellDep {
    fn from(core: core::CellDep) -> Self {
        CellDep {
            out_point: core.out_point.into(),
            dep_type: core.dep_type.into(),
        }
    }
}

impl From<CellDep> for core::CellDep {
    fn from(json: CellDep) -> Self {
        core::CellDep {
            out_point: json.out_point.into(),
            dep_type: json.dep_type.into(),
        }
    }
}

/// The fields of an output cell except its data.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
#[serde(deny_unknown_fields)]
pub struct CellOutput {
    /// Value held by the cell, in shannons.
    pub capacity: Uint64,
    /// Spending condition.
    pub lock: Script,
    /// Optional extra validation program.
    #[serde(rename = "type")]
    pub type_: Option<Script>,
}

impl From<core::CellOutput> for CellOutput {
    fn from(core: core::CellOutput) -> Self {
        CellOutput {
            capacity: core.capacity.as_u64().into(),
            lock: core.lock.into(),
            type_: core.type_.map(Into::into),
        }
    }
}

impl From<CellOutput> for core::CellOutput {
    fn from(json: CellOutput) -> Self {
        core::CellOutput {
            capacity: Capacity::shannons(json.capacity.into()),
            lock: json.lock.into(),
            type_: json.type_.map(Into::into),
        }
    }
}

/// The transaction, ready for `send_transaction`.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct Transaction {
    /// Format version.
    pub version: Uint32,
    /// Code dependencies.
    pub cell_deps: Vec<CellDep>,
    /// Header dependencies.
    pub header_deps: Vec<H256>,
    /// Consumed cells.
    pub inputs: Vec<CellInput>,
    /// Created cells.
    pub outputs: Vec<CellOutput>,
    /// Data payloads of created cells, parallel to `outputs`.
    pub outputs_data: Vec<JsonBytes>,
    /// Per-input auxiliary data, e.g. signatures.
    pub witnesses: Vec<JsonBytes>,
}

impl From<core::Transaction> for Transaction {
    fn from(core: core::Transaction) -> Self {
        Transaction {
            version: core.version.into(),
            cell_deps: core.cell_deps.into_iter().map(Into::into).collect(),
            header_deps: core.header_deps,
            inputs: core.inputs.into_iter().map(Into::into).collect(),
            outputs: core.outputs.into_iter().map(Into::into).collect(),
            outputs_data: core
                .outputs_data
                .into_iter()
                .map(JsonBytes::from_bytes)
                .collect(),
            witnesses: core
                .witnesses
                .into_iter()
                .map(JsonBytes::from_bytes)
                .collect(),
        }
    }
}

impl From<Transaction> for core::Transaction {
    fn from(json: Transaction) -> Self {
        core::Transaction {
            version: json.version.into(),
            cell_deps: json.cell_deps.into_iter().map(Into::into).collect(),
            header_deps: json.header_deps,
            inputs: json.inputs.into_iter().map(Into::into).collect(),
            outputs: json.outputs.into_iter().map(Into::into).collect(),
            outputs_data: json
                .outputs_data
                .into_iter()
                .map(JsonBytes::into_bytes)
                .collect(),
            witnesses: json
                .witnesses
                .into_iter()
                .map(JsonBytes::into_bytes)
                .collect(),
        }
    }
}

/// A transaction annotated with its hash.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct TransactionView {
    /// The transaction hash.
    pub hash: H256,
    /// The transaction body.
    #[serde(flatten)]
    pub inner: Transaction,
}

impl From<core::Transaction> for TransactionView {
    fn from(core: core::Transaction) -> Self {
        TransactionView {
            hash: core.hash(),
            inner: core.into(),
        }
    }
}
