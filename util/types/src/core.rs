//! The core data model: scripts, out-points, cells, and transactions.
//!
//! All values here are plain owned data. A [`LiveCell`] snapshot is supplied
//! by the caller per invocation and never retained; nothing in this module
//! holds state between calls.

use bytes::Bytes;
use ckb_wallet_fixed_hash::H256;
use thiserror::Error;

use crate::capacity::Capacity;
use crate::constants::{SIGHASH_ALL_CODE_HASH, TX_VERSION};

/// Error for rejected enum tag values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct InvalidTagError(String);

/// Specifies how the script `code_hash` is used to match the script code and
/// how to run the code.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum ScriptHashType {
    /// Matches code via cell data hash, runs in the v0 VM.
    #[default]
    Data = 0,
    /// Matches code via cell type script hash.
    Type = 1,
    /// Matches code via cell data hash, runs in the v1 VM.
    Data1 = 2,
    /// Matches code via cell data hash, runs in the v2 VM.
    Data2 = 4,
}

impl TryFrom<u8> for ScriptHashType {
    type Error = InvalidTagError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(ScriptHashType::Data),
            1 => Ok(ScriptHashType::Type),
            2 => Ok(ScriptHashType::Data1),
            4 => Ok(ScriptHashType::Data2),
            _ => Err(InvalidTagError(format!("invalid script hash type {v}"))),
        }
    }
}

impl From<ScriptHashType> for u8 {
    #[inline]
    fn from(t: ScriptHashType) -> u8 {
        t as u8
    }
}

/// Specifies how a [`CellDep`]'s referenced cell provides code.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum DepType {
    /// The dep cell carries the code itself.
    #[default]
    Code = 0,
    /// The dep cell carries a vector of out-points to expand.
    DepGroup = 1,
}

impl TryFrom<u8> for DepType {
    type Error = InvalidTagError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(DepType::Code),
            1 => Ok(DepType::DepGroup),
            _ => Err(InvalidTagError(format!("invalid dep type {v}"))),
        }
    }
}

impl From<DepType> for u8 {
    #[inline]
    fn from(t: DepType) -> u8 {
        t as u8
    }
}

/// Identifies a program and its arguments.
///
/// Two scripts are equal iff all three fields match exactly.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Script {
    /// The hash used to match the script code.
    pub code_hash: H256,
    /// How `code_hash` is interpreted.
    pub hash_type: ScriptHashType,
    /// Arguments passed to the script.
    pub args: Bytes,
}

impl Script {
    /// Builds an instance of the canonical default-signature lock with the
    /// given args (conventionally a 20-byte blake160 of a public key).
    pub fn sighash_all(args: Bytes) -> Self {
        Script {
            code_hash: SIGHASH_ALL_CODE_HASH,
            hash_type: ScriptHashType::Type,
            args,
        }
    }
}

/// Immutable reference to one output of one transaction.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
pub struct OutPoint {
    /// Hash of the producing transaction.
    pub tx_hash: H256,
    /// Output index within it.
    pub index: u32,
}

impl OutPoint {
    /// Creates a new `OutPoint`.
    pub fn new(tx_hash: H256, index: u32) -> Self {
        OutPoint { tx_hash, index }
    }
}

/// References code a transaction depends on for validation; never consumed.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct CellDep {
    /// The dep cell.
    pub out_point: OutPoint,
    /// How the dep cell provides code.
    pub dep_type: DepType,
}

/// One consumed cell reference.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct CellInput {
    /// Optional relative/absolute lock condition; `0` for plain transfers.
    pub since: u64,
    /// The cell being spent.
    pub previous_output: OutPoint,
}

impl CellInput {
    /// An input with no `since` condition.
    pub fn new(previous_output: OutPoint) -> Self {
        CellInput {
            since: 0,
            previous_output,
        }
    }
}

/// The fields of an output cell except its data.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct CellOutput {
    /// Value held by the cell, in shannons.
    pub capacity: Capacity,
    /// Spending condition.
    pub lock: Script,
    /// Optional extra validation program; `None` for plain capacity.
    pub type_: Option<Script>,
}

impl CellOutput {
    /// A plain-capacity output: no type script.
    pub fn new(capacity: Capacity, lock: Script) -> Self {
        CellOutput {
            capacity,
            lock,
            type_: None,
        }
    }
}

/// A spendable cell from the caller's snapshot.
///
/// Owned by the caller for the duration of one build call; this engine keeps
/// no record of it afterwards.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LiveCell {
    /// Where the cell lives on chain.
    pub out_point: OutPoint,
    /// Its capacity, lock, and optional type script.
    pub cell_output: CellOutput,
    /// Its data payload.
    pub data: Bytes,
}

impl LiveCell {
    /// The cell's capacity.
    pub fn capacity(&self) -> Capacity {
        self.cell_output.capacity
    }

    /// The cell's lock script.
    pub fn lock(&self) -> &Script {
        &self.cell_output.lock
    }

    /// The cell's type script, if any.
    pub fn type_(&self) -> Option<&Script> {
        self.cell_output.type_.as_ref()
    }
}

/// Per-input auxiliary data, serialized into `witnesses[i]`.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct WitnessArgs {
    /// Lock-script input, typically a signature.
    pub lock: Option<Bytes>,
    /// Type-script input for the consumed cell.
    pub input_type: Option<Bytes>,
    /// Type-script input for the created cell.
    pub output_type: Option<Bytes>,
}

/// A complete transaction.
///
/// Invariant: `outputs` and `outputs_data` are parallel arrays. Witnesses are
/// excluded from [`hash`](Transaction::hash), which identifies the
/// transaction on chain.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Transaction {
    /// Format version; always [`TX_VERSION`] today.
    pub version: u32,
    /// Code dependencies.
    pub cell_deps: Vec<CellDep>,
    /// Header dependencies.
    pub header_deps: Vec<H256>,
    /// Consumed cells.
    pub inputs: Vec<CellInput>,
    /// Created cells.
    pub outputs: Vec<CellOutput>,
    /// Data payloads of the created cells.
    pub outputs_data: Vec<Bytes>,
    /// Per-input auxiliary data.
    pub witnesses: Vec<Bytes>,
}

impl Transaction {
    /// Starts an empty builder.
    pub fn builder() -> TransactionBuilder {
        TransactionBuilder::default()
    }

    /// Reopens this transaction as a builder.
    pub fn as_advanced_builder(&self) -> TransactionBuilder {
        TransactionBuilder {
            version: self.version,
            cell_deps: self.cell_deps.clone(),
            header_deps: self.header_deps.clone(),
            inputs: self.inputs.clone(),
            outputs: self.outputs.clone(),
            outputs_data: self.outputs_data.clone(),
            witnesses: self.witnesses.clone(),
        }
    }
}

/// Accumulating builder for [`Transaction`].
#[derive(Debug)]
pub struct TransactionBuilder {
    version: u32,
    cell_deps: Vec<CellDep>,
    header_deps: Vec<H256>,
    inputs: Vec<CellInput>,
    outputs: Vec<CellOutput>,
    outputs_data: Vec<Bytes>,
    witnesses: Vec<Bytes>,
}

impl Default for TransactionBuilder {
    fn default() -> Self {
        Self {
            version: TX_VERSION,
            cell_deps: Default::default(),
            header_deps: Default::default(),
            inputs: Default::default(),
            outputs: Default::default(),
            outputs_data: Default::default(),
            witnesses: Default::default(),
        }
    }
}

macro_rules! def_setter_for_vector {
    ($field:ident, $type:ty, $func_push:ident, $func_extend:ident, $func_set:ident) => {
        /// Appends one item.
        pub fn $func_push(mut self, v: $type) -> Self {
            self.$field.push(v);
            self
        }
        /// Appends every item of an iterator.
        pub fn $func_extend<T>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = $type>,
        {
            self.$field.extend(v);
            self
        }
        /// Replaces the whole vector.
        pub fn $func_set(mut self, v: Vec<$type>) -> Self {
            self.$field = v;
            self
        }
    };
}

impl TransactionBuilder {
    /// Sets the version.
    pub fn version(mut self, v: u32) -> Self {
        self.version = v;
        self
    }

    def_setter_for_vector!(cell_deps, CellDep, cell_dep, cell_deps, set_cell_deps);
    def_setter_for_vector!(header_deps, H256, header_dep, header_deps, set_header_deps);
    def_setter_for_vector!(inputs, CellInput, input, inputs, set_inputs);
    def_setter_for_vector!(outputs, CellOutput, output, outputs, set_outputs);
    def_setter_for_vector!(
        outputs_data,
        Bytes,
        output_data,
        outputs_data,
        set_outputs_data
    );
    def_setter_for_vector!(witnesses, Bytes, witness, witnesses, set_witnesses);

    /// Finalizes into a [`Transaction`].
    pub fn build(self) -> Transaction {
        let Self {
            version,
            cell_deps,
            header_deps,
            inputs,
            outputs,
            outputs_data,
            witnesses,
        } = self;
        debug_assert_eq!(
            outputs.len(),
            outputs_data.len(),
            "outputs and outputs_data are parallel arrays"
        );
        Transaction {
            version,
            cell_deps,
            header_deps,
            inputs,
            outputs,
            outputs_data,
            witnesses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_type_tags_are_closed() {
        assert_eq!(ScriptHashType::try_from(0), Ok(ScriptHashType::Data));
        assert_eq!(ScriptHashType::try_from(1), Ok(ScriptHashType::Type));
        assert_eq!(ScriptHashType::try_from(2), Ok(ScriptHashType::Data1));
        assert_eq!(ScriptHashType::try_from(4), Ok(ScriptHashType::Data2));
        for v in [3u8, 5, 0xff] {
            assert!(ScriptHashType::try_from(v).is_err());
        }
        assert!(DepType::try_from(2).is_err());
    }

    #[test]
    fn script_equality_is_field_exact() {
        let a = Script::sighash_all(Bytes::from_static(&[1; 20]));
        let mut b = a.clone();
        assert_eq!(a, b);
        b.hash_type = ScriptHashType::Data;
        assert_ne!(a, b);
    }

    #[test]
    fn builder_round_trips_through_advanced_builder() {
        let tx = Transaction::builder()
            .input(CellInput::new(OutPoint::new(H256::zero(), 7)))
            .output(CellOutput::new(
                Capacity::shannons(1),
                Script::default(),
            ))
            .output_data(Bytes::new())
            .witness(Bytes::new())
            .build();
        assert_eq!(tx, tx.as_advanced_builder().build());
        assert_eq!(tx.version, TX_VERSION);
    }
}
