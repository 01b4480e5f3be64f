//! Typed builders for the canonical Molecule layouts.
//!
//! Every structured value crossing the wire is encoded with one of four
//! composite layouts — table, fixvec, dynvec, option — plus fixed-width
//! little-endian primitives. The builders here compute all headers and
//! offsets internally, so call sites never do raw offset arithmetic; an
//! inconsistent layout is unrepresentable rather than a runtime error.
//!
//! Encoding is total and deterministic: the same logical value always
//! produces byte-identical output.

use bytes::{BufMut, Bytes, BytesMut};
use thiserror::Error;

/// Size of the layout header unit, a little-endian `u32`.
pub const NUMBER_SIZE: usize = 4;

/// Errors while reading back a Molecule-encoded value.
///
/// Only decoding can fail; the builders cannot produce an inconsistent
/// layout by construction.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// The slice ends before the declared layout does.
    #[error("data too short: expected at least {expected} bytes, got {actual}")]
    DataTooShort {
        /// Minimum byte count the layout requires.
        expected: usize,
        /// Byte count actually present.
        actual: usize,
    },
    /// The declared total size disagrees with the slice length.
    #[error("declared total size {declared} does not match data length {actual}")]
    TotalSizeMismatch {
        /// Size read from the header.
        declared: usize,
        /// Byte count actually present.
        actual: usize,
    },
    /// Field offsets are not the strictly increasing in-bounds sequence the
    /// layout requires.
    #[error("corrupted field offsets")]
    CorruptedOffsets,
}

/// Packs a `u32` into its little-endian wire form.
#[inline]
pub fn pack_number(number: u32) -> [u8; NUMBER_SIZE] {
    number.to_le_bytes()
}

/// Packs a `u64` into its little-endian wire form.
#[inline]
pub fn pack_number64(number: u64) -> [u8; 8] {
    number.to_le_bytes()
}

/// Reads a little-endian `u32` from the front of `slice`.
///
/// The caller checks bounds first; this is the reader-side twin of
/// [`pack_number`].
#[inline]
pub fn unpack_number(slice: &[u8]) -> u32 {
    let mut le = [0u8; NUMBER_SIZE];
    le.copy_from_slice(&slice[..NUMBER_SIZE]);
    u32::from_le_bytes(le)
}

/// Builder for the table layout: `total_size ‖ offset₀ … offsetₙ₋₁ ‖ fields`,
/// with every header number a little-endian `u32` and offsets measured from
/// the start of the table.
#[derive(Default)]
pub struct Table {
    fields: Vec<Bytes>,
}

impl Table {
    /// Creates a builder with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the next field's serialized bytes.
    pub fn field(mut self, data: Bytes) -> Self {
        self.fields.push(data);
        self
    }

    /// Serializes header and fields.
    pub fn build(self) -> Bytes {
        build_offset_layout(self.fields)
    }
}

/// Builder for the dynvec layout: header-compatible with [`Table`], but the
/// item count is implied by the offsets rather than fixed by a schema. The
/// empty dynvec is exactly `04 00 00 00`.
#[derive(Default)]
pub struct DynVec {
    items: Vec<Bytes>,
}

impl DynVec {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one serialized item.
    pub fn push(mut self, item: Bytes) -> Self {
        self.items.push(item);
        self
    }

    /// Serializes header and items.
    pub fn build(self) -> Bytes {
        build_offset_layout(self.items)
    }
}

impl FromIterator<Bytes> for DynVec {
    fn from_iter<I: IntoIterator<Item = Bytes>>(iter: I) -> Self {
        DynVec {
            items: iter.into_iter().collect(),
        }
    }
}

fn build_offset_layout(parts: Vec<Bytes>) -> Bytes {
    let header_size = NUMBER_SIZE * (1 + parts.len());
    let total_size = header_size + parts.iter().map(Bytes::len).sum::<usize>();
    let mut out = BytesMut::with_capacity(total_size);
    out.put_u32_le(number(total_size));
    let mut offset = header_size;
    for part in &parts {
        out.put_u32_le(number(offset));
        offset += part.len();
    }
    for part in &parts {
        out.put_slice(part);
    }
    debug_assert_eq!(out.len(), total_size);
    out.freeze()
}

/// Packs the fixvec layout: `item_count ‖ items`, all items the same size.
pub fn pack_fix_vec<I>(items: I) -> Bytes
where
    I: IntoIterator<Item = Bytes>,
{
    let items: Vec<Bytes> = items.into_iter().collect();
    debug_assert!(
        items.windows(2).all(|w| w[0].len() == w[1].len()),
        "fixvec items must share one size"
    );
    let body: usize = items.iter().map(Bytes::len).sum();
    let mut out = BytesMut::with_capacity(NUMBER_SIZE + body);
    out.put_u32_le(number(items.len()));
    for item in &items {
        out.put_slice(item);
    }
    out.freeze()
}

/// Packs the protocol `Bytes` type — the fixvec of raw bytes:
/// `u32-LE length ‖ payload`.
pub fn pack_bytes(data: &[u8]) -> Bytes {
    let mut out = BytesMut::with_capacity(NUMBER_SIZE + data.len());
    out.put_u32_le(number(data.len()));
    out.put_slice(data);
    out.freeze()
}

/// Packs an optional value: `None` is zero bytes, `Some` is the value's own
/// encoding with no tag. Presence is inferred from the enclosing table's
/// offsets.
pub fn pack_option(value: Option<Bytes>) -> Bytes {
    value.unwrap_or_default()
}

fn number(value: usize) -> u32 {
    u32::try_from(value).expect("molecule layout size fits in u32")
}
