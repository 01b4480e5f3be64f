//! The ledger's default hash function: blake2b-256 with a fixed personalization.
//!
//! Every hash this engine computes — transaction hashes, script hashes, the
//! signing message — uses blake2b with a 256-bit output and the protocol's
//! 16-byte personalization. A generic, unpersonalized blake2b produces digests
//! the network will not accept, so there is deliberately no way to construct
//! an unpersonalized hasher from this crate.

pub use blake2b_ref::{Blake2b, Blake2bBuilder};

/// The hash output length in bytes.
pub const BLAKE2B_LEN: usize = 32;
/// The protocol-defined personalization, exactly 16 bytes.
pub const CKB_HASH_PERSONALIZATION: &[u8] = b"ckb-default-hash";
/// The digest of the empty input under the personalized hash.
pub const BLANK_HASH: [u8; 32] = [
    0x44, 0xf4, 0xc6, 0x97, 0x44, 0xd5, 0xf8, 0xc5, 0x5d, 0x64, 0x20, 0x62, 0x94, 0x9d, 0xca,
    0xe4, 0x9b, 0xc4, 0xe7, 0xef, 0x43, 0xd3, 0x88, 0xc5, 0xa1, 0x2f, 0x42, 0xb5, 0x63, 0x3d,
    0x16, 0x3e,
];

/// Creates a new personalized blake2b-256 hasher.
pub fn new_blake2b() -> Blake2b {
    Blake2bBuilder::new(BLAKE2B_LEN)
        .personal(CKB_HASH_PERSONALIZATION)
        .build()
}

/// Hashes `s` with the personalized blake2b-256 in one shot.
pub fn blake2b_256<T: AsRef<[u8]>>(s: T) -> [u8; 32] {
    if s.as_ref().is_empty() {
        return BLANK_HASH;
    }
    inner_blake2b_256(s)
}

fn inner_blake2b_256<T: AsRef<[u8]>>(s: T) -> [u8; 32] {
    let mut result = [0u8; BLAKE2B_LEN];
    let mut blake2b = new_blake2b();
    blake2b.update(s.as_ref());
    blake2b.finalize(&mut result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_hash() {
        let mut result = [0u8; BLAKE2B_LEN];
        let blake2b = new_blake2b();
        blake2b.finalize(&mut result);
        let mut expected = String::new();
        expected.push_str("44f4c69744d5f8c55d642062949dcae4");
        expected.push_str("9bc4e7ef43d388c5a12f42b5633d163e");
        let mut actual = vec![0u8; BLAKE2B_LEN * 2];
        faster_hex::hex_encode(&result, &mut actual).unwrap();
        assert_eq!(std::str::from_utf8(&actual).unwrap(), expected);
        assert_eq!(result, BLANK_HASH);
    }

    #[test]
    fn empty_input_short_circuits_to_blank_hash() {
        assert_eq!(blake2b_256([]), BLANK_HASH);
    }

    #[test]
    fn streaming_matches_one_shot() {
        let data = b"the quick brown fox";
        let mut streamed = [0u8; BLAKE2B_LEN];
        let mut blake2b = new_blake2b();
        blake2b.update(&data[..9]);
        blake2b.update(&data[9..]);
        blake2b.finalize(&mut streamed);
        assert_eq!(streamed, blake2b_256(data));
    }
}
