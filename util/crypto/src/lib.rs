//! Recoverable ECDSA over secp256k1.
//!
//! The signature scheme the default lock script verifies: compact 64-byte
//! `r ‖ s` plus a one-byte recovery identifier, 65 bytes total. Signing is
//! deterministic (RFC 6979 nonces), so signing the same message twice with the
//! same key yields identical bytes.

use ckb_wallet_fixed_hash::H256;
use once_cell::sync::Lazy;

mod error;
mod generator;
mod privkey;
mod pubkey;
mod signature;

pub use self::error::Error;
pub use self::generator::Generator;
pub use self::privkey::Privkey;
pub use self::pubkey::Pubkey;
pub use self::signature::Signature;

/// A 32-byte message digest ready to be signed.
pub type Message = H256;

pub(crate) static SECP256K1: Lazy<secp256k1::Secp256k1<secp256k1::All>> =
    Lazy::new(secp256k1::Secp256k1::new);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{self, Rng};

    fn random_message() -> Message {
        let mut message = [0u8; 32];
        rand::thread_rng().fill(&mut message[..]);
        message.into()
    }

    #[test]
    fn test_gen_keypair() {
        let (privkey, pubkey) = Generator::random_keypair();
        assert_eq!(privkey.pubkey().expect("pubkey"), pubkey);
    }

    #[test]
    fn test_sign_verify() {
        let (privkey, pubkey) = Generator::random_keypair();
        let message = random_message();
        let signature = privkey.sign_recoverable(&message).unwrap();
        assert!(signature.is_valid());
        assert!(pubkey.verify(&message, &signature).is_ok());
    }

    #[test]
    fn test_recover() {
        let (privkey, pubkey) = Generator::random_keypair();
        let message = random_message();
        let signature = privkey.sign_recoverable(&message).unwrap();
        assert_eq!(pubkey, signature.recover(&message).unwrap());
    }

    #[test]
    fn test_serialize() {
        let (privkey, pubkey) = Generator::random_keypair();
        let ser_pubkey = privkey.pubkey().expect("pubkey").serialize();
        assert_eq!(ser_pubkey.len(), 33);
        let deser_pubkey = Pubkey::from_slice(&ser_pubkey).expect("deserialize pubkey");
        assert_eq!(deser_pubkey, pubkey);

        let msg = random_message();
        let signature = privkey.sign_recoverable(&msg).expect("sign");
        let ser_signature = signature.serialize();
        assert_eq!(ser_signature.len(), 65);
        let deser_signature = Signature::from_slice(&ser_signature).expect("deserialize");
        assert!(deser_signature.is_valid());
        assert_eq!(ser_signature, deser_signature.serialize());
    }

    #[test]
    fn deterministic_nonce() {
        let privkey = Generator::random_privkey();
        let message = random_message();
        let first = privkey.sign_recoverable(&message).unwrap();
        let second = privkey.sign_recoverable(&message).unwrap();
        assert_eq!(first.serialize(), second.serialize());
    }

    #[test]
    fn wrong_key_fails_verification() {
        let (privkey, _) = Generator::random_keypair();
        let (_, other_pubkey) = Generator::random_keypair();
        let message = random_message();
        let signature = privkey.sign_recoverable(&message).unwrap();
        assert!(other_pubkey.verify(&message, &signature).is_err());
    }
}
